/// Which of the two pages the script is running on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// The table page where shots are aimed
    Shot,
    /// The follow-up page playing back a rendered shot
    Animation,
}

impl PageKind {
    /// Classify a location pathname against the follow-up page path
    pub fn classify(pathname: &str, follow_up_path: &str) -> Self {
        let target = follow_up_path.trim_start_matches('/');
        if !target.is_empty() && pathname.contains(target) {
            PageKind::Animation
        } else {
            PageKind::Shot
        }
    }

    /// Log which page was loaded
    pub fn log_loaded(&self, follow_up_path: &str) {
        match self {
            PageKind::Animation => tracing::info!("The current page is {}", follow_up_path),
            PageKind::Shot => tracing::info!("The current page is not {}", follow_up_path),
        }
    }

    /// Frames are only expected when playing back a shot
    pub fn expects_frames(&self) -> bool {
        matches!(self, PageKind::Animation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(PageKind::classify("/animate.html", "animate.html"), PageKind::Animation);
        assert_eq!(PageKind::classify("/game/animate.html", "/animate.html"), PageKind::Animation);
        assert_eq!(PageKind::classify("/", "animate.html"), PageKind::Shot);
        assert_eq!(PageKind::classify("/shoot.html", "animate.html"), PageKind::Shot);
    }

    #[test]
    fn test_blank_follow_up_never_matches() {
        assert_eq!(PageKind::classify("/animate.html", "/"), PageKind::Shot);
    }

    #[test]
    fn test_expects_frames() {
        assert!(PageKind::Animation.expects_frames());
        assert!(!PageKind::Shot.expects_frames());
    }
}
