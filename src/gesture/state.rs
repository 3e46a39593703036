use crate::input::types::ScenePoint;

/// Where the tracker is within a gesture
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No pointer held, aim line hidden
    #[default]
    Idle,
    /// Pointer held; `origin` is the cue ball as read at pointer-down
    Dragging { origin: ScenePoint },
}

impl GestureState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, GestureState::Dragging { .. })
    }
}

impl std::fmt::Display for GestureState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GestureState::Idle => write!(f, "idle"),
            GestureState::Dragging { .. } => write!(f, "dragging"),
        }
    }
}
