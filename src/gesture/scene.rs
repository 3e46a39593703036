//! The table as seen by the gesture tracker
//!
//! The tracker never touches the DOM directly. It reads the cue ball and
//! writes the aim line through this trait, which `crate::web::DomScene`
//! implements for the browser.

use crate::input::types::ScenePoint;
use crate::shot::channel::{ShotError, ShotResult};

pub trait Scene {
    /// Live center of the cue ball, read from the page on every call
    fn cue_ball_position(&self) -> ShotResult<ScenePoint>;

    /// Make the aim line visible
    fn show_aim_line(&mut self) -> ShotResult<()>;

    /// Hide the aim line
    fn hide_aim_line(&mut self) -> ShotResult<()>;

    /// Draw the aim line from `anchor` to `end`
    fn set_aim_line(&mut self, anchor: ScenePoint, end: ScenePoint) -> ShotResult<()>;
}

/// Parse a positional SVG attribute (`cx`, `cy`, ...) as a float
///
/// Accepts surrounding whitespace and a leading numeric prefix the way
/// browsers do for presentation attributes ("12.5px" reads as 12.5).
pub fn parse_coordinate(name: &str, raw: Option<&str>) -> ShotResult<f64> {
    let invalid = || ShotError::InvalidAttribute {
        name: name.to_string(),
        value: raw.unwrap_or_default().to_string(),
    };

    let value = raw.map(str::trim).ok_or_else(invalid)?;
    let bytes = value.as_bytes();
    let end = bytes
        .iter()
        .enumerate()
        .take_while(|&(i, &b)| match b {
            b'0'..=b'9' | b'.' | b'e' | b'E' => true,
            b'-' | b'+' => i == 0 || matches!(bytes[i - 1], b'e' | b'E'),
            _ => false,
        })
        .count();

    // Shrink until the prefix parses, so "1e" still yields a number
    (1..=end)
        .rev()
        .find_map(|len| value[..len].parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_coordinate("cx", Some("100")).unwrap(), 100.0);
        assert_eq!(parse_coordinate("cy", Some("-12.5")).unwrap(), -12.5);
        assert_eq!(parse_coordinate("cy", Some(" 7 ")).unwrap(), 7.0);
    }

    #[test]
    fn test_parse_numeric_prefix() {
        assert_eq!(parse_coordinate("cx", Some("42px")).unwrap(), 42.0);
        assert_eq!(parse_coordinate("cx", Some("1e")).unwrap(), 1.0);
        assert_eq!(parse_coordinate("cx", Some("2.5e2")).unwrap(), 250.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_coordinate("cx", Some("abc")),
            Err(ShotError::InvalidAttribute { .. })
        ));
        assert!(parse_coordinate("cx", Some("")).is_err());
        assert!(parse_coordinate("cx", None).is_err());
    }
}
