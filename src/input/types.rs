use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// Raw pointer position in page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PagePoint {
    pub x: f64,
    pub y: f64,
}

impl PagePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Position in the table's own coordinate space (SVG attributes)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenePoint {
    pub x: f64,
    pub y: f64,
}

impl ScenePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for ScenePoint {
    type Output = ScenePoint;

    fn sub(self, rhs: ScenePoint) -> ScenePoint {
        ScenePoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Initial velocity handed to the server for a released shot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VelocityVector {
    pub x: f64,
    pub y: f64,
}

impl VelocityVector {
    /// Scaled delta between the release point and the cue ball
    pub fn from_drag(cue_ball: ScenePoint, release: ScenePoint, scale: f64) -> Self {
        let delta = release - cue_ball;
        Self {
            x: delta.x * scale,
            y: delta.y * scale,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
}

/// One raw pointer event as delivered by the page
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub kind: PointerEventKind,
    pub position: PagePoint,
}

impl PointerSample {
    pub fn new(kind: PointerEventKind, x: f64, y: f64) -> Self {
        Self {
            kind,
            position: PagePoint::new(x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_from_drag() {
        let velocity = VelocityVector::from_drag(
            ScenePoint::new(100.0, 200.0),
            ScenePoint::new(275.0, 575.0),
            10.0,
        );
        assert_eq!(velocity, VelocityVector { x: 1750.0, y: 3750.0 });
    }

    #[test]
    fn test_velocity_can_be_negative() {
        // Releasing up and to the left of the ball
        let velocity = VelocityVector::from_drag(
            ScenePoint::new(500.0, 500.0),
            ScenePoint::new(450.0, 300.0),
            10.0,
        );
        assert_eq!(velocity.x, -500.0);
        assert_eq!(velocity.y, -2000.0);
    }

    #[test]
    fn test_pointer_sample_kind_serializes_camel_case() {
        let sample = PointerSample::new(PointerEventKind::Down, 1.0, 2.0);
        let json = serde_json::to_string(&sample).unwrap();
        assert!(json.contains("\"kind\":\"down\""), "unexpected json {}", json);
    }
}
