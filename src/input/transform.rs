//! Page to scene coordinate transform
//!
//! The table is rendered on a surface scaled by 2x and shifted by a fixed
//! offset, so raw page coordinates have to be mapped back into the SVG's own
//! coordinate space before they can be compared with the cue ball.

use crate::input::types::{PagePoint, ScenePoint};
use serde::{Deserialize, Serialize};

/// Per-axis affine transform: `scene = page * scale - offset`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerTransform {
    pub scale: f64,
    pub offset: f64,
}

impl PointerTransform {
    pub fn new(scale: f64, offset: f64) -> Self {
        Self { scale, offset }
    }

    /// Map a raw page position into scene coordinates
    pub fn to_scene(&self, point: PagePoint) -> ScenePoint {
        ScenePoint::new(
            point.x * self.scale - self.offset,
            point.y * self.scale - self.offset,
        )
    }
}

impl Default for PointerTransform {
    fn default() -> Self {
        Self::new(2.0, 25.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transform() {
        let transform = PointerTransform::default();
        let scene = transform.to_scene(PagePoint::new(150.0, 300.0));
        assert_eq!(scene, ScenePoint::new(275.0, 575.0));
    }

    #[test]
    fn test_origin_maps_to_negative_offset() {
        let transform = PointerTransform::default();
        assert_eq!(
            transform.to_scene(PagePoint::new(0.0, 0.0)),
            ScenePoint::new(-25.0, -25.0)
        );
    }

    #[test]
    fn test_axes_are_independent() {
        let transform = PointerTransform::new(3.0, 1.0);
        let scene = transform.to_scene(PagePoint::new(10.0, 0.5));
        assert_eq!(scene.x, 29.0);
        assert_eq!(scene.y, 0.5);
    }
}
