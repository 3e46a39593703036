//! Page configuration
//!
//! Every field has a default matching the stock pool table page, so a hosting
//! page only needs to pass the values it wants to change.

use crate::input::transform::PointerTransform;
use crate::shot::channel::{ShotError, ShotResult};
use serde::{Deserialize, Serialize};

/// Default multiplier applied to the drag delta
pub const DEFAULT_VELOCITY_SCALE: f64 = 10.0;

/// Default period between animation frames
pub const DEFAULT_FRAME_INTERVAL_MS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShotConfig {
    /// Endpoint receiving the velocity JSON
    pub send_endpoint: String,
    /// Page probed after a shot and navigated to when it has content
    pub follow_up_path: String,
    /// Multiplier applied to the drag delta
    pub velocity_scale: f64,
    /// Page to scene coordinate transform
    pub pointer_transform: PointerTransform,
    /// Period between animation frames in milliseconds
    pub frame_interval_ms: u32,
    /// Fill value identifying the cue ball circle
    pub cue_ball_fill: String,
    /// Id of the aim line element
    pub aim_line_id: String,
    /// Selector matching the animation frames, in order
    pub frame_selector: String,
}

impl Default for ShotConfig {
    fn default() -> Self {
        Self {
            send_endpoint: "/send".to_string(),
            follow_up_path: "animate.html".to_string(),
            velocity_scale: DEFAULT_VELOCITY_SCALE,
            pointer_transform: PointerTransform::default(),
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            cue_ball_fill: "WHITE".to_string(),
            aim_line_id: "line".to_string(),
            frame_selector: "#svgContainer svg".to_string(),
        }
    }
}

impl ShotConfig {
    /// Parse a (possibly partial) JSON document over the defaults
    pub fn from_json(json: &str) -> ShotResult<Self> {
        let config: ShotConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ShotResult<()> {
        if !self.velocity_scale.is_finite() {
            return Err(ShotError::Configuration(format!(
                "velocityScale must be finite, got {}",
                self.velocity_scale
            )));
        }

        let transform = &self.pointer_transform;
        if !transform.scale.is_finite() || transform.scale == 0.0 || !transform.offset.is_finite() {
            return Err(ShotError::Configuration(format!(
                "pointerTransform must have a finite non-zero scale and finite offset, got {:?}",
                transform
            )));
        }

        if self.frame_interval_ms == 0 {
            return Err(ShotError::Configuration(
                "frameIntervalMs must be greater than zero".to_string(),
            ));
        }

        let required = [
            ("sendEndpoint", &self.send_endpoint),
            ("followUpPath", &self.follow_up_path),
            ("cueBallFill", &self.cue_ball_fill),
            ("aimLineId", &self.aim_line_id),
            ("frameSelector", &self.frame_selector),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ShotError::Configuration(format!("{} must not be empty", name)));
            }
        }

        Ok(())
    }

    /// Selector for the cue ball circle
    pub fn cue_ball_selector(&self) -> String {
        format!("circle[fill=\"{}\"]", self.cue_ball_fill)
    }
}
