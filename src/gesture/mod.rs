//! Aiming gesture
//!
//! Implements the Idle/Dragging state machine that turns a pointer drag
//! away from the cue ball into a shot velocity.

pub mod scene;
pub mod state;
pub mod tracker;

pub use scene::{parse_coordinate, Scene};
pub use state::GestureState;
pub use tracker::{GestureOutcome, GestureTracker};
