//! Pointer input
//!
//! Raw page-space pointer samples, scene-space points and the transform
//! between them.

pub mod transform;
pub mod types;

pub use transform::PointerTransform;
pub use types::{PagePoint, PointerEventKind, PointerSample, ScenePoint, VelocityVector};
