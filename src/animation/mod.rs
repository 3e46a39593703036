//! Shot playback
//!
//! Cycling through the rendered frames of a shot, and telling the shot page
//! apart from the playback page.

pub mod frame_cycler;
pub mod page;

pub use frame_cycler::{FrameCycler, FrameSurface, FrameTick};
pub use page::PageKind;
