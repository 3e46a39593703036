//! Frame-by-frame playback of a rendered shot
//!
//! The server renders each step of the simulation as its own SVG. Playback
//! shows them one at a time, advancing on a fixed timer, and stops for good
//! on the last frame. The cycler itself is timer-agnostic: the caller invokes
//! [`FrameCycler::tick`] once per period and cancels its timer when a tick
//! returns [`FrameTick::Finished`].

use crate::shot::channel::{ShotError, ShotResult};

/// The frames being cycled
pub trait FrameSurface {
    fn frame_count(&self) -> usize;

    fn hide_all(&mut self) -> ShotResult<()>;

    fn show(&mut self, index: usize) -> ShotResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameTick {
    /// Frame at this index is now the only visible one
    Showing(usize),
    /// Sequence exhausted; stop the timer
    Finished,
}

#[derive(Debug, Clone)]
pub struct FrameCycler {
    len: usize,
    cursor: usize,
    finished: bool,
}

impl FrameCycler {
    pub fn new(len: usize) -> ShotResult<Self> {
        if len == 0 {
            return Err(ShotError::EmptyFrameSequence);
        }
        Ok(Self {
            len,
            cursor: 0,
            finished: false,
        })
    }

    pub fn for_surface(surface: &impl FrameSurface) -> ShotResult<Self> {
        Self::new(surface.frame_count())
    }

    /// Show the first frame and hide the rest
    pub fn start(&mut self, surface: &mut impl FrameSurface) -> ShotResult<FrameTick> {
        self.cursor = 0;
        surface.hide_all()?;
        surface.show(0)?;
        Ok(FrameTick::Showing(0))
    }

    /// Advance one period
    ///
    /// The tick that runs past the last frame changes nothing on the surface.
    pub fn tick(&mut self, surface: &mut impl FrameSurface) -> ShotResult<FrameTick> {
        if self.finished {
            return Ok(FrameTick::Finished);
        }

        self.cursor += 1;
        if self.cursor >= self.len {
            self.cursor = self.len - 1;
            self.finished = true;
            tracing::debug!("Frame playback finished after {} frames", self.len);
            return Ok(FrameTick::Finished);
        }

        surface.hide_all()?;
        surface.show(self.cursor)?;
        Ok(FrameTick::Showing(self.cursor))
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn frame_count(&self) -> usize {
        self.len
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Index visible `elapsed_ms` after start at the given period
    pub fn visible_at(&self, elapsed_ms: u64, interval_ms: u32) -> usize {
        let steps = elapsed_ms / u64::from(interval_ms.max(1));
        usize::try_from(steps)
            .unwrap_or(usize::MAX)
            .min(self.len - 1)
    }
}
