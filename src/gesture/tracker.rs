//! Drag-to-shoot gesture tracking
//!
//! Pressing the pointer starts aiming from the cue ball, moving it stretches
//! the aim line, and releasing it fires a shot whose velocity is the scaled
//! drag vector. Network work is handed to the [`ShotDispatcher`] and never
//! awaited here.

use crate::config::ShotConfig;
use crate::gesture::scene::Scene;
use crate::gesture::state::GestureState;
use crate::input::transform::PointerTransform;
use crate::input::types::{PagePoint, PointerEventKind, PointerSample, VelocityVector};
use crate::shot::channel::ShotResult;
use crate::shot::dispatch::ShotDispatcher;

/// What a pointer event did to the gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Event had no effect in the current state
    Ignored,
    /// Aiming started (or restarted)
    Started,
    /// Aim line moved
    Aimed,
    /// Shot released and dispatched
    Released(VelocityVector),
}

pub struct GestureTracker<S> {
    scene: S,
    transform: PointerTransform,
    velocity_scale: f64,
    dispatcher: ShotDispatcher,
    state: GestureState,
}

impl<S: Scene> GestureTracker<S> {
    /// Create a tracker for `scene`
    ///
    /// Fails if the page has no cue ball, since no gesture could ever
    /// produce a shot.
    pub fn new(scene: S, config: &ShotConfig, dispatcher: ShotDispatcher) -> ShotResult<Self> {
        let cue_ball = scene.cue_ball_position()?;
        tracing::debug!("Cue ball found at ({}, {})", cue_ball.x, cue_ball.y);

        Ok(Self {
            scene,
            transform: config.pointer_transform,
            velocity_scale: config.velocity_scale,
            dispatcher,
            state: GestureState::Idle,
        })
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Route a raw pointer sample to the matching transition
    pub fn handle(&mut self, sample: PointerSample) -> ShotResult<GestureOutcome> {
        match sample.kind {
            PointerEventKind::Down => self.pointer_down(sample.position),
            PointerEventKind::Move => self.pointer_move(sample.position),
            PointerEventKind::Up => self.pointer_up(sample.position),
        }
    }

    /// Start aiming from the cue ball's current position
    ///
    /// A press while already dragging restarts the gesture from a fresh
    /// cue ball reading. On error the tracker stays in its previous state.
    pub fn pointer_down(&mut self, position: PagePoint) -> ShotResult<GestureOutcome> {
        let origin = self.scene.cue_ball_position()?;
        let pointer = self.transform.to_scene(position);

        self.scene.set_aim_line(origin, pointer)?;
        self.scene.show_aim_line()?;
        self.state = GestureState::Dragging { origin };

        tracing::debug!(
            "Aiming from ({}, {}) to ({}, {})",
            origin.x,
            origin.y,
            pointer.x,
            pointer.y
        );
        Ok(GestureOutcome::Started)
    }

    /// Stretch the aim line to the pointer
    ///
    /// The anchor is re-read from the page on every move, so the line keeps
    /// following the cue ball if the page moves it mid-gesture.
    pub fn pointer_move(&mut self, position: PagePoint) -> ShotResult<GestureOutcome> {
        if !self.state.is_dragging() {
            return Ok(GestureOutcome::Ignored);
        }

        let anchor = self.scene.cue_ball_position()?;
        let pointer = self.transform.to_scene(position);
        self.scene.set_aim_line(anchor, pointer)?;
        Ok(GestureOutcome::Aimed)
    }

    /// Release the shot
    ///
    /// Velocity is measured from the cue ball position read at pointer-down.
    /// Exactly one report and one probe are dispatched per release.
    pub fn pointer_up(&mut self, position: PagePoint) -> ShotResult<GestureOutcome> {
        let GestureState::Dragging { origin } = self.state else {
            return Ok(GestureOutcome::Ignored);
        };
        self.state = GestureState::Idle;

        if let Err(e) = self.scene.hide_aim_line() {
            tracing::warn!("Failed to hide aim line: {}", e);
        }

        let release = self.transform.to_scene(position);
        let velocity = VelocityVector::from_drag(origin, release, self.velocity_scale);
        tracing::info!("x velocity: {}, y velocity: {}", velocity.x, velocity.y);

        self.dispatcher.dispatch(velocity);
        Ok(GestureOutcome::Released(velocity))
    }
}
