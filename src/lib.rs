//! cueshot - drag-to-shoot aiming for the browser pool table.
//!
//! Tracks a drag from the cue ball, turns the release point into an initial
//! velocity, posts it to the server and moves on to the animation page once
//! the server has rendered it. The animation page plays the rendered frames
//! back one at a time.
//!
//! Everything except the `web` module is platform-neutral and talks to the
//! page through the [`gesture::Scene`], [`animation::FrameSurface`] and
//! [`shot::HttpClient`] traits.

pub mod animation;
pub mod config;
pub mod gesture;
pub mod input;
pub mod shot;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(test)]
mod testing;

pub use config::ShotConfig;
pub use gesture::{GestureOutcome, GestureState, GestureTracker};
pub use shot::{ShotError, ShotResult};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cueshot=debug".into());

    #[cfg(not(target_arch = "wasm32"))]
    let fmt_layer = tracing_subscriber::fmt::layer();

    #[cfg(target_arch = "wasm32")]
    let fmt_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_ansi(false)
        .with_writer(web::console::ConsoleMakeWriter);

    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_ok()
    {
        tracing::info!("Starting cueshot v{}", env!("CARGO_PKG_VERSION"));
    }
}
