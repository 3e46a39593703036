//! Shot collaborator traits
//!
//! Defines the interface between the gesture tracker and the outside world:
//! the HTTP client, the velocity reporter, the navigation probe and the page
//! navigator. Browser implementations live in `crate::web`.

use crate::input::types::VelocityVector;
use crate::shot::probe::NavigationDecision;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while aiming, reporting or probing
#[derive(Error, Debug)]
pub enum ShotError {
    #[error("Cue ball not found (no circle with fill=\"{fill}\")")]
    MissingCueBall { fill: String },

    #[error("Invalid attribute {name}=\"{value}\"")]
    InvalidAttribute { name: String, value: String },

    #[error("Element not found: {0}")]
    MissingElement(String),

    #[error("Frame sequence is empty")]
    EmptyFrameSequence,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request to {path} failed with status {status}")]
    Status { status: u16, path: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Platform error: {0}")]
    Platform(String),
}

/// Result type for shot operations
pub type ShotResult<T> = Result<T, ShotError>;

/// Response as seen by the reporter and the probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Body decoded as text
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal HTTP surface used by the shot collaborators
///
/// The browser runs everything on a single thread, so futures are not `Send`.
#[async_trait(?Send)]
pub trait HttpClient {
    /// POST a JSON body to `path`
    async fn post_json(&self, path: &str, body: String) -> ShotResult<HttpResponse>;

    /// GET `path` and return its body as text
    async fn get_text(&self, path: &str) -> ShotResult<HttpResponse>;
}

/// Sends the velocity of a released shot to the server
#[async_trait(?Send)]
pub trait VelocityReporter {
    async fn send(&self, velocity: VelocityVector) -> ShotResult<()>;
}

/// Checks whether the follow-up page has content and navigates to it
#[async_trait(?Send)]
pub trait NavigationProbe {
    async fn check_and_navigate(&self) -> ShotResult<NavigationDecision>;
}

/// Performs a full page navigation
pub trait Navigator {
    fn navigate(&self, path: &str) -> ShotResult<()>;
}
