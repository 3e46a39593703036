//! Velocity reporting over HTTP
//!
//! The server expects `{"velocity_x": .., "velocity_y": ..}` posted as JSON.
//! Its reply is only inspected for an optional `message` to log.

use crate::input::types::VelocityVector;
use crate::shot::channel::{HttpClient, ShotError, ShotResult, VelocityReporter};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Request body for the send endpoint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VelocityPayload {
    pub velocity_x: f64,
    pub velocity_y: f64,
}

impl From<VelocityVector> for VelocityPayload {
    fn from(velocity: VelocityVector) -> Self {
        Self {
            velocity_x: velocity.x,
            velocity_y: velocity.y,
        }
    }
}

/// Acknowledgement returned by the server after simulating a shot
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShotAck {
    #[serde(default)]
    pub message: Option<String>,
}

impl ShotAck {
    /// Lenient parse; any body that is not an ack object yields `None`
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

pub struct HttpVelocityReporter<C> {
    client: C,
    endpoint: String,
}

impl<C: HttpClient> HttpVelocityReporter<C> {
    pub fn new(client: C, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl<C: HttpClient> VelocityReporter for HttpVelocityReporter<C> {
    async fn send(&self, velocity: VelocityVector) -> ShotResult<()> {
        let body = serde_json::to_string(&VelocityPayload::from(velocity))?;
        let response = self.client.post_json(&self.endpoint, body).await?;

        if !response.is_success() {
            return Err(ShotError::Status {
                status: response.status,
                path: self.endpoint.clone(),
            });
        }

        match ShotAck::parse(&response.body).and_then(|ack| ack.message) {
            Some(message) => tracing::info!("Velocity sent successfully ({})", message),
            None => tracing::info!("Velocity sent successfully"),
        }
        Ok(())
    }
}
