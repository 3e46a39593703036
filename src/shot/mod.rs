//! Shot delivery
//!
//! Everything that happens after the pointer is released: reporting the
//! velocity to the server and probing for the animation page.

pub mod channel;
pub mod dispatch;
pub mod probe;
pub mod reporter;

pub use channel::{
    HttpClient, HttpResponse, NavigationProbe, Navigator, ShotError, ShotResult, VelocityReporter,
};
pub use dispatch::{LocalTask, ShotDispatcher, TaskSpawner};
pub use probe::{FollowUpProbe, NavigationDecision};
pub use reporter::{HttpVelocityReporter, ShotAck, VelocityPayload};
