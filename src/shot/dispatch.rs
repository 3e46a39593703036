//! Fire-and-forget dispatch of a released shot
//!
//! The gesture tracker must never wait on the network. A release hands the
//! velocity to the dispatcher, which spawns one task for the reporter and one
//! for the probe and returns immediately. Each task logs its own failure; no
//! error reaches the tracker. The two tasks are independent and may complete
//! in any order.

use crate::input::types::VelocityVector;
use crate::shot::channel::{NavigationProbe, VelocityReporter};
use crate::shot::probe::NavigationDecision;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

/// A task that runs on the current thread's event loop
pub type LocalTask = Pin<Box<dyn Future<Output = ()> + 'static>>;

/// Schedules tasks without waiting for them
pub trait TaskSpawner {
    fn spawn(&self, task: LocalTask);
}

pub struct ShotDispatcher {
    reporter: Rc<dyn VelocityReporter>,
    probe: Rc<dyn NavigationProbe>,
    spawner: Rc<dyn TaskSpawner>,
}

impl ShotDispatcher {
    pub fn new(
        reporter: Rc<dyn VelocityReporter>,
        probe: Rc<dyn NavigationProbe>,
        spawner: Rc<dyn TaskSpawner>,
    ) -> Self {
        Self {
            reporter,
            probe,
            spawner,
        }
    }

    /// Report `velocity` and probe the follow-up page in the background
    pub fn dispatch(&self, velocity: VelocityVector) {
        let reporter = Rc::clone(&self.reporter);
        self.spawner.spawn(Box::pin(async move {
            if let Err(e) = reporter.send(velocity).await {
                tracing::warn!("Failed to send velocity ({}, {}): {}", velocity.x, velocity.y, e);
            }
        }));

        let probe = Rc::clone(&self.probe);
        self.spawner.spawn(Box::pin(async move {
            match probe.check_and_navigate().await {
                Ok(NavigationDecision::Navigate(path)) => {
                    tracing::debug!("Follow-up probe navigated to {}", path);
                }
                Ok(NavigationDecision::Stay) => {
                    tracing::debug!("Follow-up probe found nothing to show");
                }
                Err(e) => tracing::error!("Error fetching follow-up page: {}", e),
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shot::channel::ShotError;
    use crate::testing::{QueuedSpawner, RecordingProbe, RecordingReporter};
    use tokio::task::LocalSet;

    struct TokioSpawner;

    impl TaskSpawner for TokioSpawner {
        fn spawn(&self, task: LocalTask) {
            tokio::task::spawn_local(task);
        }
    }

    #[test]
    fn test_dispatch_does_not_run_tasks_inline() {
        let reporter = Rc::new(RecordingReporter::default());
        let probe = Rc::new(RecordingProbe::default());
        let spawner = Rc::new(QueuedSpawner::default());
        let dispatcher = ShotDispatcher::new(reporter.clone(), probe.clone(), spawner.clone());

        dispatcher.dispatch(VelocityVector { x: 1.0, y: 2.0 });

        assert_eq!(spawner.pending(), 2);
        assert!(reporter.sent().is_empty());
        assert_eq!(probe.calls(), 0);
    }

    #[tokio::test]
    async fn test_dispatch_runs_reporter_and_probe() {
        let reporter = Rc::new(RecordingReporter::default());
        let probe = Rc::new(RecordingProbe::default());
        let dispatcher = ShotDispatcher::new(reporter.clone(), probe.clone(), Rc::new(TokioSpawner));

        let local = LocalSet::new();
        local.spawn_local(async move {
            dispatcher.dispatch(VelocityVector { x: 1750.0, y: 3750.0 });
        });
        local.await;

        assert_eq!(reporter.sent(), vec![VelocityVector { x: 1750.0, y: 3750.0 }]);
        assert_eq!(probe.calls(), 1);
    }

    #[tokio::test]
    async fn test_reporter_failure_does_not_stop_probe() {
        let reporter = Rc::new(RecordingReporter::failing(|| {
            ShotError::Transport("connection refused".to_string())
        }));
        let probe = Rc::new(RecordingProbe::default());
        let spawner = Rc::new(QueuedSpawner::default());
        let dispatcher = ShotDispatcher::new(reporter.clone(), probe.clone(), spawner.clone());

        dispatcher.dispatch(VelocityVector { x: 0.0, y: 0.0 });
        spawner.run_all().await;

        assert_eq!(reporter.sent().len(), 1);
        assert_eq!(probe.calls(), 1);
    }
}
