//! In-memory collaborators shared by unit tests

use crate::input::types::VelocityVector;
use crate::shot::channel::{
    HttpClient, HttpResponse, NavigationProbe, Navigator, ShotError, ShotResult, VelocityReporter,
};
use crate::shot::dispatch::{LocalTask, TaskSpawner};
use crate::shot::probe::NavigationDecision;
use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Default)]
struct FakeHttpInner {
    post_replies: VecDeque<HttpResponse>,
    get_replies: VecDeque<HttpResponse>,
    posts: Vec<(String, String)>,
    gets: Vec<String>,
}

/// Scripted HTTP client; runs out of replies with a transport error
#[derive(Clone, Default)]
pub struct FakeHttp {
    inner: Rc<RefCell<FakeHttpInner>>,
}

impl FakeHttp {
    pub fn with_post(self, status: u16, body: &str) -> Self {
        self.inner.borrow_mut().post_replies.push_back(HttpResponse {
            status,
            body: body.to_string(),
        });
        self
    }

    pub fn with_get(self, status: u16, body: &str) -> Self {
        self.inner.borrow_mut().get_replies.push_back(HttpResponse {
            status,
            body: body.to_string(),
        });
        self
    }

    pub fn posts(&self) -> Vec<(String, String)> {
        self.inner.borrow().posts.clone()
    }

    pub fn gets(&self) -> Vec<String> {
        self.inner.borrow().gets.clone()
    }
}

#[async_trait(?Send)]
impl HttpClient for FakeHttp {
    async fn post_json(&self, path: &str, body: String) -> ShotResult<HttpResponse> {
        let mut inner = self.inner.borrow_mut();
        inner.posts.push((path.to_string(), body));
        inner
            .post_replies
            .pop_front()
            .ok_or_else(|| ShotError::Transport("network unreachable".to_string()))
    }

    async fn get_text(&self, path: &str) -> ShotResult<HttpResponse> {
        let mut inner = self.inner.borrow_mut();
        inner.gets.push(path.to_string());
        inner
            .get_replies
            .pop_front()
            .ok_or_else(|| ShotError::Transport("network unreachable".to_string()))
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    sent: RefCell<Vec<VelocityVector>>,
    failure: Option<fn() -> ShotError>,
}

impl RecordingReporter {
    pub fn failing(failure: fn() -> ShotError) -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            failure: Some(failure),
        }
    }

    pub fn sent(&self) -> Vec<VelocityVector> {
        self.sent.borrow().clone()
    }
}

#[async_trait(?Send)]
impl VelocityReporter for RecordingReporter {
    async fn send(&self, velocity: VelocityVector) -> ShotResult<()> {
        self.sent.borrow_mut().push(velocity);
        match self.failure {
            Some(failure) => Err(failure()),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
pub struct RecordingProbe {
    calls: Cell<usize>,
}

impl RecordingProbe {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl NavigationProbe for RecordingProbe {
    async fn check_and_navigate(&self) -> ShotResult<NavigationDecision> {
        self.calls.set(self.calls.get() + 1);
        Ok(NavigationDecision::Stay)
    }
}

#[derive(Clone, Default)]
pub struct RecordingNavigator {
    visited: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) -> ShotResult<()> {
        self.visited.borrow_mut().push(path.to_string());
        Ok(())
    }
}

/// Holds spawned tasks until the test drives them
#[derive(Default)]
pub struct QueuedSpawner {
    tasks: RefCell<Vec<LocalTask>>,
}

impl QueuedSpawner {
    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    pub async fn run_all(&self) {
        let tasks: Vec<LocalTask> = self.tasks.borrow_mut().drain(..).collect();
        for task in tasks {
            task.await;
        }
    }
}

impl TaskSpawner for QueuedSpawner {
    fn spawn(&self, task: LocalTask) {
        self.tasks.borrow_mut().push(task);
    }
}
