//! Follow-up page probe
//!
//! After a shot the server renders the animation frames into the follow-up
//! page. The probe fetches that page and navigates to it only when it has
//! content; an empty or unreadable page means the animation is not ready.

use crate::shot::channel::{HttpClient, NavigationProbe, Navigator, ShotError, ShotResult};
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Navigated to the contained path
    Navigate(String),
    /// Nothing to show yet
    Stay,
}

impl NavigationDecision {
    /// Decide from the fetched body; whitespace-only counts as empty
    pub fn from_body(path: &str, body: &str) -> Self {
        if body.trim().is_empty() {
            NavigationDecision::Stay
        } else {
            NavigationDecision::Navigate(path.to_string())
        }
    }
}

pub struct FollowUpProbe<C, N> {
    client: C,
    navigator: N,
    path: String,
}

impl<C: HttpClient, N: Navigator> FollowUpProbe<C, N> {
    pub fn new(client: C, navigator: N, path: impl Into<String>) -> Self {
        Self {
            client,
            navigator,
            path: path.into(),
        }
    }
}

#[async_trait(?Send)]
impl<C: HttpClient, N: Navigator> NavigationProbe for FollowUpProbe<C, N> {
    async fn check_and_navigate(&self) -> ShotResult<NavigationDecision> {
        let response = self.client.get_text(&self.path).await?;
        if !response.is_success() {
            return Err(ShotError::Status {
                status: response.status,
                path: self.path.clone(),
            });
        }

        let decision = NavigationDecision::from_body(&self.path, &response.body);
        match &decision {
            NavigationDecision::Navigate(path) => {
                tracing::info!("Navigating to {}", path);
                self.navigator.navigate(path)?;
            }
            NavigationDecision::Stay => tracing::info!("{} is empty", self.path),
        }
        Ok(decision)
    }
}
