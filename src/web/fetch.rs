//! Browser fetch, navigation and task spawning

use crate::shot::channel::{HttpClient, HttpResponse, Navigator, ShotError, ShotResult};
use crate::shot::dispatch::{LocalTask, TaskSpawner};
use crate::web::js_error;
use async_trait::async_trait;
use gloo_net::http::{Request, Response};

fn transport(e: gloo_net::Error) -> ShotError {
    ShotError::Transport(e.to_string())
}

async fn read(response: Response) -> HttpResponse {
    let status = response.status();
    // An unreadable body is treated like an empty one
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!("Failed to read body of {}: {}", response.url(), e);
            String::new()
        }
    };
    HttpResponse { status, body }
}

/// `HttpClient` over `window.fetch`, relative to the page origin
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

#[async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn post_json(&self, path: &str, body: String) -> ShotResult<HttpResponse> {
        let response = Request::post(path)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        Ok(read(response).await)
    }

    async fn get_text(&self, path: &str) -> ShotResult<HttpResponse> {
        let response = Request::get(path).send().await.map_err(transport)?;
        Ok(read(response).await)
    }
}

/// Navigates by assigning `window.location.href`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn navigate(&self, path: &str) -> ShotResult<()> {
        let window =
            web_sys::window().ok_or_else(|| ShotError::Platform("no global window".to_string()))?;
        window
            .location()
            .set_href(path)
            .map_err(|e| js_error("navigate", e))
    }
}

/// Runs tasks on the browser microtask queue
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSpawner;

impl TaskSpawner for LocalSpawner {
    fn spawn(&self, task: LocalTask) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
