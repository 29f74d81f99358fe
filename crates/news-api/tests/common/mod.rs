//! Shared helpers for news-api integration tests.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, Response};
use tower::ServiceExt;

use news_api::router;
use news_api::state::AppState;
use tidings_core::{News, NewsId, NewsStore, NewsValue, StoreError};
use tidings_memory::MemoryStore;

/// Build an app over a fresh in-memory store.
pub fn memory_app() -> Router {
    router(AppState::new(Arc::new(MemoryStore::new())))
}

/// Build an app over a store whose every operation fails.
pub fn failing_app() -> Router {
    router(AppState::new(Arc::new(FailingStore)))
}

/// A store stub that reports a backend failure for every operation, for
/// exercising the 500 mapping without a broken database.
pub struct FailingStore;

#[async_trait]
impl NewsStore for FailingStore {
    async fn create(&self, _value: NewsValue) -> Result<News, StoreError> {
        Err(StoreError::backend("stub failure"))
    }

    async fn find_all(&self) -> Result<Vec<News>, StoreError> {
        Err(StoreError::backend("stub failure"))
    }

    async fn find_by_id(&self, _id: NewsId) -> Result<News, StoreError> {
        Err(StoreError::backend("stub failure"))
    }

    async fn update_by_id(&self, _id: NewsId, _value: NewsValue) -> Result<(), StoreError> {
        Err(StoreError::backend("stub failure"))
    }

    async fn delete_by_id(&self, _id: NewsId) -> Result<(), StoreError> {
        Err(StoreError::backend("stub failure"))
    }
}

/// Send one request through the router and return the raw response.
pub async fn send(app: &Router, method: &str, path: &str, json: Option<&str>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(path);
    let request = match json {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    app.clone()
        .oneshot(request)
        .await
        .expect("Failed to send request")
}

/// Read the response body as a string.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8_lossy(&bytes).to_string()
}

/// Read the response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body is not JSON")
}
