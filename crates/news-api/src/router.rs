//! Route table and request tracing middleware.

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;
use tracing::{Span, info, info_span};

use crate::handlers::{create_news, delete_news, get_news, health, list_news, update_news};
use crate::state::AppState;

/// Build the router: the static route table with the store injected as
/// shared state, wrapped in a per-request tracing span.
///
/// Handlers log through the span, so every line carries the method and
/// path of the request it belongs to.
pub fn router(state: AppState) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            info_span!(
                "request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        })
        .on_request(|_request: &Request<Body>, _span: &Span| {
            info!("request received");
        })
        .on_response(|response: &Response, latency: Duration, _span: &Span| {
            info!(
                status = response.status().as_u16(),
                latency_ms = latency.as_millis() as u64,
                "request completed",
            );
        });

    Router::new()
        .route("/news", post(create_news).get(list_news))
        .route(
            "/news/{news_id}",
            get(get_news).put(update_news).delete(delete_news),
        )
        .route("/health", get(health))
        .layer(trace)
        .with_state(state)
}
