//! Liveness handler.

use axum::Json;
use serde_json::{Value, json};

/// `GET /health`: liveness probe. No store access.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
