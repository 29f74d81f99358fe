//! Create news handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use tracing::{error, warn};

use tidings_core::NewsDraft;

use crate::error::ApiError;
use crate::state::AppState;

/// `POST /news`: validate the draft and persist a new record.
///
/// Replies 201 with an empty body; the assigned id is observable through
/// the read endpoints.
pub async fn create_news(
    State(state): State<AppState>,
    body: Result<Json<NewsDraft>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(draft) = body.map_err(|err| {
        warn!(error = %err, "failed to decode request body");
        ApiError::BadRequest
    })?;

    let value = draft.validate().inspect_err(|err| {
        warn!(error = %err, "failed to validate request body");
    })?;

    state.store.create(value).await.map_err(|err| {
        error!(error = %err, "failed to create news");
        ApiError::Store(err)
    })?;

    Ok(StatusCode::CREATED)
}
