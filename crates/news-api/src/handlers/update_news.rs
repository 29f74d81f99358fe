//! Update news by id handler.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::{error, warn};

use tidings_core::{NewsDraft, NewsId};

use crate::error::ApiError;
use crate::state::AppState;

/// `PUT /news/{news_id}`: fully replace the record at the path id.
///
/// The path identifier is the update key; any id in the body is ignored.
/// Replies 200 with an empty body.
pub async fn update_news(
    State(state): State<AppState>,
    Path(news_id): Path<String>,
    body: Result<Json<NewsDraft>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let id = NewsId::parse(&news_id).map_err(|err| {
        warn!(error = %err, "failed to parse news id");
        ApiError::BadRequest
    })?;

    let Json(draft) = body.map_err(|err| {
        warn!(error = %err, "failed to decode request body");
        ApiError::BadRequest
    })?;

    let value = draft.validate().inspect_err(|err| {
        warn!(error = %err, "failed to validate request body");
    })?;

    state.store.update_by_id(id, value).await.map_err(|err| {
        error!(error = %err, "failed to update news by id");
        ApiError::Store(err)
    })?;

    Ok(StatusCode::OK)
}
