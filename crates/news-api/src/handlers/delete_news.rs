//! Delete news by id handler.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::{error, warn};

use tidings_core::NewsId;

use crate::error::ApiError;
use crate::state::AppState;

/// `DELETE /news/{news_id}`: remove one record.
///
/// Deleting an id that does not exist reports 404; both store variants
/// share that policy.
pub async fn delete_news(
    State(state): State<AppState>,
    Path(news_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = NewsId::parse(&news_id).map_err(|err| {
        warn!(error = %err, "failed to parse news id");
        ApiError::BadRequest
    })?;

    state.store.delete_by_id(id).await.map_err(|err| {
        error!(error = %err, "failed to delete news by id");
        ApiError::Store(err)
    })?;

    Ok(StatusCode::NO_CONTENT)
}
