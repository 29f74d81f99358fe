//! Get news by id handler.

use axum::Json;
use axum::extract::{Path, State};
use tracing::{error, warn};

use tidings_core::{News, NewsId};

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /news/{news_id}`: return one record as JSON.
///
/// An unparseable id is rejected with 400 before the store is consulted.
pub async fn get_news(
    State(state): State<AppState>,
    Path(news_id): Path<String>,
) -> Result<Json<News>, ApiError> {
    let id = NewsId::parse(&news_id).map_err(|err| {
        warn!(error = %err, "failed to parse news id");
        ApiError::BadRequest
    })?;

    let record = state.store.find_by_id(id).await.map_err(|err| {
        error!(error = %err, "failed to get news by id");
        ApiError::Store(err)
    })?;

    Ok(Json(record))
}
