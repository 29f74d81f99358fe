//! List news handler.

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use tracing::error;

use tidings_core::News;

use crate::error::ApiError;
use crate::state::AppState;

/// Response envelope for the listing endpoint.
#[derive(Debug, Serialize)]
pub struct NewsListResponse {
    pub news: Vec<News>,
}

/// `GET /news`: return every record under the `news` key.
pub async fn list_news(State(state): State<AppState>) -> Result<Json<NewsListResponse>, ApiError> {
    let news = state.store.find_all().await.map_err(|err| {
        error!(error = %err, "failed to get all news");
        ApiError::Store(err)
    })?;

    Ok(Json(NewsListResponse { news }))
}
