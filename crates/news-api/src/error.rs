//! Request error type and its mapping to HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use tidings_core::{StoreError, ValidationError};

/// Everything a handler can fail with, mapped to a response in one place.
///
/// Validation failures carry their message into the response body so the
/// caller learns which field was rejected. Store failures map through the
/// error's own status classification and keep backend detail out of the
/// body; it has already been logged by the handler.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed input: undecodable JSON body or an unparseable path id.
    BadRequest,

    /// A semantically invalid request body.
    Validation(ValidationError),

    /// A failed store operation, classified by the store.
    Store(StoreError),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST.into_response(),
            ApiError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
            ApiError::Store(err) => StatusCode::from_u16(err.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
                .into_response(),
        }
    }
}
