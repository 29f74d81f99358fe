//! Error types for the tidings service.
//!
//! This module provides explicit error types for identifier parsing, request
//! validation, and storage, each carrying enough information for the HTTP
//! layer to pick a status code without inspecting error internals.

use thiserror::Error;

use crate::types::NewsId;

/// A news identifier that failed to parse.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid news id '{value}': {reason}")]
pub struct InvalidIdError {
    /// The rejected input.
    pub value: String,
    /// Why the input was rejected.
    pub reason: String,
}

/// A request body that failed validation.
///
/// Fields are checked in a fixed order and the first failure wins; every
/// message names the offending field so it can be returned to the caller
/// verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The author field is missing or empty.
    #[error("author is empty")]
    AuthorEmpty,

    /// The title field is missing or empty.
    #[error("title is empty")]
    TitleEmpty,

    /// The content field is missing or empty.
    #[error("content is empty")]
    ContentEmpty,

    /// The summary field is missing or empty.
    #[error("summary is empty")]
    SummaryEmpty,

    /// The created_at field is not an RFC 3339 timestamp.
    #[error("cannot parse created_at '{value}': {reason}")]
    CreatedAtInvalid { value: String, reason: String },

    /// The source field is missing or empty.
    #[error("source is empty")]
    SourceEmpty,

    /// The source field is not a parseable URL.
    #[error("invalid source '{value}': {reason}")]
    SourceInvalid { value: String, reason: String },

    /// The tag list is missing or empty.
    #[error("tags cannot be empty")]
    TagsEmpty,
}

/// A storage operation that failed.
///
/// The two variants are the status classification the HTTP layer branches
/// on: a missing record maps to 404, anything else to 500.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record exists with the given id.
    #[error("news {id} not found")]
    NotFound { id: NewsId },

    /// The backend failed (connection error, constraint violation, ...).
    ///
    /// The message is for server-side logs and is never sent to clients.
    #[error("backend error: {message}")]
    Backend { message: String },
}

impl StoreError {
    /// Create a backend error from any displayable cause.
    pub fn backend(message: impl Into<String>) -> Self {
        StoreError::Backend {
            message: message.into(),
        }
    }

    /// Returns true if this error means the record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    /// The HTTP status code this error classifies as.
    pub fn http_status(&self) -> u16 {
        match self {
            StoreError::NotFound { .. } => 404,
            StoreError::Backend { .. } => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_classifies_as_404() {
        let err = StoreError::NotFound {
            id: NewsId::generate(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.http_status(), 404);
    }

    #[test]
    fn backend_classifies_as_500() {
        let err = StoreError::backend("connection refused");
        assert!(!err.is_not_found());
        assert_eq!(err.http_status(), 500);
    }

    #[test]
    fn validation_messages_name_the_field() {
        assert_eq!(ValidationError::AuthorEmpty.to_string(), "author is empty");
        assert_eq!(
            ValidationError::TagsEmpty.to_string(),
            "tags cannot be empty"
        );
    }
}
