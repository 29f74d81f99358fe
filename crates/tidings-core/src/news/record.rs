//! Stored news record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::NewsId;

/// The validated payload of a news record, without its identity.
///
/// Produced by [`NewsDraft::validate`](crate::NewsDraft::validate); every
/// field already satisfies the model invariants (non-empty text, parseable
/// timestamp, canonicalized source URL, at least one tag).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsValue {
    /// Who wrote the piece.
    pub author: String,

    /// Headline.
    pub title: String,

    /// Full article text.
    pub content: String,

    /// Short abstract of the content.
    pub summary: String,

    /// Topic tags; never empty.
    pub tags: Vec<String>,

    /// When the piece was published, as supplied by the caller.
    pub created_at: DateTime<Utc>,

    /// Canonicalized source URL, as reconstructed from the parse.
    pub source: String,
}

/// A news record as persisted by a store.
///
/// Serializes to the flat wire shape: `id` alongside the value fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct News {
    /// The unique identifier, assigned by the store on creation.
    pub id: NewsId,

    /// The record payload.
    #[serde(flatten)]
    pub value: NewsValue,
}

impl News {
    /// Pair a value with its identifier.
    pub fn new(id: NewsId, value: NewsValue) -> Self {
        Self { id, value }
    }
}
