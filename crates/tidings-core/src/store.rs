//! Store trait.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::news::{News, NewsValue};
use crate::types::NewsId;

/// CRUD persistence for news records.
///
/// Two implementations exist: a mutex-guarded in-memory store
/// (`tidings-memory`) and a Postgres-backed store (`tidings-postgres`).
/// Both apply the same not-found policy: reading, updating, or deleting an
/// absent id reports [`StoreError::NotFound`].
#[async_trait]
pub trait NewsStore: Send + Sync {
    /// Assign a fresh unique id to the value, persist it, and return the
    /// stored record.
    async fn create(&self, value: NewsValue) -> Result<News, StoreError>;

    /// Return all records, in implementation-defined order.
    async fn find_all(&self) -> Result<Vec<News>, StoreError>;

    /// Return the record with the given id.
    async fn find_by_id(&self, id: NewsId) -> Result<News, StoreError>;

    /// Fully replace the record at the given id, preserving the id.
    async fn update_by_id(&self, id: NewsId, value: NewsValue) -> Result<(), StoreError>;

    /// Remove the record with the given id.
    async fn delete_by_id(&self, id: NewsId) -> Result<(), StoreError>;
}
