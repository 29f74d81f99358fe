//! Mutex-guarded in-memory storage.

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, instrument};

use tidings_core::{News, NewsId, NewsStore, NewsValue, StoreError};

/// In-memory news store.
///
/// The backing vector is the only shared mutable state; all access is
/// serialized behind one exclusive lock, with no read/write distinction.
/// The lock is never held across an await point. Records are kept in
/// insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    news: Mutex<Vec<News>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NewsStore for MemoryStore {
    #[instrument(skip(self, value))]
    async fn create(&self, value: NewsValue) -> Result<News, StoreError> {
        let record = News::new(NewsId::generate(), value);

        let mut news = self.news.lock();
        news.push(record.clone());

        debug!(id = %record.id, "Created news record");

        Ok(record)
    }

    async fn find_all(&self) -> Result<Vec<News>, StoreError> {
        Ok(self.news.lock().clone())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: NewsId) -> Result<News, StoreError> {
        let news = self.news.lock();
        news.iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    #[instrument(skip(self, value))]
    async fn update_by_id(&self, id: NewsId, value: NewsValue) -> Result<(), StoreError> {
        let mut news = self.news.lock();
        match news.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                record.value = value;
                debug!(id = %id, "Updated news record");
                Ok(())
            }
            None => Err(StoreError::NotFound { id }),
        }
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: NewsId) -> Result<(), StoreError> {
        let mut news = self.news.lock();
        match news.iter().position(|record| record.id == id) {
            Some(idx) => {
                news.remove(idx);
                debug!(id = %id, "Deleted news record");
                Ok(())
            }
            None => Err(StoreError::NotFound { id }),
        }
    }
}
