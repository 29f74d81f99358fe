//! Postgres storage for news records.

use async_trait::async_trait;
use deadpool_postgres::{Config as PgConfig, Pool, Runtime};
use tokio_postgres::{NoTls, Row};
use tracing::{debug, instrument};
use uuid::Uuid;

use tidings_core::{News, NewsId, NewsStore, NewsValue, StoreError};

fn map_pool(err: deadpool_postgres::PoolError) -> StoreError {
    StoreError::backend(err.to_string())
}

fn map_pg(err: tokio_postgres::Error) -> StoreError {
    StoreError::backend(err.to_string())
}

/// Build a connection pool from a Postgres URL and make sure the `news`
/// table exists.
pub async fn init_pool(pg_url: &str) -> Result<Pool, StoreError> {
    let mut cfg = PgConfig::new();
    cfg.url = Some(pg_url.to_string());

    let pool = cfg
        .create_pool(Some(Runtime::Tokio1), NoTls)
        .map_err(|err| StoreError::backend(err.to_string()))?;
    ensure_table(&pool).await?;
    Ok(pool)
}

/// Safe to run on every boot.
async fn ensure_table(pool: &Pool) -> Result<(), StoreError> {
    const SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS news (
      id          uuid PRIMARY KEY,
      author      text NOT NULL,
      title       text NOT NULL,
      content     text NOT NULL,
      summary     text NOT NULL,
      tags        text[] NOT NULL,
      created_at  timestamptz NOT NULL,
      source      text NOT NULL
    );
    "#;

    let conn = pool.get().await.map_err(map_pool)?;
    conn.batch_execute(SQL).await.map_err(map_pg)?;
    Ok(())
}

fn row_to_news(row: &Row) -> Result<News, StoreError> {
    let id: Uuid = row.try_get("id").map_err(map_pg)?;
    let value = NewsValue {
        author: row.try_get("author").map_err(map_pg)?,
        title: row.try_get("title").map_err(map_pg)?,
        content: row.try_get("content").map_err(map_pg)?,
        summary: row.try_get("summary").map_err(map_pg)?,
        tags: row.try_get("tags").map_err(map_pg)?,
        created_at: row.try_get("created_at").map_err(map_pg)?,
        source: row.try_get("source").map_err(map_pg)?,
    };
    Ok(News::new(NewsId::from(id), value))
}

/// Postgres-backed news store.
///
/// Every operation is a single statement; there are no transactions, no
/// application-level locks, and no retries. Absent ids surface as
/// [`StoreError::NotFound`] via `query_opt` or the affected-row count.
#[derive(Clone)]
pub struct PgStore {
    pool: Pool,
}

impl PgStore {
    /// Create a store over an initialized pool.
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewsStore for PgStore {
    #[instrument(skip(self, value))]
    async fn create(&self, value: NewsValue) -> Result<News, StoreError> {
        const SQL: &str = "INSERT INTO news (id, author, title, content, summary, tags, created_at, source) \
                           VALUES ($1, $2, $3, $4, $5, $6, $7, $8)";

        let id = NewsId::generate();
        let uuid = id.as_uuid();

        let conn = self.pool.get().await.map_err(map_pool)?;
        conn.execute(
            SQL,
            &[
                &uuid,
                &value.author,
                &value.title,
                &value.content,
                &value.summary,
                &value.tags,
                &value.created_at,
                &value.source,
            ],
        )
        .await
        .map_err(map_pg)?;

        debug!(id = %id, "Created news record");

        Ok(News::new(id, value))
    }

    async fn find_all(&self) -> Result<Vec<News>, StoreError> {
        const SQL: &str =
            "SELECT id, author, title, content, summary, tags, created_at, source FROM news";

        let conn = self.pool.get().await.map_err(map_pool)?;
        let rows = conn.query(SQL, &[]).await.map_err(map_pg)?;

        rows.iter().map(row_to_news).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: NewsId) -> Result<News, StoreError> {
        const SQL: &str = "SELECT id, author, title, content, summary, tags, created_at, source \
                           FROM news WHERE id = $1";

        let uuid = id.as_uuid();

        let conn = self.pool.get().await.map_err(map_pool)?;
        let row = conn.query_opt(SQL, &[&uuid]).await.map_err(map_pg)?;

        match row {
            Some(row) => row_to_news(&row),
            None => Err(StoreError::NotFound { id }),
        }
    }

    #[instrument(skip(self, value))]
    async fn update_by_id(&self, id: NewsId, value: NewsValue) -> Result<(), StoreError> {
        const SQL: &str = "UPDATE news SET author = $2, title = $3, content = $4, summary = $5, \
                           tags = $6, created_at = $7, source = $8 WHERE id = $1";

        let uuid = id.as_uuid();

        let conn = self.pool.get().await.map_err(map_pool)?;
        let rows_affected = conn
            .execute(
                SQL,
                &[
                    &uuid,
                    &value.author,
                    &value.title,
                    &value.content,
                    &value.summary,
                    &value.tags,
                    &value.created_at,
                    &value.source,
                ],
            )
            .await
            .map_err(map_pg)?;

        if rows_affected == 0 {
            return Err(StoreError::NotFound { id });
        }

        debug!(id = %id, "Updated news record");

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: NewsId) -> Result<(), StoreError> {
        const SQL: &str = "DELETE FROM news WHERE id = $1";

        let uuid = id.as_uuid();

        let conn = self.pool.get().await.map_err(map_pool)?;
        let rows_affected = conn.execute(SQL, &[&uuid]).await.map_err(map_pg)?;

        if rows_affected == 0 {
            return Err(StoreError::NotFound { id });
        }

        debug!(id = %id, "Deleted news record");

        Ok(())
    }
}
