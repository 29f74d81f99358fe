//! news-api - HTTP server exposing CRUD over the news resource.
//!
//! Listens on a fixed port. When `DATABASE_URL` is set the Postgres store
//! is used; otherwise records live in an in-memory store and are lost on
//! restart.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use news_api::router;
use news_api::state::AppState;
use tidings_core::NewsStore;
use tidings_memory::MemoryStore;
use tidings_postgres::{PgStore, init_pool};

const LISTEN_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let store = open_store().await?;
    let app = router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(LISTEN_ADDR).await?;
    info!(addr = LISTEN_ADDR, "server starting");
    axum::serve(listener, app).await?;

    Ok(())
}

async fn open_store() -> Result<Arc<dyn NewsStore>> {
    match std::env::var("DATABASE_URL") {
        Ok(url) => {
            let pool = init_pool(&url).await?;
            info!("using postgres store");
            Ok(Arc::new(PgStore::new(pool)))
        }
        Err(_) => {
            info!("DATABASE_URL not set, using in-memory store");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .init();
}
