//! tidings-postgres - Postgres-backed news store.
//!
//! A [`PgStore`] runs one SQL statement per operation over a
//! `deadpool-postgres` connection pool; concurrency control is delegated to
//! the pool and the database. [`init_pool`] builds the pool from a
//! connection URL and creates the `news` table if it does not exist.

mod store;

pub use store::{PgStore, init_pool};
