//! news-api - HTTP layer for the tidings news service.
//!
//! The binary in `main.rs` wires a store implementation into the router
//! built here. The library surface exists so integration tests can drive
//! the real router over a store of their choosing.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::router;
pub use state::AppState;
