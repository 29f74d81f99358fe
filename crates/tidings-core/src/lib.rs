//! tidings-core - Core types and traits for the tidings news service.
//!
//! This crate holds the news record model, the request-body validator, and
//! the [`NewsStore`] trait that storage backends implement. The HTTP layer
//! and the concrete stores live in their own crates.
//!
//! # Example
//!
//! ```
//! use tidings_core::NewsDraft;
//!
//! let draft = NewsDraft {
//!     author: "newsroom".to_string(),
//!     title: "headline".to_string(),
//!     content: "body".to_string(),
//!     summary: "tl;dr".to_string(),
//!     created_at: "2024-04-07T05:13:27+00:00".to_string(),
//!     source: "https://example.com/wire".to_string(),
//!     tags: vec!["world".to_string()],
//! };
//!
//! let value = draft.validate()?;
//! assert_eq!(value.source, "https://example.com/wire");
//! # Ok::<(), tidings_core::ValidationError>(())
//! ```

pub mod error;
pub mod news;
pub mod store;
pub mod types;

// Re-export primary types at crate root for convenience
pub use error::{InvalidIdError, StoreError, ValidationError};
pub use news::{News, NewsDraft, NewsValue};
pub use store::NewsStore;
pub use types::NewsId;
