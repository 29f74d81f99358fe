//! The news record model and its validator.
//!
//! [`NewsDraft`] is the raw request body; validating it yields a
//! [`NewsValue`], the id-less payload a store persists. [`News`] pairs a
//! value with its assigned id.

mod draft;
mod record;

pub use draft::NewsDraft;
pub use record::{News, NewsValue};
