//! Shared application state.

use std::sync::Arc;

use tidings_core::NewsStore;

/// State injected into every handler: the store behind its trait seam.
///
/// Constructed once at startup; handlers never see which backend they are
/// talking to.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn NewsStore>,
}

impl AppState {
    /// Wrap a store for injection into the router.
    pub fn new(store: Arc<dyn NewsStore>) -> Self {
        Self { store }
    }
}
