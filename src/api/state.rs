//! Application state shared by all request handlers.

use std::sync::Arc;

use crate::store::Store;

/// Shared application state.
///
/// Holds the store, which owns the dataset and its lock; handlers receive
/// the state by clone (axum requirement) and all clones share one store.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Store>,
}

impl AppState {
    /// Creates application state around the given store.
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Returns a reference to the store.
    pub fn store(&self) -> &Store {
        &self.store
    }
}
