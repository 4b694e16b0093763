//! Shared application state for the server.

use std::sync::Arc;
use tokio::sync::RwLock;

use portfolio_core::ProjectStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Project store; reads share the lock, mutations hold it exclusively
    pub store: Arc<RwLock<ProjectStore>>,
}

impl AppState {
    /// Wrap a store for sharing across handlers.
    pub fn new(store: ProjectStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}
