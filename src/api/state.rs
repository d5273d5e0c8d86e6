use std::sync::Arc;

use crate::domain::repositories::EntityStore;
use crate::infrastructure::repositories::MemoryEntityStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EntityStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// State backed by a fresh, empty in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryEntityStore::new()))
    }
}
