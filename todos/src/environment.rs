//! Todo environment.
//!
//! Dependency injection for the todo reducer.

use pocketlist_storage::KeyValueStore;
use std::sync::Arc;

/// External dependencies needed by the todo reducer.
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Durable key-value store holding the todo collection.
    pub storage: Arc<dyn KeyValueStore>,
}

impl TodoEnvironment {
    /// Create a new todo environment.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }
}
