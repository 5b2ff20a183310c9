//! Authentication environment.
//!
//! Dependency injection for the auth reducer.

use pocketlist_storage::KeyValueStore;
use std::sync::Arc;

/// External dependencies needed by the auth reducer.
#[derive(Clone)]
pub struct AuthEnvironment {
    /// Durable key-value store holding the user record.
    pub storage: Arc<dyn KeyValueStore>,
}

impl AuthEnvironment {
    /// Create a new authentication environment.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }
}
