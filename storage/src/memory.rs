//! In-memory key-value store.

use crate::{KeyValueStore, StorageError};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

/// In-memory [`KeyValueStore`].
///
/// Clones share the same underlying map, so a `MemoryStore` handed to two
/// state containers behaves like one durable medium. Used by tests to
/// simulate a process restart: build fresh containers over the same store
/// and rehydrate.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys (for tests).
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] if the lock is poisoned.
    pub fn len(&self) -> Result<usize, StorageError> {
        Ok(self.lock()?.len())
    }

    /// Whether the store holds no keys (for tests).
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Backend("mutex poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Vec<u8>>, StorageError>> + Send + 'a>> {
        Box::pin(async move { Ok(self.lock()?.get(key).cloned()) })
    }

    fn set<'a>(
        &'a self,
        key: &'a str,
        value: Vec<u8>,
    ) -> Pin<Box<dyn Future<Output = Result<(), StorageError>> + Send + 'a>> {
        Box::pin(async move {
            self.lock()?.insert(key.to_string(), value);
            Ok(())
        })
    }

    fn delete<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), StorageError>> + Send + 'a>> {
        Box::pin(async move {
            self.lock()?.remove(key);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)] // Test code can use unwrap

    use super::*;
    use crate::keys;

    #[tokio::test]
    async fn absent_key_reads_as_none() {
        let store = MemoryStore::new();
        let value = store.get(keys::USER).await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn set_then_get_roundtrip() {
        let store = MemoryStore::new();
        store.set(keys::TODOS, vec![1, 2, 3]).await.unwrap();
        assert_eq!(store.get(keys::TODOS).await.unwrap(), Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn set_replaces_previous_value() {
        let store = MemoryStore::new();
        store.set(keys::USER, b"old".to_vec()).await.unwrap();
        store.set(keys::USER, b"new".to_vec()).await.unwrap();
        assert_eq!(store.get(keys::USER).await.unwrap(), Some(b"new".to_vec()));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn delete_of_absent_key_succeeds() {
        let store = MemoryStore::new();
        store.delete(keys::USER).await.unwrap();
        assert!(store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn clones_share_the_same_medium() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set(keys::USER, b"ana".to_vec()).await.unwrap();
        assert_eq!(other.get(keys::USER).await.unwrap(), Some(b"ana".to_vec()));
    }
}
