//! Mock storage implementations for testing.

use pocketlist_storage::{KeyValueStore, StorageError};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A [`KeyValueStore`] whose every operation fails.
///
/// Used to verify the best-effort persistence contract: a failed durable
/// write is logged and swallowed, and the in-memory mutation that
/// triggered it stays applied.
#[derive(Debug, Clone, Default)]
pub struct FailingStore {
    failures: Arc<AtomicUsize>,
}

impl FailingStore {
    /// Create a new failing store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of operations that have failed so far.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.load(Ordering::SeqCst)
    }

    fn fail<T>(&self, op: &str) -> Result<T, StorageError> {
        self.failures.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::Backend(format!("injected {op} failure")))
    }
}

impl KeyValueStore for FailingStore {
    fn get<'a>(
        &'a self,
        _key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Vec<u8>>, StorageError>> + Send + 'a>> {
        Box::pin(async move { self.fail("get") })
    }

    fn set<'a>(
        &'a self,
        _key: &'a str,
        _value: Vec<u8>,
    ) -> Pin<Box<dyn Future<Output = Result<(), StorageError>> + Send + 'a>> {
        Box::pin(async move { self.fail("set") })
    }

    fn delete<'a>(
        &'a self,
        _key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), StorageError>> + Send + 'a>> {
        Box::pin(async move { self.fail("delete") })
    }
}
