//! # Pocketlist Storage
//!
//! Durable key-value storage capability for pocketlist.
//!
//! This crate defines the [`KeyValueStore`] trait - the only surface through
//! which state containers touch durable storage - together with the two
//! well-known keys and the provided implementations:
//!
//! - [`MemoryStore`]: in-memory, for tests and ephemeral sessions
//! - [`FileStore`]: one file per key under a root directory, atomic
//!   replace-on-write
//!
//! # Design
//!
//! The trait is deliberately minimal: `get`, `set`, `delete`, all async,
//! values are opaque bytes. Serialization belongs to the state containers,
//! not the store. An absent key is `Ok(None)`, never an error; deleting an
//! absent key succeeds.

use std::future::Future;
use std::pin::Pin;

pub mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Well-known durable keys.
///
/// Each state container owns exactly one key; no two containers share one.
pub mod keys {
    /// Serialized logged-in user record. Absent when logged out.
    pub const USER: &str = "@user";

    /// Serialized ordered todo collection. Absent when no todo has ever
    /// been added.
    pub const TODOS: &str = "@todos";
}

/// Asynchronous durable key-value store.
///
/// This trait uses explicit `Pin<Box<dyn Future>>` returns instead of
/// `async fn` so that it stays object-safe - state container environments
/// hold it as `Arc<dyn KeyValueStore>`.
///
/// # Contract
///
/// - `get` of an absent key returns `Ok(None)`
/// - `set` replaces any previous value wholesale
/// - `delete` of an absent key returns `Ok(())`
///
/// # Example
///
/// ```
/// use pocketlist_storage::{KeyValueStore, MemoryStore, keys};
///
/// # async fn example() -> Result<(), pocketlist_storage::StorageError> {
/// let store = MemoryStore::new();
/// store.set(keys::USER, b"{\"username\":\"ana\"}".to_vec()).await?;
/// assert!(store.get(keys::USER).await?.is_some());
/// store.delete(keys::USER).await?;
/// assert!(store.get(keys::USER).await?.is_none());
/// # Ok(())
/// # }
/// ```
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    ///
    /// `Ok(Some(bytes))` if the key is present, `Ok(None)` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing medium fails. Absence is not
    /// an error.
    fn get<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Vec<u8>>, StorageError>> + Send + 'a>>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing medium fails.
    fn set<'a>(
        &'a self,
        key: &'a str,
        value: Vec<u8>,
    ) -> Pin<Box<dyn Future<Output = Result<(), StorageError>> + Send + 'a>>;

    /// Remove the value stored under `key`.
    ///
    /// Removing an absent key is a successful no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing medium fails.
    fn delete<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), StorageError>> + Send + 'a>>;
}
