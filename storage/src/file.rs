//! File-backed key-value store.

use crate::{KeyValueStore, StorageError};
use std::fmt::Write as _;
use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::pin::Pin;

/// File-backed [`KeyValueStore`] holding one file per key under a root
/// directory.
///
/// Writes land in a sibling temp file first and are moved into place with a
/// rename, so a reader never observes a half-written value. The store
/// assumes a single local writer (there is no cross-process locking).
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    /// Root directory of this store.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(encode_key(key))
    }
}

/// Encode a key into a filename.
///
/// Bytes outside `[A-Za-z0-9._-]` are percent-encoded so keys like `"@user"`
/// map to stable, portable filenames.
fn encode_key(key: &str) -> String {
    let mut encoded = String::with_capacity(key.len());
    for byte in key.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'.' | b'_' | b'-' => {
                encoded.push(char::from(byte));
            }
            _ => {
                // Infallible for String
                let _ = write!(encoded, "%{byte:02X}");
            }
        }
    }
    encoded
}

impl KeyValueStore for FileStore {
    fn get<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Vec<u8>>, StorageError>> + Send + 'a>> {
        Box::pin(async move {
            match tokio::fs::read(self.path_for(key)).await {
                Ok(bytes) => Ok(Some(bytes)),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(StorageError::Io(e)),
            }
        })
    }

    fn set<'a>(
        &'a self,
        key: &'a str,
        value: Vec<u8>,
    ) -> Pin<Box<dyn Future<Output = Result<(), StorageError>> + Send + 'a>> {
        Box::pin(async move {
            let target = self.path_for(key);
            let tmp = self.root.join(format!("{}.tmp", encode_key(key)));

            tokio::fs::write(&tmp, &value).await?;
            tokio::fs::rename(&tmp, &target).await?;
            tracing::trace!(key, bytes = value.len(), "persisted value");
            Ok(())
        })
    }

    fn delete<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), StorageError>> + Send + 'a>> {
        Box::pin(async move {
            match tokio::fs::remove_file(self.path_for(key)).await {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(StorageError::Io(e)),
            }
        })
    }
}
