//! Key-value port for durable local storage.

use std::sync::Arc;
use thiserror::Error;

/// Result type for key-value store operations.
pub type KeyValueResult<T> = Result<T, KeyValueStoreError>;

/// Durable store addressable by string keys.
///
/// Values are opaque text; the lifecycle store writes JSON.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when nothing has been stored under the key yet.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError`] when the key is invalid or the
    /// underlying storage cannot be read.
    fn load(&self, key: &str) -> KeyValueResult<Option<String>>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError`] when the key is invalid or the
    /// underlying storage rejects the write.
    fn save(&self, key: &str, value: &str) -> KeyValueResult<()>;
}

/// Errors returned by key-value store implementations.
#[derive(Debug, Clone, Error)]
pub enum KeyValueStoreError {
    /// The key cannot be used by this store.
    #[error("invalid storage key '{key}': {reason}")]
    InvalidKey {
        /// Rejected key.
        key: String,
        /// Why the key was rejected.
        reason: &'static str,
    },

    /// Reading or writing the underlying storage failed.
    #[error("storage I/O failed for key '{key}': {source}")]
    Io {
        /// Key being accessed.
        key: String,
        /// Underlying I/O error.
        #[source]
        source: Arc<std::io::Error>,
    },

    /// A lock guarding the store was poisoned.
    #[error("storage lock poisoned: {0}")]
    Poisoned(String),
}

impl KeyValueStoreError {
    /// Wraps an I/O error for the given key.
    #[must_use]
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            key: key.into(),
            source: Arc::new(source),
        }
    }
}
