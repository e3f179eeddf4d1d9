//! In-memory key-value store for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::storage::ports::{KeyValueResult, KeyValueStore, KeyValueStoreError};

/// Thread-safe in-memory key-value store.
///
/// Clones share the same underlying map, so a test can keep a handle to
/// inspect what a store wrote.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    state: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given entries.
    #[must_use]
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            state: Arc::new(RwLock::new(map)),
        }
    }

    /// Returns the stored keys in sorted order.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::Poisoned`] when the lock is poisoned.
    pub fn keys(&self) -> KeyValueResult<Vec<String>> {
        let state = self
            .state
            .read()
            .map_err(|err| KeyValueStoreError::Poisoned(err.to_string()))?;
        let mut keys: Vec<String> = state.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn load(&self, key: &str) -> KeyValueResult<Option<String>> {
        let state = self
            .state
            .read()
            .map_err(|err| KeyValueStoreError::Poisoned(err.to_string()))?;
        Ok(state.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> KeyValueResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| KeyValueStoreError::Poisoned(err.to_string()))?;
        state.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
