//! Port contracts for key-value persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the lifecycle
//! store.

pub mod config;
pub mod key_value;

pub use config::{StorageConfig, StorageKey};
pub use key_value::{KeyValueResult, KeyValueStore, KeyValueStoreError};

#[cfg(test)]
pub use key_value::MockKeyValueStore;
