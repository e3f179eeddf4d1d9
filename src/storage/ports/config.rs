//! Storage key layout and its configuration.

use std::fmt;

/// The four values the lifecycle store persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// Active task collection.
    Tasks,
    /// Archived task collection.
    Archive,
    /// Trashed task collection.
    Trash,
    /// Settings record.
    Settings,
}

impl StorageKey {
    /// Every key the store reads on open.
    pub const ALL: [Self; 4] = [Self::Tasks, Self::Archive, Self::Trash, Self::Settings];

    /// Returns the unqualified key name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::Archive => "archive",
            Self::Trash => "trash",
            Self::Settings => "settings",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Configuration for where the lifecycle store keeps its values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Prefix joined to every key with a hyphen; empty for bare keys.
    pub namespace: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            namespace: "stl".to_owned(),
        }
    }
}

impl StorageConfig {
    /// Creates a configuration using the given namespace.
    #[must_use]
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Returns the fully qualified key for a stored value.
    #[must_use]
    pub fn key(&self, key: StorageKey) -> String {
        let namespace = self.namespace.trim();
        if namespace.is_empty() {
            key.as_str().to_owned()
        } else {
            format!("{namespace}-{key}")
        }
    }
}
