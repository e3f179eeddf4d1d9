//! Directory-backed key-value store.
//!
//! Each key is stored as `<key>.json` inside a single directory opened with
//! capability-based filesystem access, so a store can never touch files
//! outside the directory it was given.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;
use tracing::warn;

use crate::storage::ports::{KeyValueResult, KeyValueStore, KeyValueStoreError};

/// Key-value store keeping one JSON file per key in a directory.
#[derive(Debug)]
pub struct DirectoryKeyValueStore {
    dir: Dir,
}

impl DirectoryKeyValueStore {
    /// Opens the store rooted at `path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::Io`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Utf8Path) -> KeyValueResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())
            .map_err(|err| KeyValueStoreError::io(path.as_str(), err))?;
        let dir = Dir::open_ambient_dir(path, ambient_authority())
            .map_err(|err| KeyValueStoreError::io(path.as_str(), err))?;
        Ok(Self { dir })
    }
}

impl KeyValueStore for DirectoryKeyValueStore {
    fn load(&self, key: &str) -> KeyValueResult<Option<String>> {
        let file_name = file_name_for(key)?;
        match self.dir.read_to_string(&file_name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(KeyValueStoreError::io(key, err)),
        }
    }

    fn save(&self, key: &str, value: &str) -> KeyValueResult<()> {
        let file_name = file_name_for(key)?;
        let tmp_name = format!("{file_name}.tmp");
        self.dir
            .write(&tmp_name, value)
            .map_err(|err| KeyValueStoreError::io(key, err))?;
        self.dir
            .rename(&tmp_name, &self.dir, &file_name)
            .map_err(|err| {
                if let Err(cleanup) = self.dir.remove_file(&tmp_name) {
                    warn!(file = %tmp_name, error = %cleanup, "failed to remove temporary file");
                }
                KeyValueStoreError::io(key, err)
            })
    }
}

fn file_name_for(key: &str) -> KeyValueResult<String> {
    let invalid = |reason: &'static str| KeyValueStoreError::InvalidKey {
        key: key.to_owned(),
        reason,
    };
    if key.trim().is_empty() {
        return Err(invalid("key is required"));
    }
    if key.contains(['/', '\\']) {
        return Err(invalid("must not contain path separators"));
    }
    if key.contains("..") {
        return Err(invalid("must not contain '..'"));
    }
    Ok(format!("{key}.json"))
}
