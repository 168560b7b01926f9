//! Directory-backed blob store
//!
//! Each key maps to one file of the same name inside the store directory.

use std::path::PathBuf;

use tracing::debug;

use super::file_io::{read_blob, write_blob_atomic};
use super::BlobStore;
use crate::error::{TrackerError, TrackerResult};

/// Blob store that keeps one file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> TrackerResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
        if !valid {
            return Err(TrackerError::Storage(format!("Invalid store key '{}'", key)));
        }
        Ok(self.dir.join(key))
    }
}

impl BlobStore for FileStore {
    fn load(&self, key: &str) -> TrackerResult<Option<String>> {
        let path = self.path_for(key)?;
        debug!(key, path = %path.display(), "loading blob");
        read_blob(path)
    }

    fn save(&mut self, key: &str, value: &str) -> TrackerResult<()> {
        let path = self.path_for(key)?;
        debug!(key, path = %path.display(), bytes = value.len(), "saving blob");
        write_blob_atomic(path, value)
    }
}
