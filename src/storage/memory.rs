//! In-memory blob store

use std::collections::HashMap;

use super::BlobStore;
use crate::error::TrackerResult;

/// Blob store backed by a map; contents vanish with the value
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a blob without counting it as a write
    pub fn with_blob(mut self, key: &str, value: &str) -> Self {
        self.blobs.insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.blobs.get(key).map(String::as_str)
    }

    /// Number of `save` calls performed so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl BlobStore for MemoryStore {
    fn load(&self, key: &str) -> TrackerResult<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> TrackerResult<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
