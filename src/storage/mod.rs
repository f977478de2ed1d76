mod json_store;

pub use json_store::{ContentStore, FileStore, DOCUMENT_KEY};

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::Result;

/// Key-addressed blob storage. The whole application document lives
/// under a single key; callers get whole-value read/replace semantics
/// and nothing finer.
pub trait BlobStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory blob store, mostly useful in tests and for embedders
/// that manage persistence themselves.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| crate::error::NoteboardError::Storage(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| crate::error::NoteboardError::Storage(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
