use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::entity::Document;
use crate::error::Result;
use crate::storage::BlobStore;

const NOTEBOARD_DIR: &str = ".noteboard";

/// The single namespace key under which the whole document is stored.
pub const DOCUMENT_KEY: &str = "document";

/// File-backed blob store. Each key maps to `<root>/.noteboard/<key>.json`.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open the store under `root`, creating `.noteboard/` if absent.
    pub fn open(root: &Path) -> Result<Self> {
        let dir = root.join(NOTEBOARD_DIR);
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl BlobStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}

/// Whole-document persistence layered on a [`BlobStore`].
///
/// Reads and writes are whole-document: no field-level merge happens
/// here, callers mutate the loaded document and write it back. Failures
/// surface to the caller and are never retried.
pub struct ContentStore<S = FileStore> {
    store: S,
}

impl ContentStore<FileStore> {
    /// Open a file-backed store under `root`.
    pub fn open(root: &Path) -> Result<Self> {
        Ok(Self::new(FileStore::open(root)?))
    }
}

impl<S: BlobStore> ContentStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the document, writing an empty one on first use.
    pub fn load(&self) -> Result<Document> {
        match self.store.get(DOCUMENT_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => {
                debug!("no document found, initializing empty");
                let doc = Document::default();
                self.save(&doc)?;
                Ok(doc)
            }
        }
    }

    /// Replace the persisted document.
    pub fn save(&self, doc: &Document) -> Result<()> {
        let raw = serde_json::to_string_pretty(doc)?;
        self.store.set(DOCUMENT_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Note, NoteColor};
    use crate::error::NoteboardError;
    use crate::storage::MemoryStore;
    use tempfile::TempDir;

    /// Blob store whose writes always fail, for the error path.
    struct BrokenStore;

    impl BlobStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(NoteboardError::Storage("backend unavailable".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(NoteboardError::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_open_creates_noteboard_directory() {
        let tmp = TempDir::new().unwrap();
        let store = ContentStore::open(tmp.path()).unwrap();
        store.load().unwrap();

        assert!(tmp.path().join(".noteboard").exists());
        assert!(tmp.path().join(".noteboard/document.json").exists());
    }

    #[test]
    fn test_first_load_returns_empty_document() {
        let store = ContentStore::new(MemoryStore::new());
        let doc = store.load().unwrap();

        assert!(doc.notes.is_empty());
        assert_eq!(doc.editor_content, "");
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let tmp = TempDir::new().unwrap();
        let store = ContentStore::open(tmp.path()).unwrap();

        let mut doc = store.load().unwrap();
        doc.notes
            .push(Note::new("groceries".to_string(), NoteColor::Pink, 1.0, 2.0));
        doc.editor_content = "draft".to_string();
        store.save(&doc).unwrap();

        // Reopen and verify
        let store2 = ContentStore::open(tmp.path()).unwrap();
        let doc2 = store2.load().unwrap();

        assert_eq!(doc2.notes.len(), 1);
        assert_eq!(doc2.notes[0].content, "groceries");
        assert_eq!(doc2.notes[0].color, NoteColor::Pink);
        assert_eq!(doc2.editor_content, "draft");
    }

    #[test]
    fn test_storage_failure_surfaces_to_caller() {
        let store = ContentStore::new(BrokenStore);

        assert!(matches!(store.load(), Err(NoteboardError::Storage(_))));
        assert!(matches!(
            store.save(&Document::default()),
            Err(NoteboardError::Storage(_))
        ));
    }

    #[test]
    fn test_missing_fields_default_on_load() {
        let store = ContentStore::new(MemoryStore::new());
        store.store.set(DOCUMENT_KEY, "{}").unwrap();

        let doc = store.load().unwrap();
        assert!(doc.notes.is_empty());
        assert_eq!(doc.editor_content, "");
    }
}
