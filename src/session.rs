//! Top-level application context.
//!
//! A [`Session`] is created at startup, owns the content store, and is
//! dropped at shutdown. All note and editor operations run through it;
//! there is no global state.

use std::path::Path;

use crate::editor::EditorSession;
use crate::error::Result;
use crate::notes::NoteRepository;
use crate::storage::{BlobStore, ContentStore, FileStore};

pub struct Session<S: BlobStore = FileStore> {
    store: ContentStore<S>,
    editor: EditorSession,
}

impl Session<FileStore> {
    /// Open a file-backed session rooted at `root`.
    pub fn open(root: &Path) -> Result<Self> {
        Self::with_store(ContentStore::open(root)?)
    }
}

impl<S: BlobStore> Session<S> {
    /// Build a session over any store, hydrating the editor from the
    /// persisted document.
    pub fn with_store(store: ContentStore<S>) -> Result<Self> {
        let doc = store.load()?;
        let editor = EditorSession::new(doc.editor_content);
        Ok(Self { store, editor })
    }

    pub fn store(&self) -> &ContentStore<S> {
        &self.store
    }

    pub fn notes(&self) -> NoteRepository<'_, S> {
        NoteRepository::new(&self.store)
    }

    pub fn editor(&self) -> &EditorSession {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorSession {
        &mut self.editor
    }

    /// Persist the current editor buffer into the document and clear
    /// the unsaved flag. This is the autosave target; front ends
    /// should debounce calls rather than invoking it per keystroke.
    pub fn persist_editor(&mut self) -> Result<()> {
        let mut doc = self.store.load()?;
        doc.editor_content = self.editor.content().to_string();
        self.store.save(&doc)?;
        self.editor.mark_saved();
        Ok(())
    }
}
