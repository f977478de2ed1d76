//! CRUD over the notes collection inside the persisted document.
//!
//! Every operation is a read-modify-write of the whole document. Two
//! operations issued without awaiting completion can interleave, and
//! the later write wins. Callers that need in-order semantics for the
//! same note must serialize their calls.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::entity::{Note, NoteColor};
use crate::error::{NoteboardError, Result};
use crate::storage::{BlobStore, ContentStore, FileStore};

/// Update payload for a note. `None` fields are left untouched.
#[derive(Debug, Default, Clone)]
pub struct NoteUpdate {
    pub content: Option<String>,
    pub color: Option<NoteColor>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

pub struct NoteRepository<'a, S: BlobStore = FileStore> {
    store: &'a ContentStore<S>,
}

impl<'a, S: BlobStore> NoteRepository<'a, S> {
    pub fn new(store: &'a ContentStore<S>) -> Self {
        Self { store }
    }

    /// All notes, in insertion order.
    pub fn list_all(&self) -> Result<Vec<Note>> {
        Ok(self.store.load()?.notes)
    }

    /// Get a note by id.
    pub fn get(&self, id: &Uuid) -> Result<Option<Note>> {
        let doc = self.store.load()?;
        Ok(doc.notes.into_iter().find(|n| n.id == *id))
    }

    /// Create a note with a fresh id and both timestamps set to now.
    pub fn create(&self, content: String, color: NoteColor, x: f64, y: f64) -> Result<Note> {
        let mut doc = self.store.load()?;
        let note = Note::new(content, color, x, y);
        doc.notes.push(note.clone());
        self.store.save(&doc)?;
        debug!(id = %note.id, "created note");
        Ok(note)
    }

    /// Merge the given fields into an existing note and refresh its
    /// `updated_at`. An absent id is an error.
    pub fn update(&self, id: &Uuid, updates: NoteUpdate) -> Result<Note> {
        let mut doc = self.store.load()?;

        let note = doc
            .notes
            .iter_mut()
            .find(|n| n.id == *id)
            .ok_or_else(|| NoteboardError::NoteNotFound(id.to_string()))?;

        if let Some(content) = updates.content {
            note.content = content;
        }
        if let Some(color) = updates.color {
            note.color = color;
        }
        if let Some(x) = updates.x {
            note.x = x;
        }
        if let Some(y) = updates.y {
            note.y = y;
        }
        note.updated_at = Utc::now();

        let updated = note.clone();
        self.store.save(&doc)?;
        debug!(id = %updated.id, "updated note");
        Ok(updated)
    }

    /// Remove a note if present. Deleting an absent id is a no-op.
    pub fn delete(&self, id: &Uuid) -> Result<()> {
        let mut doc = self.store.load()?;
        doc.notes.retain(|n| n.id != *id);
        self.store.save(&doc)?;
        debug!(id = %id, "deleted note");
        Ok(())
    }
}
