//! The plain-text editor core: buffer, undo/redo history, search, and
//! the unsaved-changes flag. Rendering and key handling live in the
//! front end; this module only manages state.

mod history;
mod search;

pub use history::{EditHistory, DEFAULT_COALESCE_THRESHOLD};
pub use search::{find_matches, SearchIndex};

pub const DEFAULT_FILE_NAME: &str = "untitled.txt";

/// In-memory state of the text editor for one session.
#[derive(Debug, Clone)]
pub struct EditorSession {
    content: String,
    file_name: String,
    unsaved: bool,
    history: EditHistory,
    search: SearchIndex,
    coalesce_threshold: usize,
}

impl EditorSession {
    /// Start a session over existing content (typically the persisted
    /// editor text). The content becomes the first history snapshot.
    pub fn new(content: String) -> Self {
        let mut history = EditHistory::new();
        history.record(content.clone());
        Self {
            content,
            file_name: DEFAULT_FILE_NAME.to_string(),
            unsaved: false,
            history,
            search: SearchIndex::new(),
            coalesce_threshold: DEFAULT_COALESCE_THRESHOLD,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// Replace the buffer with the result of a user edit. Marks the
    /// session unsaved and feeds the coalescing snapshot recorder.
    pub fn apply_edit(&mut self, text: impl Into<String>) {
        self.content = text.into();
        self.unsaved = true;
        self.history
            .maybe_record(&self.content, self.coalesce_threshold);
    }

    /// Like [`apply_edit`](Self::apply_edit) but always snapshots,
    /// for edits that are significant regardless of size (paste, cut).
    pub fn apply_edit_recorded(&mut self, text: impl Into<String>) {
        self.content = text.into();
        self.unsaved = true;
        self.history.record(self.content.clone());
    }

    /// Step the buffer back one snapshot. Returns whether anything
    /// changed.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.content = snapshot.to_string();
                true
            }
            None => false,
        }
    }

    /// Step the buffer forward one snapshot. Returns whether anything
    /// changed.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.content = snapshot.to_string();
                true
            }
            None => false,
        }
    }

    /// Load a file into the buffer: replaces content, takes over the
    /// file name, and clears the unsaved flag.
    pub fn open(&mut self, name: impl Into<String>, contents: impl Into<String>) {
        self.content = contents.into();
        self.file_name = name.into();
        self.unsaved = false;
        self.history.record(self.content.clone());
    }

    /// Start a fresh empty file.
    pub fn new_file(&mut self) {
        self.content.clear();
        self.file_name = DEFAULT_FILE_NAME.to_string();
        self.unsaved = false;
        self.history.reset("");
    }

    /// Saving exports the buffer as-is; it never mutates content, it
    /// only clears the unsaved flag.
    pub fn mark_saved(&mut self) {
        self.unsaved = false;
    }

    /// Rebuild the search match set for `pattern` over the current
    /// buffer.
    pub fn search(&mut self, pattern: &str) -> &[usize] {
        self.search.set_query(pattern, &self.content)
    }

    pub fn search_state(&self) -> &SearchIndex {
        &self.search
    }

    pub fn search_next(&mut self) -> Option<usize> {
        self.search.next()
    }

    pub fn search_previous(&mut self) -> Option<usize> {
        self.search.previous()
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(String::new())
    }
}
