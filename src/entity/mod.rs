mod note;

pub use note::{Note, NoteColor};

use serde::{Deserialize, Serialize};

/// The single persisted aggregate: every note on the board plus the
/// text editor buffer. Exactly one document exists per installation
/// and it is always read and written whole.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub editor_content: String,
}
