pub mod cli;
pub mod editor;
pub mod entity;
pub mod error;
pub mod notes;
pub mod scheduler;
pub mod session;
pub mod storage;

pub use error::{NoteboardError, Result};
pub use session::Session;
