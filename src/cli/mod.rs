mod commands;
mod handlers;

pub use commands::{Cli, Commands, EditorAction, EditorCommand};
pub use handlers::{
    handle_add, handle_delete, handle_editor_export, handle_editor_open, handle_editor_search,
    handle_editor_set, handle_editor_show, handle_get, handle_list, handle_update,
};
