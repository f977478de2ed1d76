use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "noteboard")]
#[command(version, about = "A local-first sticky note board and text editor")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a sticky note to the board
    Add {
        /// Note text
        content: String,

        /// Note color (yellow, pink, blue, green, purple)
        #[arg(long, short = 'c', default_value = "yellow")]
        color: String,

        /// Horizontal board position (defaults to a cascade offset)
        #[arg(long)]
        x: Option<f64>,

        /// Vertical board position (defaults to a cascade offset)
        #[arg(long)]
        y: Option<f64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List notes on the board
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get a single note by ID prefix
    Get {
        /// Note ID or unambiguous prefix
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update a note's content, color, or position
    Update {
        /// Note ID or unambiguous prefix
        id: String,

        /// New note text
        #[arg(long)]
        content: Option<String>,

        /// New color (yellow, pink, blue, green, purple)
        #[arg(long, short = 'c')]
        color: Option<String>,

        /// New horizontal position
        #[arg(long)]
        x: Option<f64>,

        /// New vertical position
        #[arg(long)]
        y: Option<f64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note
    Delete {
        /// Note ID or unambiguous prefix
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Work with the text editor buffer
    Editor(EditorCommand),
}

#[derive(Args, Debug)]
pub struct EditorCommand {
    #[command(subcommand)]
    pub action: EditorAction,
}

#[derive(Subcommand, Debug)]
pub enum EditorAction {
    /// Print the editor buffer
    Show,

    /// Replace the editor buffer with text from stdin
    Set,

    /// Load a text file into the editor buffer
    Open {
        /// File to read
        path: PathBuf,
    },

    /// Write the editor buffer out to a file
    Export {
        /// File to write
        path: PathBuf,
    },

    /// Search the editor buffer for a pattern (case-insensitive)
    Search {
        /// Substring to look for
        pattern: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
