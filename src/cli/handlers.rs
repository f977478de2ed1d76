use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::editor::find_matches;
use crate::entity::{Note, NoteColor};
use crate::error::{NoteboardError, Result};
use crate::notes::NoteUpdate;
use crate::session::Session;

// New notes without an explicit position land on a diagonal cascade
// so they do not stack on top of each other.
const CASCADE_ORIGIN: f64 = 40.0;
const CASCADE_STEP: f64 = 24.0;

/// Find the board root by looking for .noteboard/ or .git/
fn find_board_root() -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut current = cwd.as_path();
    loop {
        if current.join(".noteboard").exists() || current.join(".git").exists() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return cwd,
        }
    }
}

fn open_session() -> Result<Session> {
    Session::open(&find_board_root())
}

/// Resolve a note by full UUID or prefix.
fn resolve_note(notes: &[Note], id: &str) -> Result<Note> {
    notes
        .iter()
        .find(|n| n.id.to_string().starts_with(id))
        .cloned()
        .ok_or_else(|| NoteboardError::NoteNotFound(id.to_string()))
}

fn short_id(note: &Note) -> String {
    note.id.to_string()[..7].to_string()
}

pub fn handle_add(
    content: String,
    color: String,
    x: Option<f64>,
    y: Option<f64>,
    json: bool,
) -> Result<()> {
    let session = open_session()?;
    let repo = session.notes();

    let color: NoteColor = color.parse().unwrap_or_default();
    let count = repo.list_all()?.len();
    let fallback = CASCADE_ORIGIN + CASCADE_STEP * count as f64;
    let note = repo.create(
        content,
        color,
        x.unwrap_or(fallback),
        y.unwrap_or(fallback),
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!(
            "Created note ({}) [{}] at ({:.0}, {:.0})",
            short_id(&note),
            note.color,
            note.x,
            note.y
        );
    }

    Ok(())
}

pub fn handle_list(json: bool) -> Result<()> {
    let session = open_session()?;
    let notes = session.notes().list_all()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&notes)?);
    } else if notes.is_empty() {
        println!("No notes on the board.");
    } else {
        println!("Notes:\n");
        for n in notes {
            let preview = first_line(&n.content);
            println!(
                "  ({}) [{}] ({:.0}, {:.0}) {}",
                short_id(&n),
                n.color,
                n.x,
                n.y,
                preview
            );
        }
    }

    Ok(())
}

pub fn handle_get(id: String, json: bool) -> Result<()> {
    let session = open_session()?;
    let notes = session.notes().list_all()?;
    let note = resolve_note(&notes, &id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("Note ({})", note.id);
        println!("Color: {}", note.color);
        println!("Position: ({:.0}, {:.0})", note.x, note.y);
        println!("Created: {}", note.created_at.format("%Y-%m-%d %H:%M"));
        println!("Updated: {}", note.updated_at.format("%Y-%m-%d %H:%M"));
        if !note.content.is_empty() {
            println!("\n{}", note.content);
        }
    }

    Ok(())
}

pub fn handle_update(
    id: String,
    content: Option<String>,
    color: Option<String>,
    x: Option<f64>,
    y: Option<f64>,
    json: bool,
) -> Result<()> {
    let session = open_session()?;
    let repo = session.notes();

    let notes = repo.list_all()?;
    let note = resolve_note(&notes, &id)?;

    let updates = NoteUpdate {
        content,
        color: color.and_then(|c| c.parse::<NoteColor>().ok()),
        x,
        y,
    };

    let updated = repo.update(&note.id, updates)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&updated)?);
    } else {
        println!(
            "Updated note ({}) [{}] at ({:.0}, {:.0})",
            short_id(&updated),
            updated.color,
            updated.x,
            updated.y
        );
    }

    Ok(())
}

pub fn handle_delete(id: String, force: bool) -> Result<()> {
    let session = open_session()?;
    let repo = session.notes();

    let notes = repo.list_all()?;
    let note = resolve_note(&notes, &id)?;

    if !force {
        eprintln!(
            "Delete note ({}) - {}? [y/N] ",
            short_id(&note),
            first_line(&note.content)
        );

        if atty::is(atty::Stream::Stdin) {
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Cancelled.");
                return Ok(());
            }
        } else {
            return Err(NoteboardError::Storage(
                "Use --force to delete in non-interactive mode".to_string(),
            ));
        }
    }

    repo.delete(&note.id)?;

    println!("Deleted note ({})", short_id(&note));

    Ok(())
}

pub fn handle_editor_show() -> Result<()> {
    let session = open_session()?;
    println!("{}", session.editor().content());
    Ok(())
}

pub fn handle_editor_set() -> Result<()> {
    let mut session = open_session()?;

    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;

    session.editor_mut().apply_edit(content);
    session.persist_editor()?;

    println!(
        "Editor buffer set ({} characters)",
        session.editor().content().len()
    );

    Ok(())
}

pub fn handle_editor_open(path: &Path) -> Result<()> {
    let mut session = open_session()?;

    let contents = fs::read_to_string(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    session.editor_mut().open(name.clone(), contents);
    session.persist_editor()?;

    println!("Opened {}", name);

    Ok(())
}

pub fn handle_editor_export(path: &Path) -> Result<()> {
    let mut session = open_session()?;

    fs::write(path, session.editor().content())?;
    session.editor_mut().mark_saved();

    println!("Saved {}", path.display());

    Ok(())
}

pub fn handle_editor_search(pattern: String, json: bool) -> Result<()> {
    let session = open_session()?;
    let matches = find_matches(&pattern, session.editor().content());

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else if matches.is_empty() {
        println!("0 of 0");
    } else {
        println!("1 of {}", matches.len());
        let offsets: Vec<String> = matches.iter().map(|m| m.to_string()).collect();
        println!("Offsets: {}", offsets.join(", "));
    }

    Ok(())
}

fn first_line(content: &str) -> &str {
    content.lines().next().unwrap_or("(empty)")
}
