// src/entity/note.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    #[default]
    Yellow,
    Pink,
    Blue,
    Green,
    Purple,
}

impl std::fmt::Display for NoteColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoteColor::Yellow => write!(f, "yellow"),
            NoteColor::Pink => write!(f, "pink"),
            NoteColor::Blue => write!(f, "blue"),
            NoteColor::Green => write!(f, "green"),
            NoteColor::Purple => write!(f, "purple"),
        }
    }
}

impl std::str::FromStr for NoteColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yellow" => Ok(NoteColor::Yellow),
            "pink" => Ok(NoteColor::Pink),
            "blue" => Ok(NoteColor::Blue),
            "green" => Ok(NoteColor::Green),
            "purple" => Ok(NoteColor::Purple),
            _ => Err(format!("Invalid color: {}", s)),
        }
    }
}

/// A sticky note on the board. Position is free-floating, so the
/// collection order carries no meaning beyond insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub content: String,
    pub color: NoteColor,
    pub x: f64,
    pub y: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(content: String, color: NoteColor, x: f64, y: f64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            content,
            color,
            x,
            y,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_note_has_matching_timestamps() {
        let note = Note::new("hello".to_string(), NoteColor::Blue, 10.0, 20.0);
        assert_eq!(note.created_at, note.updated_at);
        assert_eq!(note.color, NoteColor::Blue);
    }

    #[test]
    fn test_color_round_trips_through_str() {
        for color in [
            NoteColor::Yellow,
            NoteColor::Pink,
            NoteColor::Blue,
            NoteColor::Green,
            NoteColor::Purple,
        ] {
            let parsed: NoteColor = color.to_string().parse().unwrap();
            assert_eq!(parsed, color);
        }
        assert!("magenta".parse::<NoteColor>().is_err());
    }
}
