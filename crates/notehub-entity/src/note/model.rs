//! Note entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use notehub_core::types::{NoteId, UserId};

/// Note type stored when the caller does not supply one.
pub const DEFAULT_NOTE_TYPE: &str = "manual";

/// Longest title the `notes.title` column holds, in characters.
pub const MAX_TITLE_LENGTH: usize = 500;

/// Longest type tag the `notes.note_type` column holds, in characters.
pub const MAX_NOTE_TYPE_LENGTH: usize = 50;

/// A note owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Note {
    /// Store-assigned identifier.
    pub id: NoteId,
    /// Owning user.
    pub user_id: UserId,
    /// Title, never empty.
    pub title: String,
    /// Body text.
    pub content: Option<String>,
    /// Short summary.
    pub summary: Option<String>,
    /// Free-form type tag.
    pub note_type: String,
    /// Opaque reference to an audio recording.
    pub audio_url: Option<String>,
    /// When the note was created.
    pub created_at: DateTime<Utc>,
    /// When the note was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Fields for a note insert. The owner is passed separately.
#[derive(Debug, Clone, Default)]
pub struct NewNote {
    /// Title.
    pub title: String,
    /// Body text.
    pub content: Option<String>,
    /// Short summary.
    pub summary: Option<String>,
    /// Type tag; [`DEFAULT_NOTE_TYPE`] when `None`.
    pub note_type: Option<String>,
    /// Audio reference.
    pub audio_url: Option<String>,
}

impl NewNote {
    /// The type tag that will be stored.
    pub fn effective_note_type(&self) -> &str {
        self.note_type.as_deref().unwrap_or(DEFAULT_NOTE_TYPE)
    }
}

/// Partial update of a note.
///
/// Each field is independently present or absent; absent fields keep the
/// stored value. Nullable columns use a nested option so a caller can
/// clear them: `Some(None)` stores NULL, `Some(Some(v))` stores `v`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    /// New title.
    pub title: Option<String>,
    /// New body text, or clear it.
    pub content: Option<Option<String>>,
    /// New summary, or clear it.
    pub summary: Option<Option<String>>,
    /// New type tag.
    pub note_type: Option<String>,
    /// New audio reference, or clear it.
    pub audio_url: Option<Option<String>>,
}

impl NotePatch {
    /// Apply the patch to a note in place, refreshing `updated_at`.
    pub fn apply_to(&self, note: &mut Note, now: DateTime<Utc>) {
        if let Some(title) = &self.title {
            note.title = title.clone();
        }
        if let Some(content) = &self.content {
            note.content = content.clone();
        }
        if let Some(summary) = &self.summary {
            note.summary = summary.clone();
        }
        if let Some(note_type) = &self.note_type {
            note.note_type = note_type.clone();
        }
        if let Some(audio_url) = &self.audio_url {
            note.audio_url = audio_url.clone();
        }
        note.updated_at = now;
    }
}
