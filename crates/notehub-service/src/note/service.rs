//! Note operations on behalf of an authenticated user.

use std::sync::Arc;

use tracing::{debug, info};

use notehub_auth::authenticator::Identity;
use notehub_core::error::AppError;
use notehub_core::types::{NoteId, PageRequest};
use notehub_database::store::NoteStore;
use notehub_entity::note::{
    DEFAULT_NOTE_TYPE, MAX_NOTE_TYPE_LENGTH, MAX_TITLE_LENGTH, NewNote, Note, NotePatch,
};

/// One window of the caller's notes.
#[derive(Debug, Clone)]
pub struct NotePage {
    /// Notes in the window, newest first.
    pub notes: Vec<Note>,
    /// The window that was requested.
    pub page: PageRequest,
    /// Total notes the caller owns.
    pub total: u64,
}

/// Handles note CRUD scoped to the caller.
#[derive(Debug, Clone)]
pub struct NoteService {
    /// Note store.
    notes: Arc<dyn NoteStore>,
}

impl NoteService {
    /// Creates a new note service.
    pub fn new(notes: Arc<dyn NoteStore>) -> Self {
        Self { notes }
    }

    /// Lists the caller's notes.
    pub async fn list(&self, identity: &Identity, page: PageRequest) -> Result<NotePage, AppError> {
        let notes = self.notes.list_notes(identity.user_id, page).await?;
        let total = self.notes.count_notes(identity.user_id).await?;
        Ok(NotePage { notes, page, total })
    }

    /// Creates a note owned by the caller.
    pub async fn create(&self, identity: &Identity, data: NewNote) -> Result<Note, AppError> {
        let has_content = data.content.as_deref().is_some_and(|c| !c.is_empty());
        if data.title.trim().is_empty() || !has_content {
            return Err(AppError::validation("Title and content are required"));
        }

        let data = NewNote {
            summary: data.summary.filter(|s| !s.is_empty()),
            note_type: data.note_type.filter(|t| !t.is_empty()),
            audio_url: data.audio_url.filter(|a| !a.is_empty()),
            ..data
        };
        check_title_length(&data.title)?;
        check_note_type_length(data.effective_note_type())?;

        let note = self.notes.create_note(identity.user_id, &data).await?;
        info!(user_id = %identity.user_id, note_id = %note.id, "Note created");
        Ok(note)
    }

    /// Fetches one of the caller's notes.
    pub async fn get(&self, identity: &Identity, id: NoteId) -> Result<Note, AppError> {
        self.notes
            .get_note(id, identity.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Note not found"))
    }

    /// Applies a partial update to one of the caller's notes.
    pub async fn update(
        &self,
        identity: &Identity,
        id: NoteId,
        patch: NotePatch,
    ) -> Result<Note, AppError> {
        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(AppError::validation("Title cannot be empty"));
            }
            check_title_length(title)?;
        }

        // Empty strings mean "unset", as on create.
        let patch = NotePatch {
            note_type: patch.note_type.map(|t| {
                if t.is_empty() {
                    DEFAULT_NOTE_TYPE.to_string()
                } else {
                    t
                }
            }),
            summary: patch.summary.map(|s| s.filter(|s| !s.is_empty())),
            audio_url: patch.audio_url.map(|a| a.filter(|a| !a.is_empty())),
            ..patch
        };
        if let Some(note_type) = &patch.note_type {
            check_note_type_length(note_type)?;
        }

        let note = self
            .notes
            .update_note(id, identity.user_id, &patch)
            .await?
            .ok_or_else(|| AppError::not_found("Note not found"))?;

        info!(user_id = %identity.user_id, note_id = %note.id, "Note updated");
        Ok(note)
    }

    /// Deletes one of the caller's notes.
    ///
    /// Succeeds whether or not a note was removed.
    pub async fn delete(&self, identity: &Identity, id: NoteId) -> Result<(), AppError> {
        if self.notes.delete_note(id, identity.user_id).await? {
            info!(user_id = %identity.user_id, note_id = %id, "Note deleted");
        } else {
            debug!(user_id = %identity.user_id, note_id = %id, "Delete matched no note");
        }
        Ok(())
    }
}

fn check_title_length(title: &str) -> Result<(), AppError> {
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(AppError::validation(format!(
            "Title must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

fn check_note_type_length(note_type: &str) -> Result<(), AppError> {
    if note_type.chars().count() > MAX_NOTE_TYPE_LENGTH {
        return Err(AppError::validation(format!(
            "Note type must be at most {MAX_NOTE_TYPE_LENGTH} characters"
        )));
    }
    Ok(())
}
