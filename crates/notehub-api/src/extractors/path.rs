//! Typed path parameter helpers.

use notehub_core::error::AppError;
use notehub_core::types::NoteId;

/// Parses a note id from a path segment.
///
/// Anything other than a positive integer is reported as a missing note.
pub fn parse_note_id(s: &str) -> Result<NoteId, AppError> {
    match s.parse::<i64>() {
        Ok(id) if id > 0 => Ok(NoteId(id)),
        _ => Err(AppError::not_found("Note not found")),
    }
}
