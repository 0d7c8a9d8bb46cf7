//! Note repository implementation.
//!
//! Every statement filters on `user_id`, including the ones addressed by
//! note id.

use async_trait::async_trait;
use sqlx::PgPool;

use notehub_core::error::{AppError, ErrorKind};
use notehub_core::result::AppResult;
use notehub_core::types::{NoteId, PageRequest, UserId};
use notehub_entity::note::{NewNote, Note, NotePatch};

use crate::store::NoteStore;

const NOTE_COLUMNS: &str =
    "id, user_id, title, content, summary, note_type, audio_url, created_at, updated_at";

/// Repository for note rows.
#[derive(Debug, Clone)]
pub struct NoteRepository {
    pool: PgPool,
}

impl NoteRepository {
    /// Create a new note repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteStore for NoteRepository {
    async fn create_note(&self, owner: UserId, data: &NewNote) -> AppResult<Note> {
        let sql = format!(
            "INSERT INTO notes (user_id, title, content, summary, note_type, audio_url) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {NOTE_COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&sql)
            .bind(owner)
            .bind(&data.title)
            .bind(&data.content)
            .bind(&data.summary)
            .bind(data.effective_note_type())
            .bind(&data.audio_url)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create note", e))
    }

    async fn list_notes(&self, owner: UserId, page: PageRequest) -> AppResult<Vec<Note>> {
        let sql = format!(
            "SELECT {NOTE_COLUMNS} FROM notes \
             WHERE user_id = $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Note>(&sql)
            .bind(owner)
            .bind(page.sql_limit())
            .bind(page.sql_offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list notes", e))
    }

    async fn count_notes(&self, owner: UserId) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notes WHERE user_id = $1")
            .bind(owner)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count notes", e))?;
        Ok(count as u64)
    }

    async fn get_note(&self, id: NoteId, owner: UserId) -> AppResult<Option<Note>> {
        let sql = format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Note>(&sql)
            .bind(id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to get note", e))
    }

    async fn update_note(
        &self,
        id: NoteId,
        owner: UserId,
        patch: &NotePatch,
    ) -> AppResult<Option<Note>> {
        // Nullable columns carry a presence flag so an explicit NULL clears
        // the value while an absent field keeps it.
        let sql = format!(
            "UPDATE notes SET \
                 title = COALESCE($3, title), \
                 content = CASE WHEN $4 THEN $5 ELSE content END, \
                 summary = CASE WHEN $6 THEN $7 ELSE summary END, \
                 note_type = COALESCE($8, note_type), \
                 audio_url = CASE WHEN $9 THEN $10 ELSE audio_url END, \
                 updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {NOTE_COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&sql)
            .bind(id)
            .bind(owner)
            .bind(&patch.title)
            .bind(patch.content.is_some())
            .bind(patch.content.clone().flatten())
            .bind(patch.summary.is_some())
            .bind(patch.summary.clone().flatten())
            .bind(&patch.note_type)
            .bind(patch.audio_url.is_some())
            .bind(patch.audio_url.clone().flatten())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update note", e))
    }

    async fn delete_note(&self, id: NoteId, owner: UserId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete note", e))?;

        Ok(result.rows_affected() > 0)
    }
}
