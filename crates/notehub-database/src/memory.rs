//! In-process store backed by ordered maps.
//!
//! Mirrors the PostgreSQL repositories: the same ownership filters, the
//! same ordering, and the same conflict on a duplicate email. Contents are
//! lost when the process exits.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use notehub_core::error::AppError;
use notehub_core::result::AppResult;
use notehub_core::types::{NoteId, PageRequest, UserId};
use notehub_entity::note::{NewNote, Note, NotePatch};
use notehub_entity::user::{CreateUser, User, UserCredentials};

use crate::store::{NoteStore, UserStore};

#[derive(Debug, Default)]
struct MemoryTables {
    users: BTreeMap<UserId, UserCredentials>,
    notes: BTreeMap<NoteId, Note>,
    next_user_id: i64,
    next_note_id: i64,
}

/// User and note tables held in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<MemoryTables>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, data: &CreateUser) -> AppResult<User> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == data.email) {
            return Err(AppError::conflict("User already exists"));
        }

        tables.next_user_id += 1;
        let id = UserId(tables.next_user_id);
        let row = UserCredentials {
            id,
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            name: data.name.clone(),
            created_at: Utc::now(),
        };
        tables.users.insert(id, row.clone());
        debug!(user_id = %id, "Inserted user");
        Ok(row.into_user())
    }

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<UserCredentials>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.get(&id).cloned().map(UserCredentials::into_user))
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn create_note(&self, owner: UserId, data: &NewNote) -> AppResult<Note> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&owner) {
            return Err(AppError::database(format!("User {owner} does not exist")));
        }

        tables.next_note_id += 1;
        let id = NoteId(tables.next_note_id);
        let now = Utc::now();
        let note = Note {
            id,
            user_id: owner,
            title: data.title.clone(),
            content: data.content.clone(),
            summary: data.summary.clone(),
            note_type: data.effective_note_type().to_string(),
            audio_url: data.audio_url.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.notes.insert(id, note.clone());
        Ok(note)
    }

    async fn list_notes(&self, owner: UserId, page: PageRequest) -> AppResult<Vec<Note>> {
        let tables = self.tables.read().await;
        let mut owned: Vec<&Note> = tables
            .notes
            .values()
            .filter(|n| n.user_id == owner)
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let offset = usize::try_from(page.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit).unwrap_or(usize::MAX);
        Ok(owned
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count_notes(&self, owner: UserId) -> AppResult<u64> {
        let tables = self.tables.read().await;
        Ok(tables.notes.values().filter(|n| n.user_id == owner).count() as u64)
    }

    async fn get_note(&self, id: NoteId, owner: UserId) -> AppResult<Option<Note>> {
        let tables = self.tables.read().await;
        Ok(tables
            .notes
            .get(&id)
            .filter(|n| n.user_id == owner)
            .cloned())
    }

    async fn update_note(
        &self,
        id: NoteId,
        owner: UserId,
        patch: &NotePatch,
    ) -> AppResult<Option<Note>> {
        let mut tables = self.tables.write().await;
        match tables.notes.get_mut(&id) {
            Some(note) if note.user_id == owner => {
                patch.apply_to(note, Utc::now());
                Ok(Some(note.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete_note(&self, id: NoteId, owner: UserId) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        let owned = tables.notes.get(&id).is_some_and(|n| n.user_id == owner);
        if owned {
            tables.notes.remove(&id);
        }
        Ok(owned)
    }
}
