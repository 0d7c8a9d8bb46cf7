//! Store traits and backend selection.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use notehub_core::config::{DatabaseBackend, DatabaseConfig};
use notehub_core::result::AppResult;
use notehub_core::types::{NoteId, PageRequest, UserId};
use notehub_entity::note::{NewNote, Note, NotePatch};
use notehub_entity::user::{CreateUser, User, UserCredentials};

use crate::pool::DatabasePool;
use crate::memory::MemoryStore;
use crate::repositories::{NoteRepository, UserRepository};

/// User persistence.
///
/// A duplicate email on insert fails with `ErrorKind::Conflict`; every
/// other failure is `ErrorKind::Database`.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a user and return its public projection.
    async fn create_user(&self, data: &CreateUser) -> AppResult<User>;

    /// Look up a user with the stored hash. Used only to verify a login.
    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<UserCredentials>>;

    /// Look up a user's public projection.
    async fn find_user_by_id(&self, id: UserId) -> AppResult<Option<User>>;
}

/// Note persistence, scoped by owner.
///
/// No method accepts a note id without the owner's id; rows owned by
/// someone else are never returned, changed, or removed.
#[async_trait]
pub trait NoteStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a note for `owner`.
    async fn create_note(&self, owner: UserId, data: &NewNote) -> AppResult<Note>;

    /// The owner's notes, most recently created first.
    async fn list_notes(&self, owner: UserId, page: PageRequest) -> AppResult<Vec<Note>>;

    /// Number of notes the owner has.
    async fn count_notes(&self, owner: UserId) -> AppResult<u64>;

    /// A note by id, if it exists and belongs to `owner`.
    async fn get_note(&self, id: NoteId, owner: UserId) -> AppResult<Option<Note>>;

    /// Apply a partial update in one statement. `None` when no row matched
    /// both id and owner.
    async fn update_note(
        &self,
        id: NoteId,
        owner: UserId,
        patch: &NotePatch,
    ) -> AppResult<Option<Note>>;

    /// Delete at most one note matched by id and owner. Returns whether a
    /// row was removed.
    async fn delete_note(&self, id: NoteId, owner: UserId) -> AppResult<bool>;
}

/// The configured user and note stores.
#[derive(Debug, Clone)]
pub struct Stores {
    /// User store.
    pub users: Arc<dyn UserStore>,
    /// Note store.
    pub notes: Arc<dyn NoteStore>,
    /// Pool handle when the PostgreSQL backend is active.
    pub pool: Option<DatabasePool>,
}

impl Stores {
    /// Build the stores selected by configuration.
    ///
    /// For PostgreSQL this connects the pool and, when
    /// `database.run_migrations` is set, applies pending migrations.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.backend {
            DatabaseBackend::Postgres => {
                let pool = DatabasePool::open(config).await?;
                Ok(Self::postgres(pool))
            }
            DatabaseBackend::Memory => {
                info!("Using in-memory store; data is lost on shutdown");
                Ok(Self::memory(MemoryStore::new()))
            }
        }
    }

    /// Stores backed by a PostgreSQL pool.
    pub fn postgres(pool: DatabasePool) -> Self {
        Self {
            users: Arc::new(UserRepository::new(pool.pool().clone())),
            notes: Arc::new(NoteRepository::new(pool.pool().clone())),
            pool: Some(pool),
        }
    }

    /// Stores backed by one shared in-memory store.
    pub fn memory(store: MemoryStore) -> Self {
        let store = Arc::new(store);
        Self {
            users: store.clone(),
            notes: store,
            pool: None,
        }
    }
}
