//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use notehub_core::types::UserId;
use notehub_entity::note::Note;
use notehub_entity::user::User;

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: UserId,
    /// Email.
    pub email: String,
    /// Display name.
    pub name: Option<String>,
    /// Registered at.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            created_at: user.created_at,
        }
    }
}

/// Register and login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Message.
    pub message: String,
    /// Identity token.
    pub token: String,
    /// Token expiry.
    pub expires_at: DateTime<Utc>,
    /// User info.
    pub user: UserResponse,
}

/// Current user response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    /// User info.
    pub user: UserResponse,
}

/// Note list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteListResponse {
    /// Notes in this window.
    pub notes: Vec<Note>,
    /// Applied limit.
    pub limit: u64,
    /// Applied offset.
    pub offset: u64,
    /// Total notes owned by the caller.
    pub total: u64,
}

/// Single note response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteResponse {
    /// The note.
    pub note: Note,
}

/// Note mutation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteMessageResponse {
    /// Message.
    pub message: String,
    /// The note after the change.
    pub note: Note,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: String,
    /// Server version.
    pub version: String,
}
