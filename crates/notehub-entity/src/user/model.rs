//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use notehub_core::types::UserId;

/// Longest email the `users.email` column holds, in characters.
pub const MAX_EMAIL_LENGTH: usize = 255;

/// Longest display name the `users.name` column holds, in characters.
pub const MAX_NAME_LENGTH: usize = 255;

/// A registered user, as visible outside the store.
///
/// This projection never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Store-assigned identifier.
    pub id: UserId,
    /// Unique email address, compared exactly as stored.
    pub email: String,
    /// Display name.
    pub name: Option<String>,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

/// A user row including the stored password hash.
///
/// Only returned by the email lookup used during login.
#[derive(Clone, FromRow)]
pub struct UserCredentials {
    /// Store-assigned identifier.
    pub id: UserId,
    /// Unique email address.
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    /// Display name.
    pub name: Option<String>,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

impl UserCredentials {
    /// Drop the hash, keeping the public projection.
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            email: self.email,
            name: self.name,
            created_at: self.created_at,
        }
    }
}

impl std::fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCredentials")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"****")
            .field("name", &self.name)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Data required to create a new user.
#[derive(Clone)]
pub struct CreateUser {
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Display name.
    pub name: Option<String>,
}

impl CreateUser {
    /// Display name to store when none was supplied: the email's local part.
    pub fn default_name(email: &str) -> String {
        email.split('@').next().unwrap_or(email).to_string()
    }
}

impl std::fmt::Debug for CreateUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUser")
            .field("email", &self.email)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
