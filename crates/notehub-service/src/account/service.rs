//! Account operations: register, login, and current user.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use notehub_auth::authenticator::Identity;
use notehub_auth::jwt::TokenCodec;
use notehub_auth::password::{PasswordHasher, PasswordValidator};
use notehub_core::error::AppError;
use notehub_database::store::UserStore;
use notehub_entity::user::{CreateUser, MAX_EMAIL_LENGTH, MAX_NAME_LENGTH, User};

/// Registration input as received from the caller.
#[derive(Debug, Clone, Default)]
pub struct RegisterInput {
    /// Email address.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
    /// Display name; defaults to the email's local part.
    pub name: Option<String>,
}

/// A signed-in user and their identity token.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    /// Signed identity token.
    pub token: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
    /// Public user projection.
    pub user: User,
}

/// Handles registration and login.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// User store.
    users: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy.
    validator: PasswordValidator,
    /// Identity token codec.
    codec: Arc<TokenCodec>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        validator: PasswordValidator,
        codec: Arc<TokenCodec>,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
            codec,
        }
    }

    /// Registers a new user and issues their first token.
    ///
    /// A duplicate email fails with `ErrorKind::Conflict` and nothing is
    /// stored.
    pub async fn register(&self, input: RegisterInput) -> Result<AuthOutcome, AppError> {
        let email = input.email.filter(|e| !e.is_empty());
        let password = input.password.filter(|p| !p.is_empty());
        let (Some(email), Some(password)) = (email, password) else {
            return Err(AppError::validation("Email and password are required"));
        };

        self.validator.validate(&password)?;
        validate_email(&email)?;

        let name = input
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| CreateUser::default_name(&email));
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(AppError::validation(format!(
                "Name must be at most {MAX_NAME_LENGTH} characters"
            )));
        }

        let password_hash = self.hash_blocking(password).await?;
        let user = self
            .users
            .create_user(&CreateUser {
                email,
                password_hash,
                name: Some(name),
            })
            .await?;

        info!(user_id = %user.id, "User registered");
        self.sign_in(user)
    }

    /// Verifies credentials and issues a token.
    ///
    /// Unknown email and wrong password fail identically.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthOutcome, AppError> {
        if email.is_empty() || password.is_empty() {
            return Err(AppError::validation("Email and password are required"));
        }

        let Some(credentials) = self.users.find_user_by_email(email).await? else {
            debug!("Login for unknown email");
            return Err(AppError::unauthenticated("Invalid credentials"));
        };

        let hasher = self.hasher.clone();
        let password = password.to_string();
        let digest = credentials.password_hash.clone();
        let valid = tokio::task::spawn_blocking(move || hasher.verify(&password, &digest))
            .await
            .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))?;

        if !valid {
            debug!(user_id = %credentials.id, "Login with wrong password");
            return Err(AppError::unauthenticated("Invalid credentials"));
        }

        let user = credentials.into_user();
        info!(user_id = %user.id, "User logged in");
        self.sign_in(user)
    }

    /// Loads the caller's public profile.
    pub async fn current_user(&self, identity: &Identity) -> Result<User, AppError> {
        self.users
            .find_user_by_id(identity.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    fn sign_in(&self, user: User) -> Result<AuthOutcome, AppError> {
        let issued = self.codec.issue(user.id, &user.email)?;
        Ok(AuthOutcome {
            token: issued.token,
            expires_at: issued.expires_at,
            user,
        })
    }

    async fn hash_blocking(&self, password: String) -> Result<String, AppError> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
    }
}

fn validate_email(email: &str) -> Result<(), AppError> {
    if email.chars().count() > MAX_EMAIL_LENGTH {
        return Err(AppError::validation(format!(
            "Email must be at most {MAX_EMAIL_LENGTH} characters"
        )));
    }
    match email.split_once('@') {
        Some((local, _)) if !local.is_empty() => Ok(()),
        _ => Err(AppError::validation("Invalid email address")),
    }
}
