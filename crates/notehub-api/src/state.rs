//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use notehub_auth::jwt::TokenCodec;
use notehub_auth::password::{PasswordHasher, PasswordValidator};
use notehub_auth::RequestAuthenticator;
use notehub_core::config::AppConfig;
use notehub_core::error::AppError;
use notehub_database::Stores;
use notehub_service::{AccountService, NoteService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// User and note stores
    pub stores: Stores,
    /// Identity token codec
    pub codec: Arc<TokenCodec>,
    /// Bearer token authenticator
    pub authenticator: Arc<RequestAuthenticator>,
    /// Registration and login
    pub account_service: Arc<AccountService>,
    /// Note CRUD
    pub note_service: Arc<NoteService>,
}

impl AppState {
    /// Wires the auth components and services over the given stores.
    pub fn new(config: AppConfig, stores: Stores) -> Result<Self, AppError> {
        let codec = Arc::new(TokenCodec::new(&config.auth)?);
        let hasher = Arc::new(PasswordHasher::new(&config.auth.password_hash)?);
        let validator = PasswordValidator::new(&config.auth);

        let authenticator = Arc::new(RequestAuthenticator::new(Arc::clone(&codec)));
        let account_service = Arc::new(AccountService::new(
            Arc::clone(&stores.users),
            hasher,
            validator,
            Arc::clone(&codec),
        ));
        let note_service = Arc::new(NoteService::new(Arc::clone(&stores.notes)));

        Ok(Self {
            config: Arc::new(config),
            stores,
            codec,
            authenticator,
            account_service,
            note_service,
        })
    }
}
