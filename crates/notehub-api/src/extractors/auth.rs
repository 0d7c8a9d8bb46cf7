//! `AuthUser` extractor: resolves the bearer token to the caller's identity.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use notehub_auth::Identity;
use notehub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated caller, available in protected handlers.
///
/// Extraction fails with 401 before the handler body runs, so no store
/// is touched for an unauthenticated request.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

impl std::ops::Deref for AuthUser {
    type Target = Identity;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state
            .authenticator
            .identify(&parts.headers)
            .map(AuthUser)
            .ok_or_else(|| ApiError(AppError::unauthenticated("Unauthorized")))
    }
}
