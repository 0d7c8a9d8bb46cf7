//! Resolving a request's bearer token to an identity.

use std::sync::Arc;

use http::HeaderMap;
use http::header::AUTHORIZATION;

use notehub_core::types::UserId;

use crate::jwt::TokenCodec;

/// The authenticated caller of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Owner id used to scope every note operation.
    pub user_id: UserId,
    /// Email carried in the token.
    pub email: String,
}

/// Extracts and verifies bearer tokens.
#[derive(Debug, Clone)]
pub struct RequestAuthenticator {
    codec: Arc<TokenCodec>,
}

impl RequestAuthenticator {
    /// Creates an authenticator over the shared codec.
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }

    /// Identifies the caller from the `Authorization` header.
    ///
    /// Returns `None` when the header is missing, is not a bearer
    /// credential, or carries a token that does not verify.
    pub fn identify(&self, headers: &HeaderMap) -> Option<Identity> {
        let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
        let token = bearer_token(value)?;
        let claims = self.codec.verify(token)?;

        Some(Identity {
            user_id: claims.user_id()?,
            email: claims.email,
        })
    }
}

/// Splits `Bearer <token>` and returns the token.
///
/// The scheme is matched case-insensitively; exactly one space separates
/// it from a non-empty token.
pub fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    if token.is_empty() || token.contains(char::is_whitespace) {
        return None;
    }
    Some(token)
}
