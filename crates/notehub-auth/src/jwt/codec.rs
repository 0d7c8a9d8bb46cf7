//! Issue and verify identity tokens with one process-wide secret.

use chrono::{DateTime, Utc};

use notehub_core::config::AuthConfig;
use notehub_core::error::AppError;
use notehub_core::types::UserId;

use super::claims::Claims;
use super::decoder::JwtDecoder;
use super::encoder::{IssuedToken, JwtEncoder};

/// Signs and verifies identity tokens.
///
/// Tokens are stateless: nothing is stored and nothing can be revoked
/// before expiry.
#[derive(Debug, Clone)]
pub struct TokenCodec {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
}

impl TokenCodec {
    /// Builds a codec, refusing a missing or short secret.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        config.validate()?;
        Ok(Self {
            encoder: JwtEncoder::new(config),
            decoder: JwtDecoder::new(config),
        })
    }

    /// Issues a token for the user, valid from now.
    pub fn issue(&self, user_id: UserId, email: &str) -> Result<IssuedToken, AppError> {
        self.issue_at(user_id, email, Utc::now())
    }

    /// Issues a token as if the current time were `issued_at`.
    pub fn issue_at(
        &self,
        user_id: UserId,
        email: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedToken, AppError> {
        self.encoder.encode_at(user_id, email, issued_at)
    }

    /// Returns the claims of a valid, unexpired token.
    ///
    /// A subject that is not a user id is rejected like a bad signature.
    pub fn verify(&self, token: &str) -> Option<Claims> {
        let claims = self.decoder.decode(token)?;
        if claims.user_id().is_none() {
            tracing::debug!("Identity token subject is not a user id");
            return None;
        }
        Some(claims)
    }
}
