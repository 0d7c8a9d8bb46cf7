//! # notehub-auth
//!
//! Credential and identity handling for NoteHub.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and the registration policy
//! - `jwt`: identity token issuance and verification
//! - `authenticator`: resolving a request's `Authorization` header to an identity

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::{Identity, RequestAuthenticator};
pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder, TokenCodec};
pub use password::{PasswordHasher, PasswordValidator};
