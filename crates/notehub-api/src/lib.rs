//! # notehub-api
//!
//! HTTP API layer for NoteHub built on Axum.
//!
//! Provides the auth and note endpoints, middleware (CORS, logging,
//! timeouts), the `AuthUser` extractor, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_state, run_server};
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
