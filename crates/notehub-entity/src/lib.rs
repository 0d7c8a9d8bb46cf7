//! # notehub-entity
//!
//! Domain entity models for NoteHub. Every struct in this crate represents
//! a database row or the input to a single store operation. Row types
//! derive `sqlx::FromRow`.

pub mod note;
pub mod user;
