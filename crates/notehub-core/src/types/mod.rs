//! Core type definitions used across the NoteHub workspace.

pub mod id;
pub mod pagination;

pub use id::{NoteId, UserId};
pub use pagination::PageRequest;
