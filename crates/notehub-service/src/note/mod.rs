//! Owner-scoped note operations.

pub mod service;

pub use service::{NotePage, NoteService};
