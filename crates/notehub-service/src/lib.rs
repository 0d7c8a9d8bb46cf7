//! # notehub-service
//!
//! Business logic for NoteHub. Services validate input before touching a
//! store and pass the caller's identity into every note operation.

pub mod account;
pub mod note;

pub use account::{AccountService, AuthOutcome, RegisterInput};
pub use note::{NotePage, NoteService};
