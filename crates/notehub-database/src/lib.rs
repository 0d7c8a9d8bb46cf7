//! # notehub-database
//!
//! Data access for NoteHub. The [`store`] traits define the operations;
//! every note operation takes the owner's id and filters on it inside the
//! query, so a note owned by someone else behaves exactly like a missing
//! one.
//!
//! Two implementations exist: PostgreSQL repositories over a
//! [`pool::DatabasePool`] and an in-process [`memory::MemoryStore`].

pub mod memory;
pub mod pool;
pub mod repositories;
pub mod store;

pub use pool::DatabasePool;
pub use memory::MemoryStore;
pub use store::{NoteStore, Stores, UserStore};
