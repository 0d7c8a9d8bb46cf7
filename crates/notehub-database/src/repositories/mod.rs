//! PostgreSQL repository implementations.

pub mod note;
pub mod user;

pub use note::NoteRepository;
pub use user::UserRepository;
