//! User domain entities.

pub mod model;

pub use model::{CreateUser, MAX_EMAIL_LENGTH, MAX_NAME_LENGTH, User, UserCredentials};
