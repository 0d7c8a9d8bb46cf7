//! Registration, login, and the current-user lookup.

pub mod service;

pub use service::{AccountService, AuthOutcome, RegisterInput};
