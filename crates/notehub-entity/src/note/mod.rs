//! Note domain entities.

pub mod model;

pub use model::{
    DEFAULT_NOTE_TYPE, MAX_NOTE_TYPE_LENGTH, MAX_TITLE_LENGTH, NewNote, Note, NotePatch,
};
