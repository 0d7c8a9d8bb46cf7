//! Request DTOs.
//!
//! Required fields are optional here so that a missing field is reported
//! by the services as a validation error rather than a body rejection.

use serde::{Deserialize, Deserializer, Serialize};

use notehub_entity::note::{NewNote, NotePatch};
use notehub_service::RegisterInput;

/// Register request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Email.
    pub email: Option<String>,
    /// Password.
    pub password: Option<String>,
    /// Display name.
    pub name: Option<String>,
}

impl From<RegisterRequest> for RegisterInput {
    fn from(req: RegisterRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
            name: req.name,
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email.
    pub email: Option<String>,
    /// Password.
    pub password: Option<String>,
}

/// Create note request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    /// Title.
    pub title: Option<String>,
    /// Body text.
    pub content: Option<String>,
    /// Summary.
    pub summary: Option<String>,
    /// Type tag.
    #[serde(alias = "noteType")]
    pub note_type: Option<String>,
    /// Audio reference.
    #[serde(alias = "audioUrl")]
    pub audio_url: Option<String>,
}

impl From<CreateNoteRequest> for NewNote {
    fn from(req: CreateNoteRequest) -> Self {
        Self {
            title: req.title.unwrap_or_default(),
            content: req.content,
            summary: req.summary,
            note_type: req.note_type,
            audio_url: req.audio_url,
        }
    }
}

/// Update note request body.
///
/// For nullable fields an explicit `null` clears the value while an
/// omitted key leaves it unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNoteRequest {
    /// New title.
    pub title: Option<String>,
    /// New body text.
    #[serde(default, deserialize_with = "double_option")]
    pub content: Option<Option<String>>,
    /// New summary.
    #[serde(default, deserialize_with = "double_option")]
    pub summary: Option<Option<String>>,
    /// New type tag.
    #[serde(alias = "noteType")]
    pub note_type: Option<String>,
    /// New audio reference.
    #[serde(default, alias = "audioUrl", deserialize_with = "double_option")]
    pub audio_url: Option<Option<String>>,
}

impl From<UpdateNoteRequest> for NotePatch {
    fn from(req: UpdateNoteRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            summary: req.summary,
            note_type: req.note_type,
            audio_url: req.audio_url,
        }
    }
}

/// Present keys become `Some`, including `null`; absent keys hit `default`.
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
