//! Note handlers. Every handler requires `AuthUser` and scopes the store
//! call to the caller.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use crate::dto::request::{CreateNoteRequest, UpdateNoteRequest};
use crate::dto::response::{MessageResponse, NoteListResponse, NoteMessageResponse, NoteResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams, parse_note_id};
use crate::state::AppState;

/// GET /api/notes
pub async fn list_notes(
    State(state): State<AppState>,
    auth: AuthUser,
    query: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<NoteListResponse>, ApiError> {
    let Query(params) = query?;
    let page = state
        .note_service
        .list(&auth, params.into_page_request())
        .await?;

    Ok(Json(NoteListResponse {
        notes: page.notes,
        limit: page.page.limit,
        offset: page.page.offset,
        total: page.total,
    }))
}

/// POST /api/notes
pub async fn create_note(
    State(state): State<AppState>,
    auth: AuthUser,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<NoteMessageResponse>), ApiError> {
    let Json(req) = payload?;
    let note = state.note_service.create(&auth, req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(NoteMessageResponse {
            message: "Note created".to_string(),
            note,
        }),
    ))
}

/// GET /api/notes/{id}
pub async fn get_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<NoteResponse>, ApiError> {
    let id = parse_note_id(&id)?;
    let note = state.note_service.get(&auth, id).await?;
    Ok(Json(NoteResponse { note }))
}

/// PUT /api/notes/{id}
pub async fn update_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    payload: Result<Json<UpdateNoteRequest>, JsonRejection>,
) -> Result<Json<NoteMessageResponse>, ApiError> {
    let id = parse_note_id(&id)?;
    let Json(req) = payload?;
    let note = state.note_service.update(&auth, id, req.into()).await?;

    Ok(Json(NoteMessageResponse {
        message: "Note updated".to_string(),
        note,
    }))
}

/// DELETE /api/notes/{id}
///
/// Answers 200 whether or not a note was removed.
pub async fn delete_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    if let Ok(id) = parse_note_id(&id) {
        state.note_service.delete(&auth, id).await?;
    }

    Ok(Json(MessageResponse {
        message: "Note deleted".to_string(),
    }))
}
