//! Note handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use notes_core::api::{ListNotesResponse, NoteResponse};
use notes_core::note::CreateNoteRequest;

use crate::{handlers::ApiError, state::AppState};

/// List all notes (GET /notes).
pub async fn list_notes(
    State(state): State<AppState>,
) -> Result<Json<ListNotesResponse>, ApiError> {
    let notes = state
        .notes
        .list_notes()
        .await
        .map_err(|e| ApiError::from_note_error(e, "Server error while retrieving notes"))?;

    Ok(Json(ListNotesResponse::new(notes)))
}

/// Get a single note by ID (GET /notes/{id}).
pub async fn get_note(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<NoteResponse>, ApiError> {
    let Path(id) = id.map_err(ApiError::invalid_note_id)?;

    let note = state
        .notes
        .get_note(&id)
        .await
        .map_err(|e| ApiError::from_note_error(e, "Server error while retrieving note"))?;

    Ok(Json(NoteResponse::found(note)))
}

/// Create a new note (POST /notes).
pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<NoteResponse>), ApiError> {
    let Json(request) = payload.map_err(ApiError::invalid_body)?;

    let note = state
        .notes
        .create_note(&request.title, &request.content)
        .await
        .map_err(|e| ApiError::from_note_error(e, "Server error while creating note"))?;

    Ok((StatusCode::CREATED, Json(NoteResponse::created(note))))
}
