use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use notes_store::{parse_id, NotePatch, NoteStore, StoreError};
use notes_types::NoteId;
use serde_json::json;
use tracing::{debug, info};

use crate::error::{ServerError, ServerResult};
use crate::payload::{
    ErrorBody, HealthResponse, NoteCreated, NoteDeleted, NoteFound, NoteInput, NoteList,
    NoteUpdated, NotesCleared,
};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn NoteStore>,
    pub notes_root: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<dyn NoteStore>, notes_root: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            notes_root: notes_root.into(),
        }
    }
}

fn parse_input(body: &Bytes) -> ServerResult<NoteInput> {
    NoteInput::from_body(body).map_err(|e| ServerError::BadRequest(format!("Invalid request body: {e}")))
}

/// Read the `:id` segment. A segment axum cannot decode is reported the same
/// way as one that is not a number.
fn note_id(path: Result<Path<String>, PathRejection>) -> ServerResult<NoteId> {
    let Path(raw_id) = path.map_err(|rejection| StoreError::InvalidId(rejection.body_text()))?;
    Ok(parse_id(&raw_id)?)
}

/// `POST {root}`
pub async fn create_note(
    State(state): State<AppState>,
    body: Bytes,
) -> ServerResult<(StatusCode, Json<NoteCreated>)> {
    let input = parse_input(&body)?;
    let note = state.store.create(
        input.title.as_deref().unwrap_or_default(),
        input.content.as_deref().unwrap_or_default(),
    )?;
    info!(id = %note.id, "note created");
    Ok((
        StatusCode::CREATED,
        Json(NoteCreated {
            success: true,
            message: "Note created successfully".into(),
            note,
        }),
    ))
}

/// `GET {root}`
pub async fn list_notes(State(state): State<AppState>) -> ServerResult<Json<NoteList>> {
    let notes = state.store.list()?;
    debug!(count = notes.len(), "listing notes");
    Ok(Json(NoteList {
        success: true,
        count: notes.len(),
        notes,
    }))
}

/// `GET {root}/:id`
pub async fn get_note(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ServerResult<Json<NoteFound>> {
    let id = note_id(path)?;
    let note = state.store.get(id)?;
    debug!(id = %id, "note fetched");
    Ok(Json(NoteFound {
        success: true,
        note,
    }))
}

/// `PUT {root}/:id`
pub async fn update_note(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> ServerResult<Json<NoteUpdated>> {
    let id = note_id(path)?;
    let input = parse_input(&body)?;
    let note = state
        .store
        .update(id, &NotePatch::new(input.title, input.content))?;
    info!(id = %id, "note updated");
    Ok(Json(NoteUpdated {
        success: true,
        message: "Note updated successfully".into(),
        note,
    }))
}

/// `DELETE {root}/:id`
pub async fn delete_note(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ServerResult<Json<NoteDeleted>> {
    let id = note_id(path)?;
    let deleted_note = state.store.delete(id)?;
    info!(id = %id, "note deleted");
    Ok(Json(NoteDeleted {
        success: true,
        message: "Note deleted successfully".into(),
        deleted_note,
    }))
}

/// `DELETE {root}/clear/all`
pub async fn clear_notes(State(state): State<AppState>) -> ServerResult<Json<NotesCleared>> {
    let deleted_count = state.store.clear_all()?;
    info!(deleted_count, "all notes cleared");
    Ok(Json(NotesCleared {
        success: true,
        message: format!("Cleared {deleted_count} notes"),
        deleted_count,
    }))
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "name": "notes-server",
        "version": env!("CARGO_PKG_VERSION"),
        "notesRoot": &*state.notes_root,
    }))
}

pub async fn banner_handler() -> &'static str {
    "Server is Running!"
}

pub async fn not_found_handler() -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Route not found")))
}

/// Give axum's bare 405 responses the same JSON body as every other error.
/// The `Allow` header is kept.
pub async fn method_not_allowed_body(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }
    let mut rewritten = (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody::new("Method not allowed")),
    )
        .into_response();
    if let Some(allow) = response.headers().get(header::ALLOW) {
        rewritten.headers_mut().insert(header::ALLOW, allow.clone());
    }
    rewritten
}
