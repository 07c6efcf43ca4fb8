use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{delete, get, post, put},
    Router,
};
use ferronote_application::cache::{CacheKey, CachedResponse};
use ferronote_domain::DomainError;
use serde::Serialize;
use tracing::error;

use crate::{
    dto::{CreateNoteRequest, NoteResponse, UpdateNoteRequest},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/notes", get(list_notes))
        .route("/api/notes", post(create_note))
        .route("/api/notes/{id}", get(get_note))
        .route("/api/notes/{id}", put(update_note))
        .route("/api/notes/{id}", delete(delete_note))
}

/// Attaches the cache-status and elapsed-time indicators to a
/// read-through response.
fn cached_json<T: Serialize>(cached: CachedResponse<T>) -> Response {
    (
        [
            ("x-cache", cached.outcome.as_header_value().to_string()),
            ("x-response-time", format!("{:.2}ms", cached.elapsed_ms)),
        ],
        Json(cached.value),
    )
        .into_response()
}

async fn list_notes(State(state): State<AppState>) -> Response {
    let get_notes = state.get_notes.clone();
    let result = state
        .cached_reads
        .fetch(&CacheKey::note_collection(), move || async move {
            let notes = get_notes.get_all().await?;
            Ok(notes
                .into_iter()
                .map(NoteResponse::from_note)
                .collect::<Vec<_>>())
        })
        .await;

    match result {
        Ok(cached) => cached_json(cached),
        Err(e) => {
            error!(error = %e, "Failed to list notes");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

async fn get_note(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let get_notes = state.get_notes.clone();
    let result = state
        .cached_reads
        .fetch(&CacheKey::note_item(id), move || async move {
            match get_notes.get_by_id(id).await? {
                Some(note) => Ok(NoteResponse::from_note(note)),
                // Absent results are never cached.
                None => Err(DomainError::NoteNotFound(id)),
            }
        })
        .await;

    match result {
        Ok(cached) => cached_json(cached),
        Err(DomainError::NoteNotFound(_)) => {
            (StatusCode::NOT_FOUND, format!("Note {id} not found")).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to retrieve note");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

async fn create_note(
    State(state): State<AppState>,
    Json(req): Json<CreateNoteRequest>,
) -> Result<(StatusCode, Json<NoteResponse>), (StatusCode, String)> {
    match state.create_note.execute(req.title, req.content).await {
        Ok(note) => Ok((StatusCode::CREATED, Json(NoteResponse::from_note(note)))),
        Err(e @ (DomainError::InvalidTitle(_) | DomainError::InvalidContent(_))) => {
            Err((StatusCode::BAD_REQUEST, e.to_string()))
        }
        Err(e) => {
            error!(error = %e, "Failed to create note");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateNoteRequest>,
) -> Result<Json<NoteResponse>, (StatusCode, String)> {
    match state.update_note.execute(id, req.title, req.content).await {
        Ok(note) => Ok(Json(NoteResponse::from_note(note))),
        Err(DomainError::NoteNotFound(_)) => {
            Err((StatusCode::NOT_FOUND, format!("Note {id} not found")))
        }
        Err(e @ (DomainError::InvalidTitle(_) | DomainError::InvalidContent(_))) => {
            Err((StatusCode::BAD_REQUEST, e.to_string()))
        }
        Err(e) => {
            error!(error = %e, "Failed to update note");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, String)> {
    match state.delete_note.execute(id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(DomainError::NoteNotFound(_)) => {
            Err((StatusCode::NOT_FOUND, format!("Note {id} not found")))
        }
        Err(e) => {
            error!(error = %e, "Failed to delete note");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
