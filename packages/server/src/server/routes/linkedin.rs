//! Outreach note generation route.

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;
use tracing::error;

use crate::outreach::{generate_note, NoteRequest};
use crate::server::app::AppState;
use crate::server::routes::ErrorResponse;

#[derive(Serialize)]
pub struct NoteResponse {
    pub note: String,
}

/// Generate a personalized connection note.
pub async fn generate_note_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<NoteRequest>,
) -> Result<Json<NoteResponse>, (StatusCode, Json<ErrorResponse>)> {
    match generate_note(&*state.note_model, &request).await {
        Ok(note) => Ok(Json(NoteResponse { note })),
        Err(e) => {
            error!(error = %e, "Note generation failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: format!("Error generating note: {}", e),
                }),
            ))
        }
    }
}
