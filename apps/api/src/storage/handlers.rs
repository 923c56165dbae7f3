//! Axum route handlers for saving and listing resumes.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::AppError;
use crate::extract::ValidJson;
use crate::models::resume::Resume;
use crate::state::AppState;
use crate::storage::ResumeMap;

#[derive(Debug, Deserialize)]
pub struct SaveResumeRequest {
    pub resume: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct SaveResumeResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub resumes: ResumeMap,
}

/// POST /save-resume
///
/// Stores the document verbatim; it does not have to match the typed schema.
pub async fn handle_save_resume(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<SaveResumeRequest>,
) -> Result<Json<SaveResumeResponse>, AppError> {
    if let Err(e) = Resume::from_document(&request.resume) {
        debug!("saving resume that does not match the typed schema: {e}");
    }

    let resume_id = state.store.save(request.resume).await?;

    Ok(Json(SaveResumeResponse {
        status: "success".to_string(),
        message: format!("Resume saved successfully with ID: {resume_id}"),
    }))
}

/// GET /resumes
pub async fn handle_list_resumes(State(state): State<AppState>) -> Json<ResumeListResponse> {
    Json(ResumeListResponse {
        resumes: state.store.list().await,
    })
}
