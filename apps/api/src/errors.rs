use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::enhance::EnhanceError;
use crate::storage::StorageError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{"detail": "..."}`.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request body does not have the expected shape.
    #[error("{0}")]
    Validation(String),

    #[error("Error enhancing content: {0}")]
    Enhancement(#[from] EnhanceError),

    #[error("Error saving resume: {0}")]
    Storage(#[from] StorageError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Enhancement(_) | AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{self}");
        } else {
            tracing::debug!("rejected request: {self}");
        }

        let body = Json(json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}
