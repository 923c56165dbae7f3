use axum::extract::FromRequest;

use crate::errors::AppError;

/// `axum::Json` whose rejections surface as `AppError::Validation`, so a
/// malformed body gets the same `{"detail": ...}` shape as every other error.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ValidJson<T>(pub T);
