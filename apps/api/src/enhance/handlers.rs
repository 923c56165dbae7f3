//! Axum route handler for the enhancement API.

use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enhance::enhance;
use crate::errors::AppError;
use crate::extract::ValidJson;

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub section: String,
    pub content: Value,
}

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub enhanced_content: Value,
}

/// POST /ai-enhance
pub async fn handle_enhance(
    ValidJson(request): ValidJson<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let enhanced_content = enhance(&request.section, &request.content)?;
    Ok(Json(EnhanceResponse { enhanced_content }))
}
