use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Answers as long as the process is serving requests.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "Resume Editor API is running"
    }))
}
