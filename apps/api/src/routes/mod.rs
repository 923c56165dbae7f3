pub mod health;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::enhance::handlers as enhance_handlers;
use crate::state::AppState;
use crate::storage::handlers as storage_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/ai-enhance", post(enhance_handlers::handle_enhance))
        .route("/save-resume", post(storage_handlers::handle_save_resume))
        .route("/resumes", get(storage_handlers::handle_list_resumes))
        .with_state(state)
}

/// Cross-origin access for the listed frontend origins only. Methods and
/// headers are mirrored from the preflight, which keeps credentials allowed.
pub fn cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Map, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::storage::{JsonFileStore, ResumeMap, ResumeStore, StorageError};

    struct UnwritableStore;

    #[async_trait]
    impl ResumeStore for UnwritableStore {
        async fn save(&self, _resume: Map<String, Value>) -> Result<String, StorageError> {
            Err(StorageError::Write {
                path: PathBuf::from("storage/resumes.json"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }

        async fn list(&self) -> ResumeMap {
            ResumeMap::new()
        }
    }

    fn app_with(store: Arc<dyn ResumeStore>) -> Router {
        build_router(AppState { store }).layer(cors_layer(vec![
            HeaderValue::from_static("http://localhost:8080"),
            HeaderValue::from_static("http://localhost:3000"),
        ]))
    }

    fn app(dir: &TempDir) -> Router {
        app_with(Arc::new(JsonFileStore::new(dir.path().join("resumes.json"))))
    }

    fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn read_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let dir = TempDir::new().unwrap();
        let response = app(&dir)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["message"], "Resume Editor API is running");
    }

    #[tokio::test]
    async fn test_enhance_summary() {
        let dir = TempDir::new().unwrap();
        let request = post_json(
            "/ai-enhance",
            json!({"section": "summary", "content": "Rust developer"}).to_string(),
        );
        let response = app(&dir).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert!(body["enhanced_content"]
            .as_str()
            .unwrap()
            .starts_with("Enhanced: Rust developer - With proven expertise"));
    }

    #[tokio::test]
    async fn test_enhance_rejects_malformed_json() {
        let dir = TempDir::new().unwrap();
        let response = app(&dir)
            .oneshot(post_json("/ai-enhance", "{\"section\": "))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(read_json(response).await["detail"].is_string());
    }

    #[tokio::test]
    async fn test_enhance_rejects_missing_field() {
        let dir = TempDir::new().unwrap();
        let response = app(&dir)
            .oneshot(post_json("/ai-enhance", json!({"content": "x"}).to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let detail = read_json(response).await["detail"].as_str().unwrap().to_string();
        assert!(detail.contains("section"), "detail was: {detail}");
    }

    #[tokio::test]
    async fn test_enhance_fault_is_server_error() {
        let dir = TempDir::new().unwrap();
        let request = post_json(
            "/ai-enhance",
            json!({"section": "experience", "content": ["not an object"]}).to_string(),
        );
        let response = app(&dir).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(response).await;
        assert_eq!(
            body["detail"],
            "Error enhancing content: experience entry at index 0 is not an object"
        );
    }

    #[tokio::test]
    async fn test_save_then_list() {
        let dir = TempDir::new().unwrap();
        let app = app(&dir);
        let resume = json!({
            "personalInfo": {"name": "Jane Doe", "email": "jane@example.com", "phone": "1"},
            "summary": "Engineer"
        });

        let response = app
            .clone()
            .oneshot(post_json(
                "/save-resume",
                json!({ "resume": resume.clone() }).to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            read_json(response).await,
            json!({
                "status": "success",
                "message": "Resume saved successfully with ID: jane_doe"
            })
        );

        let response = app
            .oneshot(Request::get("/resumes").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            read_json(response).await,
            json!({ "resumes": { "jane_doe": resume } })
        );
        assert!(dir.path().join("resumes.json").exists());
    }

    #[tokio::test]
    async fn test_list_starts_empty() {
        let dir = TempDir::new().unwrap();
        let response = app(&dir)
            .oneshot(Request::get("/resumes").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(read_json(response).await, json!({ "resumes": {} }));
    }

    #[tokio::test]
    async fn test_save_rejects_non_mapping_resume() {
        let dir = TempDir::new().unwrap();
        let response = app(&dir)
            .oneshot(post_json(
                "/save-resume",
                json!({ "resume": ["Jane"] }).to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_save_non_text_name_is_server_error() {
        let dir = TempDir::new().unwrap();
        let app = app(&dir);

        for (name, shown) in [(json!(12), "12"), (Value::Null, "null")] {
            let response = app
                .clone()
                .oneshot(post_json(
                    "/save-resume",
                    json!({ "resume": { "personalInfo": { "name": name } } }).to_string(),
                ))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(
                read_json(response).await["detail"],
                format!("Error saving resume: personalInfo.name must be text, got {shown}")
            );
        }
    }

    #[tokio::test]
    async fn test_save_storage_fault_is_server_error() {
        let response = app_with(Arc::new(UnwritableStore))
            .oneshot(post_json(
                "/save-resume",
                json!({ "resume": { "summary": "x" } }).to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let detail = read_json(response).await["detail"].as_str().unwrap().to_string();
        assert!(detail.starts_with("Error saving resume: failed to write"));
        assert!(detail.contains("read-only"));
    }

    #[tokio::test]
    async fn test_cors_preflight_from_allowed_origin() {
        let dir = TempDir::new().unwrap();
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/save-resume")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();
        let response = app(&dir).oneshot(request).await.unwrap();

        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:3000"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
    }

    #[tokio::test]
    async fn test_cors_ignores_unknown_origin() {
        let dir = TempDir::new().unwrap();
        let request = Request::get("/health")
            .header(header::ORIGIN, "http://evil.example")
            .body(Body::empty())
            .unwrap();
        let response = app(&dir).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}
