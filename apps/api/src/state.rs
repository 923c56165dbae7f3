use std::sync::Arc;

use crate::storage::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Saved resumes. Swappable so tests can run against an isolated store.
    pub store: Arc<dyn ResumeStore>,
}
