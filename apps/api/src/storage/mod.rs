//! Resume persistence — saved documents keyed by an identifier derived from
//! the person's name.
//!
//! `AppState` holds an `Arc<dyn ResumeStore>`; the server uses
//! `JsonFileStore`, tests may substitute their own.

pub mod handlers;
pub mod json_file;

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

pub use json_file::JsonFileStore;

/// Identifier used when a document carries no `personalInfo.name`.
pub const FALLBACK_RESUME_ID: &str = "latest";

/// Every saved document, ordered by identifier.
pub type ResumeMap = BTreeMap<String, Value>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("personalInfo.name must be text, got {0}")]
    NameNotText(String),

    #[error("failed to create storage directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize resumes: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Stores `resume` under its derived identifier, replacing any previous
    /// document with the same identifier, and returns the identifier.
    async fn save(&self, resume: Map<String, Value>) -> Result<String, StorageError>;

    /// Returns every saved document.
    async fn list(&self) -> ResumeMap;
}

/// Lowercased `personalInfo.name` with spaces replaced by underscores, or
/// `"latest"` when there is no name to derive from.
pub fn derive_resume_id(resume: &Map<String, Value>) -> Result<String, StorageError> {
    let name = resume
        .get("personalInfo")
        .and_then(Value::as_object)
        .and_then(|info| info.get("name"));

    match name {
        None => Ok(FALLBACK_RESUME_ID.to_string()),
        Some(Value::String(name)) => Ok(name.replace(' ', "_").to_lowercase()),
        Some(other) => Err(StorageError::NameNotText(other.to_string())),
    }
}
