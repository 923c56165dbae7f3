use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use tracing::info;

use crate::storage::{derive_resume_id, ResumeMap, ResumeStore, StorageError};

/// In-memory resumes mirrored to a single pretty-printed JSON file.
///
/// The file is a full snapshot rewritten on every save and is never read
/// back; a fresh store starts empty regardless of what is on disk. The map is
/// updated before the write, so a failed write leaves memory ahead of disk.
pub struct JsonFileStore {
    path: PathBuf,
    resumes: Mutex<ResumeMap>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            resumes: Mutex::new(ResumeMap::new()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write_snapshot(&self, snapshot: &[u8]) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|source| StorageError::CreateDir {
                    path: dir.to_path_buf(),
                    source,
                })?;
        }

        tokio::fs::write(&self.path, snapshot)
            .await
            .map_err(|source| StorageError::Write {
                path: self.path.clone(),
                source,
            })
    }
}

#[async_trait]
impl ResumeStore for JsonFileStore {
    async fn save(&self, resume: Map<String, Value>) -> Result<String, StorageError> {
        let resume_id = derive_resume_id(&resume)?;

        // Held across the write so the file always reflects the latest map.
        let mut resumes = self.resumes.lock().await;
        resumes.insert(resume_id.clone(), Value::Object(resume));

        let snapshot = serde_json::to_vec_pretty(&*resumes)?;
        self.write_snapshot(&snapshot).await?;

        info!(
            resume_id = %resume_id,
            path = %self.path.display(),
            total = resumes.len(),
            "resume saved"
        );
        Ok(resume_id)
    }

    async fn list(&self) -> ResumeMap {
        self.resumes.lock().await.clone()
    }
}
