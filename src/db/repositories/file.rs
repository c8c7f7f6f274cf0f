//! Durable JSON-file backend for the selection slot.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::db::error::StorageResult;
use crate::db::repository::SelectionRepository;
use crate::models::CourseKey;

/// On-disk document stored in the selection slot.
///
/// Keys serialize in their canonical `"<code>-<group>"` string form, so
/// the file stays hand-readable and survives catalog changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSelection {
    pub saved_at: DateTime<Utc>,
    pub courses: Vec<CourseKey>,
}

/// Selection slot persisted as a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SelectionRepository for JsonFileRepository {
    async fn load(&self) -> StorageResult<Option<Vec<CourseKey>>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("selection slot {} not written yet", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        // A malformed document (including any unparsable key string) is a
        // serialization error; the planner falls back to an empty selection.
        let document: SavedSelection = serde_json::from_str(&content)?;
        Ok(Some(document.courses))
    }

    async fn save(&self, keys: &[CourseKey]) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let document = SavedSelection {
            saved_at: Utc::now(),
            courses: keys.to_vec(),
        };
        let content = serde_json::to_string_pretty(&document)?;
        tokio::fs::write(&self.path, content).await?;
        debug!(
            "selection slot {} saved ({} keys)",
            self.path.display(),
            keys.len()
        );
        Ok(())
    }

    async fn health_check(&self) -> StorageResult<bool> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                if !parent.exists() {
                    tokio::fs::create_dir_all(parent).await?;
                }
                Ok(true)
            }
            _ => Ok(true),
        }
    }
}
