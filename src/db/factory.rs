//! Repository factory for dependency injection.
//!
//! Creates selection-slot backends from runtime configuration, so the
//! planner and the HTTP layer never name a concrete backend type.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::error::{StorageError, StorageResult};
#[cfg(feature = "file-repo")]
use super::repositories::JsonFileRepository;
#[cfg(feature = "local-repo")]
use super::repositories::MemoryRepository;
use super::repository::SelectionRepository;
use crate::config::PlannerConfig;

/// Repository backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// Durable JSON-file slot
    File,
    /// In-memory slot for tests and development
    Memory,
}

impl FromStr for RepositoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" | "json" => Ok(Self::File),
            "memory" | "local" => Ok(Self::Memory),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Resolve the backend type from the environment.
    ///
    /// Reads `PLANNER_REPOSITORY_TYPE`; when unset, defaults to the file
    /// backend if a selection path is configured via
    /// `PLANNER_SELECTION_PATH`, otherwise the in-memory backend.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("PLANNER_REPOSITORY_TYPE") {
            return val.parse().unwrap_or(Self::Memory);
        }

        if std::env::var("PLANNER_SELECTION_PATH").is_ok() {
            Self::File
        } else {
            Self::Memory
        }
    }
}

/// Factory for creating selection repository instances.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository of the given type.
    ///
    /// # Arguments
    /// * `repo_type` - Backend to create
    /// * `path` - Slot path (required for the file backend)
    pub fn create(
        repo_type: RepositoryType,
        path: Option<&Path>,
    ) -> StorageResult<Arc<dyn SelectionRepository>> {
        match repo_type {
            RepositoryType::File => {
                #[cfg(feature = "file-repo")]
                {
                    let path = path.ok_or_else(|| {
                        StorageError::Configuration(
                            "file repository requires a selection path".to_string(),
                        )
                    })?;
                    Ok(Self::create_file(path))
                }
                #[cfg(not(feature = "file-repo"))]
                {
                    let _ = path;
                    Err(StorageError::Configuration(
                        "file repository feature not enabled".to_string(),
                    ))
                }
            }
            RepositoryType::Memory => {
                #[cfg(feature = "local-repo")]
                {
                    Ok(Self::create_memory())
                }
                #[cfg(not(feature = "local-repo"))]
                {
                    Err(StorageError::Configuration(
                        "local repository feature not enabled".to_string(),
                    ))
                }
            }
        }
    }

    /// Create an in-memory repository.
    #[cfg(feature = "local-repo")]
    pub fn create_memory() -> Arc<dyn SelectionRepository> {
        Arc::new(MemoryRepository::new())
    }

    /// Create a JSON-file repository at the given slot path.
    #[cfg(feature = "file-repo")]
    pub fn create_file<P: AsRef<Path>>(path: P) -> Arc<dyn SelectionRepository> {
        Arc::new(JsonFileRepository::new(path))
    }

    /// Create a repository from environment configuration.
    pub fn from_env() -> StorageResult<Arc<dyn SelectionRepository>> {
        let repo_type = RepositoryType::from_env();
        let path = std::env::var("PLANNER_SELECTION_PATH").ok();
        Self::create(repo_type, path.as_deref().map(Path::new))
    }

    /// Create a repository from a loaded [`PlannerConfig`].
    pub fn from_config(config: &PlannerConfig) -> StorageResult<Arc<dyn SelectionRepository>> {
        let repo_type: RepositoryType = config.repository.repo_type.parse().map_err(|e| {
            StorageError::Configuration(format!("invalid repository type: {}", e))
        })?;
        Self::create(repo_type, Some(Path::new(&config.file.path)))
    }
}

/// Builder for configuring repository creation.
///
/// # Example
/// ```ignore
/// use course_planner::db::{RepositoryBuilder, RepositoryType};
///
/// let repo = RepositoryBuilder::new()
///     .repository_type(RepositoryType::File)
///     .selection_path("data/selection.json")
///     .build()?;
/// ```
pub struct RepositoryBuilder {
    repo_type: RepositoryType,
    path: Option<std::path::PathBuf>,
}

impl RepositoryBuilder {
    /// Create a builder with environment defaults.
    pub fn new() -> Self {
        Self {
            repo_type: RepositoryType::from_env(),
            path: std::env::var("PLANNER_SELECTION_PATH").ok().map(Into::into),
        }
    }

    /// Set the backend type.
    pub fn repository_type(mut self, repo_type: RepositoryType) -> Self {
        self.repo_type = repo_type;
        self
    }

    /// Set the file slot path.
    pub fn selection_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Build the repository instance.
    pub fn build(self) -> StorageResult<Arc<dyn SelectionRepository>> {
        RepositoryFactory::create(self.repo_type, self.path.as_deref())
    }
}

impl Default for RepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
