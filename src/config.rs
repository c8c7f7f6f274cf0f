//! Application configuration from TOML files and environment variables.
//!
//! Configuration is loaded from `planner.toml` (searched in standard
//! locations), then overridden by `PLANNER_*` environment variables.
//! Every setting has a default, so a missing config file is not an error.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::db::error::StorageError;
use crate::services::grid::GridConfig;

/// Top-level planner configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub repository: RepositorySettings,
    #[serde(default)]
    pub file: FileSettings,
    #[serde(default)]
    pub grid: GridSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

/// Catalog source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Path to the plain-text catalog file.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

/// Repository backend selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    /// Backend type: "file" or "memory".
    #[serde(rename = "type", default = "default_repo_type")]
    pub repo_type: String,
}

/// JSON-file backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSettings {
    /// Path of the durable selection slot.
    #[serde(default = "default_selection_path")]
    pub path: String,
}

/// Grid display settings (inclusive hour range).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GridSettings {
    #[serde(default = "default_first_hour")]
    pub first_hour: i32,
    #[serde(default = "default_last_hour")]
    pub last_hour: i32,
}

/// HTTP server bind settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_catalog_path() -> String {
    "catalog.txt".to_string()
}

fn default_repo_type() -> String {
    "file".to_string()
}

fn default_selection_path() -> String {
    "data/selection.json".to_string()
}

fn default_first_hour() -> i32 {
    7
}

fn default_last_hour() -> i32 {
    20
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            repo_type: default_repo_type(),
        }
    }
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            path: default_selection_path(),
        }
    }
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            first_hour: default_first_hour(),
            last_hour: default_last_hour(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl PlannerConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns a configuration error when the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            StorageError::Configuration(format!("failed to read config file: {}", e))
        })?;

        toml::from_str(&content).map_err(|e| {
            StorageError::Configuration(format!("failed to parse config file: {}", e))
        })
    }

    /// Load configuration from the default locations, falling back to
    /// defaults when no file exists.
    ///
    /// Searches `planner.toml` in the current directory, `config/`, and
    /// the parent directory. A present-but-broken file is still an error;
    /// a missing file is not.
    pub fn from_default_location() -> Result<Self, StorageError> {
        let search_paths = [
            PathBuf::from("planner.toml"),
            PathBuf::from("config/planner.toml"),
            PathBuf::from("../planner.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration and apply environment overrides.
    ///
    /// The file path itself can be forced with `PLANNER_CONFIG`.
    pub fn load() -> Result<Self, StorageError> {
        let mut config = match env::var("PLANNER_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::from_default_location()?,
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Override individual settings from `PLANNER_*` environment variables.
    ///
    /// Recognized variables: `PLANNER_CATALOG_PATH`,
    /// `PLANNER_REPOSITORY_TYPE`, `PLANNER_SELECTION_PATH`,
    /// `PLANNER_FIRST_HOUR`, `PLANNER_LAST_HOUR`, `PLANNER_HOST`,
    /// `PLANNER_PORT`. Unparsable numeric values keep the configured value.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = env::var("PLANNER_CATALOG_PATH") {
            self.catalog.path = path;
        }
        if let Ok(repo_type) = env::var("PLANNER_REPOSITORY_TYPE") {
            self.repository.repo_type = repo_type;
        }
        if let Ok(path) = env::var("PLANNER_SELECTION_PATH") {
            self.file.path = path;
        }
        if let Some(hour) = env::var("PLANNER_FIRST_HOUR").ok().and_then(|v| v.parse().ok()) {
            self.grid.first_hour = hour;
        }
        if let Some(hour) = env::var("PLANNER_LAST_HOUR").ok().and_then(|v| v.parse().ok()) {
            self.grid.last_hour = hour;
        }
        if let Ok(host) = env::var("PLANNER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = env::var("PLANNER_PORT").ok().and_then(|v| v.parse().ok()) {
            self.server.port = port;
        }
    }

    /// Grid configuration derived from the display settings.
    pub fn grid_config(&self) -> GridConfig {
        GridConfig {
            first_hour: self.grid.first_hour,
            last_hour: self.grid.last_hour,
        }
    }
}
