//! Persistence layer for the durable selection slot.
//!
//! This module provides abstractions over the single key-value slot that
//! holds the student's ordered selection, via the repository pattern so
//! storage backends can be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (HTTP API, server binary)            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  SelectionPlanner (services/selection.rs)               │
//! │  - conflict checking, mutation, persistence ordering    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  SelectionRepository trait (repository.rs)              │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴──────────────┐
//!     │  JsonFileRepository          │
//!     │  MemoryRepository            │
//!     └──────────────────────────────┘
//! ```
//!
//! The planner persists the full ordered key sequence after every
//! successful mutation and tolerates a missing or corrupt slot at load
//! time by falling back to an empty selection.

#[cfg(not(any(feature = "file-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod error;
pub mod factory;
pub mod repositories;
pub mod repository;

pub use error::{StorageError, StorageResult};
pub use factory::{RepositoryBuilder, RepositoryFactory, RepositoryType};
#[cfg(feature = "file-repo")]
pub use repositories::JsonFileRepository;
#[cfg(feature = "local-repo")]
pub use repositories::MemoryRepository;
pub use repository::SelectionRepository;
