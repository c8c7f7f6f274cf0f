//! Error types for selection storage operations.

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error type for the persistence collaborator.
///
/// These never surface to the user directly: the planner maps load
/// failures to an empty selection and save failures to a rolled-back
/// mutation with a notice.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Filesystem error while reading or writing the selection slot.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted document could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration or initialization error.
    #[error("configuration error: {0}")]
    Configuration(String),
}
