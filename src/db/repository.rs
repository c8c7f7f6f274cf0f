//! Repository trait for the durable selection slot.

use async_trait::async_trait;

use super::error::StorageResult;
use crate::models::CourseKey;

/// Abstract interface over the single durable key-value slot holding the
/// ordered selection.
///
/// The slot stores the full ordered key sequence; `save` replaces it
/// wholesale after every successful mutation and `load` reads it back at
/// startup. Backends must be safe to share behind an `Arc`.
#[async_trait]
pub trait SelectionRepository: Send + Sync {
    /// Load the persisted ordered key sequence.
    ///
    /// Returns `Ok(None)` when the slot has never been written. A corrupt
    /// slot is an error here; the planner turns it into an empty-selection
    /// fallback.
    async fn load(&self) -> StorageResult<Option<Vec<CourseKey>>>;

    /// Replace the persisted sequence with `keys`.
    async fn save(&self, keys: &[CourseKey]) -> StorageResult<()>;

    /// Check that the backend is reachable and writable.
    async fn health_check(&self) -> StorageResult<bool>;
}
