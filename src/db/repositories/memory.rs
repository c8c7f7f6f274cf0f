//! In-memory selection repository for unit testing and local development.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::db::error::StorageResult;
use crate::db::repository::SelectionRepository;
use crate::models::CourseKey;

/// Volatile selection slot held in process memory.
///
/// The lock guards only short copy-in/copy-out critical sections, so a
/// synchronous `RwLock` is fine inside the async trait methods.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    slot: RwLock<Option<Vec<CourseKey>>>,
    saves: RwLock<u64>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the slot, e.g. to test startup restoration.
    pub fn with_selection(keys: Vec<CourseKey>) -> Self {
        Self {
            slot: RwLock::new(Some(keys)),
            saves: RwLock::new(0),
        }
    }

    /// Number of `save` calls observed. Lets tests assert that failed
    /// mutations trigger no persistence write.
    pub fn save_count(&self) -> u64 {
        *self.saves.read()
    }
}

#[async_trait]
impl SelectionRepository for MemoryRepository {
    async fn load(&self) -> StorageResult<Option<Vec<CourseKey>>> {
        Ok(self.slot.read().clone())
    }

    async fn save(&self, keys: &[CourseKey]) -> StorageResult<()> {
        *self.slot.write() = Some(keys.to_vec());
        *self.saves.write() += 1;
        Ok(())
    }

    async fn health_check(&self) -> StorageResult<bool> {
        Ok(true)
    }
}
