//! Selection store: the single owner of the mutable selection state.
//!
//! All mutations go through [`SelectionPlanner::add`], [`remove`] and
//! [`reset`]; each one runs its conflict check, the mutation, and the
//! persistence write as one logical unit. Callers that share the planner
//! across tasks wrap it in `Arc<tokio::sync::Mutex<_>>` and hold the lock
//! for the whole operation, so no other mutation interleaves between the
//! conflict check and the save.

use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

use crate::db::{SelectionRepository, StorageError};
use crate::models::{Catalog, Course, CourseKey};
use crate::services::conflicts::{find_conflict, MeetingConflict};
use crate::services::export::render_selection_text;
use crate::services::grid::{layout_grid, GridConfig, GridData};
use crate::services::summary::{summarize, SelectionSummary};

/// User-facing selection errors. All recoverable; none abort the session.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("course {key} is already selected")]
    AlreadySelected { key: CourseKey },

    #[error("{0}")]
    ScheduleConflict(MeetingConflict),

    #[error("selection is already empty")]
    EmptySelection,

    #[error("course {key} is not selected")]
    NotSelected { key: CourseKey },

    #[error("course {key} does not exist in the catalog")]
    UnknownCourse { key: CourseKey },

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Outcome of a reset request that passed the empty-selection check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The user confirmed and the selection was cleared and persisted.
    Cleared,
    /// The user declined; state is untouched.
    Cancelled,
}

/// Confirmation collaborator for destructive resets.
///
/// The planner awaits the decision before clearing anything, so the
/// caller may park the request on real user input.
#[async_trait]
pub trait ResetConfirmation: Send + Sync {
    async fn confirm_reset(&self) -> bool;
}

/// A confirmation decision known up front (HTTP request body, tests).
#[derive(Debug, Clone, Copy)]
pub struct PresetDecision(pub bool);

#[async_trait]
impl ResetConfirmation for PresetDecision {
    async fn confirm_reset(&self) -> bool {
        self.0
    }
}

/// Owner of the ordered, unique, conflict-free selection.
pub struct SelectionPlanner {
    catalog: Arc<Catalog>,
    repository: Arc<dyn SelectionRepository>,
    selected: Vec<CourseKey>,
}

impl SelectionPlanner {
    /// Create a planner with an empty selection.
    pub fn new(catalog: Arc<Catalog>, repository: Arc<dyn SelectionRepository>) -> Self {
        Self {
            catalog,
            repository,
            selected: Vec::new(),
        }
    }

    /// Load the persisted selection from the slot.
    ///
    /// A missing or corrupt slot falls back to an empty selection with a
    /// warning; startup never fails on bad persisted data. Stale keys are
    /// kept and resolved at use time. Duplicate keys in a hand-edited slot
    /// are dropped to restore the uniqueness invariant.
    pub async fn restore(&mut self) {
        self.selected = match self.repository.load().await {
            Ok(Some(keys)) => {
                let mut unique: Vec<CourseKey> = Vec::with_capacity(keys.len());
                for key in keys {
                    if unique.contains(&key) {
                        warn!("persisted selection contains duplicate key {}, dropped", key);
                    } else {
                        unique.push(key);
                    }
                }
                debug!("restored {} selected courses", unique.len());
                unique
            }
            Ok(None) => {
                debug!("no persisted selection, starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!("persisted selection unreadable ({}), starting empty", e);
                Vec::new()
            }
        };
    }

    /// The ordered selected keys.
    pub fn selected(&self) -> &[CourseKey] {
        &self.selected
    }

    /// The shared catalog handle.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Selected courses that still resolve in the catalog, in selection
    /// order. Stale keys are skipped.
    pub fn selected_courses(&self) -> Vec<&Course> {
        self.selected
            .iter()
            .filter_map(|key| self.catalog.find(key))
            .collect()
    }

    /// Add a course section to the selection.
    ///
    /// Fails with `AlreadySelected` for a duplicate key, `UnknownCourse`
    /// for a key the catalog cannot resolve, and `ScheduleConflict` on the
    /// first selected course (in selection order) whose meetings overlap
    /// the candidate's. On success the key is appended and the selection
    /// persisted before returning; a failed save rolls the append back.
    pub async fn add(&mut self, key: CourseKey) -> Result<(), SelectionError> {
        if self.selected.contains(&key) {
            return Err(SelectionError::AlreadySelected { key });
        }

        let candidate = self
            .catalog
            .find(&key)
            .ok_or_else(|| SelectionError::UnknownCourse { key: key.clone() })?;

        for existing_key in &self.selected {
            // Stale keys cannot conflict; they resolve to nothing.
            let Some(existing) = self.catalog.find(existing_key) else {
                continue;
            };
            if let Some(conflict) = find_conflict(existing, candidate) {
                return Err(SelectionError::ScheduleConflict(conflict));
            }
        }

        self.selected.push(key.clone());
        if let Err(e) = self.persist().await {
            self.selected.pop();
            return Err(e.into());
        }
        debug!("course {} added, selection size {}", key, self.selected.len());
        Ok(())
    }

    /// Remove a course section from the selection.
    ///
    /// Fails with `NotSelected` (and triggers no persistence write) when
    /// the key is absent. A failed save puts the key back in place.
    pub async fn remove(&mut self, key: &CourseKey) -> Result<(), SelectionError> {
        let Some(index) = self.selected.iter().position(|k| k == key) else {
            return Err(SelectionError::NotSelected { key: key.clone() });
        };

        let removed = self.selected.remove(index);
        if let Err(e) = self.persist().await {
            self.selected.insert(index, removed);
            return Err(e.into());
        }
        debug!("course {} removed, selection size {}", key, self.selected.len());
        Ok(())
    }

    /// Clear the whole selection after explicit confirmation.
    ///
    /// Fails with `EmptySelection` when there is nothing to clear. The
    /// confirmation is awaited before anything changes; a declined
    /// confirmation returns [`ResetOutcome::Cancelled`] with state and
    /// slot untouched. A failed save restores the previous selection.
    pub async fn reset(
        &mut self,
        confirmation: &dyn ResetConfirmation,
    ) -> Result<ResetOutcome, SelectionError> {
        if self.selected.is_empty() {
            return Err(SelectionError::EmptySelection);
        }

        if !confirmation.confirm_reset().await {
            debug!("reset declined, selection untouched");
            return Ok(ResetOutcome::Cancelled);
        }

        let previous = std::mem::take(&mut self.selected);
        if let Err(e) = self.persist().await {
            self.selected = previous;
            return Err(e.into());
        }
        debug!("selection cleared");
        Ok(ResetOutcome::Cleared)
    }

    /// Current summary (count and total units).
    pub fn summary(&self) -> SelectionSummary {
        summarize(&self.selected, &self.catalog)
    }

    /// Current grid projection for the render sink.
    pub fn grid(&self, config: &GridConfig) -> GridData {
        layout_grid(&self.selected_courses(), config)
    }

    /// Plain-text export of the current selection.
    pub fn export_text(&self) -> String {
        render_selection_text(&self.selected, &self.catalog)
    }

    async fn persist(&self) -> Result<(), StorageError> {
        self.repository.save(&self.selected).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryRepository;

    const CATALOG: &str = "\
# X
code=X
name=درس X
units=3
شنبه;08:00;10:00

# Y
code=Y
name=درس Y
units=2
شنبه;09:00;11:00

# Z
code=Z
name=درس Z
units=1
دوشنبه;08:00;11:00
";

    fn planner() -> (SelectionPlanner, Arc<MemoryRepository>) {
        let catalog = Arc::new(Catalog::parse(CATALOG));
        let repo = Arc::new(MemoryRepository::new());
        let planner = SelectionPlanner::new(catalog, repo.clone());
        (planner, repo)
    }

    fn key(code: &str) -> CourseKey {
        CourseKey::new(code, 1)
    }

    #[tokio::test]
    async fn test_add_persists_selection() {
        let (mut planner, repo) = planner();
        planner.add(key("X")).await.unwrap();

        assert_eq!(planner.selected(), &[key("X")]);
        assert_eq!(repo.load().await.unwrap(), Some(vec![key("X")]));
    }

    #[tokio::test]
    async fn test_add_duplicate_rejected() {
        let (mut planner, repo) = planner();
        planner.add(key("X")).await.unwrap();

        let err = planner.add(key("X")).await.unwrap_err();
        assert!(matches!(err, SelectionError::AlreadySelected { .. }));
        assert_eq!(planner.selected().len(), 1);
        assert_eq!(repo.save_count(), 1);
    }

    #[tokio::test]
    async fn test_add_unknown_course_rejected() {
        let (mut planner, repo) = planner();
        let err = planner.add(key("NOPE")).await.unwrap_err();

        assert!(matches!(err, SelectionError::UnknownCourse { .. }));
        assert_eq!(repo.save_count(), 0);
    }

    #[tokio::test]
    async fn test_add_conflicting_course_rejected_unchanged() {
        let (mut planner, repo) = planner();
        planner.add(key("X")).await.unwrap();

        let err = planner.add(key("Y")).await.unwrap_err();
        let SelectionError::ScheduleConflict(conflict) = err else {
            panic!("expected schedule conflict");
        };
        assert_eq!(conflict.first_key, key("X"));
        assert_eq!(conflict.second_key, key("Y"));
        let (start, end) = conflict.overlap_window();
        assert_eq!(start.hhmm(), "09:00");
        assert_eq!(end.hhmm(), "10:00");

        // idempotent rejection: no mutation, no extra write
        assert_eq!(planner.selected(), &[key("X")]);
        assert_eq!(repo.save_count(), 1);
    }

    #[tokio::test]
    async fn test_add_non_conflicting_courses() {
        let (mut planner, _) = planner();
        planner.add(key("X")).await.unwrap();
        planner.add(key("Z")).await.unwrap();
        assert_eq!(planner.selected().len(), 2);
    }

    #[tokio::test]
    async fn test_remove_persists() {
        let (mut planner, repo) = planner();
        planner.add(key("X")).await.unwrap();
        planner.remove(&key("X")).await.unwrap();

        assert!(planner.selected().is_empty());
        assert_eq!(repo.load().await.unwrap(), Some(vec![]));
    }

    #[tokio::test]
    async fn test_remove_absent_no_write() {
        let (mut planner, repo) = planner();
        planner.add(key("X")).await.unwrap();

        let err = planner.remove(&key("Z")).await.unwrap_err();
        assert!(matches!(err, SelectionError::NotSelected { .. }));
        assert_eq!(planner.selected(), &[key("X")]);
        assert_eq!(repo.save_count(), 1);
    }

    #[tokio::test]
    async fn test_reset_empty_selection() {
        let (mut planner, _) = planner();
        let err = planner.reset(&PresetDecision(true)).await.unwrap_err();
        assert!(matches!(err, SelectionError::EmptySelection));
    }

    #[tokio::test]
    async fn test_reset_declined_leaves_state() {
        let (mut planner, repo) = planner();
        planner.add(key("X")).await.unwrap();

        let outcome = planner.reset(&PresetDecision(false)).await.unwrap();
        assert_eq!(outcome, ResetOutcome::Cancelled);
        assert_eq!(planner.selected(), &[key("X")]);
        assert_eq!(repo.load().await.unwrap(), Some(vec![key("X")]));
    }

    #[tokio::test]
    async fn test_reset_confirmed_clears_and_persists() {
        let (mut planner, repo) = planner();
        planner.add(key("X")).await.unwrap();

        let outcome = planner.reset(&PresetDecision(true)).await.unwrap();
        assert_eq!(outcome, ResetOutcome::Cleared);
        assert!(planner.selected().is_empty());
        assert_eq!(repo.load().await.unwrap(), Some(vec![]));
    }

    #[tokio::test]
    async fn test_restore_roundtrip() {
        let catalog = Arc::new(Catalog::parse(CATALOG));
        let repo = Arc::new(MemoryRepository::new());

        let mut planner = SelectionPlanner::new(catalog.clone(), repo.clone());
        planner.add(key("X")).await.unwrap();
        planner.add(key("Z")).await.unwrap();

        let mut restored = SelectionPlanner::new(catalog, repo);
        restored.restore().await;
        assert_eq!(restored.selected(), &[key("X"), key("Z")]);
    }

    #[tokio::test]
    async fn test_restore_empty_slot() {
        let (mut planner, _) = planner();
        planner.restore().await;
        assert!(planner.selected().is_empty());
    }

    #[tokio::test]
    async fn test_restore_tolerates_stale_keys() {
        let catalog = Arc::new(Catalog::parse(CATALOG));
        let repo = Arc::new(MemoryRepository::with_selection(vec![
            key("X"),
            CourseKey::new("REMOVED", 4),
        ]));

        let mut planner = SelectionPlanner::new(catalog, repo);
        planner.restore().await;

        // stale key kept in the sequence, counted but unit-less
        assert_eq!(planner.selected().len(), 2);
        let summary = planner.summary();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.total_units, 3);
        assert_eq!(planner.selected_courses().len(), 1);
    }

    #[tokio::test]
    async fn test_restore_drops_duplicates() {
        let catalog = Arc::new(Catalog::parse(CATALOG));
        let repo = Arc::new(MemoryRepository::with_selection(vec![
            key("X"),
            key("X"),
            key("Z"),
        ]));

        let mut planner = SelectionPlanner::new(catalog, repo);
        planner.restore().await;
        assert_eq!(planner.selected(), &[key("X"), key("Z")]);
    }

    #[tokio::test]
    async fn test_grid_and_export_views() {
        let (mut planner, _) = planner();
        planner.add(key("Z")).await.unwrap();

        let grid = planner.grid(&GridConfig::default());
        assert_eq!(grid.blocks.len(), 1);
        assert_eq!(grid.blocks[0].width_percent, 300.0);

        let text = planner.export_text();
        assert!(text.contains("درس Z"));
    }
}
