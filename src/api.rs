//! Public API surface for the planner backend.
//!
//! This file consolidates the types callers and the HTTP layer need, so
//! embedding code can `use course_planner::api::*` without knowing the
//! module layout.

pub use crate::models::catalog::Catalog;
pub use crate::models::catalog::Course;
pub use crate::models::catalog::CourseKey;
pub use crate::models::catalog::MeetingSlot;
pub use crate::models::catalog::Weekday;
pub use crate::models::time::localize_digits;
pub use crate::models::time::overlaps;
pub use crate::models::time::ClockTime;
pub use crate::models::time::MalformedTime;

pub use crate::services::conflicts::find_conflict;
pub use crate::services::conflicts::MeetingConflict;
pub use crate::services::export::render_selection_text;
pub use crate::services::grid::layout_grid;
pub use crate::services::grid::GridBlock;
pub use crate::services::grid::GridConfig;
pub use crate::services::grid::GridData;
pub use crate::services::grid::GridWarning;
pub use crate::services::selection::PresetDecision;
pub use crate::services::selection::ResetConfirmation;
pub use crate::services::selection::ResetOutcome;
pub use crate::services::selection::SelectionError;
pub use crate::services::selection::SelectionPlanner;
pub use crate::services::summary::summarize;
pub use crate::services::summary::SelectionSummary;

pub use crate::config::PlannerConfig;
pub use crate::db::SelectionRepository;
pub use crate::db::StorageError;
