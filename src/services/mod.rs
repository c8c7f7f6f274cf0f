//! Service layer for planner business logic.
//!
//! Services sit between the catalog/time models and the HTTP layer: the
//! conflict detector and the pure projection functions (grid, summary,
//! export) are free functions; the selection planner owns the mutable
//! state and orchestrates conflict checks and persistence.

pub mod conflicts;

pub mod export;

pub mod grid;

pub mod selection;

pub mod summary;

pub use conflicts::{find_conflict, MeetingConflict};
pub use export::render_selection_text;
pub use grid::{layout_grid, GridBlock, GridConfig, GridData, GridWarning};
pub use selection::{
    PresetDecision, ResetConfirmation, ResetOutcome, SelectionError, SelectionPlanner,
};
pub use summary::{summarize, SelectionSummary};
