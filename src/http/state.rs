//! Application state for the HTTP server.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::db::SelectionRepository;
use crate::models::Catalog;
use crate::services::grid::GridConfig;
use crate::services::selection::SelectionPlanner;

/// Shared application state passed to all handlers.
///
/// The planner mutex is held for the whole mutate-persist-recompute
/// sequence of each request, which is what makes selection operations
/// atomic with respect to each other.
#[derive(Clone)]
pub struct AppState {
    /// Selection planner guarding the only mutable state
    pub planner: Arc<Mutex<SelectionPlanner>>,
    /// Read-only catalog shared for the session
    pub catalog: Arc<Catalog>,
    /// Repository handle for health checks
    pub repository: Arc<dyn SelectionRepository>,
    /// Grid display configuration
    pub grid: GridConfig,
}

impl AppState {
    /// Create a new application state around a restored planner.
    pub fn new(
        planner: SelectionPlanner,
        catalog: Arc<Catalog>,
        repository: Arc<dyn SelectionRepository>,
        grid: GridConfig,
    ) -> Self {
        Self {
            planner: Arc::new(Mutex::new(planner)),
            catalog,
            repository,
            grid,
        }
    }
}
