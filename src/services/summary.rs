//! Summary statistics over the current selection.

use serde::{Deserialize, Serialize};

use crate::models::{Catalog, CourseKey};

/// Derived summary of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionSummary {
    /// Number of selected keys, stale ones included.
    pub count: usize,
    /// Sum of credit units over catalog-resolvable keys.
    pub total_units: u32,
}

/// Compute the selection summary.
///
/// Keys that no longer resolve in the catalog still count toward `count`
/// but contribute 0 units; a stale persisted selection never fails here.
pub fn summarize(selection: &[CourseKey], catalog: &Catalog) -> SelectionSummary {
    SelectionSummary {
        count: selection.len(),
        total_units: selection
            .iter()
            .filter_map(|key| catalog.find(key))
            .map(|course| course.units)
            .sum(),
    }
}
