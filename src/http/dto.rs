//! Data Transfer Objects for the HTTP API.
//!
//! The grid and summary types already derive Serialize/Deserialize in the
//! service layer and are re-exported here; this module adds the request
//! bodies and the composite view returned after every mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::services::grid::{GridBlock, GridData, GridWarning};
pub use crate::services::summary::SelectionSummary;

use crate::models::{Course, CourseKey};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
    /// Storage backend status
    pub storage: String,
}

/// One catalog course as served to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDto {
    /// Canonical "<code>-<group>" key
    pub key: CourseKey,
    #[serde(flatten)]
    pub course: Course,
}

impl From<&Course> for CourseDto {
    fn from(course: &Course) -> Self {
        Self {
            key: course.key(),
            course: course.clone(),
        }
    }
}

/// Catalog listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    /// SHA-256 of the catalog source text
    pub checksum: String,
    /// When the catalog was parsed
    pub loaded_at: DateTime<Utc>,
    pub total: usize,
    pub courses: Vec<CourseDto>,
}

/// The recomputed selection view returned after every read or mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionView {
    /// Ordered selected keys
    pub courses: Vec<CourseKey>,
    pub summary: SelectionSummary,
    pub grid: GridData,
}

/// Request body for adding a course section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCourseRequest {
    /// Canonical "<code>-<group>" key
    pub key: String,
}

/// Request body for resetting the selection. The HTTP caller acts as the
/// confirmation collaborator through the `confirm` flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetRequest {
    #[serde(default)]
    pub confirm: bool,
}

/// Response for a reset request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetResponse {
    /// True when the selection was cleared; false when the caller
    /// declined confirmation.
    pub cleared: bool,
    pub selection: SelectionView,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_dto_flattens_course_fields() {
        let catalog = crate::models::Catalog::parse("# t\ncode=A\nname=n\nunits=2\n");
        let dto = CourseDto::from(&catalog.courses()[0]);
        let value = serde_json::to_value(&dto).unwrap();

        assert_eq!(value["key"], "A-1");
        assert_eq!(value["code"], "A");
        assert_eq!(value["units"], 2);
    }

    #[test]
    fn test_reset_request_confirm_defaults_false() {
        let req: ResetRequest = serde_json::from_str("{}").unwrap();
        assert!(!req.confirm);
    }
}
