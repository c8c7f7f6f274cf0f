//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::services::selection::SelectionError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Selection operation refused (all non-fatal user notices)
    Selection(SelectionError),
    /// Invalid request (validation error)
    BadRequest(String),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::Selection(e) => selection_response(e),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg)),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
        };

        (status, Json(error)).into_response()
    }
}

fn selection_response(err: SelectionError) -> (StatusCode, ApiError) {
    let message = err.to_string();
    match err {
        SelectionError::AlreadySelected { .. } => (
            StatusCode::CONFLICT,
            ApiError::new("ALREADY_SELECTED", message),
        ),
        SelectionError::ScheduleConflict(conflict) => {
            let (start, end) = conflict.overlap_window();
            (
                StatusCode::CONFLICT,
                ApiError::new("SCHEDULE_CONFLICT", message).with_details(format!(
                    "overlap window {} to {} on {}",
                    start.hhmm(),
                    end.hhmm(),
                    conflict.day
                )),
            )
        }
        SelectionError::EmptySelection => (
            StatusCode::BAD_REQUEST,
            ApiError::new("EMPTY_SELECTION", message),
        ),
        SelectionError::NotSelected { .. } => {
            (StatusCode::NOT_FOUND, ApiError::new("NOT_SELECTED", message))
        }
        SelectionError::UnknownCourse { .. } => (
            StatusCode::NOT_FOUND,
            ApiError::new("UNKNOWN_COURSE", message),
        ),
        SelectionError::Storage(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::new("STORAGE_ERROR", message),
        ),
    }
}

impl From<SelectionError> for AppError {
    fn from(err: SelectionError) -> Self {
        AppError::Selection(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CourseKey;

    #[test]
    fn test_selection_error_status_mapping() {
        let (status, body) = selection_response(SelectionError::AlreadySelected {
            key: CourseKey::new("A", 1),
        });
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.code, "ALREADY_SELECTED");

        let (status, body) = selection_response(SelectionError::EmptySelection);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "EMPTY_SELECTION");

        let (status, _) = selection_response(SelectionError::NotSelected {
            key: CourseKey::new("A", 1),
        });
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = selection_response(SelectionError::UnknownCourse {
            key: CourseKey::new("A", 1),
        });
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_carries_overlap_details() {
        let catalog = crate::models::Catalog::parse(
            "# x\ncode=X\nشنبه;08:00;10:00\n# y\ncode=Y\nشنبه;09:00;11:00\n",
        );
        let conflict = crate::services::find_conflict(
            catalog.find(&CourseKey::new("X", 1)).unwrap(),
            catalog.find(&CourseKey::new("Y", 1)).unwrap(),
        )
        .unwrap();

        let (status, body) = selection_response(SelectionError::ScheduleConflict(conflict));
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.code, "SCHEDULE_CONFLICT");
        assert!(body.details.unwrap().contains("09:00 to 10:00"));
    }
}
