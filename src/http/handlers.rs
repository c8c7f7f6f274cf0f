//! HTTP handlers for the REST API.
//!
//! Each handler locks the planner for its whole mutate-and-recompute
//! sequence and returns the refreshed selection view, so the frontend
//! redraws from one consistent snapshot.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};

use super::dto::{
    AddCourseRequest, CatalogResponse, CourseDto, HealthResponse, ResetRequest, ResetResponse,
    SelectionView,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::CourseKey;
use crate::services::selection::{PresetDecision, ResetOutcome, SelectionPlanner};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn selection_view(planner: &SelectionPlanner, state: &AppState) -> SelectionView {
    SelectionView {
        courses: planner.selected().to_vec(),
        summary: planner.summary(),
        grid: planner.grid(&state.grid),
    }
}

fn parse_key(raw: &str) -> Result<CourseKey, AppError> {
    raw.parse().map_err(AppError::BadRequest)
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Verify the service is running and the selection slot is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let storage = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        storage,
    }))
}

// =============================================================================
// Catalog
// =============================================================================

/// GET /v1/catalog
///
/// List the full course catalog with its source checksum.
pub async fn get_catalog(State(state): State<AppState>) -> HandlerResult<CatalogResponse> {
    let courses: Vec<CourseDto> = state.catalog.courses().iter().map(Into::into).collect();

    Ok(Json(CatalogResponse {
        checksum: state.catalog.checksum.clone(),
        loaded_at: state.catalog.loaded_at,
        total: courses.len(),
        courses,
    }))
}

// =============================================================================
// Selection
// =============================================================================

/// GET /v1/selection
///
/// Current selection view: keys, summary, and grid projection.
pub async fn get_selection(State(state): State<AppState>) -> HandlerResult<SelectionView> {
    let planner = state.planner.lock().await;
    Ok(Json(selection_view(&planner, &state)))
}

/// POST /v1/selection/courses
///
/// Add a course section to the selection. Conflicting or duplicate picks
/// are refused with a 409 notice and leave the selection unchanged.
pub async fn add_course(
    State(state): State<AppState>,
    Json(request): Json<AddCourseRequest>,
) -> HandlerResult<SelectionView> {
    let key = parse_key(&request.key)?;

    let mut planner = state.planner.lock().await;
    planner.add(key).await?;
    Ok(Json(selection_view(&planner, &state)))
}

/// DELETE /v1/selection/courses/{key}
///
/// Remove a course section from the selection.
pub async fn remove_course(
    State(state): State<AppState>,
    Path(raw_key): Path<String>,
) -> HandlerResult<SelectionView> {
    let key = parse_key(&raw_key)?;

    let mut planner = state.planner.lock().await;
    planner.remove(&key).await?;
    Ok(Json(selection_view(&planner, &state)))
}

/// POST /v1/selection/reset
///
/// Clear the selection. The request body's `confirm` flag is the user's
/// confirmation decision; `confirm: false` cancels without touching state.
pub async fn reset_selection(
    State(state): State<AppState>,
    Json(request): Json<ResetRequest>,
) -> HandlerResult<ResetResponse> {
    let mut planner = state.planner.lock().await;
    let outcome = planner.reset(&PresetDecision(request.confirm)).await?;

    Ok(Json(ResetResponse {
        cleared: outcome == ResetOutcome::Cleared,
        selection: selection_view(&planner, &state),
    }))
}

/// GET /v1/selection/export
///
/// Plain-text export of the current selection.
pub async fn export_selection(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let planner = state.planner.lock().await;
    let text = planner.export_text();

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        text,
    ))
}
