//! HTTP handler behavior, driven directly against the handler functions
//! with a shared `AppState`.

#![cfg(feature = "http-server")]

mod support;

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use course_planner::api::{Catalog, GridConfig, SelectionPlanner};
use course_planner::db::RepositoryFactory;
use course_planner::http::dto::{AddCourseRequest, ResetRequest};
use course_planner::http::{handlers, AppState};

use support::SAMPLE_CATALOG;

fn state() -> AppState {
    let catalog = Arc::new(Catalog::parse(SAMPLE_CATALOG));
    let repository = RepositoryFactory::create_memory();
    let planner = SelectionPlanner::new(catalog.clone(), repository.clone());
    AppState::new(planner, catalog, repository, GridConfig::default())
}

#[tokio::test]
async fn test_health_reports_connected_storage() {
    let Json(response) = handlers::health_check(State(state())).await.unwrap();
    assert_eq!(response.status, "ok");
    assert_eq!(response.storage, "connected");
}

#[tokio::test]
async fn test_catalog_listing() {
    let Json(response) = handlers::get_catalog(State(state())).await.unwrap();
    assert_eq!(response.total, 3);
    assert_eq!(response.checksum.len(), 64);
    assert!(response.courses.iter().any(|c| c.key.to_string() == "1511064-1"));
}

#[tokio::test]
async fn test_add_returns_refreshed_view() {
    let state = state();
    let Json(view) = handlers::add_course(
        State(state.clone()),
        Json(AddCourseRequest {
            key: "1511200-2".to_string(),
        }),
    )
    .await
    .unwrap();

    assert_eq!(view.summary.count, 1);
    assert_eq!(view.summary.total_units, 3);
    assert_eq!(view.grid.blocks.len(), 1);
    assert_eq!(view.grid.blocks[0].width_percent, 300.0);
}

#[tokio::test]
async fn test_conflicting_add_maps_to_409() {
    let state = state();
    handlers::add_course(
        State(state.clone()),
        Json(AddCourseRequest {
            key: "1511064-1".to_string(),
        }),
    )
    .await
    .unwrap();

    let err = handlers::add_course(
        State(state.clone()),
        Json(AddCourseRequest {
            key: "1511101-1".to_string(),
        }),
    )
    .await
    .unwrap_err();

    assert_eq!(err.into_response().status(), StatusCode::CONFLICT);

    // selection untouched by the refused add
    let Json(view) = handlers::get_selection(State(state)).await.unwrap();
    assert_eq!(view.summary.count, 1);
}

#[tokio::test]
async fn test_malformed_key_is_bad_request() {
    let err = handlers::add_course(
        State(state()),
        Json(AddCourseRequest {
            key: "not a key".to_string(),
        }),
    )
    .await
    .unwrap_err();

    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_remove_absent_is_404() {
    let err = handlers::remove_course(State(state()), Path("1511064-1".to_string()))
        .await
        .unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reset_confirmation_flow() {
    let state = state();
    handlers::add_course(
        State(state.clone()),
        Json(AddCourseRequest {
            key: "1511064-1".to_string(),
        }),
    )
    .await
    .unwrap();

    let Json(declined) = handlers::reset_selection(
        State(state.clone()),
        Json(ResetRequest { confirm: false }),
    )
    .await
    .unwrap();
    assert!(!declined.cleared);
    assert_eq!(declined.selection.summary.count, 1);

    let Json(cleared) = handlers::reset_selection(
        State(state.clone()),
        Json(ResetRequest { confirm: true }),
    )
    .await
    .unwrap();
    assert!(cleared.cleared);
    assert_eq!(cleared.selection.summary.count, 0);

    // resetting the now-empty selection is a 400 notice
    let err = handlers::reset_selection(State(state), Json(ResetRequest { confirm: true }))
        .await
        .unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_export_is_plain_text() {
    let state = state();
    handlers::add_course(
        State(state.clone()),
        Json(AddCourseRequest {
            key: "1511064-1".to_string(),
        }),
    )
    .await
    .unwrap();

    let response = handlers::export_selection(State(state))
        .await
        .unwrap()
        .into_response();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "text/plain; charset=utf-8"
    );
}
