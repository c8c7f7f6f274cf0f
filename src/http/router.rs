//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression,
//! tracing), and creates the axum router ready for serving.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        .route("/catalog", get(handlers::get_catalog))
        .route("/selection", get(handlers::get_selection))
        .route("/selection/courses", post(handlers::add_course))
        .route("/selection/courses/{key}", delete(handlers::remove_course))
        .route("/selection/reset", post(handlers::reset_selection))
        .route("/selection/export", get(handlers::export_selection));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::RepositoryFactory;
    use crate::models::Catalog;
    use crate::services::grid::GridConfig;
    use crate::services::selection::SelectionPlanner;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let catalog = Arc::new(Catalog::empty());
        let repository = RepositoryFactory::create_memory();
        let planner = SelectionPlanner::new(catalog.clone(), repository.clone());
        let state = AppState::new(planner, catalog, repository, GridConfig::default());
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
