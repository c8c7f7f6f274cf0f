//! Planner HTTP Server Binary
//!
//! Entry point for the course-planner REST API server. It loads the
//! configuration, parses the catalog, restores the persisted selection,
//! and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the durable JSON-file slot (default)
//! cargo run --bin planner-server
//!
//! # Run with the in-memory slot
//! PLANNER_REPOSITORY_TYPE=memory cargo run --bin planner-server
//! ```
//!
//! # Environment Variables
//!
//! - `PLANNER_CONFIG`: Path to planner.toml (default: searched in standard locations)
//! - `PLANNER_CATALOG_PATH`, `PLANNER_REPOSITORY_TYPE`, `PLANNER_SELECTION_PATH`,
//!   `PLANNER_FIRST_HOUR`, `PLANNER_LAST_HOUR`, `PLANNER_HOST`, `PLANNER_PORT`:
//!   individual setting overrides
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use course_planner::config::PlannerConfig;
use course_planner::db::RepositoryFactory;
use course_planner::http::{create_router, AppState};
use course_planner::models::Catalog;
use course_planner::services::selection::SelectionPlanner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Course Planner HTTP Server");

    let config = PlannerConfig::load().map_err(|e| anyhow::anyhow!(e.to_string()))?;

    // A missing catalog is not fatal: the planner serves an empty catalog
    // and the persisted selection simply resolves to stale keys.
    let catalog = match tokio::fs::read_to_string(&config.catalog.path).await {
        Ok(text) => Catalog::parse(&text),
        Err(e) => {
            warn!(
                "catalog file {} unreadable ({}), serving empty catalog",
                config.catalog.path, e
            );
            Catalog::empty()
        }
    };
    info!(
        "Catalog loaded: {} courses, checksum {}",
        catalog.len(),
        &catalog.checksum[..12]
    );
    let catalog = Arc::new(catalog);

    let repository =
        RepositoryFactory::from_config(&config).map_err(|e| anyhow::anyhow!(e.to_string()))?;
    info!("Repository initialized successfully");

    let mut planner = SelectionPlanner::new(catalog.clone(), repository.clone());
    planner.restore().await;
    info!("Selection restored: {} courses", planner.selected().len());

    let state = AppState::new(planner, catalog, repository, config.grid_config());
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("invalid server bind address")?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
