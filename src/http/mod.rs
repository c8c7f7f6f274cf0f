//! HTTP server module for the planner backend.
//!
//! This module provides an axum-based HTTP server that exposes the
//! selection planner as a REST API. The UI collaborator is the render
//! sink: every mutation returns the recomputed selection view (keys,
//! summary, grid placement instructions) so the frontend can redraw.

#[cfg(feature = "http-server")]
pub mod handlers;

#[cfg(feature = "http-server")]
pub mod router;

#[cfg(feature = "http-server")]
pub mod state;

#[cfg(feature = "http-server")]
pub mod error;

#[cfg(feature = "http-server")]
pub mod dto;

#[cfg(feature = "http-server")]
pub use router::create_router;

#[cfg(feature = "http-server")]
pub use state::AppState;
