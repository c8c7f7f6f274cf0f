//! # Course Planner Backend
//!
//! Weekly class-schedule building engine.
//!
//! This crate helps a student assemble a weekly schedule by selecting
//! course sections from a read-only catalog, rejecting picks that overlap
//! in time, and projecting the result onto a day × hour grid for a
//! frontend to draw. The backend exposes a REST API via Axum.
//!
//! ## Features
//!
//! - **Time Model**: "HH:MM" parsing and the half-open overlap predicate
//! - **Conflict Detection**: first same-day overlapping slot pair between
//!   two course sections
//! - **Selection Store**: ordered, unique, conflict-free selection,
//!   persisted to a durable slot after every mutation
//! - **Grid Layout**: block placement instructions with multi-hour span
//!   widths and sub-hour offsets
//! - **Summaries and Export**: credit-unit totals and plain-text export
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: consolidated public type surface
//! - [`models`]: clock times, weekdays, courses, and the catalog parser
//! - [`services`]: conflict detection, the selection planner, grid
//!   projection, summaries, and export
//! - [`db`]: repository pattern over the durable selection slot
//! - [`config`]: TOML + environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod config;

pub mod db;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
