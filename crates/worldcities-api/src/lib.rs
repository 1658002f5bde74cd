//! # worldcities-api
//!
//! Axum HTTP layer for WorldCities: paginated list endpoints for cities and
//! countries, single-entity reads and writes, and a health probe. All routes
//! are mounted under `/api`.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::{AppState, EntityStore};
