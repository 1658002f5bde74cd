//! Route definitions for the WorldCities HTTP API.
//!
//! All routes are mounted under `/api`.

use std::time::Duration;

use axum::http::StatusCode;
use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(city_routes())
        .merge(country_routes())
        .merge(health_routes());

    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);
    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// City list, read and write endpoints
fn city_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/cities",
            get(handlers::city::list_cities).post(handlers::city::create_city),
        )
        .route(
            "/cities/{id}",
            get(handlers::city::get_city).put(handlers::city::update_city),
        )
}

/// Country list, read and write endpoints
fn country_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/countries",
            get(handlers::country::list_countries).post(handlers::country::create_country),
        )
        .route(
            "/countries/{id}",
            get(handlers::country::get_country).put(handlers::country::update_country),
        )
}

/// Health probe
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
