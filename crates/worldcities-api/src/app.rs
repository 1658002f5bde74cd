//! Application builder: wires repositories, state and router into a
//! running server.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;

use worldcities_core::config::AppConfig;
use worldcities_core::error::AppError;
use worldcities_database::{CityRepository, CountryRepository, DatabasePool};

use crate::router::build_router;
use crate::state::AppState;

/// Build the Axum application around PostgreSQL-backed repositories.
pub fn build_app(config: AppConfig, db: &DatabasePool) -> Router {
    let cities = Arc::new(CityRepository::new(db.pool().clone()));
    let countries = Arc::new(CountryRepository::new(db.pool().clone()));
    build_router(AppState::new(config, cities, countries))
}

/// Bind the configured address and serve until a shutdown signal arrives.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let app = build_app(config, &db);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(%addr, "WorldCities server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Closing database pool");
    if tokio::time::timeout(grace, db.close()).await.is_err() {
        tracing::warn!(grace_seconds = grace.as_secs(), "Database pool did not close in time");
    }

    tracing::info!("WorldCities server shut down gracefully");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
