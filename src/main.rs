//! WorldCities server
//!
//! Entry point: loads configuration, sets up logging, connects to
//! PostgreSQL and serves the HTTP API.

use tracing_subscriber::{EnvFilter, fmt};

use worldcities_core::config::AppConfig;
use worldcities_core::error::AppError;
use worldcities_database::DatabasePool;
use worldcities_database::migration::run_migrations;

#[tokio::main]
async fn main() {
    let env = std::env::var("WORLDCITIES_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Initialize tracing. `RUST_LOG` overrides the configured level.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting WorldCities v{}", env!("CARGO_PKG_VERSION"));

    let db = DatabasePool::connect(&config.database).await?;

    if config.database.run_migrations {
        run_migrations(db.pool()).await?;
    } else {
        tracing::info!("Skipping database migrations");
    }

    worldcities_api::run_server(config, db).await
}
