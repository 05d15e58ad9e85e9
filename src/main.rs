//! RecipeBox server: recipe sharing through invite links.
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use recipebox_core::config::AppConfig;
use recipebox_core::error::AppError;
use recipebox_database::Stores;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from `config/` and the environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("RECIPEBOX_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
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

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting RecipeBox v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Open the document store ──────────────────────────
    tracing::info!(
        "Opening document store (provider: {})...",
        config.database.provider
    );
    let stores = Stores::connect(&config.database).await?;

    // ── Step 2: Migrations ───────────────────────────────────────
    if let Some(pool) = stores.pool.as_ref() {
        if config.database.run_migrations {
            recipebox_database::migration::run_migrations(pool.pool()).await?;
        } else {
            tracing::info!("Skipping migrations (database.run_migrations = false)");
        }
    }

    // ── Step 3: Verify connectivity ──────────────────────────────
    stores.health_check().await?;
    tracing::info!(store = stores.backend(), "Document store ready");

    // ── Step 4: Build services and serve HTTP ────────────────────
    recipebox_api::run_server(config, stores).await
}
