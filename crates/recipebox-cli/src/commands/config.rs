//! Configuration inspection commands.

use clap::{Args, Subcommand};

use recipebox_core::config::AppConfig;
use recipebox_core::error::AppError;
use recipebox_database::connection::redact_url;

use crate::output;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration with secrets masked
    Show,
    /// Check that the configuration loads and is usable
    Validate,
}

/// Execute config commands
pub async fn execute(args: &ConfigArgs, env: &str) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = super::load_config(env)?;
            output::print_item(&masked(config));
        }
        ConfigCommand::Validate => {
            let config = super::load_config(env)?;
            check(&config)?;
            output::print_success(&format!("Configuration for '{env}' is valid"));
            output::print_kv(
                "Server",
                &format!("{}:{}", config.server.host, config.server.port),
            );
            output::print_kv("Store", &config.database.provider);
            if config.database.provider == "postgres" {
                output::print_kv("Database", &redact_url(&config.database.url));
            }
            output::print_kv("Log format", &config.logging.format);
        }
    }

    Ok(())
}

/// Hide secrets before printing.
fn masked(mut config: AppConfig) -> AppConfig {
    config.database.url = redact_url(&config.database.url);
    config.auth.jwt_secret = "****".to_string();
    config
}

fn check(config: &AppConfig) -> Result<(), AppError> {
    match config.database.provider.as_str() {
        "memory" => {}
        "postgres" if config.database.url.trim().is_empty() => {
            return Err(AppError::configuration(
                "database.url is required for the postgres provider",
            ));
        }
        "postgres" => {}
        other => {
            return Err(AppError::configuration(format!(
                "Unknown database provider: {other}"
            )));
        }
    }
    if !matches!(config.logging.format.as_str(), "json" | "pretty") {
        return Err(AppError::configuration(format!(
            "Unknown log format: {}",
            config.logging.format
        )));
    }
    Ok(())
}
