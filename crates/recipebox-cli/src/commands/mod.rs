//! CLI command definitions and dispatch.

pub mod config;
pub mod migrate;
pub mod token;
pub mod user;

use clap::{Parser, Subcommand};

use recipebox_core::config::AppConfig;
use recipebox_core::error::AppError;

use crate::output::OutputFormat;

/// RecipeBox administration tool
#[derive(Debug, Parser)]
#[command(name = "recipebox", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (`config/{env}.toml`)
    #[arg(short, long, env = "RECIPEBOX_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Development token minting
    Token(token::TokenArgs),
    /// Stored user profiles
    User(user::UserArgs),
    /// Configuration inspection
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &self.env).await,
            Commands::Token(args) => token::execute(args, &self.env, self.format).await,
            Commands::User(args) => user::execute(args, &self.env, self.format).await,
            Commands::Config(args) => config::execute(args, &self.env).await,
        }
    }
}

/// Helper: load configuration for an environment
pub fn load_config(env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(env)
}
