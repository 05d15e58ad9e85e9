//! Development token commands.
//!
//! Tokens are signed with the configured secret, so they are accepted by a
//! server running with the same configuration.

use clap::{Args, Subcommand};
use serde::Serialize;

use recipebox_auth::JwtEncoder;
use recipebox_core::error::AppError;
use recipebox_core::types::UserId;
use recipebox_entity::user::UpsertUser;

use crate::output::{self, OutputFormat};

/// Arguments for token commands
#[derive(Debug, Args)]
pub struct TokenArgs {
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Issue a bearer token for a user
    Issue {
        /// Subject user id (prompted for when omitted)
        #[arg(short, long)]
        user: Option<String>,
        /// Given name claim
        #[arg(long)]
        first_name: Option<String>,
        /// Family name claim
        #[arg(long)]
        last_name: Option<String>,
        /// Email claim
        #[arg(long)]
        email: Option<String>,
    },
}

#[derive(Debug, Serialize)]
struct IssuedToken {
    user_id: String,
    token: String,
    expires_at: String,
}

/// Execute token commands
pub async fn execute(args: &TokenArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;

    match &args.command {
        TokenCommand::Issue {
            user,
            first_name,
            last_name,
            email,
        } => {
            let user_id = match user {
                Some(id) => id.clone(),
                None => dialoguer::Input::<String>::new()
                    .with_prompt("User id")
                    .interact_text()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };
            let user_id = UserId::new(user_id.trim());
            if user_id.is_blank() {
                return Err(AppError::validation("User id must not be empty"));
            }

            if config.auth.jwt_secret == recipebox_core::config::auth::DEFAULT_JWT_SECRET {
                output::print_warning("auth.jwt_secret is the development default");
            }

            let profile = UpsertUser {
                first_name: first_name.clone().unwrap_or_default(),
                last_name: last_name.clone().unwrap_or_default(),
                email: email.clone().unwrap_or_default(),
                avatar: String::new(),
            };
            let (token, expires_at) = JwtEncoder::new(&config.auth).issue(&user_id, profile)?;

            match format {
                OutputFormat::Json => output::print_item(&IssuedToken {
                    user_id: user_id.to_string(),
                    token,
                    expires_at: expires_at.to_rfc3339(),
                }),
                OutputFormat::Table => {
                    output::print_kv("User", user_id.as_str());
                    output::print_kv("Expires", &expires_at.to_rfc3339());
                    println!();
                    println!("{token}");
                }
            }
        }
    }

    Ok(())
}
