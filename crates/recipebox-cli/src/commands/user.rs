//! Stored user profile commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use recipebox_core::error::AppError;
use recipebox_database::Stores;
use recipebox_entity::user::User;

use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List every stored profile
    List,
}

#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    #[tabled(rename = "User ID")]
    user_id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Since")]
    created_at: String,
}

impl From<User> for UserRow {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id.to_string(),
            name: format!("{} {}", user.first_name, user.last_name)
                .trim()
                .to_string(),
            email: user.email,
            created_at: user.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute user commands
pub async fn execute(args: &UserArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let stores = Stores::connect(&config.database).await?;

    let result = match &args.command {
        UserCommand::List => stores.users.list().await.map(|users| {
            let rows: Vec<UserRow> = users.into_iter().map(UserRow::from).collect();
            output::print_list(&rows, format);
        }),
    };

    stores.close().await;
    result
}
