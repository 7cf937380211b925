//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;
use trivia_server::db::migrations;

use crate::config::TriviaConfig;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,
}

/// Create the categories and questions tables if they are missing
pub async fn run_migrate(args: MigrateArgs, mut config: TriviaConfig) -> Result<()> {
    if let Some(url) = args.database_url {
        config.database.url = url;
    }

    let pool = super::connect(&config).await?;
    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    println!("Schema is up to date");
    Ok(())
}
