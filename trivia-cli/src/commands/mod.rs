//! Command implementations for the trivia CLI

pub mod config;
pub mod migrate;
pub mod seed;
pub mod serve;

pub use config::run_config;
pub use migrate::run_migrate;
pub use seed::run_seed;
pub use serve::run_serve;

use anyhow::{Context, Result};
use sqlx::PgPool;
use trivia_server::db::create_pool_with_settings;

use crate::config::TriviaConfig;

/// Connect to PostgreSQL using the resolved database settings
pub(crate) async fn connect(config: &TriviaConfig) -> Result<PgPool> {
    create_pool_with_settings(&config.database.url, config.database.pool_settings())
        .await
        .context("Failed to create database pool")
}
