//! HTTP server command for the trivia API

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use trivia_server::db::{migrations, seed, MemoryRepository, PgRepository, TriviaRepository};
use trivia_server::run_server;

use crate::config::TriviaConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5000)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides config/environment)
    #[arg(long, conflicts_with = "in_memory")]
    pub database_url: Option<String>,

    /// Keep all data in process instead of PostgreSQL
    #[arg(long)]
    pub in_memory: bool,

    /// Insert the starter categories and questions before serving
    #[arg(long)]
    pub seed: bool,

    /// Skip schema migration on startup
    #[arg(long, conflicts_with = "in_memory")]
    pub no_migrate: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, mut config: TriviaConfig) -> Result<()> {
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    if let Some(url) = args.database_url {
        config.database.url = url;
    }

    let repo: Arc<dyn TriviaRepository> = if args.in_memory {
        tracing::warn!("Using in-memory storage, data is lost on shutdown");
        Arc::new(MemoryRepository::new())
    } else {
        let pool = super::connect(&config).await?;
        if !args.no_migrate {
            migrations::run(&pool)
                .await
                .context("Failed to run migrations")?;
        }
        Arc::new(PgRepository::new(pool))
    };

    if args.seed {
        let report = seed::run(repo.as_ref())
            .await
            .context("Failed to seed database")?;
        tracing::info!(
            categories = report.categories,
            questions = report.questions,
            "Seed complete"
        );
    }

    tracing::info!("Starting trivia server on {}", config.server.bind);

    // Blocks until shutdown
    run_server(repo, config.server_config())
        .await
        .context("Server error")?;

    Ok(())
}
