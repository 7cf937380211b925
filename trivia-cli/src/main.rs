//! trivia CLI - run and administer the trivia API
//!
//! Subcommands:
//! - `serve`: run the HTTP API (PostgreSQL or in-memory)
//! - `migrate`: create the schema
//! - `seed`: insert the starter categories and questions
//! - `config`: inspect the resolved configuration

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use config::TriviaConfig;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "trivia",
    author,
    version,
    about = "Trivia game API server",
    long_about = "Serve the trivia API: browse categories, page and search questions, \
                  add or delete questions and play quiz rounds."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (default: $TRIVIA_CONFIG or ~/.trivia/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create database tables if missing
    Migrate(commands::migrate::MigrateArgs),
    /// Insert starter categories and questions into an empty database
    Seed(commands::seed::SeedArgs),
    /// Show resolved configuration
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    let config = TriviaConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, config).await?,
        Commands::Migrate(args) => commands::run_migrate(args, config).await?,
        Commands::Seed(args) => commands::run_seed(args, config).await?,
        Commands::Config(args) => commands::run_config(args, &config, cli.config)?,
    }
    Ok(())
}
