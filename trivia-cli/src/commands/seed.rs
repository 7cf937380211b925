//! Seed the starter categories and questions

use anyhow::{Context, Result};
use clap::Parser;
use trivia_server::db::{migrations, seed, PgRepository, TriviaRepository};

use crate::config::TriviaConfig;

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,
}

/// Migrate, then insert the starter data unless categories already exist
pub async fn run_seed(args: SeedArgs, mut config: TriviaConfig) -> Result<()> {
    if let Some(url) = args.database_url {
        config.database.url = url;
    }

    let pool = super::connect(&config).await?;
    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    let repo = PgRepository::new(pool);
    let report = seed::run(&repo)
        .await
        .context("Failed to seed database")?;

    if report.categories == 0 {
        let questions = repo
            .count_questions()
            .await
            .context("Failed to count questions")?;
        println!(
            "Database already has categories ({} questions), nothing seeded",
            questions
        );
    } else {
        println!(
            "Seeded {} categories and {} questions",
            report.categories, report.questions
        );
    }
    Ok(())
}
