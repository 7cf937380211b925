//! Inspect the resolved configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::{TriviaConfig, CONFIG_ENV};

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommand>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the resolved configuration as TOML, password masked (default)
    Show,
    /// Print which config file is read
    Path,
}

pub fn run_config(args: ConfigArgs, config: &TriviaConfig, explicit: Option<PathBuf>) -> Result<()> {
    match args.command.unwrap_or(ConfigCommand::Show) {
        ConfigCommand::Show => {
            let rendered = toml::to_string_pretty(&config.redacted())
                .context("Failed to render configuration")?;
            print!("{}", rendered);
        }
        ConfigCommand::Path => {
            let path = explicit
                .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
                .unwrap_or_else(TriviaConfig::default_path);
            let state = if path.exists() { "" } else { " (not found, using defaults)" };
            println!("{}{}", path.display(), state);
        }
    }
    Ok(())
}
