//! foster-plea - draft foster plea emails from the intake sheet
//!
#![doc = "Main entry point for the foster-plea CLI."]

use anyhow::Result;

use foster_plea::cli::{Cli, Commands};
use foster_plea::commands;
use foster_plea::config::Config;
use foster_plea::logging::init_logging;

fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    init_logging(&config.logging, cli.verbose)?;
    tracing::debug!("Loaded configuration from {}", config_path);

    // Validate configuration
    config.validate()?;

    match &cli.command {
        Commands::Draft { .. } => {
            tracing::info!("Creating neonatal foster plea draft");
            commands::draft::run_draft(&config)?;
        }
        Commands::Preview { output, .. } => {
            tracing::info!("Rendering plea preview");
            commands::preview::run_preview(&config, output.as_deref())?;
        }
        Commands::Entries { all, json, .. } => {
            commands::entries::list_entries(&config, *all, *json)?;
        }
    }

    Ok(())
}
