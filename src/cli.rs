//! Command-line interface definition for foster-plea
//!
//! This module defines the CLI structure using clap's derive API.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// foster-plea - draft foster plea emails from the intake sheet
///
/// Reads the animal intake workbook, picks the neonatal orphans on
/// syringe-gruel feeding that still need a foster, and saves a dated plea
/// email as an unsent draft.
#[derive(Parser, Debug, Clone)]
#[command(name = "foster-plea")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for foster-plea
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create the neonatal syringe-gruel foster plea draft
    Draft {
        /// Intake workbook to read (overrides sheet.path)
        #[arg(short, long)]
        sheet: Option<PathBuf>,

        /// Directory to save the draft in (overrides drafts.dir)
        #[arg(short, long)]
        drafts_dir: Option<PathBuf>,
    },

    /// Render the plea email body without creating a draft
    Preview {
        /// Intake workbook to read (overrides sheet.path)
        #[arg(short, long)]
        sheet: Option<PathBuf>,

        /// Write the HTML to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the entries read from the intake workbook
    Entries {
        /// Intake workbook to read (overrides sheet.path)
        #[arg(short, long)]
        sheet: Option<PathBuf>,

        /// Show every complete entry, not only those going on the plea
        #[arg(short, long)]
        all: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Workbook override given on the command line, if any
    pub fn sheet(&self) -> Option<&Path> {
        match self {
            Commands::Draft { sheet, .. }
            | Commands::Preview { sheet, .. }
            | Commands::Entries { sheet, .. } => sheet.as_deref(),
        }
    }

    /// Drafts directory override given on the command line, if any
    pub fn drafts_dir(&self) -> Option<&Path> {
        match self {
            Commands::Draft { drafts_dir, .. } => drafts_dir.as_deref(),
            _ => None,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            verbose: false,
            command: Commands::Draft {
                sheet: None,
                drafts_dir: None,
            },
        }
    }
}
