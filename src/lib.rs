//! foster-plea - draft foster plea emails from an intake spreadsheet
//!
//! Reads the animal intake workbook, selects the entries that belong on a
//! plea, renders them into an HTML email and saves it as an unsent draft.
//!
//! # Architecture
//!
//! - `sheet`: row sources and extraction of [`PleaEntry`] records
//! - `plea`: the entry record and entry filtering
//! - `email`: body templating, dated subjects and draft storage
//! - `scenario`: the built-in neonatal syringe-gruel plea
//! - `config`, `cli`, `commands`, `logging`: the command-line application
//! - `error`: error types and result aliases
//!
//! Every collaborator is passed in explicitly, so the pipeline runs the same
//! against a workbook on disk or rows held in memory.
//!
//! # Example
//!
//! ```no_run
//! use chrono::Utc;
//! use foster_plea::email::{EmlDraftService, HandlebarsRenderer};
//! use foster_plea::scenario::create_neonatal_sg_draft;
//! use foster_plea::sheet::WorkbookSource;
//!
//! fn main() -> anyhow::Result<()> {
//!     let source = WorkbookSource::open("plea.xlsx", None)?;
//!     let renderer = HandlebarsRenderer::new()?;
//!     let drafts = EmlDraftService::new("drafts");
//!
//!     let draft = create_neonatal_sg_draft(&source, &renderer, &drafts, Utc::now())?;
//!     println!("{}", draft.subject);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod email;
pub mod error;
pub mod logging;
pub mod plea;
pub mod scenario;
pub mod sheet;

// Re-export commonly used types
pub use config::Config;
pub use error::{FosterPleaError, Result};
pub use plea::{EntryFilter, PleaEntry};

#[cfg(test)]
pub mod test_utils;
