//! `draft` command: create the neonatal foster plea draft

use chrono::Utc;
use colored::Colorize;

use super::{build_draft_service, build_renderer, open_sheet};
use crate::config::Config;
use crate::email::Draft;
use crate::error::Result;
use crate::scenario::create_neonatal_sg_draft;

/// Create the neonatal SG plea draft from the configured workbook
///
/// Prints the saved draft's location.
pub fn run_draft(config: &Config) -> Result<Draft> {
    let source = open_sheet(config)?;
    let renderer = build_renderer(config)?;
    let drafts = build_draft_service(config)?;

    let draft = create_neonatal_sg_draft(&source, &renderer, &drafts, Utc::now())?;

    match &draft.path {
        Some(path) => println!(
            "{} {}",
            "Draft saved:".green(),
            path.display().to_string().cyan()
        ),
        None => println!("{} {}", "Draft saved:".green(), draft.id.cyan()),
    }

    Ok(draft)
}
