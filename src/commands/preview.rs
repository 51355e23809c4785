//! `preview` command: render the plea body without saving a draft

use std::path::Path;

use anyhow::Context;

use super::{build_renderer, open_sheet};
use crate::config::Config;
use crate::email::compose_body;
use crate::error::Result;
use crate::scenario::{neonatal_sg_entries, NEONATAL_SG_HEADING};

/// Render the neonatal SG plea body
///
/// Writes the HTML to `output` when given, otherwise to stdout.
pub fn run_preview(config: &Config, output: Option<&Path>) -> Result<()> {
    let source = open_sheet(config)?;
    let renderer = build_renderer(config)?;

    let entries = neonatal_sg_entries(&source)?;
    let body = compose_body(&renderer, NEONATAL_SG_HEADING, &entries)?;

    match output {
        Some(path) => {
            std::fs::write(path, &body)
                .with_context(|| format!("Failed to write preview to {}", path.display()))?;
            tracing::info!(path = %path.display(), "Preview written");
        }
        None => println!("{}", body),
    }

    Ok(())
}
