/*!
Command handlers for the CLI

- `draft`: create the neonatal foster plea draft
- `preview`: render the plea email body only
- `entries`: list the entries read from the intake workbook

Handlers build the pipeline's collaborators from [`Config`] and hand them to
the library functions in [`crate::scenario`].
*/

pub mod draft;
pub mod entries;
pub mod preview;

use std::path::Path;

use crate::config::Config;
use crate::email::{EmlDraftService, HandlebarsRenderer};
use crate::error::Result;
use crate::sheet::WorkbookSource;

/// Open the configured intake workbook
///
/// # Arguments
///
/// * `config` - Configuration naming the workbook and, optionally, the sheet
///
/// # Errors
///
/// Returns a retrieval error if the workbook or sheet cannot be read
pub fn open_sheet(config: &Config) -> Result<WorkbookSource> {
    let source = WorkbookSource::open(&config.sheet.path, config.sheet.name.as_deref())?;
    tracing::info!(
        path = %source.path().display(),
        sheet = source.sheet_name(),
        "Reading intake sheet"
    );
    Ok(source)
}

/// Build the email renderer, using the configured template file if any
///
/// # Errors
///
/// Returns a template error if the configured file cannot be read or parsed
pub fn build_renderer(config: &Config) -> Result<HandlebarsRenderer> {
    match &config.template.path {
        Some(path) => HandlebarsRenderer::from_file(Path::new(path)),
        None => HandlebarsRenderer::new(),
    }
}

/// Build the draft service for the configured drafts directory
pub fn build_draft_service(config: &Config) -> Result<EmlDraftService> {
    let service = EmlDraftService::new(&config.drafts.dir);
    Ok(match config.from_mailbox()? {
        Some(from) => service.with_from(from),
        None => service,
    })
}
