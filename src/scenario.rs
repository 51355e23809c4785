//! The neonatal syringe-gruel foster plea
//!
//! Neonatal orphans on syringe-gruel feeding ("SG") whose status is still
//! "Foster Plea" (not on hold) go out in one dated plea email. The filter,
//! heading, subject and timezone are fixed.

use chrono::{DateTime, Utc};

use crate::email::{resolve_timezone, Draft, DraftCreator, DraftService, TemplateRenderer};
use crate::error::Result;
use crate::plea::{EntryFilter, PleaEntry};
use crate::sheet::{extract_entries, RowSource};

/// Entries that go on the neonatal SG plea
pub const NEONATAL_SG_FILTER: EntryFilter<'static> =
    EntryFilter::exact("Neonatal Orphan", "Foster Plea", "SG");

/// Heading shown above the entries
pub const NEONATAL_SG_HEADING: &str = "Syringe Gruelies (3-6 weeks old)";

/// Subject title; the date is appended
pub const NEONATAL_SUBJECT_TITLE: &str = "Neonatal Foster Plea";

/// Timezone the subject date is taken in
pub const PLEA_TIMEZONE: &str = "CST";

/// Message logged once the draft is saved
pub const COMPLETION_MESSAGE: &str = "Done!";

/// Read the sheet and keep the entries that go on the neonatal SG plea
pub fn neonatal_sg_entries(source: &dyn RowSource) -> Result<Vec<PleaEntry>> {
    let entries = extract_entries(source)?;
    let selected = NEONATAL_SG_FILTER.apply(&entries);

    tracing::info!(
        extracted = entries.len(),
        selected = selected.len(),
        filter = %NEONATAL_SG_FILTER.summary(),
        "Selected plea entries"
    );

    Ok(selected)
}

/// Create the neonatal SG foster plea draft
///
/// Reads the sheet, filters it, renders the email and saves one draft.
/// A run with no matching entries still saves a draft.
///
/// # Errors
///
/// Retrieval, template and draft submission errors propagate unchanged
pub fn create_neonatal_sg_draft(
    source: &dyn RowSource,
    renderer: &dyn TemplateRenderer,
    drafts: &dyn DraftService,
    now: DateTime<Utc>,
) -> Result<Draft> {
    let entries = neonatal_sg_entries(source)?;

    let creator = DraftCreator::new(renderer, drafts, resolve_timezone(PLEA_TIMEZONE)?);
    let draft = creator.create(NEONATAL_SUBJECT_TITLE, NEONATAL_SG_HEADING, &entries, now)?;

    tracing::info!("{}", COMPLETION_MESSAGE);

    Ok(draft)
}
