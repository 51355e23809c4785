//! Plea email composition and drafting
//!
//! - [`template`]: renders the HTML body from plea entries
//! - [`subject`]: dated subject lines
//! - [`draft`]: saves the finished message as an unsent draft
//!
//! [`DraftCreator`] ties the three together: one call produces exactly one
//! draft, or none when rendering or saving fails.

pub mod draft;
pub mod subject;
pub mod template;

pub use draft::{Draft, DraftOptions, DraftService, EmlDraftService};
pub use subject::{resolve_timezone, subject_line};
pub use template::{compose_body, EmailBindings, HandlebarsRenderer, TemplateRenderer};

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::error::Result;
use crate::plea::PleaEntry;

/// Creates plea email drafts from entries
pub struct DraftCreator<'a> {
    renderer: &'a dyn TemplateRenderer,
    drafts: &'a dyn DraftService,
    timezone: Tz,
}

impl<'a> DraftCreator<'a> {
    /// Create a draft creator over the given collaborators
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        drafts: &'a dyn DraftService,
        timezone: Tz,
    ) -> Self {
        Self {
            renderer,
            drafts,
            timezone,
        }
    }

    /// Render and save one plea draft
    ///
    /// The subject is `"<subject_title> - <MM/DD/YY>"` with the date taken
    /// from `now` in the creator's timezone. The draft has no recipient, an
    /// empty plain body and the rendered entries as its HTML body.
    ///
    /// # Errors
    ///
    /// Returns the template error if rendering fails (no draft is saved) or
    /// the draft service error if saving fails
    pub fn create(
        &self,
        subject_title: &str,
        heading: &str,
        entries: &[PleaEntry],
        now: DateTime<Utc>,
    ) -> Result<Draft> {
        let subject = subject_line(subject_title, now, self.timezone);
        let options = DraftOptions {
            html_body: compose_body(self.renderer, heading, entries)?,
        };

        tracing::debug!(subject = %subject, entries = entries.len(), "Submitting draft");

        self.drafts.create_draft("", &subject, "", &options)
    }
}
