//! Draft message storage
//!
//! A [`DraftService`] accepts a message and saves it unsent. The bundled
//! [`EmlDraftService`] writes each draft as an RFC 5322 `.eml` file that mail
//! clients open as an editable draft.

use std::path::{Path, PathBuf};

use chrono::Utc;
use lettre::message::header::{self, ContentType, HeaderName, HeaderValue, Headers};
use lettre::message::{Mailbox, Mailboxes, MultiPart, SinglePart};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{FosterPleaError, Result};

/// Extra parts of a draft beyond the plain body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftOptions {
    /// HTML alternative body
    pub html_body: String,
}

/// Receipt for a saved draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draft {
    /// Identifier assigned by the service
    pub id: String,
    /// Subject the draft was saved with
    pub subject: String,
    /// Location of the saved draft, for file-backed services
    pub path: Option<PathBuf>,
}

/// A service that saves unsent messages
pub trait DraftService {
    /// Save one draft
    ///
    /// `to` may be empty, leaving the recipient for whoever sends it.
    fn create_draft(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        options: &DraftOptions,
    ) -> Result<Draft>;
}

/// Writes drafts as `.eml` files into a directory
#[derive(Debug, Clone)]
pub struct EmlDraftService {
    dir: PathBuf,
    from: Option<Mailbox>,
}

impl EmlDraftService {
    /// Create a service writing into `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            from: None,
        }
    }

    /// Set the sender recorded on every draft
    pub fn with_from(mut self, from: Mailbox) -> Self {
        self.from = Some(from);
        self
    }

    /// Directory drafts are written to
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn render_message(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        options: &DraftOptions,
    ) -> Result<Vec<u8>> {
        let mut headers = Headers::new();

        if let Some(from) = &self.from {
            headers.set(header::From::from(Mailboxes::from(from.clone())));
        }

        if !to.is_empty() {
            let mailbox: Mailbox = to.parse().map_err(|e| {
                FosterPleaError::DraftSubmission(format!("invalid recipient '{}': {}", to, e))
            })?;
            headers.set(header::To::from(Mailboxes::from(mailbox)));
        }

        headers.set(header::Subject::from(subject.to_string()));
        headers.set(header::Date::now());
        headers.set(header::MIME_VERSION_1_0);
        headers.insert_raw(HeaderValue::new(
            HeaderName::new_from_ascii_str("X-Unsent"),
            "1".to_string(),
        ));

        let body = MultiPart::alternative()
            .singlepart(
                SinglePart::builder()
                    .header(ContentType::TEXT_PLAIN)
                    .body(body.to_string()),
            )
            .singlepart(
                SinglePart::builder()
                    .header(ContentType::TEXT_HTML)
                    .body(options.html_body.clone()),
            );

        let mut message = headers.to_string().into_bytes();
        message.extend_from_slice(&body.formatted());
        Ok(message)
    }
}

impl DraftService for EmlDraftService {
    fn create_draft(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        options: &DraftOptions,
    ) -> Result<Draft> {
        let message = self.render_message(to, subject, body, options)?;

        std::fs::create_dir_all(&self.dir).map_err(|e| {
            FosterPleaError::DraftSubmission(format!(
                "failed to create drafts directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let id = Uuid::new_v4().to_string();
        let file_name = format!("{}-{}.eml", Utc::now().format("%Y%m%d-%H%M%S"), id);
        let path = self.dir.join(file_name);

        std::fs::write(&path, message).map_err(|e| {
            FosterPleaError::DraftSubmission(format!(
                "failed to write draft {}: {}",
                path.display(),
                e
            ))
        })?;

        tracing::info!(
            subject = subject,
            path = %path.display(),
            "Draft saved"
        );

        Ok(Draft {
            id,
            subject: subject.to_string(),
            path: Some(path),
        })
    }
}
