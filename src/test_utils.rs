//! Test utilities for foster-plea
//!
//! Temporary directory helpers, sample entries, and stand-ins for the
//! pipeline's collaborators.

use std::cell::RefCell;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::config::Config;
use crate::email::{Draft, DraftOptions, DraftService, EmailBindings, TemplateRenderer};
use crate::error::{FosterPleaError, Result};
use crate::plea::PleaEntry;
use crate::sheet::RowSource;

/// Create a temporary directory for testing
///
/// # Returns
///
/// Returns a TempDir that will be cleaned up when dropped
pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Create a test file with the given content
///
/// # Panics
///
/// Panics if file creation or writing fails
pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}

/// Assert that an error contains the expected message
///
/// # Panics
///
/// Panics if the result is Ok or if the error doesn't contain the expected message
pub fn assert_error_contains<T>(result: Result<T>, expected: &str) {
    match result {
        Ok(_) => panic!("Expected error containing '{}' but got Ok", expected),
        Err(e) => {
            let error_msg = e.to_string();
            assert!(
                error_msg.contains(expected),
                "Error message '{}' does not contain '{}'",
                error_msg,
                expected
            );
        }
    }
}

/// A complete neonatal foster plea entry with the given name and feeding tag
pub fn sample_entry(name: &str, feeding_notes: &str) -> PleaEntry {
    PleaEntry {
        animal_type: "Neonatal Orphan".to_string(),
        status: "Foster Plea".to_string(),
        name: name.to_string(),
        age: "3 weeks".to_string(),
        physical_description: "Grey tabby".to_string(),
        plea_notes: "Eats well".to_string(),
        photo: format!("https://example.org/photos/{}.jpg", name),
        feeding_notes: feeding_notes.to_string(),
    }
}

/// Create a test configuration with default values
pub fn test_config() -> Config {
    Config::default()
}

/// A row source whose backing sheet cannot be reached
pub struct UnavailableSource;

impl RowSource for UnavailableSource {
    fn max_rows(&self) -> Result<usize> {
        Err(FosterPleaError::Retrieval("sheet unavailable".to_string()).into())
    }

    fn read_range(&self, _rows: usize, _columns: usize) -> Result<Vec<Vec<String>>> {
        Err(FosterPleaError::Retrieval("sheet unavailable".to_string()).into())
    }
}

/// A renderer that always fails
pub struct FailingRenderer;

impl TemplateRenderer for FailingRenderer {
    fn render(&self, template: &str, _bindings: &EmailBindings<'_>) -> Result<String> {
        Err(FosterPleaError::Template(format!("template not found: {}", template)).into())
    }
}

/// A draft as it was handed to [`RecordingDraftService`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedDraft {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub html_body: String,
}

/// Draft service that keeps submissions in memory
#[derive(Default)]
pub struct RecordingDraftService {
    submitted: RefCell<Vec<SubmittedDraft>>,
    fail: bool,
}

impl RecordingDraftService {
    /// A service that rejects every draft
    pub fn failing() -> Self {
        Self {
            submitted: RefCell::default(),
            fail: true,
        }
    }

    /// Drafts accepted so far
    pub fn submitted(&self) -> Vec<SubmittedDraft> {
        self.submitted.borrow().clone()
    }
}

impl DraftService for RecordingDraftService {
    fn create_draft(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        options: &DraftOptions,
    ) -> Result<Draft> {
        if self.fail {
            return Err(FosterPleaError::DraftSubmission("mailbox offline".to_string()).into());
        }

        let mut submitted = self.submitted.borrow_mut();
        submitted.push(SubmittedDraft {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
            html_body: options.html_body.clone(),
        });

        Ok(Draft {
            id: format!("draft-{}", submitted.len()),
            subject: subject.to_string(),
            path: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_creation() {
        let dir = temp_dir();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_create_test_file() {
        let dir = temp_dir();
        let path = create_test_file(&dir, "test.txt", "content");
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "content");
    }

    #[test]
    fn test_assert_error_contains_success() {
        let result: Result<()> = Err(FosterPleaError::Config("test error message".to_string()).into());
        assert_error_contains(result, "test error");
    }

    #[test]
    #[should_panic(expected = "Expected error containing")]
    fn test_assert_error_contains_ok() {
        assert_error_contains(Ok(()), "error");
    }

    #[test]
    fn test_sample_entry_is_complete() {
        assert!(sample_entry("Biscuit", "SG").is_complete());
    }

    #[test]
    fn test_recording_service_counts_drafts() {
        let service = RecordingDraftService::default();
        let draft = service
            .create_draft("", "s", "", &DraftOptions::default())
            .unwrap();
        assert_eq!(draft.id, "draft-1");
        assert_eq!(service.submitted().len(), 1);
    }

    #[test]
    fn test_test_config_is_valid() {
        assert!(test_config().validate().is_ok());
    }
}
