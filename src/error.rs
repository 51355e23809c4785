//! Error types for foster-plea
//!
//! This module defines the error kinds the plea pipeline can surface,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for foster-plea operations
///
/// Each pipeline stage reports failures under its own variant. Nothing is
/// retried or recovered; the error is tagged with its kind and propagated
/// to the caller.
#[derive(Error, Debug)]
pub enum FosterPleaError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The spreadsheet could not be opened or read
    #[error("Data retrieval error: {0}")]
    Retrieval(String),

    /// Template registration or rendering failed
    #[error("Template error: {0}")]
    Template(String),

    /// The draft could not be written to the draft store
    #[error("Draft submission error: {0}")]
    DraftSubmission(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for foster-plea operations
///
/// Uses `anyhow::Error` so callers can attach context while the typed
/// `FosterPleaError` stays recoverable through `downcast_ref`.
pub type Result<T> = anyhow::Result<T>;
