//! Error types for mermaid-lint operations.
//!
//! Malformed diagrams are never errors; they are recorded as findings on
//! their blocks. [`LintError`] covers the operational faults around them.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for mermaid-lint operations.
#[derive(Debug, Error)]
pub enum LintError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("No documents to validate: pass input paths or configure a manual")]
    NoInput,
}

impl LintError {
    /// Create an `Io` error for the document at `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
