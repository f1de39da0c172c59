//! mermaid-lint - Validation of Mermaid diagrams embedded in markdown.
//!
//! Extraction and per-block checks live in [`mermaid_lint_parser`]; this
//! crate aggregates them over many documents into a [`ValidationReport`],
//! renders the report as text or JSON, and enumerates documents on disk.

pub mod config;

mod error;
mod report;
mod source;

pub use mermaid_lint_parser::{DiagramBlock, DiagramType, Span, error as diagnostic};

pub use error::LintError;
pub use report::{FileReport, ReportBuilder, ValidationReport};
pub use source::{Document, DocumentSource};

/// Validate `documents` in order and aggregate the findings.
///
/// Malformed diagrams never abort the run; every block of every document
/// is checked.
///
/// # Examples
///
/// ```
/// use mermaid_lint::{Document, validate_documents};
///
/// let documents = [
///     Document::new("a.md", "```mermaid\nflowchart TD\nA-->B\n```\n"),
///     Document::new("b.md", "```mermaid\ngraph LR\nA]-->B\n```\n"),
/// ];
///
/// let report = validate_documents(&documents);
/// assert_eq!(report.total_blocks(), 2);
/// assert_eq!(report.error_blocks(), 1);
/// println!("{report}");
/// ```
pub fn validate_documents(documents: &[Document]) -> ValidationReport {
    let mut builder = ReportBuilder::new();
    for document in documents {
        builder.add_document(document.text(), document.label());
    }
    builder.finish()
}
