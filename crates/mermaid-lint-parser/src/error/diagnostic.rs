//! The core finding type.
//!
//! A [`Diagnostic`] represents a single error or warning with an optional
//! code, labeled spans into the block content, and help text.

use std::fmt;

use serde::Serialize;

use crate::{
    error::{Severity, code::DiagnosticCode, label::Label},
    span::Span,
};

/// A finding recorded on a diagram block.
///
/// # Example
///
/// ```text
/// error[E201]: Mismatched brackets: '[' and ')'
///   --> docs/architecture.md:14:6
///    |
/// 14 | A[Start)-->B
///    |  -     ^ closes the wrong bracket
///    |  |
///    |  opened here
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<DiagnosticCode>,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    labels: Vec<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl Diagnostic {
    /// A finding that makes its block invalid.
    ///
    /// # Example
    ///
    /// ```
    /// # use mermaid_lint_parser::error::{Diagnostic, DiagnosticCode};
    /// # use mermaid_lint_parser::Span;
    ///
    /// let diag = Diagnostic::error("Empty mermaid block")
    ///     .with_code(DiagnosticCode::E001)
    ///     .with_help("add a diagram declaration such as `flowchart TD`");
    ///
    /// assert!(diag.severity().is_error());
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// A finding that is reported but leaves the block valid.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Stable `E`/`W` code used in JSON output and rendered findings.
    pub fn code(&self) -> Option<DiagnosticCode> {
        self.code
    }

    /// The line printed after `[ERROR]` or `[WARN]` in the text summary.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Spans into the block content, primary first. Empty for findings
    /// about the block as a whole, such as an unknown diagram type.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Point at the offending character, e.g. a closer with nothing to close.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Point at related context, e.g. where a mismatched opener was seen.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Suggest a fix, such as the closer that was expected.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // error[E201]: Mismatched brackets ...
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_error_finding() {
        let diag = Diagnostic::new(Severity::Error, "Empty mermaid block");

        assert!(diag.severity().is_error());
        assert!(!diag.severity().is_warning());
        assert_eq!(diag.message(), "Empty mermaid block");
        assert!(diag.code().is_none());
        assert!(diag.labels().is_empty());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_mismatch_labels_opener_and_closer() {
        let diag = Diagnostic::error("Mismatched brackets: '[' and ')'")
            .with_label(Span::new(7..8), "closes the wrong bracket")
            .with_secondary_label(Span::new(1..2), "opened here");

        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_primary());
        assert!(diag.labels()[1].is_secondary());
    }

    #[test]
    fn test_diagnostic_display_with_code() {
        let diag = Diagnostic::warning("Unclosed bracket '[' at position 3")
            .with_code(DiagnosticCode::W200);

        assert_eq!(
            diag.to_string(),
            "warning[W200]: Unclosed bracket '[' at position 3"
        );
    }

    #[test]
    fn test_diagnostic_display_without_code() {
        let diag = Diagnostic::error("Empty mermaid block");

        assert_eq!(diag.to_string(), "error: Empty mermaid block");
    }
}
