//! Error adapter for converting findings and [`LintError`] to miette diagnostics.
//!
//! This module provides the bridge between the library's plain data types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! Findings carry spans relative to their block's content. The adapter
//! shifts them into the source document so snippets point at the right
//! place in the file.

use std::fmt;

use miette::{
    Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan, NamedSource, Severity,
    SourceSpan,
};

use mermaid_lint::{DiagramBlock, Document, LintError, ValidationReport};
use mermaid_lint_parser::{Span, error::Diagnostic};

/// Adapter for a single finding on a diagram block.
pub struct DiagnosticAdapter<'a> {
    diag: &'a Diagnostic,
    block: &'a DiagramBlock,
    /// The whole document, named by its label
    src: NamedSource<String>,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    ///
    /// `document` is the full text of the document `block` was found in.
    pub fn new(diag: &'a Diagnostic, block: &'a DiagramBlock, document: &str) -> Self {
        Self {
            diag,
            block,
            src: NamedSource::new(block.source_label(), document.to_string()),
        }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .field("source_label", &self.block.source_label())
            .field("start_line", &self.block.start_line())
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diag.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<Severity> {
        if self.diag.severity().is_error() {
            Some(Severity::Error)
        } else {
            Some(Severity::Warning)
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            // Point at the opening fence when the finding has no span.
            let fence = Span::new(0..0);
            let span = span_to_miette(self.block.document_span(fence));
            let message = Some(format!("in this {}", self.block_kind()));
            return Some(Box::new(std::iter::once(
                LabeledSpan::new_primary_with_span(message, span),
            )));
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = span_to_miette(self.block.document_span(label.span()));
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

impl DiagnosticAdapter<'_> {
    fn block_kind(&self) -> String {
        self.block
            .diagram_type()
            .map_or_else(|| "mermaid block".to_string(), |t| format!("{t} block"))
    }
}

/// Adapter for [`LintError`] variants.
///
/// Operational errors have no source location.
pub struct ErrorAdapter<'a>(pub &'a LintError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            LintError::Io { .. } => "mermaid_lint::io",
            LintError::Walk(_) => "mermaid_lint::walk",
            LintError::Config(_) => "mermaid_lint::config",
            LintError::Serialize(_) => "mermaid_lint::serialize",
            LintError::NoInput => "mermaid_lint::no_input",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            LintError::NoInput => Some(Box::new(
                "pass files or directories, or list section files under [[manual.nav]] in config.toml",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable item that can be rendered by miette.
///
/// This enum wraps either a single finding or an operational error,
/// providing a uniform interface for rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A finding with source location information.
    Diagnostic(DiagnosticAdapter<'a>),
    /// An operational error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn severity(&self) -> Option<Severity> {
        match self {
            Reportable::Diagnostic(d) => d.severity(),
            Reportable::Error(e) => e.severity(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`Span`] to a miette [`SourceSpan`].
fn span_to_miette(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Convert a [`LintError`] into a list of reportable errors.
pub fn to_reportables(err: &LintError) -> Vec<Reportable<'_>> {
    vec![Reportable::Error(ErrorAdapter(err))]
}

/// Convert every finding in `report` into a reportable, errors first
/// within each block.
///
/// `documents` must be the slice the report was built from, in the same
/// order. Each block is drawn against the document it was found in, even
/// when several documents share a label.
pub fn findings_to_reportables<'a>(
    report: &'a ValidationReport,
    documents: &[Document],
) -> Vec<Reportable<'a>> {
    let mut reportables = Vec::new();
    for (index, document) in documents.iter().enumerate() {
        for block in report.document_blocks(index) {
            for diag in block.errors().iter().chain(block.warnings()) {
                reportables.push(Reportable::Diagnostic(DiagnosticAdapter::new(
                    diag,
                    block,
                    document.text(),
                )));
            }
        }
    }
    reportables
}

/// Render one reportable with miette's graphical handler.
///
/// Falls back to the plain message if rendering fails.
pub fn render(reportable: &Reportable<'_>) -> String {
    let reporter = GraphicalReportHandler::new();
    let mut writer = String::new();
    match reporter.render_report(&mut writer, reportable) {
        Ok(()) => writer,
        Err(_) => reportable.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use mermaid_lint::validate_documents;
    use mermaid_lint_parser::error::DiagnosticCode;

    use super::*;

    const TEXT: &str = "intro\n\n```mermaid\ngraph LR\n  A(x]-->B\n```\n";

    fn report() -> (Vec<Document>, ValidationReport) {
        let documents = vec![Document::new("guide.md", TEXT)];
        let report = validate_documents(&documents);
        (documents, report)
    }

    #[test]
    fn test_findings_in_block_order() {
        let (documents, report) = report();
        let reportables = findings_to_reportables(&report, &documents);

        // mismatched pair, then the unclosed opener
        assert_eq!(reportables.len(), 2);
        assert_eq!(reportables[0].to_string(), "Mismatched brackets: '(' and ']'");
        assert_eq!(reportables[1].to_string(), "Unclosed bracket '(' at position 12");
    }

    #[test]
    fn test_labels_point_into_document() {
        let (documents, report) = report();
        let block = &report.blocks()[0];
        let diag = &block.errors()[0];
        assert_eq!(diag.code(), Some(DiagnosticCode::E201));

        let adapter = DiagnosticAdapter::new(diag, block, documents[0].text());
        let labels: Vec<_> = adapter.labels().unwrap().collect();

        assert_eq!(labels.len(), 2);
        assert!(labels[0].primary());
        assert_eq!(&TEXT[labels[0].offset()..labels[0].offset() + labels[0].len()], "]");
        assert!(!labels[1].primary());
        assert_eq!(&TEXT[labels[1].offset()..labels[1].offset() + 1], "(");
    }

    #[test]
    fn test_severity_follows_finding() {
        let (documents, report) = report();
        let reportables = findings_to_reportables(&report, &documents);

        assert_eq!(reportables[0].severity(), Some(Severity::Error));
        assert_eq!(reportables[1].severity(), Some(Severity::Warning));
    }

    #[test]
    fn test_same_label_uses_own_document() {
        let first = "```mermaid\npie\n```\n";
        let second = "x\n\n\n```mermaid\ngraph LR\nA]-->B\n```\n";
        let documents = vec![
            Document::new("guide.md", first),
            Document::new("guide.md", second),
        ];
        let report = validate_documents(&documents);

        let reportables = findings_to_reportables(&report, &documents);
        assert_eq!(reportables.len(), 1);

        let labels: Vec<_> = reportables[0].labels().unwrap().collect();
        let offset = labels[0].offset();
        assert!(offset >= first.len());
        assert_eq!(&second[offset..offset + 1], "]");
    }

    #[test]
    fn test_unlabeled_finding_points_at_block() {
        let text = "```mermaid\nunknown stuff\n```\n";
        let documents = vec![Document::new("x.md", text)];
        let report = validate_documents(&documents);
        let block = &report.blocks()[0];
        let hint = &block.errors()[1];
        assert!(hint.labels().is_empty());

        let adapter = DiagnosticAdapter::new(hint, block, text);
        let labels: Vec<_> = adapter.labels().unwrap().collect();

        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), block.content_offset());
        assert_eq!(labels[0].label(), Some("in this mermaid block"));
    }

    #[test]
    fn test_render_includes_code_and_label() {
        let (documents, report) = report();
        let reportables = findings_to_reportables(&report, &documents);

        let rendered = render(&reportables[0]);
        assert!(rendered.contains("E201"));
        assert!(rendered.contains("Mismatched brackets"));
        assert!(rendered.contains("guide.md"));
    }

    #[test]
    fn test_operational_error() {
        let err = LintError::NoInput;

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert!(e.to_string().starts_with("No documents to validate"));
                assert_eq!(
                    e.code().map(|code| code.to_string()).as_deref(),
                    Some("mermaid_lint::no_input")
                );
                assert!(e.help().is_some());
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_config_error_has_no_help() {
        let err = LintError::Config("bad".to_string());

        let reportables = to_reportables(&err);
        assert!(reportables[0].help().is_none());
        assert_eq!(reportables[0].to_string(), "Configuration error: bad");
    }
}
