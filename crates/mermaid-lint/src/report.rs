//! Aggregated validation results.
//!
//! A [`ValidationReport`] is assembled by a [`ReportBuilder`] from documents
//! in the order they are supplied. Once [`ReportBuilder::finish`] returns,
//! the report is read-only.

use std::{collections::BTreeMap, fmt, ops::Range};

use indexmap::IndexMap;
use log::{debug, info};
use serde::Serialize;

use mermaid_lint_parser::{DiagramBlock, DiagramType, error::Diagnostic, validate_document};

use crate::error::LintError;

/// Width of the banner lines in the text summary.
const BANNER_WIDTH: usize = 60;

/// Blocks and finding counts for one source document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// Indices into [`ValidationReport::blocks`].
    blocks: Vec<usize>,
    errors: usize,
    warnings: usize,
}

impl FileReport {
    /// Indices of this document's blocks in [`ValidationReport::blocks`].
    pub fn blocks(&self) -> &[usize] {
        &self.blocks
    }

    /// Number of the document's blocks that failed validation.
    pub fn errors(&self) -> usize {
        self.errors
    }

    /// Number of warnings recorded across the document's blocks.
    pub fn warnings(&self) -> usize {
        self.warnings
    }
}

/// The result of validating a set of documents.
///
/// Counts satisfy `valid_blocks + error_blocks == total_blocks`. A block
/// with both errors and warnings counts toward `error_blocks` and
/// `warning_blocks` alike.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    total_blocks: usize,
    valid_blocks: usize,
    error_blocks: usize,
    warning_blocks: usize,
    blocks: Vec<DiagramBlock>,
    by_file: IndexMap<String, FileReport>,
    by_type: BTreeMap<DiagramType, usize>,
    /// Block ranges of each added document, in the order added.
    #[serde(skip)]
    documents: Vec<Range<usize>>,
}

impl ValidationReport {
    pub fn total_blocks(&self) -> usize {
        self.total_blocks
    }

    pub fn valid_blocks(&self) -> usize {
        self.valid_blocks
    }

    pub fn error_blocks(&self) -> usize {
        self.error_blocks
    }

    pub fn warning_blocks(&self) -> usize {
        self.warning_blocks
    }

    /// All blocks in discovery order.
    pub fn blocks(&self) -> &[DiagramBlock] {
        &self.blocks
    }

    /// Per-document entries, in the order documents were first seen.
    ///
    /// Documents without blocks have no entry.
    pub fn by_file(&self) -> &IndexMap<String, FileReport> {
        &self.by_file
    }

    /// Occurrences of each recognized diagram type, sorted by keyword.
    pub fn by_type(&self) -> &BTreeMap<DiagramType, usize> {
        &self.by_type
    }

    /// Blocks of the document labeled `label`, in discovery order.
    pub fn file_blocks<'a>(
        &'a self,
        label: &str,
    ) -> impl Iterator<Item = &'a DiagramBlock> + use<'a> {
        self.by_file
            .get(label)
            .map(|file| file.blocks.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(|&index| self.blocks.get(index))
    }

    /// Blocks of the `index`-th added document.
    ///
    /// Unlike [`ValidationReport::file_blocks`], documents added under the
    /// same label stay apart.
    pub fn document_blocks(&self, index: usize) -> &[DiagramBlock] {
        self.documents
            .get(index)
            .and_then(|range| self.blocks.get(range.clone()))
            .unwrap_or_default()
    }

    /// Blocks that carry at least one error or warning.
    pub fn flagged_blocks(&self) -> impl Iterator<Item = &DiagramBlock> {
        self.blocks.iter().filter(|block| block.has_issues())
    }

    /// Convert the report into a nested JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`LintError::Serialize`] if the conversion fails.
    pub fn to_value(&self) -> Result<serde_json::Value, LintError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Render the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`LintError::Serialize`] if the conversion fails.
    pub fn to_json_pretty(&self) -> Result<String, LintError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn record(&mut self, block: DiagramBlock) {
        let index = self.blocks.len();

        self.total_blocks += 1;
        if block.is_valid() {
            self.valid_blocks += 1;
        } else {
            self.error_blocks += 1;
        }
        if !block.warnings().is_empty() {
            self.warning_blocks += 1;
        }

        if let Some(diagram_type) = block.diagram_type() {
            *self.by_type.entry(diagram_type).or_default() += 1;
        }

        let file = self
            .by_file
            .entry(block.source_label().to_string())
            .or_default();
        file.blocks.push(index);
        if !block.is_valid() {
            file.errors += 1;
        }
        file.warnings += block.warnings().len();

        self.blocks.push(block);
    }
}

fn write_findings(
    f: &mut fmt::Formatter<'_>,
    prefix: &str,
    findings: &[Diagnostic],
) -> fmt::Result {
    for finding in findings {
        writeln!(f, "    [{prefix}] {}", finding.message())?;
    }
    Ok(())
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let banner = "=".repeat(BANNER_WIDTH);

        writeln!(f, "{banner}")?;
        writeln!(f, "MERMAID DIAGRAM VALIDATION REPORT")?;
        writeln!(f, "{banner}")?;

        writeln!(f)?;
        writeln!(f, "Summary:")?;
        writeln!(f, "  Total blocks: {}", self.total_blocks)?;
        writeln!(f, "  Valid: {}", self.valid_blocks)?;
        writeln!(f, "  With errors: {}", self.error_blocks)?;
        writeln!(f, "  With warnings: {}", self.warning_blocks)?;

        if !self.by_type.is_empty() {
            writeln!(f)?;
            writeln!(f, "Diagram Types:")?;
            for (diagram_type, count) in &self.by_type {
                writeln!(f, "  {diagram_type}: {count}")?;
            }
        }

        let mut flagged = self.flagged_blocks().peekable();
        if flagged.peek().is_some() {
            writeln!(f)?;
            writeln!(f, "Issues Found:")?;
            for block in flagged {
                let diagram_type = block
                    .diagram_type()
                    .map_or("unknown", |diagram_type| diagram_type.keyword());
                writeln!(f)?;
                writeln!(
                    f,
                    "  [{}:{}] {diagram_type}",
                    block.source_label(),
                    block.start_line()
                )?;
                write_findings(f, "ERROR", block.errors())?;
                write_findings(f, "WARN", block.warnings())?;
            }
        } else {
            writeln!(f)?;
            writeln!(f, "  No issues found!")?;
        }

        write!(f, "{banner}")
    }
}

/// Incremental assembly of a [`ValidationReport`].
///
/// # Example
///
/// ```
/// # use mermaid_lint::ReportBuilder;
/// let mut builder = ReportBuilder::new();
/// builder.add_document("```mermaid\nflowchart TD\nA-->B\n```\n", "flow.md");
/// builder.add_document("```mermaid\ngraph LR\nA]-->B\n```\n", "broken.md");
///
/// let report = builder.finish();
/// assert_eq!(report.total_blocks(), 2);
/// assert_eq!(report.valid_blocks(), 1);
/// assert_eq!(report.error_blocks(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ReportBuilder {
    report: ValidationReport,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract and validate every block of one document.
    ///
    /// Documents are aggregated in the order they are added. Adding a
    /// second document under an existing label merges into its entry.
    pub fn add_document(&mut self, text: &str, source_label: &str) -> &mut Self {
        let blocks = validate_document(text, source_label);
        debug!(
            source_label,
            blocks = blocks.len();
            "Scanned document"
        );

        let start = self.report.blocks.len();
        for block in blocks {
            self.report.record(block);
        }
        let end = self.report.blocks.len();
        self.report.documents.push(start..end);
        self
    }

    /// Complete the report.
    pub fn finish(self) -> ValidationReport {
        info!(
            documents = self.report.documents.len(),
            total_blocks = self.report.total_blocks,
            error_blocks = self.report.error_blocks,
            warning_blocks = self.report.warning_blocks;
            "Validation finished"
        );
        self.report
    }
}
