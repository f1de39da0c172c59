//! The [`DiagramBlock`] type.

use serde::Serialize;

use crate::{DiagramType, error::Diagnostic, span::Span};

/// One fenced `mermaid` region discovered in a document.
///
/// A block starts out with only its location and raw content. Running
/// [`validate_block`](crate::validate_block) fills in the diagram type and
/// findings exactly once; afterwards the block is read-only.
#[derive(Debug, Clone, Serialize)]
pub struct DiagramBlock {
    content: String,
    source_label: String,
    start_line: usize,
    is_indented: bool,
    content_offset: usize,
    diagram_type: Option<DiagramType>,
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
    #[serde(skip)]
    validated: bool,
}

impl DiagramBlock {
    /// Create an unvalidated block.
    ///
    /// # Arguments
    ///
    /// * `content` - Raw text between the fences
    /// * `source_label` - Identifier of the document the block came from
    /// * `start_line` - 1-based line of the opening fence
    /// * `is_indented` - Whether the opening fence was indented
    pub fn new(
        content: impl Into<String>,
        source_label: impl Into<String>,
        start_line: usize,
        is_indented: bool,
    ) -> Self {
        Self {
            content: content.into(),
            source_label: source_label.into(),
            start_line,
            is_indented,
            content_offset: 0,
            diagram_type: None,
            errors: Vec::new(),
            warnings: Vec::new(),
            validated: false,
        }
    }

    /// Set the byte offset of the content inside its source document.
    pub fn with_content_offset(mut self, offset: usize) -> Self {
        self.content_offset = offset;
        self
    }

    /// Raw text between the fences.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Identifier of the source document.
    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    /// 1-based line of the opening fence in the source document.
    pub fn start_line(&self) -> usize {
        self.start_line
    }

    /// Whether the opening fence carried leading whitespace.
    pub fn is_indented(&self) -> bool {
        self.is_indented
    }

    /// Byte offset of [`content`](Self::content) inside the source document.
    pub fn content_offset(&self) -> usize {
        self.content_offset
    }

    /// The recognized diagram type, if any.
    pub fn diagram_type(&self) -> Option<DiagramType> {
        self.diagram_type
    }

    /// Fatal findings, in the order they were found.
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// Non-fatal findings, in the order they were found.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Whether the block has been through validation.
    pub fn is_validated(&self) -> bool {
        self.validated
    }

    /// `true` when validation recorded no errors.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// `true` when the block has at least one error or warning.
    pub fn has_issues(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }

    /// Translate a content-relative span into a document-relative one.
    pub fn document_span(&self, span: Span) -> Span {
        span.shift(self.content_offset)
    }

    pub(crate) fn record(
        &mut self,
        diagram_type: Option<DiagramType>,
        errors: Vec<Diagnostic>,
        warnings: Vec<Diagnostic>,
    ) {
        self.diagram_type = diagram_type;
        self.errors = errors;
        self.warnings = warnings;
        self.validated = true;
    }
}
