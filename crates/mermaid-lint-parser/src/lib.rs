//! # mermaid-lint Parser
//!
//! Extraction and structural validation of Mermaid diagrams embedded in
//! markdown. This crate provides the per-document pipeline:
//!
//! 1. **Extract** - Find fenced `mermaid` regions ([`extract_blocks`])
//! 2. **Classify** - Detect the declared [`DiagramType`]
//! 3. **Validate** - Run heuristic structural checks ([`validate_block`])
//!
//! Findings are recorded on each [`DiagramBlock`] as
//! [`error::Diagnostic`] values. Malformed diagrams are expected input, so
//! nothing in this crate returns an error for them.
//!
//! ## Usage
//!
//! ```
//! # use mermaid_lint_parser::{extract_blocks, validate_block};
//! let markdown = "```mermaid\ngraph LR\nA]-->B\n```\n";
//!
//! for mut block in extract_blocks(markdown, "guide.md") {
//!     if !validate_block(&mut block) {
//!         for error in block.errors() {
//!             println!("{}:{} {error}", block.source_label(), block.start_line());
//!         }
//!     }
//! }
//! ```

pub mod error;

mod block;
mod diagram_type;
mod fence;
mod span;
mod validate;

pub use block::DiagramBlock;
pub use diagram_type::DiagramType;
pub use fence::{FenceScanner, extract_blocks};
pub use span::Span;
pub use validate::validate_block;

/// Extract and validate every block of one document.
///
/// Convenience over [`extract_blocks`] followed by [`validate_block`] for
/// each block, in discovery order.
///
/// # Example
///
/// ```
/// # use mermaid_lint_parser::validate_document;
/// let blocks = validate_document("```mermaid\npie\n```\n", "stats.md");
///
/// assert_eq!(blocks.len(), 1);
/// assert!(blocks[0].is_valid());
/// ```
pub fn validate_document(text: &str, source_label: &str) -> Vec<DiagramBlock> {
    extract_blocks(text, source_label)
        .map(|mut block| {
            validate_block(&mut block);
            block
        })
        .collect()
}
