//! Discovery of fenced `mermaid` regions in markdown text.
//!
//! The scanner works line by line. An opening fence is a line made of
//! optional indentation, a fence marker (```` ``` ```` or `~~~`), the
//! `mermaid` tag and optional trailing whitespace. It pairs with the first
//! later line that holds only the same marker, in any indentation.
//!
//! An opening fence that is never closed is skipped and scanning resumes on
//! the following line.

use log::{trace, warn};
use winnow::{
    Parser as _,
    ascii::{multispace0, space0},
    combinator::alt,
    error::ModalResult,
    token::literal,
};

use crate::block::DiagramBlock;

/// Info string that marks a diagram fence.
const DIAGRAM_TAG: &str = "mermaid";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FenceMarker {
    Backticks,
    Tildes,
}

impl FenceMarker {
    fn as_str(self) -> &'static str {
        match self {
            FenceMarker::Backticks => "```",
            FenceMarker::Tildes => "~~~",
        }
    }
}

fn fence_marker(input: &mut &str) -> ModalResult<FenceMarker> {
    alt((
        literal("```").value(FenceMarker::Backticks),
        literal("~~~").value(FenceMarker::Tildes),
    ))
    .parse_next(input)
}

/// Parse an opening fence, returning its indentation and marker.
fn opening_fence<'a>(input: &mut &'a str) -> ModalResult<(&'a str, FenceMarker)> {
    (space0, fence_marker, literal(DIAGRAM_TAG), multispace0)
        .map(|(indent, marker, _, _)| (indent, marker))
        .parse_next(input)
}

/// Parse a closing fence for `marker`.
fn closing_fence(input: &mut &str, marker: FenceMarker) -> ModalResult<()> {
    (space0, literal(marker.as_str()), multispace0)
        .void()
        .parse_next(input)
}

/// Recognize a whole line as an opening fence.
fn match_opening(line: &str) -> Option<(bool, FenceMarker)> {
    let mut input = line;
    let (indent, marker) = opening_fence(&mut input).ok()?;
    input.is_empty().then_some((!indent.is_empty(), marker))
}

/// Recognize a whole line as the closing fence for `marker`.
fn match_closing(line: &str, marker: FenceMarker) -> bool {
    let mut input = line;
    closing_fence(&mut input, marker).is_ok() && input.is_empty()
}

/// Split the line starting at `offset`, returning it without its `\n` along
/// with the offset of the next line.
fn line_at(text: &str, offset: usize) -> (&str, usize) {
    let rest = &text[offset..];
    match rest.find('\n') {
        Some(newline) => (&rest[..newline], offset + newline + 1),
        None => (rest, text.len()),
    }
}

/// Lazy iterator over the diagram blocks of one document.
///
/// Created by [`extract_blocks`]. The scanner is cheap to clone; a clone
/// restarts from the position the original had reached.
#[derive(Debug, Clone)]
pub struct FenceScanner<'a> {
    text: &'a str,
    source_label: &'a str,
    offset: usize,
    line: usize,
}

impl<'a> FenceScanner<'a> {
    fn new(text: &'a str, source_label: &'a str) -> Self {
        Self {
            text,
            source_label,
            offset: 0,
            line: 1,
        }
    }

    /// Find the closing fence for `marker` starting at `offset`.
    ///
    /// Returns the byte offset of the closing line, the offset just after it
    /// and its line number.
    fn find_closing(
        &self,
        mut offset: usize,
        mut line: usize,
        marker: FenceMarker,
    ) -> Option<(usize, usize, usize)> {
        while offset < self.text.len() {
            let (candidate, next) = line_at(self.text, offset);
            if match_closing(candidate, marker) {
                return Some((offset, next, line));
            }
            offset = next;
            line += 1;
        }
        None
    }
}

impl Iterator for FenceScanner<'_> {
    type Item = DiagramBlock;

    fn next(&mut self) -> Option<DiagramBlock> {
        while self.offset < self.text.len() {
            let (line_text, next_offset) = line_at(self.text, self.offset);
            let start_line = self.line;
            self.offset = next_offset;
            self.line += 1;

            let Some((is_indented, marker)) = match_opening(line_text) else {
                continue;
            };

            let content_start = next_offset;
            let Some((close_start, after_close, close_line)) =
                self.find_closing(content_start, self.line, marker)
            else {
                warn!(
                    source_label = self.source_label,
                    line = start_line;
                    "Skipping unterminated mermaid fence"
                );
                continue;
            };

            // The newline that ends the last content line belongs to the fence.
            let content_end = close_start.saturating_sub(1).max(content_start);
            let content = &self.text[content_start..content_end];

            self.offset = after_close;
            self.line = close_line + 1;

            trace!(
                source_label = self.source_label,
                start_line,
                is_indented;
                "Found mermaid fence"
            );

            return Some(
                DiagramBlock::new(content, self.source_label, start_line, is_indented)
                    .with_content_offset(content_start),
            );
        }
        None
    }
}

/// Scan `text` for fenced `mermaid` regions.
///
/// The returned iterator yields unvalidated [`DiagramBlock`]s in document
/// order. A document without diagrams yields nothing.
///
/// # Example
///
/// ```
/// # use mermaid_lint_parser::extract_blocks;
/// let text = "# Flow\n\n```mermaid\nflowchart TD\nA-->B\n```\n";
/// let blocks: Vec<_> = extract_blocks(text, "flow.md").collect();
///
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].content(), "flowchart TD\nA-->B");
/// assert_eq!(blocks[0].start_line(), 3);
/// ```
pub fn extract_blocks<'a>(text: &'a str, source_label: &'a str) -> FenceScanner<'a> {
    FenceScanner::new(text, source_label)
}
