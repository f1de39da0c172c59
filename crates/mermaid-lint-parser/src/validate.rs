//! Classification and structural checks for a single block.
//!
//! ## Checks Performed
//!
//! - **Empty block**: nothing but whitespace between the fences (`E001`)
//! - **Diagram type**: the first line must start with a known keyword
//!   (`E100`, `E101`). Unclassified blocks get no further checks.
//! - **Bracket balance**: `[]`, `{}` and `()` share one stack (`E200`,
//!   `E201`, `W200`)
//! - **Graph heuristics**: direction after `graph`/`flowchart` (`W300`) and
//!   presence of edges (`W301`)
//! - **Sequence heuristics**: presence of message arrows (`W302`)
//! - **Portability**: indented opening fence (`W400`)

use log::debug;
use winnow::{
    Parser as _,
    ascii::space1,
    combinator::{alt, preceded},
    error::ModalResult,
    token::literal,
};

use crate::{
    DiagramType,
    block::DiagramBlock,
    error::{Diagnostic, DiagnosticCode, DiagnosticCollector},
    span::Span,
};

/// Characters of the header line quoted in the unknown-type error.
const EXCERPT_CHARS: usize = 30;

/// Edge syntax that makes a graph non-trivial.
const EDGE_ARROWS: [&str; 4] = ["-->", "-.->", "==>", "---"];

/// Message syntax of sequence diagrams.
const MESSAGE_ARROWS: [&str; 2] = ["->>", "->"];

/// Validate `block`, recording its diagram type and findings.
///
/// Returns `true` iff no errors were recorded. Warnings never affect the
/// result. Validation runs once per block; calling this again on a
/// validated block returns the earlier verdict without re-checking.
///
/// # Example
///
/// ```
/// # use mermaid_lint_parser::{DiagramBlock, DiagramType, validate_block};
/// let mut block = DiagramBlock::new("flowchart TD\nA-->B", "flow.md", 1, false);
///
/// assert!(validate_block(&mut block));
/// assert_eq!(block.diagram_type(), Some(DiagramType::Flowchart));
/// assert!(block.warnings().is_empty());
/// ```
pub fn validate_block(block: &mut DiagramBlock) -> bool {
    if block.is_validated() {
        return block.is_valid();
    }

    let mut collector = DiagnosticCollector::new();
    let diagram_type = check_content(block.content(), &mut collector);

    if block.is_indented() {
        collector.emit(
            Diagnostic::warning("Indented code block - may not render in some markdown parsers")
                .with_code(DiagnosticCode::W400)
                .with_help("start the opening fence at column 0"),
        );
    }

    debug!(
        source_label = block.source_label(),
        start_line = block.start_line(),
        diagram_type:? = diagram_type,
        has_errors = collector.has_errors();
        "Validated mermaid block"
    );

    let (errors, warnings) = collector.finish();
    block.record(diagram_type, errors, warnings);
    block.is_valid()
}

/// Run the content checks, returning the detected diagram type.
fn check_content(content: &str, collector: &mut DiagnosticCollector) -> Option<DiagramType> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        collector.emit(
            Diagnostic::error("Empty mermaid block")
                .with_code(DiagnosticCode::E001)
                .with_help("add a diagram declaration such as `flowchart TD`"),
        );
        return None;
    }

    // Byte offset of `trimmed` inside the raw content.
    let base = content.len() - content.trim_start().len();
    let first_line = trimmed.split('\n').next().unwrap_or_default().trim_end();
    let header_span = Span::new(base..base + first_line.len());

    let Some(diagram_type) = DiagramType::detect(first_line) else {
        let excerpt: String = first_line.chars().take(EXCERPT_CHARS).collect();
        collector.emit(
            Diagnostic::error(format!("Unknown diagram type: '{excerpt}...'"))
                .with_code(DiagnosticCode::E100)
                .with_label(header_span, "no diagram keyword here"),
        );
        collector.emit(
            Diagnostic::error(format!("Valid types: {}...", DiagramType::hint()))
                .with_code(DiagnosticCode::E101),
        );
        return None;
    };

    check_brackets(trimmed, base, collector);

    if diagram_type.is_graph() {
        check_graph(trimmed, first_line, diagram_type, header_span, collector);
    } else if diagram_type == DiagramType::Sequence {
        check_sequence(trimmed, header_span, collector);
    }

    Some(diagram_type)
}

fn closing_for(opener: char) -> char {
    match opener {
        '[' => ']',
        '{' => '}',
        _ => ')',
    }
}

/// Check bracket balance with a single stack shared by all families.
///
/// A closer that does not match the top opener is reported but leaves the
/// opener on the stack; only a matching closer pops.
fn check_brackets(trimmed: &str, base: usize, collector: &mut DiagnosticCollector) {
    // (opener, character position, byte offset)
    let mut stack: Vec<(char, usize, usize)> = Vec::new();

    for (position, (byte, ch)) in trimmed.char_indices().enumerate() {
        match ch {
            '[' | '{' | '(' => stack.push((ch, position, byte)),
            ']' | '}' | ')' => {
                let span = Span::new(base + byte..base + byte + 1);
                match stack.last().copied() {
                    None => collector.emit(
                        Diagnostic::error(format!(
                            "Unmatched closing bracket '{ch}' at position {position}"
                        ))
                        .with_code(DiagnosticCode::E200)
                        .with_label(span, "nothing to close"),
                    ),
                    Some((opener, _, _)) if closing_for(opener) == ch => {
                        stack.pop();
                    }
                    Some((opener, _, open_byte)) => collector.emit(
                        Diagnostic::error(format!("Mismatched brackets: '{opener}' and '{ch}'"))
                            .with_code(DiagnosticCode::E201)
                            .with_label(span, "closes the wrong bracket")
                            .with_secondary_label(
                                Span::new(base + open_byte..base + open_byte + 1),
                                "opened here",
                            )
                            .with_help(format!("expected '{}'", closing_for(opener))),
                    ),
                }
            }
            _ => {}
        }
    }

    for (opener, position, byte) in stack {
        collector.emit(
            Diagnostic::warning(format!("Unclosed bracket '{opener}' at position {position}"))
                .with_code(DiagnosticCode::W200)
                .with_label(Span::new(base + byte..base + byte + 1), "never closed"),
        );
    }
}

fn direction(input: &mut &str) -> ModalResult<()> {
    alt((
        literal("TB"),
        literal("BT"),
        literal("LR"),
        literal("RL"),
        literal("TD"),
    ))
    .void()
    .parse_next(input)
}

/// Parse `<keyword> <direction>` at the start of a header line.
fn graph_header(input: &mut &str, keyword: &'static str) -> ModalResult<()> {
    preceded((literal(keyword), space1), direction).parse_next(input)
}

fn has_direction(first_line: &str, diagram_type: DiagramType) -> bool {
    let mut input = first_line;
    graph_header(&mut input, diagram_type.keyword()).is_ok()
}

fn check_graph(
    trimmed: &str,
    first_line: &str,
    diagram_type: DiagramType,
    header_span: Span,
    collector: &mut DiagnosticCollector,
) {
    if !has_direction(first_line, diagram_type) {
        collector.emit(
            Diagnostic::warning("Missing or invalid direction (TB/BT/LR/RL/TD)")
                .with_code(DiagnosticCode::W300)
                .with_label(header_span, "direction expected after the keyword")
                .with_help(format!("write e.g. `{} TD`", diagram_type.keyword())),
        );
    }

    let edges: usize = EDGE_ARROWS
        .iter()
        .map(|arrow| trimmed.matches(arrow).count())
        .sum();
    let line_count = trimmed.split('\n').count();
    if edges == 0 && line_count > 1 {
        collector.emit(
            Diagnostic::warning("No arrows found - graph may be incomplete")
                .with_code(DiagnosticCode::W301),
        );
    }
}

fn check_sequence(trimmed: &str, header_span: Span, collector: &mut DiagnosticCollector) {
    if !MESSAGE_ARROWS.iter().any(|arrow| trimmed.contains(arrow)) {
        collector.emit(
            Diagnostic::warning("No message arrows found in sequence diagram")
                .with_code(DiagnosticCode::W302)
                .with_label(header_span, "declared here")
                .with_help("messages are written `Alice->>Bob: Hello`"),
        );
    }
}
