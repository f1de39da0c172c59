use mermaid_lint_parser::{
    DiagramBlock, DiagramType, error::DiagnosticCode, extract_blocks, validate_block,
    validate_document,
};

fn validated(content: &str) -> DiagramBlock {
    let mut block = DiagramBlock::new(content, "section-overview.md", 1, false);
    validate_block(&mut block);
    block
}

#[test]
fn test_document_without_diagrams() {
    let text = r#"
# Overview

Some prose with a `mermaid` mention and a code block:

```rust
fn main() {}
```
"#;

    assert_eq!(extract_blocks(text, "overview.md").count(), 0);
    assert!(validate_document(text, "overview.md").is_empty());
}

#[test]
fn test_document_with_mixed_blocks() {
    let text = r#"# Architecture

```mermaid
flowchart TD
    Client-->Gateway
    Gateway-->Service[Service]
```

The request lifecycle:

```mermaid
sequenceDiagram
    Client->>Gateway: request
    Gateway-->>Client: response
```

A broken one:

```mermaid
graph LR
    A]-->B
```
"#;

    let blocks = validate_document(text, "architecture.md");

    assert_eq!(blocks.len(), 3);

    assert_eq!(blocks[0].diagram_type(), Some(DiagramType::Flowchart));
    assert!(blocks[0].is_valid());
    assert!(blocks[0].warnings().is_empty());
    assert_eq!(blocks[0].start_line(), 3);

    assert_eq!(blocks[1].diagram_type(), Some(DiagramType::Sequence));
    assert!(blocks[1].is_valid());
    assert_eq!(blocks[1].start_line(), 11);

    assert_eq!(blocks[2].diagram_type(), Some(DiagramType::Graph));
    assert!(!blocks[2].is_valid());
    assert_eq!(blocks[2].errors()[0].code(), Some(DiagnosticCode::E200));
    assert_eq!(blocks[2].start_line(), 19);
}

#[test]
fn test_finding_spans_map_to_document() {
    let text = "intro\n\n```mermaid\ngraph LR\n  A]-->B\n```\n";
    let blocks = validate_document(text, "doc.md");

    let label = &blocks[0].errors()[0].labels()[0];
    let span = blocks[0].document_span(label.span());

    assert_eq!(&text[span.start()..span.end()], "]");
}

#[test]
fn test_flowchart_with_edge() {
    let block = validated("flowchart TD\nA-->B");

    assert_eq!(block.diagram_type(), Some(DiagramType::Flowchart));
    assert!(block.errors().is_empty());
    assert!(block.warnings().is_empty());
}

#[test]
fn test_unrecognized_block_has_exactly_two_errors() {
    let block = validated("foo bar baz");

    assert_eq!(block.diagram_type(), None);
    assert_eq!(block.errors().len(), 2);
    assert!(block.warnings().is_empty());
}

#[test]
fn test_state_v2_is_not_classified_as_state() {
    let block = validated("stateDiagram-v2\n[*] --> Still");

    assert_eq!(block.diagram_type(), Some(DiagramType::StateV2));
    assert!(block.is_valid());
}

#[test]
fn test_indented_fence_carries_portability_warning() {
    let text = "1. Step\n\n   ```mermaid\n   pie\n   ```\n";
    let blocks = validate_document(text, "steps.md");

    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].is_indented());
    assert!(blocks[0].is_valid());
    assert_eq!(
        blocks[0].warnings()[0].code(),
        Some(DiagnosticCode::W400)
    );
}

#[test]
fn test_unterminated_fence_is_not_reported() {
    let text = "```mermaid\ngraph TD\nA-->B\n\nno closing fence";

    assert!(validate_document(text, "draft.md").is_empty());
}
