//! Findings reported while validating diagram blocks.
//!
//! Every problem the validator notices is recorded as a [`Diagnostic`]:
//! - A [`Severity`] separating fatal errors from advisory warnings
//! - A stable [`DiagnosticCode`] for documentation and searchability
//! - Labeled spans pointing into the block content
//! - Optional help text
//!
//! Validation never fails with an `Err`; diagnostics are plain data stored
//! on the block they describe.
//!
//! # Example
//!
//! ```
//! # use mermaid_lint_parser::error::{Diagnostic, DiagnosticCode};
//! # use mermaid_lint_parser::Span;
//!
//! let diag = Diagnostic::error("Unmatched closing bracket ']' at position 10")
//!     .with_code(DiagnosticCode::E200)
//!     .with_label(Span::new(10..11), "nothing to close")
//!     .with_help("remove the bracket or add the matching opener");
//!
//! assert_eq!(diag.to_string(), "error[E200]: Unmatched closing bracket ']' at position 10");
//! ```

mod code;
mod collector;
mod diagnostic;
mod label;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use code::DiagnosticCode;
pub use diagnostic::Diagnostic;
pub use label::Label;
pub use severity::Severity;
