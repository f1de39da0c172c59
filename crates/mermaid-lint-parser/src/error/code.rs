//! Diagnostic codes for the validator.
//!
//! Codes are organized by check:
//! - `E0xx` - Content errors
//! - `E1xx` - Classification errors
//! - `E2xx` / `W2xx` - Bracket balance
//! - `W3xx` - Diagram-specific heuristics
//! - `W4xx` - Markdown portability

use std::fmt;

use serde::{Serialize, Serializer};

/// Codes for categorizing findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    // =========================================================================
    // Content Errors (E0xx)
    // =========================================================================
    /// Empty block.
    ///
    /// The fence contains nothing but whitespace.
    E001,

    // =========================================================================
    // Classification Errors (E1xx)
    // =========================================================================
    /// Unknown diagram type.
    ///
    /// The first line does not start with a recognized diagram keyword.
    E100,

    /// Expected a known diagram type.
    ///
    /// Companion to `E100` listing the keywords that would have been accepted.
    E101,

    // =========================================================================
    // Bracket Balance (E2xx, W2xx)
    // =========================================================================
    /// Unmatched closing bracket.
    ///
    /// A closing bracket appeared while no bracket was open.
    E200,

    /// Mismatched brackets.
    ///
    /// A closing bracket does not belong to the family of the most recently
    /// opened bracket.
    E201,

    /// Unclosed bracket.
    ///
    /// A bracket was still open at the end of the block.
    W200,

    // =========================================================================
    // Diagram Heuristics (W3xx)
    // =========================================================================
    /// Missing or invalid direction.
    ///
    /// A `graph` or `flowchart` header is not followed by `TB`, `BT`, `LR`,
    /// `RL` or `TD`.
    W300,

    /// Graph without edges.
    ///
    /// A multi-line `graph` or `flowchart` contains no arrow or line.
    W301,

    /// Sequence diagram without messages.
    ///
    /// A `sequenceDiagram` contains no `->` or `->>` arrow.
    W302,

    // =========================================================================
    // Portability (W4xx)
    // =========================================================================
    /// Indented fence.
    ///
    /// The opening fence is indented, which some markdown renderers treat as
    /// a plain code block.
    W400,
}

impl DiagnosticCode {
    /// Returns the code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::E001 => "E001",
            DiagnosticCode::E100 => "E100",
            DiagnosticCode::E101 => "E101",
            DiagnosticCode::E200 => "E200",
            DiagnosticCode::E201 => "E201",
            DiagnosticCode::W200 => "W200",
            DiagnosticCode::W300 => "W300",
            DiagnosticCode::W301 => "W301",
            DiagnosticCode::W302 => "W302",
            DiagnosticCode::W400 => "W400",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for DiagnosticCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_display() {
        assert_eq!(DiagnosticCode::E001.to_string(), "E001");
        assert_eq!(DiagnosticCode::E200.to_string(), "E200");
        assert_eq!(DiagnosticCode::W400.to_string(), "W400");
    }
}
