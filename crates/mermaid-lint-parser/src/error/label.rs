//! Labeled spans for findings.

use serde::Serialize;

use crate::span::Span;

/// A labeled span in block content.
///
/// - **Primary labels** mark the character the finding is about.
/// - **Secondary labels** add context, such as where a mismatched bracket
///   was opened.
#[derive(Debug, Clone, Serialize)]
pub struct Label {
    span: Span,
    message: String,
    #[serde(rename = "primary")]
    is_primary: bool,
}

impl Label {
    /// Create a new primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a new secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    /// Get the span this label applies to.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the label message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this is a primary label.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    /// Check if this is a secondary label.
    pub fn is_secondary(&self) -> bool {
        !self.is_primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_label() {
        let label = Label::primary(Span::new(3..4), "closes nothing");

        assert_eq!(label.span().start(), 3);
        assert_eq!(label.span().end(), 4);
        assert_eq!(label.message(), "closes nothing");
        assert!(label.is_primary());
        assert!(!label.is_secondary());
    }

    #[test]
    fn test_secondary_label() {
        let label = Label::secondary(Span::new(0..1), "opened here");

        assert!(label.is_secondary());
        assert_eq!(label.message(), "opened here");
    }
}
