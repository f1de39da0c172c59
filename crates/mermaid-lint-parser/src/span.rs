//! Byte ranges into source text.

use std::ops::Range;

use serde::Serialize;

/// A half-open byte range `start..end` into some source text.
///
/// Spans attached to findings are relative to the raw content of the block
/// they were reported on. Use [`Span::shift`] to move them into document
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a new span from a byte range.
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Get the start offset of the span
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset of the span
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Move the span forward by `offset` bytes.
    pub fn shift(&self, offset: usize) -> Span {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_accessors() {
        let span = Span::new(4..10);

        assert_eq!(span.start(), 4);
        assert_eq!(span.end(), 10);
        assert_eq!(span.len(), 6);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_reversed_range_is_empty() {
        #[allow(clippy::reversed_empty_ranges)]
        let span = Span::new(8..3);

        assert!(span.is_empty());
        assert_eq!(span.start(), 8);
    }

    #[test]
    fn test_span_shift() {
        let span = Span::new(2..5).shift(100);

        assert_eq!(span, Span::new(102..105));
    }
}
