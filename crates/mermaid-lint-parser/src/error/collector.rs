//! Collector for accumulating the findings of one block.
//!
//! The [`DiagnosticCollector`] lets every check report as many findings as it
//! sees, sorting them into errors and warnings in emission order.

use crate::error::Diagnostic;

/// A collector for accumulating findings while validating a block.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.errors.push(diagnostic);
        } else {
            self.warnings.push(diagnostic);
        }
    }

    /// Returns `true` if at least one error has been emitted.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Finish collection, returning `(errors, warnings)`.
    pub fn finish(self) -> (Vec<Diagnostic>, Vec<Diagnostic>) {
        (self.errors, self.warnings)
    }
}
