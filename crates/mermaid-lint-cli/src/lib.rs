//! mermaid-lint CLI library
//!
//! This module contains the core CLI logic for the mermaid-lint checker.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, OutputFormat};

use std::fs;

use log::{info, warn};

use mermaid_lint::{DocumentSource, LintError, ValidationReport, validate_documents};

use error_adapter::{findings_to_reportables, render};

/// Outcome of a completed run under the failure policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    /// Apply the failure policy to `report`.
    ///
    /// # Arguments
    ///
    /// * `deny_errors` - Fail when any block has errors
    /// * `deny_warnings` - Fail when any block has warnings
    pub fn judge(report: &ValidationReport, deny_errors: bool, deny_warnings: bool) -> Self {
        let failed = (deny_errors && report.error_blocks() > 0)
            || (deny_warnings && report.warning_blocks() > 0);
        if failed { Verdict::Fail } else { Verdict::Pass }
    }

    pub fn is_pass(self) -> bool {
        self == Verdict::Pass
    }
}

/// Run the mermaid-lint CLI application
///
/// This function loads the configured documents, validates every diagram
/// in them, and writes the report to stdout or the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `LintError` for:
/// - Configuration loading errors
/// - Missing input
/// - File I/O and directory traversal errors
/// - Report serialization errors
pub fn run(args: &Args) -> Result<Verdict, LintError> {
    info!(inputs:? = args.inputs, format:? = args.format; "Checking mermaid diagrams");

    let app_config = config::load_config(args.config.as_ref())?;

    let source = DocumentSource::select(&args.inputs, app_config.manual())?;
    let documents = source.load(app_config.check())?;
    if documents.is_empty() {
        warn!("No documents found");
    }

    let report = validate_documents(&documents);

    if args.diagnostics {
        for reportable in findings_to_reportables(&report, &documents) {
            eprintln!("{}", render(&reportable));
        }
    }

    let rendered = match args.format {
        OutputFormat::Text => report.to_string(),
        OutputFormat::Json => report.to_json_pretty()?,
    };

    match &args.output {
        Some(path) => {
            fs::write(path, rendered + "\n").map_err(|err| LintError::io(path, err))?;
            info!(output_file = path.as_str(); "Report written");
        }
        None => println!("{rendered}"),
    }

    let check = app_config.check();
    let verdict = Verdict::judge(
        &report,
        args.deny_errors || check.deny_errors(),
        args.deny_warnings || check.deny_warnings(),
    );
    info!(verdict:?; "Check completed");

    Ok(verdict)
}

#[cfg(test)]
mod tests {
    use mermaid_lint::Document;

    use super::*;

    fn report() -> ValidationReport {
        validate_documents(&[
            Document::new("ok.md", "```mermaid\nflowchart TD\nA-->B\n```\n"),
            Document::new("warn.md", "```mermaid\nsequenceDiagram\n```\n"),
        ])
    }

    #[test]
    fn test_verdict_without_policy_passes() {
        assert_eq!(Verdict::judge(&report(), false, false), Verdict::Pass);
    }

    #[test]
    fn test_verdict_deny_errors_ignores_warnings() {
        let report = report();

        assert_eq!(report.error_blocks(), 0);
        assert!(Verdict::judge(&report, true, false).is_pass());
    }

    #[test]
    fn test_verdict_deny_warnings() {
        assert_eq!(Verdict::judge(&report(), false, true), Verdict::Fail);
    }
}
