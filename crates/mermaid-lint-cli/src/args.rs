//! Command-line argument definitions for the mermaid-lint CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the documents to scan, the report
//! format and destination, the failure policy, and logging verbosity.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Command-line arguments for the mermaid-lint checker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Markdown files or directories to scan.
    ///
    /// Without inputs, the section files of the configured manual are scanned.
    #[arg(help = "Files or directories to scan")]
    pub inputs: Vec<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Render every finding with a source snippet on stderr
    #[arg(long)]
    pub diagnostics: bool,

    /// Exit with status 1 when any block has errors
    #[arg(long)]
    pub deny_errors: bool,

    /// Exit with status 1 when any block has warnings
    #[arg(long)]
    pub deny_warnings: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
