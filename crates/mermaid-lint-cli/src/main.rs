//! mermaid-lint CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use mermaid_lint_cli::{
    Args, Verdict,
    error_adapter::{render, to_reportables},
};

/// Exit status when the failure policy rejects the report.
const EXIT_FAILED_CHECK: i32 = 1;
/// Exit status for operational errors.
const EXIT_ERROR: i32 = 2;

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting mermaid-lint");
    debug!(args:?; "Parsed arguments");

    match mermaid_lint_cli::run(&args) {
        Ok(Verdict::Pass) => info!("Completed successfully"),
        Ok(Verdict::Fail) => {
            error!("Mermaid check failed");
            process::exit(EXIT_FAILED_CHECK);
        }
        Err(err) => {
            for reportable in to_reportables(&err) {
                error!("{}", render(&reportable));
            }
            process::exit(EXIT_ERROR);
        }
    }
}
