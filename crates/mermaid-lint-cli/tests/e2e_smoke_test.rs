use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::{TempDir, tempdir};

use mermaid_lint_cli::{Args, OutputFormat, Verdict};

fn samples_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../samples")
}

/// Collects all .md files from a directory
fn collect_md_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("md")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Write an empty config so the run does not pick up user configuration.
fn empty_config(dir: &TempDir) -> String {
    let path = dir.path().join("config.toml");
    fs::write(&path, "").expect("Failed to write config");
    path.to_string_lossy().to_string()
}

fn args(inputs: Vec<PathBuf>, config: String, output: PathBuf) -> Args {
    Args {
        inputs,
        config: Some(config),
        format: OutputFormat::Text,
        output: Some(output.to_string_lossy().to_string()),
        diagnostics: false,
        deny_errors: true,
        deny_warnings: false,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_samples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = empty_config(&temp_dir);

    let valid_samples = collect_md_files(samples_dir());

    assert!(
        !valid_samples.is_empty(),
        "No valid samples found in samples/"
    );

    let mut failed_samples = Vec::new();

    for sample_path in &valid_samples {
        let output_path = temp_dir.path().join(format!(
            "{}.txt",
            sample_path.file_stem().unwrap().to_string_lossy()
        ));

        let mut cfg = args(vec![sample_path.clone()], config.clone(), output_path);
        cfg.deny_warnings = true;

        match mermaid_lint_cli::run(&cfg) {
            Ok(Verdict::Pass) => {}
            Ok(Verdict::Fail) => failed_samples.push((sample_path.clone(), "check failed".into())),
            Err(e) => failed_samples.push((sample_path.clone(), e.to_string())),
        }
    }

    if !failed_samples.is_empty() {
        eprintln!("\nValid samples that failed:");
        for (path, err) in &failed_samples {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid sample(s) failed unexpectedly", failed_samples.len());
    }

    println!("✅ All {} valid samples passed", valid_samples.len());
}

#[test]
fn e2e_smoke_test_error_samples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = empty_config(&temp_dir);

    let error_samples = collect_md_files(samples_dir().join("errors"));

    assert!(
        !error_samples.is_empty(),
        "No error samples found in samples/errors/"
    );

    let mut unexpectedly_passed = Vec::new();

    for sample_path in &error_samples {
        let output_path = temp_dir.path().join(format!(
            "error_{}.txt",
            sample_path.file_stem().unwrap().to_string_lossy()
        ));

        let cfg = args(vec![sample_path.clone()], config.clone(), output_path);

        if !matches!(mermaid_lint_cli::run(&cfg), Ok(Verdict::Fail)) {
            unexpectedly_passed.push(sample_path.clone());
        }
    }

    if !unexpectedly_passed.is_empty() {
        eprintln!("\nError samples that unexpectedly passed:");
        for path in &unexpectedly_passed {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error sample(s) passed unexpectedly",
            unexpectedly_passed.len()
        );
    }

    println!(
        "✅ All {} error samples failed as expected",
        error_samples.len()
    );
}

#[test]
fn e2e_directory_report_text() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = empty_config(&temp_dir);
    let output_path = temp_dir.path().join("report.txt");

    let mut cfg = args(vec![samples_dir()], config, output_path.clone());
    cfg.deny_errors = false;

    let verdict = mermaid_lint_cli::run(&cfg).expect("Run failed");
    assert_eq!(verdict, Verdict::Pass);

    let report = fs::read_to_string(&output_path).expect("Report not written");
    assert!(report.starts_with(&"=".repeat(60)));
    assert!(report.contains("MERMAID DIAGRAM VALIDATION REPORT"));
    assert!(report.contains("Issues Found:"));
    assert!(report.contains("[ERROR] Empty mermaid block"));
    assert!(report.contains("[ERROR] Mismatched brackets: '[' and ')'"));
}

#[test]
fn e2e_json_report() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = empty_config(&temp_dir);
    let output_path = temp_dir.path().join("report.json");

    let mut cfg = args(
        vec![samples_dir().join("architecture.md")],
        config,
        output_path.clone(),
    );
    cfg.format = OutputFormat::Json;

    mermaid_lint_cli::run(&cfg).expect("Run failed");

    let report = fs::read_to_string(&output_path).expect("Report not written");
    assert!(report.contains("\"total_blocks\": 3"));
    assert!(report.contains("\"sequenceDiagram\": 1"));
}

#[test]
fn e2e_manual_from_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    let sections = samples_dir();
    fs::write(
        &config_path,
        format!(
            r#"
[manual]
sections_dir = '{}'

[[manual.nav]]
title = "Guide"
items = [
    {{ id = "overview", title = "Overview", file = "manual-overview.md" }},
    {{ id = "missing", title = "Missing", file = "section-missing.md" }},
    {{ id = "broken", title = "Broken", file = "errors/unknown-type.md" }},
]
"#,
            sections.display()
        ),
    )
    .expect("Failed to write config");
    let output_path = temp_dir.path().join("report.txt");

    let cfg = args(
        Vec::new(),
        config_path.to_string_lossy().to_string(),
        output_path.clone(),
    );

    let verdict = mermaid_lint_cli::run(&cfg).expect("Run failed");
    assert_eq!(verdict, Verdict::Fail);

    let report = fs::read_to_string(&output_path).expect("Report not written");
    assert!(report.contains("[errors/unknown-type.md:3] unknown"));
}

#[test]
fn e2e_no_input_is_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = empty_config(&temp_dir);
    let output_path = temp_dir.path().join("report.txt");

    let cfg = args(Vec::new(), config, output_path);

    assert!(mermaid_lint_cli::run(&cfg).is_err());
}
