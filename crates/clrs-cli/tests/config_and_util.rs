//! Integration tests for run configuration loading and the CLI util helpers.

use std::time::Duration;

use clrs_algorithms::config::RunConfig;
use clrs_algorithms::SortOrder;
use clrs_cli::util::{load_run_config, report_timing, timed, validate_input_file};

// ---------------------------------------------------------------------------
// validate_input_file
// ---------------------------------------------------------------------------

#[test]
fn validate_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.txt");
    std::fs::File::create(&path).unwrap();
    assert!(validate_input_file(&path).is_ok());
}

#[test]
fn validate_directory_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(validate_input_file(dir.path()).is_err());
}

#[test]
fn validate_nonexistent_file_errors() {
    assert!(validate_input_file(std::path::Path::new("/nonexistent/data.txt")).is_err());
}

// ---------------------------------------------------------------------------
// load_run_config
// ---------------------------------------------------------------------------

#[test]
fn no_config_path_gives_defaults() {
    let cfg = load_run_config(None).unwrap();
    assert_eq!(cfg, RunConfig::default());
}

#[test]
fn partial_config_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.json");
    std::fs::write(&path, r#"{"sort_order": "descend", "precision": 2}"#).unwrap();

    let cfg = load_run_config(Some(&path)).unwrap();
    assert_eq!(cfg.sort_order, Some(SortOrder::Descend));
    assert_eq!(cfg.precision, 2);
    assert_eq!(cfg.max_table_range, RunConfig::default().max_table_range);
    assert!(!cfg.parallel_matrix);
}

#[test]
fn malformed_config_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = load_run_config(Some(&path)).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config"));
}

#[test]
fn config_file_used_by_binary() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("run.json");
    std::fs::write(&config, r#"{"sort_order": "descend"}"#).unwrap();

    assert_cmd::Command::cargo_bin("clrs")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .arg("insertion-sort")
        .write_stdin("3\n1 3 2\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Sorted array:\n3 2 1\n"));
}

// ---------------------------------------------------------------------------
// Timing helpers
// ---------------------------------------------------------------------------

#[test]
fn timed_returns_value() {
    let (value, elapsed) = timed(|| 21 * 2);
    assert_eq!(value, 42);
    assert!(elapsed < Duration::from_secs(5));
}

#[test]
fn report_timing_formats_milliseconds() {
    let mut out = Vec::new();
    report_timing(&mut out, "Merge sort", Duration::from_micros(1500)).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Merge sort took 1.500 ms.\n");
}
