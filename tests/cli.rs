//! End-to-end tests for the `population-pipeline` binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata").join(name)
}

fn run_cli(input: &Path, output: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_population-pipeline"))
        .arg("--input_file")
        .arg(input)
        .arg("--output_file")
        .arg(output)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary should start")
}

#[test]
fn test_success_prints_full_trace() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out").join("summary.csv");

    let result = run_cli(&fixture("us_pop_by_state.csv"), &output);

    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "Loading data...".to_owned(),
            "Cleaning data...".to_owned(),
            "Processing data...".to_owned(),
            "Saving data...".to_owned(),
            format!("Processed data saved to {}", output.display()),
            "Pipeline executed successfully!".to_owned(),
        ]
    );
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "total_population\n90221915\n"
    );
}

#[test]
fn test_missing_input_exits_with_code_3() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("summary.csv");

    let result = run_cli(&fixture("does_not_exist.csv"), &output);

    assert_eq!(result.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&result.stderr);
    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(lines.len(), 1, "stderr should hold only the diagnostic: {stderr:?}");
    assert!(lines[0].starts_with("An error occurred: "));
    assert!(lines[0].contains("does not exist"));
    assert!(!output.exists());
}

#[test]
fn test_malformed_csv_exits_with_code_4() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("summary.csv");

    let result = run_cli(&fixture("malformed.csv"), &output);

    assert_eq!(result.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert_eq!(stderr.lines().count(), 1, "stderr should hold only the diagnostic: {stderr:?}");
    assert!(stderr.starts_with("An error occurred: Failed to read CSV"));
    assert!(!output.exists());
}

#[test]
fn test_padded_fields_are_summed() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("summary.csv");

    let result = run_cli(&fixture("padded_fields.csv"), &output);

    assert!(result.status.success());
    assert!(result.stderr.is_empty());
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "total_population\n90221915\n"
    );
}

#[test]
fn test_missing_column_exits_with_code_5() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("summary.csv");

    let result = run_cli(&fixture("no_census.csv"), &output);

    assert_eq!(result.status.code(), Some(5));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert_eq!(stderr.lines().count(), 1, "stderr should hold only the diagnostic: {stderr:?}");
    assert!(stderr.starts_with("An error occurred: "));
    assert!(!output.exists());
}

#[test]
fn test_missing_flag_is_a_usage_error() {
    let result = Command::new(env!("CARGO_BIN_EXE_population-pipeline"))
        .arg("--input_file")
        .arg(fixture("us_pop_by_state.csv"))
        .output()
        .expect("binary should start");

    assert_eq!(result.status.code(), Some(2));
}
