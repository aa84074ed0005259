//! Integration tests for the full pipeline
//!
//! These tests run every step on the fixture files under `testdata/`
//! and check the summary written to disk.

use population_pipeline::error::PipelineError;
use population_pipeline::pipeline::{
    PipelineSpec, Stage, Total, clean_table, load_table, run_pipeline, save_table, summarize,
};
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata").join(name)
}

fn run(input: &Path, output: &Path) -> Result<population_pipeline::pipeline::RunReport, PipelineError> {
    run_pipeline(&PipelineSpec::new(input, output), |_| {})
}

#[test]
fn test_three_states_total() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("summary.csv");

    let report = run(&fixture("us_pop_by_state.csv"), &output).expect("pipeline should succeed");

    assert_eq!(report.rows_loaded, 3);
    assert_eq!(report.total, Total::Int(90_221_915));
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "total_population\n90221915\n"
    );
}

#[test]
fn test_messy_headers_are_normalized() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("summary.csv");

    let report = run(&fixture("messy_headers.csv"), &output).expect("pipeline should succeed");

    assert_eq!(
        report.columns,
        ["rank", "state", "state_code", "2020_census", "percent_of_total"]
    );
    assert_eq!(report.total, Total::Int(110_423_164));
}

#[test]
fn test_rows_with_missing_values_are_excluded() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("summary.csv");

    let report = run(&fixture("missing_values.csv"), &output).expect("pipeline should succeed");

    // empty rank, "NA" state code, empty census
    assert_eq!(report.rows_loaded, 5);
    assert_eq!(report.rows_dropped(), 3);
    assert_eq!(report.total, Total::Int(61_076_410));
}

#[test]
fn test_padded_fields_are_parsed_as_numbers() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("summary.csv");

    let report = run(&fixture("padded_fields.csv"), &output).expect("pipeline should succeed");

    assert_eq!(
        report.columns,
        ["rank", "state", "state_code", "2020_census", "percent_of_total"]
    );
    assert_eq!(report.total, Total::Int(90_221_915));
}

#[test]
fn test_malformed_csv_is_a_data_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("summary.csv");

    let err = run(&fixture("malformed.csv"), &output).unwrap_err();

    assert_eq!(err.exit_code(), 4);
    assert!(!output.exists());
}

#[test]
fn test_header_only_input_sums_to_zero() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("summary.csv");

    let report = run(&fixture("header_only.csv"), &output).expect("pipeline should succeed");

    assert_eq!(report.rows_loaded, 0);
    assert_eq!(report.total, Total::Int(0));
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "total_population\n0\n"
    );
}

#[test]
fn test_missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("summary.csv");

    let err = run(&fixture("does_not_exist.csv"), &output).unwrap_err();

    assert!(err.to_string().contains("does not exist"));
    assert!(!output.exists());
}

#[test]
fn test_missing_census_column_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("summary.csv");

    let err = run(&fixture("no_census.csv"), &output).unwrap_err();

    assert!(matches!(err, PipelineError::ColumnNotFound { .. }));
    assert!(err.to_string().contains("2020_census"));
    assert!(!output.exists());
}

#[test]
fn test_output_directory_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output_dir").join("processed_data.csv");

    run(&fixture("us_pop_by_state.csv"), &output).expect("pipeline should succeed");

    assert!(output.exists());
}

#[test]
fn test_steps_compose_by_hand() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("summary.csv");
    let spec = PipelineSpec::new(fixture("messy_headers.csv"), &output);

    let raw = load_table(spec.input_path(), &spec.null_values).unwrap();
    let cleaned = clean_table(raw).unwrap();
    let mut summary = summarize(&cleaned, &spec.sum_column, &spec.summary_column).unwrap();
    save_table(&mut summary, &output).unwrap();

    // writing the summary and reading it back gives the same table
    let reloaded = load_table(&output, &spec.null_values).unwrap();
    assert!(reloaded.equals(&summary));
}

#[test]
fn test_stage_messages() {
    let messages: Vec<&str> = Stage::ALL.iter().map(|s| s.message()).collect();
    assert_eq!(
        messages,
        [
            "Loading data...",
            "Cleaning data...",
            "Processing data...",
            "Saving data..."
        ]
    );
}
