//! Pipeline execution.
//!
//! Runs load → clean → summarize → save in fixed order. Each step runs to
//! completion before the next starts, and the first failing step ends the run
//! with its error; nothing is written once an earlier step has failed.

use super::aggregate::{Total, column_total, summary_frame};
use super::cleaning::clean_table;
use super::io::{load_table, save_table};
use super::spec::PipelineSpec;
use crate::error::Result;
use std::fmt;
use std::path::PathBuf;

/// The four steps, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Loading,
    Cleaning,
    Processing,
    Saving,
}

impl Stage {
    pub const ALL: [Self; 4] = [Self::Loading, Self::Cleaning, Self::Processing, Self::Saving];

    /// Progress line announced before the step begins
    pub fn message(self) -> &'static str {
        match self {
            Self::Loading => "Loading data...",
            Self::Cleaning => "Cleaning data...",
            Self::Processing => "Processing data...",
            Self::Saving => "Saving data...",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Loading => "load",
            Self::Cleaning => "clean",
            Self::Processing => "process",
            Self::Saving => "save",
        };
        f.write_str(name)
    }
}

/// Report generated after pipeline execution
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Rows read from the input file
    pub rows_loaded: usize,

    /// Rows left after dropping those with missing values
    pub rows_cleaned: usize,

    /// Column names after normalization
    pub columns: Vec<String>,

    /// Value written to the summary column
    pub total: Total,

    /// Where the summary was written
    pub output_path: PathBuf,

    /// Time taken for execution
    pub duration: std::time::Duration,
}

impl RunReport {
    pub fn rows_dropped(&self) -> usize {
        self.rows_loaded - self.rows_cleaned
    }

    /// Create a summary message
    pub fn summary(&self) -> String {
        format!(
            "Pipeline completed: {} rows loaded, {} dropped, total {} written to {} in {:.2}s",
            self.rows_loaded,
            self.rows_dropped(),
            self.total,
            self.output_path.display(),
            self.duration.as_secs_f64()
        )
    }
}

/// Execute `spec`, calling `on_stage` right before each step begins.
///
/// # Errors
///
/// Returns the first error raised by any step:
/// - input-not-found or parse errors from loading,
/// - header collisions from cleaning,
/// - a missing or non-numeric sum column from processing,
/// - write failures from saving.
pub fn run_pipeline(spec: &PipelineSpec, mut on_stage: impl FnMut(Stage)) -> Result<RunReport> {
    let start = std::time::Instant::now();

    on_stage(Stage::Loading);
    let raw = load_table(spec.input_path(), &spec.null_values)
        .inspect_err(|e| log_failure(Stage::Loading, e))?;
    let rows_loaded = raw.height();

    on_stage(Stage::Cleaning);
    let cleaned = clean_table(raw).inspect_err(|e| log_failure(Stage::Cleaning, e))?;
    let rows_cleaned = cleaned.height();
    let columns = cleaned
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    on_stage(Stage::Processing);
    let total = column_total(&cleaned, &spec.sum_column)
        .inspect_err(|e| log_failure(Stage::Processing, e))?;
    let mut summary = summary_frame(&spec.summary_column, total)?;

    on_stage(Stage::Saving);
    save_table(&mut summary, spec.output_path())
        .inspect_err(|e| log_failure(Stage::Saving, e))?;

    let report = RunReport {
        rows_loaded,
        rows_cleaned,
        columns,
        total,
        output_path: spec.output.clone(),
        duration: start.elapsed(),
    };
    tracing::info!(
        rows_loaded,
        rows_cleaned,
        total = %report.total,
        output = %report.output_path.display(),
        "pipeline finished"
    );
    Ok(report)
}

fn log_failure(stage: Stage, err: &crate::error::PipelineError) {
    tracing::debug!(%stage, error = %err, "pipeline step failed");
}
