//! Pipeline run specification.
//!
//! A [`PipelineSpec`] names the input and output files and the handful of
//! knobs the steps read: which column to sum, what to call the result, and
//! which CSV tokens count as missing.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Column summed by the aggregation step
pub const DEFAULT_SUM_COLUMN: &str = "2020_census";

/// Column name of the one-row summary
pub const DEFAULT_SUMMARY_COLUMN: &str = "total_population";

/// CSV tokens read as missing values, in addition to the empty field
pub const DEFAULT_NULL_VALUES: &[&str] = &["NA", "N/A", "NaN", "nan", "null", "NULL"];

/// Root pipeline specification structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSpec {
    /// CSV file to read
    pub input: PathBuf,

    /// CSV file the summary is written to
    pub output: PathBuf,

    /// Normalized name of the column to sum
    #[serde(default = "default_sum_column")]
    pub sum_column: String,

    /// Name of the single summary column
    #[serde(default = "default_summary_column")]
    pub summary_column: String,

    /// Tokens treated as missing when reading the input
    #[serde(default = "default_null_values")]
    pub null_values: Vec<String>,
}

fn default_sum_column() -> String {
    DEFAULT_SUM_COLUMN.to_owned()
}

fn default_summary_column() -> String {
    DEFAULT_SUMMARY_COLUMN.to_owned()
}

fn default_null_values() -> Vec<String> {
    DEFAULT_NULL_VALUES.iter().map(|&s| s.to_owned()).collect()
}

impl PipelineSpec {
    /// Create a spec for `input` → `output` with default settings
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            sum_column: default_sum_column(),
            summary_column: default_summary_column(),
            null_values: default_null_values(),
        }
    }

    pub fn with_sum_column(mut self, column: impl Into<String>) -> Self {
        self.sum_column = column.into();
        self
    }

    pub fn with_summary_column(mut self, column: impl Into<String>) -> Self {
        self.summary_column = column.into();
        self
    }

    pub fn with_null_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.null_values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn input_path(&self) -> &Path {
        &self.input
    }

    pub fn output_path(&self) -> &Path {
        &self.output
    }

    /// Parse a pipeline spec from JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or lacks `input`/`output`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize pipeline spec to JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
