//! The population pipeline: load → clean → summarize → save.
//!
//! Each step is a plain function over a polars [`DataFrame`](polars::prelude::DataFrame)
//! and can be used on its own; [`run_pipeline`] sequences them for one
//! [`PipelineSpec`].
//!
//! # Example
//!
//! ```no_run
//! use population_pipeline::pipeline::{PipelineSpec, run_pipeline};
//!
//! let spec = PipelineSpec::new("data/us_pop_by_state.csv", "out/summary.csv");
//! let report = run_pipeline(&spec, |stage| println!("{}", stage.message()))?;
//! println!("{}", report.summary());
//! # Ok::<(), population_pipeline::error::PipelineError>(())
//! ```
//!
//! # Steps
//!
//! 1. **Load**: [`load_table`] reads the CSV, turning empty fields and null
//!    tokens into nulls.
//! 2. **Clean**: [`clean_table`] drops rows with a null or NaN cell, then
//!    normalizes headers (`" 2020 Census"` → `"2020_census"`).
//! 3. **Process**: [`summarize`] sums the census column into a one-row table.
//! 4. **Save**: [`save_table`] creates the destination directory and writes
//!    the summary as CSV.

pub mod aggregate;
pub mod cleaning;
pub mod executor;
pub mod io;
pub mod naming;
pub mod spec;

pub use aggregate::{Total, column_total, summarize, summary_frame};
pub use cleaning::{clean_table, drop_missing_rows};
pub use executor::{RunReport, Stage, run_pipeline};
pub use io::{load_table, parse_padded_numeric_columns, save_table};
pub use naming::{normalize_column_name, normalize_column_names};
pub use spec::{
    DEFAULT_NULL_VALUES, DEFAULT_SUM_COLUMN, DEFAULT_SUMMARY_COLUMN, PipelineSpec,
};
