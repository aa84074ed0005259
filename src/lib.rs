//! # Population Pipeline
//!
//! Reads a CSV of per-state population figures, drops rows with missing
//! values, normalizes the headers, sums the `2020_census` column and writes a
//! one-row `total_population` summary to a new CSV file.
//!
//! ## Quick Start
//!
//! ```no_run
//! use population_pipeline::pipeline::{PipelineSpec, run_pipeline};
//!
//! let spec = PipelineSpec::new("us_pop_by_state.csv", "processed/summary.csv");
//! let report = run_pipeline(&spec, |_| {})?;
//! println!("total population: {}", report.total);
//! # Ok::<(), population_pipeline::error::PipelineError>(())
//! ```
//!
//! ## Modules
//!
//! - [`pipeline`]: the four steps and the orchestrator
//! - [`error`]: error kinds and their exit codes
//! - [`logging`]: tracing subscriber setup for the binary

#![warn(clippy::all, rust_2018_idioms)]

pub mod error;
pub mod logging;
pub mod pipeline;
