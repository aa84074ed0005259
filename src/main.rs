//! Command-line entry point.
//!
//! ```bash
//! population-pipeline --input_file us_pop_by_state.csv --output_file processed/summary.csv
//! ```
//!
//! Prints a progress line before each step. On failure prints
//! `An error occurred: ...` and exits with a code specific to the error kind
//! (see [`PipelineError::exit_code`](population_pipeline::error::PipelineError::exit_code)).

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::Parser as _;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    // The pipeline still runs if the subscriber cannot be installed
    if let Err(e) = population_pipeline::logging::init() {
        eprintln!("Failed to initialize logging: {e:#}");
    }

    match cli::run_command(&cli) {
        Ok(report) => {
            tracing::info!("{}", report.summary());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(exit_code = e.exit_code(), "pipeline failed");
            eprintln!("An error occurred: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
