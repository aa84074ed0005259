use clap::Parser;
use population_pipeline::error::Result;
use population_pipeline::pipeline::{PipelineSpec, RunReport, run_pipeline};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "population-pipeline",
    about = "Run the population data pipeline."
)]
pub struct Cli {
    /// Path to the input CSV file.
    #[arg(long = "input_file", value_name = "PATH")]
    pub input_file: PathBuf,

    /// Path to save the processed CSV file.
    #[arg(long = "output_file", value_name = "PATH")]
    pub output_file: PathBuf,
}

impl Cli {
    pub fn spec(&self) -> PipelineSpec {
        PipelineSpec::new(&self.input_file, &self.output_file)
    }
}

/// Runs the pipeline, printing a progress line before each step.
pub fn run_command(cli: &Cli) -> Result<RunReport> {
    let spec = cli.spec();
    let report = run_pipeline(&spec, |stage| println!("{}", stage.message()))?;

    println!("Processed data saved to {}", report.output_path.display());
    println!("Pipeline executed successfully!");
    Ok(report)
}
