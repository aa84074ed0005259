//! Logging setup.
//!
//! Log events go to stderr so the progress trace on stdout stays readable.
//! The level defaults to `warn` and can be raised with `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=population_pipeline=debug population-pipeline --input_file a.csv --output_file b.csv
//! ```

use anyhow::{Context as _, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Level used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn";

/// Builds the filter from `RUST_LOG`, falling back to `default`.
///
/// # Errors
///
/// Returns error if `default` is not a valid filter directive.
pub fn env_filter(default: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default))
        .with_context(|| format!("Invalid log filter: {default}"))
}

/// Initializes the global subscriber with a stderr fmt layer.
///
/// # Errors
///
/// Returns error if the filter is invalid or a subscriber is already set.
pub fn init() -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter(DEFAULT_FILTER)?)
        .with(stderr_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::debug!("logging initialized");
    Ok(())
}
