//! Error handling for the population pipeline.
//!
//! Every step returns [`Result<T>`], and the orchestrator hands the first
//! failure back to its caller unchanged. Each [`PipelineError`] variant maps to
//! one failure kind, and the command-line entry point turns that kind into a
//! distinct process exit code via [`PipelineError::exit_code`].
//!
//! ```
//! use population_pipeline::error::PipelineError;
//!
//! let err = PipelineError::ColumnNotFound {
//!     column: "2020_census".to_owned(),
//!     available: vec!["rank".to_owned(), "state".to_owned()],
//! };
//! assert_eq!(err.exit_code(), 5);
//! ```
//!
//! The [`ResultExt`] trait prefixes a message while keeping the original
//! kind, so a wrapped error still reports the same exit code.

use polars::prelude::{DataType, PolarsError};
use std::fmt;
use std::path::PathBuf;

/// Main error type for pipeline operations.
#[derive(Debug)]
pub enum PipelineError {
    /// The input file does not exist
    InputNotFound(PathBuf),

    /// Malformed delimited text or any other table-level failure
    Data(String),

    /// The column to aggregate is absent after cleaning
    ColumnNotFound {
        column: String,
        available: Vec<String>,
    },

    /// The column to aggregate holds non-numeric values
    NonNumericColumn { column: String, dtype: DataType },

    /// The destination could not be created or written
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Any other I/O error
    Io(std::io::Error),

    /// An error with a message prefixed by the caller
    Context {
        message: String,
        source: Box<PipelineError>,
    },
}

impl PipelineError {
    /// Process exit code for this kind of failure.
    ///
    /// `2` is left to the argument parser.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Io(_) => 1,
            Self::InputNotFound(_) => 3,
            Self::Data(_) => 4,
            Self::ColumnNotFound { .. } => 5,
            Self::NonNumericColumn { .. } => 6,
            Self::Write { .. } => 7,
            Self::Context { source, .. } => source.exit_code(),
        }
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputNotFound(path) => {
                write!(f, "The file {} does not exist.", path.display())
            }
            Self::Data(msg) => write!(f, "Data processing error: {msg}"),
            Self::ColumnNotFound { column, available } => write!(
                f,
                "Column '{column}' not found (available: {})",
                available.join(", ")
            ),
            Self::NonNumericColumn { column, dtype } => {
                write!(f, "Column '{column}' is not numeric (found {dtype})")
            }
            Self::Write { path, source } => {
                write!(f, "Failed to write {}: {source}", path.display())
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Context { message, source } => write!(f, "{message}: {source}"),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Write { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            Self::Context { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PipelineError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<PolarsError> for PipelineError {
    fn from(err: PolarsError) -> Self {
        Self::Data(err.to_string())
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Data(format!("JSON error: {err}"))
    }
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    ///
    /// # Errors
    ///
    /// Returns the original error wrapped with `msg`.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    ///
    /// # Errors
    ///
    /// Returns the original error wrapped with the closure's message.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<PipelineError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| PipelineError::Context {
            message: msg.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| PipelineError::Context {
            message: f(),
            source: Box::new(e.into()),
        })
    }
}
