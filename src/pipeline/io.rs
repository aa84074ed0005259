//! CSV loading and saving.

use crate::error::{PipelineError, Result, ResultExt as _};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Rows scanned when inferring column types
const INFER_SCHEMA_ROWS: usize = 10_000;

/// Read a CSV file with a header row into a table.
///
/// Integers are read as `Int64`, decimals as `Float64` and everything else as
/// text. Text columns whose values are all numbers once surrounding
/// whitespace is stripped (`"CA, 39538223"`) are converted as well. Empty
/// fields and any token in `null_values` are read as null.
///
/// # Errors
///
/// - [`PipelineError::InputNotFound`] if `path` does not exist.
/// - [`PipelineError::Io`] if `path` is a directory or cannot be inspected.
/// - [`PipelineError::Data`] (with context) if the file cannot be parsed.
pub fn load_table(path: &Path, null_values: &[String]) -> Result<DataFrame> {
    let metadata = match std::fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(PipelineError::InputNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    if metadata.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::IsADirectory,
            format!("{} is a directory", path.display()),
        )
        .into());
    }

    let null_values = (!null_values.is_empty()).then(|| {
        NullValues::AllColumns(null_values.iter().map(|v| v.as_str().into()).collect())
    });

    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .with_has_header(true)
        .with_null_values(null_values)
        .finish()
        .and_then(LazyFrame::collect)
        .with_context(|| format!("Failed to read CSV {}", path.display()))?;
    let df = parse_padded_numeric_columns(df)?;

    tracing::info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded table"
    );
    Ok(df)
}

/// Convert text columns that only hold whitespace-padded numbers.
///
/// Other text columns are left as read, padding included.
///
/// # Errors
///
/// Returns an error if a converted column cannot replace the original.
pub fn parse_padded_numeric_columns(mut df: DataFrame) -> Result<DataFrame> {
    let text_columns: Vec<PlSmallStr> = df
        .schema()
        .iter()
        .filter(|(_, dtype)| **dtype == DataType::String)
        .map(|(name, _)| name.clone())
        .collect();

    for name in &text_columns {
        let parsed = parse_padded_numbers(df.column(name)?.as_materialized_series())?;
        if let Some(numbers) = parsed {
            tracing::debug!(column = %name, dtype = %numbers.dtype(), "parsed padded numbers");
            df.replace(name, numbers)?;
        }
    }
    Ok(df)
}

fn parse_padded_numbers(series: &Series) -> Result<Option<Series>> {
    let text = series.str()?;
    if text.null_count() == text.len() {
        return Ok(None);
    }

    let ints: Option<Vec<Option<i64>>> = text
        .into_iter()
        .map(|v| match v {
            Some(s) => s.trim().parse::<i64>().ok().map(Some),
            None => Some(None),
        })
        .collect();
    if let Some(ints) = ints {
        return Ok(Some(Series::new(series.name().clone(), ints)));
    }

    let floats: Option<Vec<Option<f64>>> = text
        .into_iter()
        .map(|v| match v {
            Some(s) => s.trim().parse::<f64>().ok().map(Some),
            None => Some(None),
        })
        .collect();
    Ok(floats.map(|floats| Series::new(series.name().clone(), floats)))
}

/// Write `df` to `path` as CSV with a header row.
///
/// Missing parent directories are created first; an existing directory is
/// not an error.
///
/// # Errors
///
/// Returns [`PipelineError::Write`] if the directory or the file cannot be
/// created or written.
pub fn save_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir).map_err(|source| PipelineError::Write {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let mut file = File::create(path).map_err(|source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .map_err(|e| PipelineError::Write {
            path: path.to_path_buf(),
            source: std::io::Error::other(e.to_string()),
        })?;

    tracing::info!(path = %path.display(), rows = df.height(), "saved table");
    Ok(())
}
