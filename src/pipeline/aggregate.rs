//! Single-column aggregation into a one-row summary.

use crate::error::{PipelineError, Result};
use polars::prelude::*;
use std::fmt;

/// Sum of a numeric column, kept in the column's own number family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Total {
    Int(i64),
    Float(f64),
}

impl fmt::Display for Total {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Sum `column` over every row of `df`. Zero rows sum to `0`.
///
/// Integer columns sum to [`Total::Int`], float columns to [`Total::Float`].
///
/// # Errors
///
/// - [`PipelineError::ColumnNotFound`] if `column` is absent.
/// - [`PipelineError::NonNumericColumn`] if it has rows and is not numeric.
pub fn column_total(df: &DataFrame, column: &str) -> Result<Total> {
    let Ok(values) = df.column(column) else {
        return Err(PipelineError::ColumnNotFound {
            column: column.to_owned(),
            available: df
                .get_column_names()
                .iter()
                .map(|name| name.to_string())
                .collect(),
        });
    };
    let series = values.as_materialized_series();
    let dtype = series.dtype();

    if dtype.is_integer() {
        let ints = series.cast(&DataType::Int64)?;
        Ok(Total::Int(ints.i64()?.sum().unwrap_or(0)))
    } else if dtype.is_float() {
        let floats = series.cast(&DataType::Float64)?;
        Ok(Total::Float(floats.f64()?.sum().unwrap_or(0.0)))
    } else if series.is_empty() || *dtype == DataType::Null {
        // header-only input is read with text columns
        Ok(Total::Int(0))
    } else {
        Err(PipelineError::NonNumericColumn {
            column: column.to_owned(),
            dtype: dtype.clone(),
        })
    }
}

/// Build the one-row, one-column summary table holding `total`.
///
/// # Errors
///
/// Returns an error if the frame cannot be constructed.
pub fn summary_frame(summary_column: &str, total: Total) -> Result<DataFrame> {
    let values = match total {
        Total::Int(v) => Column::new(summary_column.into(), &[v]),
        Total::Float(v) => Column::new(summary_column.into(), &[v]),
    };
    Ok(DataFrame::new(vec![values])?)
}

/// Sum `sum_column` of the cleaned table into a single-row summary named
/// `summary_column`.
///
/// # Errors
///
/// See [`column_total`].
pub fn summarize(df: &DataFrame, sum_column: &str, summary_column: &str) -> Result<DataFrame> {
    let total = column_total(df, sum_column)?;
    tracing::debug!(column = sum_column, %total, rows = df.height(), "summed column");
    summary_frame(summary_column, total)
}
