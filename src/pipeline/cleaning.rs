//! Row filtering and header cleanup.
//!
//! A cell is *missing* when it is null or, in a floating-point column, NaN.
//! Empty fields and the configured null tokens are already null once the loader
//! has read them, so this module does not look at raw text. Strings made of
//! whitespace are kept as ordinary values.

use super::naming::normalize_column_names;
use crate::error::Result;
use polars::prelude::*;

/// Drop every row that has at least one missing cell.
///
/// # Errors
///
/// Returns an error if the filter cannot be evaluated.
pub fn drop_missing_rows(df: DataFrame) -> Result<DataFrame> {
    let mut predicate: Option<Expr> = None;
    for (name, dtype) in df.schema().iter() {
        let mut present = col(name.as_str()).is_not_null();
        if dtype.is_float() {
            present = present.and(col(name.as_str()).is_not_nan());
        }
        predicate = Some(match predicate {
            Some(p) => p.and(present),
            None => present,
        });
    }

    let Some(predicate) = predicate else {
        return Ok(df);
    };

    Ok(df.lazy().filter(predicate).collect()?)
}

/// Drop rows with missing cells, then normalize the column names.
///
/// Renaming happens after filtering and never changes which rows are kept.
/// An empty result is valid.
///
/// # Errors
///
/// Returns an error if filtering fails or two headers normalize to the same
/// name.
pub fn clean_table(df: DataFrame) -> Result<DataFrame> {
    let rows_before = df.height();
    let filtered = drop_missing_rows(df)?;
    tracing::debug!(
        rows_before,
        rows_after = filtered.height(),
        "dropped rows with missing values"
    );
    normalize_column_names(filtered)
}
