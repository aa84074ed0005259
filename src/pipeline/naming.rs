//! Column header normalization.

use crate::error::{PipelineError, Result};
use polars::prelude::*;
use std::collections::HashSet;

/// Trim, lowercase, then replace each space with an underscore.
///
/// Only the space character is replaced; tabs and other whitespace inside a
/// name are kept. Applying it twice gives the same result as applying it once.
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Rename every column of `df` to its normalized name.
///
/// # Errors
///
/// Returns [`PipelineError::Data`] if two headers normalize to the same name.
pub fn normalize_column_names(df: DataFrame) -> Result<DataFrame> {
    let originals: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    let mut seen = HashSet::new();
    let mut exprs = Vec::with_capacity(originals.len());
    for name in &originals {
        let normalized = normalize_column_name(name);
        if !seen.insert(normalized.clone()) {
            return Err(PipelineError::Data(format!(
                "column '{name}' normalizes to '{normalized}', which is already taken"
            )));
        }
        exprs.push(col(name.as_str()).alias(normalized.as_str()));
    }

    if exprs.is_empty() {
        return Ok(df);
    }

    Ok(df.lazy().select(exprs).collect()?)
}
