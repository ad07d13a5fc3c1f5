//! Reshaping flat token streams into labeled tables.
//!
//! Every reader produces a one-dimensional, row-major sequence of floats.
//! The row width is always passed in explicitly (from the GONG header or the
//! fixed column schema) and the sequence is partitioned into rows of that
//! width before being transposed into polars columns.

use crate::error::{Result, SolarError};
use polars::prelude::*;
use std::path::Path;
use tracing::debug;

/// Column labels for a table `width` columns wide
///
/// Uses `names` for the leading columns; any column beyond them is named by
/// its 1-based position.
pub fn column_labels(names: &[&str], width: usize) -> Vec<String> {
    (0..width)
        .map(|index| match names.get(index) {
            Some(name) => (*name).to_string(),
            None => (index + 1).to_string(),
        })
        .collect()
}

/// Partition `tokens` into rows of `labels.len()` values and build a DataFrame
pub fn reshape_to_frame(tokens: &[f64], labels: &[String], path: &Path) -> Result<DataFrame> {
    let width = labels.len();
    if width == 0 || tokens.len() % width != 0 {
        return Err(SolarError::ReshapeMismatch {
            path: path.to_path_buf(),
            tokens: tokens.len(),
            width,
        });
    }

    let columns: Vec<Column> = labels
        .iter()
        .enumerate()
        .map(|(offset, label)| {
            let values: Vec<f64> = tokens.iter().skip(offset).step_by(width).copied().collect();
            Column::new(label.as_str().into(), values)
        })
        .collect();

    let df = DataFrame::new(columns)?;
    debug!(
        "Reshaped {} values into {} rows x {} columns",
        tokens.len(),
        df.height(),
        width
    );

    Ok(df)
}
