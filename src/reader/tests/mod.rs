//! Test utilities for the structure readers
//!
//! Builders for small synthetic GONG, limited and atmosphere files written
//! to temporary storage.

use polars::prelude::DataFrame;
use std::io::Write;
use tempfile::NamedTempFile;


/// Write values five to a line in 16-character fields
pub fn fixed_width_lines(values: &[f64]) -> Vec<String> {
    values
        .chunks(5)
        .map(|chunk| {
            chunk
                .iter()
                .map(|value| format!("{:>16.9E}", value))
                .collect::<String>()
        })
        .collect()
}

/// Create a GONG file with the given header line, globals and grid values
pub fn create_gong_file(header: &str, globals: &[f64], grid: &[f64]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "L5BI.D.15.PRES.950912.AARHUS").unwrap();
    writeln!(temp_file, "Synthetic model for tests").unwrap();
    writeln!(temp_file, "Model S layout").unwrap();
    writeln!(temp_file, "Generated by reader tests").unwrap();
    writeln!(temp_file, "{}", header).unwrap();
    for line in fixed_width_lines(globals) {
        writeln!(temp_file, "{}", line).unwrap();
    }
    for line in fixed_width_lines(grid) {
        writeln!(temp_file, "{}", line).unwrap();
    }
    temp_file.flush().unwrap();
    temp_file
}

/// Global parameters 1.0 ..= 15.0
pub fn sample_globals() -> Vec<f64> {
    (1..=15).map(f64::from).collect()
}

/// `rows * width` distinct values, row-major: row r column c holds r * 100 + c
pub fn sample_grid(rows: usize, width: usize) -> Vec<f64> {
    (0..rows)
        .flat_map(|r| (0..width).map(move |c| (r * 100 + c) as f64))
        .collect()
}

/// Create a delimited file from raw lines
pub fn create_text_file(lines: &[&str]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(temp_file, "{}", line).unwrap();
    }
    temp_file.flush().unwrap();
    temp_file
}

/// Values of one column as plain floats
pub fn column_values(df: &DataFrame, name: &str) -> Vec<f64> {
    df.column(name)
        .unwrap()
        .f64()
        .unwrap()
        .into_no_null_iter()
        .collect()
}

/// Column names as owned strings
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}
