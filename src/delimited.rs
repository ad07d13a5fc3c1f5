//! Whitespace-delimited table tokenizer.
//!
//! Fields are separated by any run of spaces or tabs. A `#` starts a
//! comment that runs to the end of the line, and lines left empty after
//! comment removal are skipped. Every remaining line must carry exactly the
//! expected number of fields.

use crate::constants::COMMENT_MARKER;
use crate::error::{Result, SolarError};
use crate::source::{line_read_error, open_data_file};
use std::io::BufRead;
use std::path::Path;
use tracing::debug;

/// Read a delimited table into a flat row-major token sequence
///
/// `parse_field` converts one field to a float; `None` is reported as a
/// data-quality error for that line.
pub fn read_delimited<F>(path: &Path, columns: usize, parse_field: F) -> Result<Vec<f64>>
where
    F: Fn(&str) -> Option<f64>,
{
    let reader = open_data_file(path)?;

    let mut tokens = Vec::new();
    let mut rows = 0;
    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| line_read_error(e, path, line_num + 1))?;
        let content = strip_comment(&line);

        let fields: Vec<&str> = content.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }

        if fields.len() != columns {
            return Err(SolarError::InvalidFormat {
                path: path.to_path_buf(),
                line: line_num + 1,
                reason: format!("Expected {} fields, found {}", columns, fields.len()),
            });
        }

        for field in fields {
            let value = parse_field(field).ok_or_else(|| SolarError::DataQuality {
                path: path.to_path_buf(),
                line: line_num + 1,
                value: field.to_string(),
            })?;
            tokens.push(value);
        }
        rows += 1;
    }

    debug!(
        "Read {} rows of {} fields from {}",
        rows,
        columns,
        path.display()
    );

    Ok(tokens)
}

/// Plain float conversion used by tables without transcription artifacts
pub fn parse_plain(field: &str) -> Option<f64> {
    field.parse::<f64>().ok()
}

fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT_MARKER) {
        Some(index) => &line[..index],
        None => line,
    }
}
