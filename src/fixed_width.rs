//! Fixed-width field tokenizer for GONG files.
//!
//! GONG data lines are written with a Fortran `5e16.9` edit descriptor:
//! up to five fields of sixteen characters. Fields are returned as one
//! flat sequence in reading order; the caller decides the row width.

use crate::constants::{FIXED_FIELDS_PER_LINE, FIXED_FIELD_WIDTH};
use crate::error::{Result, SolarError};
use crate::source::{line_read_error, open_data_file};
use std::io::BufRead;
use std::path::Path;
use tracing::debug;

/// Read fixed-width fields from `path` into a flat token sequence
///
/// The first `skip_lines` lines are ignored. When `max_lines` is given, at
/// most that many lines after the skipped ones are read.
pub fn read_fixed_width(
    path: &Path,
    skip_lines: usize,
    max_lines: Option<usize>,
) -> Result<Vec<f64>> {
    let reader = open_data_file(path)?;
    let take = max_lines.unwrap_or(usize::MAX);

    let mut tokens = Vec::new();
    let mut lines_read = 0;
    for (line_num, line) in reader.lines().enumerate().skip(skip_lines).take(take) {
        let line = line.map_err(|e| line_read_error(e, path, line_num + 1))?;
        tokens.extend(split_fixed_width_line(&line, line_num + 1, path)?);
        lines_read += 1;
    }

    if let Some(expected) = max_lines {
        if lines_read < expected {
            return Err(SolarError::InvalidFormat {
                path: path.to_path_buf(),
                line: skip_lines + lines_read + 1,
                reason: format!(
                    "Expected {} fixed-width lines after line {}, found {}",
                    expected, skip_lines, lines_read
                ),
            });
        }
    }

    debug!(
        "Read {} fixed-width values from {} ({} lines after skipping {})",
        tokens.len(),
        path.display(),
        lines_read,
        skip_lines
    );

    Ok(tokens)
}

/// Split one line into its numeric fields
///
/// `line_num` is 1-based and only used for error reporting. Blank fields
/// may only appear after the last value on a line.
pub fn split_fixed_width_line(line: &str, line_num: usize, path: &Path) -> Result<Vec<f64>> {
    let line = line.trim_end_matches(['\r', '\n']);
    let invalid = |reason: String| SolarError::InvalidFormat {
        path: path.to_path_buf(),
        line: line_num,
        reason,
    };

    if !line.is_ascii() {
        return Err(invalid("Non-ASCII characters in fixed-width line".to_string()));
    }

    let line_width = FIXED_FIELD_WIDTH * FIXED_FIELDS_PER_LINE;
    if line.len() > line_width && !line[line_width..].trim().is_empty() {
        return Err(invalid(format!(
            "More than {} fields of width {}",
            FIXED_FIELDS_PER_LINE, FIXED_FIELD_WIDTH
        )));
    }
    let line = &line[..line.len().min(line_width)];

    let mut values = Vec::with_capacity(FIXED_FIELDS_PER_LINE);
    let mut blank_seen = false;
    for field in line.as_bytes().chunks(FIXED_FIELD_WIDTH) {
        // ASCII was checked above, so every chunk is valid UTF-8
        let text = std::str::from_utf8(field)
            .map_err(|_| invalid("Invalid field encoding".to_string()))?
            .trim();

        if text.is_empty() {
            blank_seen = true;
            continue;
        }
        if blank_seen {
            return Err(invalid(format!(
                "Blank field before value '{}'",
                text
            )));
        }

        let value = parse_fortran_float(text).ok_or_else(|| SolarError::DataQuality {
            path: path.to_path_buf(),
            line: line_num,
            value: text.to_string(),
        })?;
        values.push(value);
    }

    Ok(values)
}

/// Parse a Fortran real, accepting `D` as the exponent marker
fn parse_fortran_float(text: &str) -> Option<f64> {
    text.parse::<f64>()
        .ok()
        .or_else(|| text.replace(['D', 'd'], "E").parse::<f64>().ok())
}
