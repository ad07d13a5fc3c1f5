//! Solar atmosphere, Table 26 of Avrett & Loeser (2008).
//!
//! The text file was transcribed from the journal's HTML table
//! (<https://iopscience.iop.org/article/10.1086/523671/fulltext/tb26.html>)
//! with the header row turned into comments. The transcription left en-dashes
//! where minus signs belong, so fields that fail to parse are retried with
//! the dash replaced.

use crate::constants::NON_ASCII_MINUS;
use crate::delimited::read_delimited;
use crate::error::Result;
use crate::models::{SolarStructure, StructureFormat};
use crate::schema::{column_labels, reshape_to_frame};
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Read the ten-column atmosphere table
pub fn read_solar_atmosphere(path: &Path) -> Result<SolarStructure> {
    let format = StructureFormat::Atmosphere;
    let width = format.expected_columns();

    let tokens = read_delimited(path, width, parse_atmosphere_field)?;
    let data = reshape_to_frame(&tokens, &column_labels(format.column_names(), width), path)?;

    info!(
        "Loaded atmosphere {}: {} heights",
        path.display(),
        data.height()
    );

    Ok(SolarStructure { global: None, data })
}

/// Replace every en-dash with an ASCII hyphen-minus
pub fn normalize_minus(field: &str) -> Cow<'_, str> {
    if field.contains(NON_ASCII_MINUS) {
        Cow::Owned(field.replace(NON_ASCII_MINUS, "-"))
    } else {
        Cow::Borrowed(field)
    }
}

fn parse_atmosphere_field(field: &str) -> Option<f64> {
    field
        .parse::<f64>()
        .ok()
        .or_else(|| normalize_minus(field).parse::<f64>().ok())
}
