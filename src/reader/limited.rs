//! Model S limited format: six whitespace-delimited columns, no globals.

use crate::delimited::{parse_plain, read_delimited};
use crate::error::Result;
use crate::models::{SolarStructure, StructureFormat};
use crate::schema::{column_labels, reshape_to_frame};
use std::path::Path;
use tracing::info;

/// Read radius, sound speed, density, pressure, Γ1 and temperature
pub fn read_model_s_limited(path: &Path) -> Result<SolarStructure> {
    let format = StructureFormat::Limited;
    let width = format.expected_columns();

    let tokens = read_delimited(path, width, parse_plain)?;
    let data = reshape_to_frame(&tokens, &column_labels(format.column_names(), width), path)?;

    info!(
        "Loaded limited model {}: {} rows",
        path.display(),
        data.height()
    );

    Ok(SolarStructure { global: None, data })
}
