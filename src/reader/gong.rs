//! Model S in GONG format.
//!
//! Layout (see <https://users-phys.au.dk/~jcd/solar_models/file-format.pdf>):
//! four lines of free text, the `nn iconst ivar ivers` header, three lines
//! holding the `iconst` global parameters, then `nn * ivar` grid values, all
//! in fixed-width fields. Published model S files are version 210 or earlier,
//! with 25 values per grid point.

use crate::constants::{
    GONG_GLOBAL_COLUMNS, GONG_GLOBAL_LINES, GONG_GRID_COLUMNS, GONG_GRID_SKIP_LINES,
    GONG_HEADER_LINE_INDEX,
};
use crate::error::{Result, SolarError};
use crate::fixed_width::read_fixed_width;
use crate::header::parse_gong_header;
use crate::models::{SolarStructure, StructureFormat};
use crate::schema::{column_labels, reshape_to_frame};
use std::path::Path;
use tracing::{info, warn};

/// Read a GONG structure file into global parameters and grid data
///
/// The file is accessed three times: once for the header, once for the
/// global block and once for the grid.
pub fn read_model_s_gong(path: &Path) -> Result<SolarStructure> {
    let header = parse_gong_header(path)?;

    if header.iconst != GONG_GLOBAL_COLUMNS.len() {
        return Err(SolarError::SchemaMismatch {
            format: "GONG global parameter".to_string(),
            expected: GONG_GLOBAL_COLUMNS.len(),
            found: header.iconst,
        });
    }
    if header.ivar < GONG_GRID_COLUMNS.len() {
        return Err(SolarError::SchemaMismatch {
            format: StructureFormat::Gong.to_string(),
            expected: GONG_GRID_COLUMNS.len(),
            found: header.ivar,
        });
    }

    let global_tokens =
        read_fixed_width(path, GONG_HEADER_LINE_INDEX + 1, Some(GONG_GLOBAL_LINES))?;
    // Exactly one row
    if global_tokens.len() != header.iconst {
        return Err(SolarError::ReshapeMismatch {
            path: path.to_path_buf(),
            tokens: global_tokens.len(),
            width: header.iconst,
        });
    }
    let global = reshape_to_frame(
        &global_tokens,
        &column_labels(&GONG_GLOBAL_COLUMNS, header.iconst),
        path,
    )?;

    let grid_tokens = read_fixed_width(path, GONG_GRID_SKIP_LINES, None)?;
    // Labels are allocated per column, so the header width must fit the data first
    let widest = grid_tokens.len().max(GONG_GRID_COLUMNS.len());
    if header.ivar > widest || grid_tokens.len() % header.ivar != 0 {
        return Err(SolarError::ReshapeMismatch {
            path: path.to_path_buf(),
            tokens: grid_tokens.len(),
            width: header.ivar,
        });
    }
    let data = reshape_to_frame(
        &grid_tokens,
        &column_labels(&GONG_GRID_COLUMNS, header.ivar),
        path,
    )?;

    if data.height() != header.nn {
        warn!(
            "{}: header declares {} grid points but {} rows were read",
            path.display(),
            header.nn,
            data.height()
        );
    }

    info!(
        "Loaded GONG model {} (version {}): {} grid points x {} variables",
        path.display(),
        header.ivers,
        data.height(),
        data.width()
    );

    Ok(SolarStructure {
        global: Some(global),
        data,
    })
}
