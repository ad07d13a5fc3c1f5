//! Structure and atmosphere file readers.
//!
//! Each reader maps one file layout to one fixed table schema and returns a
//! fresh [`SolarStructure`] on every call. Readers are independent of one
//! another and hold no state between calls.

mod atmosphere;
mod gong;
mod limited;

#[cfg(test)]
mod tests;

pub use atmosphere::{normalize_minus, read_solar_atmosphere};
pub use gong::read_model_s_gong;
pub use limited::read_model_s_limited;

use crate::config::SolarConfig;
use crate::error::Result;
use crate::models::{SolarStructure, StructureFormat};
use std::path::Path;

/// Read `path` with the reader for `format`
pub fn read_structure(format: StructureFormat, path: &Path) -> Result<SolarStructure> {
    match format {
        StructureFormat::Gong => read_model_s_gong(path),
        StructureFormat::Limited => read_model_s_limited(path),
        StructureFormat::Atmosphere => read_solar_atmosphere(path),
    }
}

/// Read the file `config` assigns to `format`
pub fn read_with_config(format: StructureFormat, config: &SolarConfig) -> Result<SolarStructure> {
    config.validate()?;
    read_structure(format, &config.path_for(format))
}

/// Read the reference file for `format` from its configured location
pub fn read_default(format: StructureFormat) -> Result<SolarStructure> {
    read_with_config(format, &SolarConfig::from_env())
}

/// Model S in GONG format from the default location
pub fn read_model_s_gong_default() -> Result<SolarStructure> {
    read_default(StructureFormat::Gong)
}

/// Model S limited format from the default location
pub fn read_model_s_limited_default() -> Result<SolarStructure> {
    read_default(StructureFormat::Limited)
}

/// Solar atmosphere table from the default location
pub fn read_solar_atmosphere_default() -> Result<SolarStructure> {
    read_default(StructureFormat::Atmosphere)
}
