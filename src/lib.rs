//! Solar Structure Library
//!
//! Readers for solar reference datasets, returning polars DataFrames:
//! - Model S interior structure in the fixed-width GONG format, with its
//!   global parameters and the 25-variable structure grid
//! - Model S in the limited six-column format
//! - The Avrett & Loeser (2008) atmosphere, Table 26
//!
//! Parsing stops at labeled columns; no physics, interpolation or unit
//! conversion is applied. Every call re-reads its file and returns a fresh
//! [`SolarStructure`] owned by the caller.

pub mod cli;
pub mod config;
pub mod constants;
pub mod delimited;
pub mod error;
pub mod fixed_width;
pub mod header;
pub mod models;
pub mod reader;
pub mod schema;
pub mod source;

// Re-export commonly used types
pub use config::SolarConfig;
pub use error::{Result, SolarError};
pub use models::{GongHeader, SolarStructure, StructureFormat};
pub use reader::{
    read_default, read_model_s_gong, read_model_s_gong_default, read_model_s_limited,
    read_model_s_limited_default, read_solar_atmosphere, read_solar_atmosphere_default,
    read_structure, read_with_config,
};
