//! Core data structures shared by the readers.
//!
//! Defines the supported file formats, the GONG header record and the
//! two-part result every reader returns.

use crate::constants::{
    ATMOSPHERE_COLUMNS, DEFAULT_ATMOSPHERE_PATH, DEFAULT_GONG_PATH, DEFAULT_LIMITED_PATH,
    GONG_GRID_COLUMNS, LIMITED_COLUMNS,
};
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use std::fmt;

/// File layouts understood by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureFormat {
    /// Model S, fixed-width GONG layout with global parameters
    Gong,
    /// Model S, six whitespace-delimited columns
    Limited,
    /// Avrett & Loeser (2008) atmosphere, ten whitespace-delimited columns
    Atmosphere,
}

impl StructureFormat {
    /// Labels of the grid columns, in file order
    pub fn column_names(&self) -> &'static [&'static str] {
        match self {
            StructureFormat::Gong => &GONG_GRID_COLUMNS,
            StructureFormat::Limited => &LIMITED_COLUMNS,
            StructureFormat::Atmosphere => &ATMOSPHERE_COLUMNS,
        }
    }

    /// Number of labeled grid columns for this format
    pub fn expected_columns(&self) -> usize {
        self.column_names().len()
    }

    /// Location of the shipped reference file, relative to the data root
    pub fn default_path(&self) -> &'static str {
        match self {
            StructureFormat::Gong => DEFAULT_GONG_PATH,
            StructureFormat::Limited => DEFAULT_LIMITED_PATH,
            StructureFormat::Atmosphere => DEFAULT_ATMOSPHERE_PATH,
        }
    }
}

impl fmt::Display for StructureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StructureFormat::Gong => "GONG",
            StructureFormat::Limited => "limited",
            StructureFormat::Atmosphere => "atmosphere",
        };
        f.write_str(name)
    }
}

/// Counts from line 5 of a GONG file
///
/// Only used to validate and reshape the raw token stream; none of these
/// values are carried into the returned tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GongHeader {
    /// Number of grid points
    pub nn: usize,
    /// Number of global constants
    pub iconst: usize,
    /// Number of variables per grid point
    pub ivar: usize,
    /// Format version
    pub ivers: i32,
}

/// Result of reading one structure or atmosphere file
#[derive(Debug, Clone)]
pub struct SolarStructure {
    /// Single-row table of global parameters (GONG only)
    pub global: Option<DataFrame>,
    /// One row per radial or height sample, in file order
    pub data: DataFrame,
}

impl SolarStructure {
    /// Shape of the grid table as (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        self.data.shape()
    }
}
