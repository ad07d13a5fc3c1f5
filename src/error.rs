//! Error handling for solar structure file reading.
//!
//! Every failure is fatal for the call that raised it: missing files,
//! malformed headers, fixed-width segmentation problems, reshape mismatches
//! and values that will not convert to floating point.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolarError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Data file not found at path: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Header parsing failed for file: {path} - {reason}")]
    HeaderParsingFailed { path: PathBuf, reason: String },

    #[error("Invalid format in file: {path} (line {line}) - {reason}")]
    InvalidFormat {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("Schema mismatch in {format} table: expected {expected} columns, found {found}")]
    SchemaMismatch {
        format: String,
        expected: usize,
        found: usize,
    },

    #[error("Cannot reshape {tokens} values from {path} into rows of width {width}")]
    ReshapeMismatch {
        path: PathBuf,
        tokens: usize,
        width: usize,
    },

    #[error("Non-numeric value '{value}' in file: {path} (line {line})")]
    DataQuality {
        path: PathBuf,
        line: usize,
        value: String,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

pub type Result<T> = std::result::Result<T, SolarError>;
