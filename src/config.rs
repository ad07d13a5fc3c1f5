//! Configuration of default data file locations.
//!
//! Layered the same way for every entry point: built-in defaults, then the
//! `SOLAR_STRUCTURE_DATA_DIR` environment variable, then explicit overrides
//! from the caller or the command line.

use crate::constants::DATA_DIR_ENV_VAR;
use crate::error::{Result, SolarError};
use crate::models::StructureFormat;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where the reference files live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarConfig {
    /// Directory relative paths are resolved against (working directory if unset)
    pub data_root: Option<PathBuf>,

    /// Model S in GONG format
    pub gong_path: PathBuf,

    /// Model S limited format
    pub limited_path: PathBuf,

    /// Avrett & Loeser (2008) atmosphere table
    pub atmosphere_path: PathBuf,
}

impl Default for SolarConfig {
    fn default() -> Self {
        Self {
            data_root: None,
            gong_path: PathBuf::from(StructureFormat::Gong.default_path()),
            limited_path: PathBuf::from(StructureFormat::Limited.default_path()),
            atmosphere_path: PathBuf::from(StructureFormat::Atmosphere.default_path()),
        }
    }
}

impl SolarConfig {
    /// Defaults, with the data root taken from the environment when set
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var_os(DATA_DIR_ENV_VAR))
    }

    fn from_env_value(value: Option<OsString>) -> Self {
        let config = Self::default();
        match value {
            Some(dir) if !dir.is_empty() => {
                debug!("Using data root from {}: {:?}", DATA_DIR_ENV_VAR, dir);
                config.with_data_root(PathBuf::from(dir))
            }
            _ => config,
        }
    }

    /// Resolve relative paths against `root`
    pub fn with_data_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.data_root = Some(root.into());
        self
    }

    /// Override the file used for one format
    pub fn with_path(mut self, format: StructureFormat, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match format {
            StructureFormat::Gong => self.gong_path = path,
            StructureFormat::Limited => self.limited_path = path,
            StructureFormat::Atmosphere => self.atmosphere_path = path,
        }
        self
    }

    /// Full path of the file read for `format`
    pub fn path_for(&self, format: StructureFormat) -> PathBuf {
        let path = match format {
            StructureFormat::Gong => &self.gong_path,
            StructureFormat::Limited => &self.limited_path,
            StructureFormat::Atmosphere => &self.atmosphere_path,
        };
        self.resolve(path)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.data_root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Reject empty paths before any file is touched
    pub fn validate(&self) -> Result<()> {
        for (name, path) in [
            ("gong_path", &self.gong_path),
            ("limited_path", &self.limited_path),
            ("atmosphere_path", &self.atmosphere_path),
        ] {
            if path.as_os_str().is_empty() {
                return Err(SolarError::Configuration {
                    message: format!("{} must not be empty", name),
                });
            }
        }

        if let Some(root) = &self.data_root {
            if root.as_os_str().is_empty() {
                return Err(SolarError::Configuration {
                    message: "data_root must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}
