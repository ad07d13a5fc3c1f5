//! Command-line interface components.

use crate::config::SolarConfig;
use crate::models::{SolarStructure, StructureFormat};
use crate::reader::read_with_config;
use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "solar-structure")]
#[command(about = "Load model S solar structure and solar atmosphere reference tables")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory the default data paths are resolved against
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Number of grid rows to preview
    #[arg(long, global = true, default_value_t = 10)]
    pub rows: usize,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Model S in GONG format (global parameters and structure grid)
    Gong {
        /// File to read instead of the default
        path: Option<PathBuf>,
    },
    /// Model S limited format (r, c, rho, p, Gamma_1, T)
    Limited {
        /// File to read instead of the default
        path: Option<PathBuf>,
    },
    /// Avrett & Loeser (2008) solar atmosphere
    Atmosphere {
        /// File to read instead of the default
        path: Option<PathBuf>,
    },
}

impl Commands {
    pub fn format(&self) -> StructureFormat {
        match self {
            Commands::Gong { .. } => StructureFormat::Gong,
            Commands::Limited { .. } => StructureFormat::Limited,
            Commands::Atmosphere { .. } => StructureFormat::Atmosphere,
        }
    }

    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Commands::Gong { path } | Commands::Limited { path } | Commands::Atmosphere { path } => {
                path.as_ref()
            }
        }
    }
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Layer command-line overrides on top of the environment configuration
    pub fn build_config(&self) -> SolarConfig {
        let mut config = SolarConfig::from_env();
        if let Some(dir) = &self.data_dir {
            config = config.with_data_root(dir.clone());
        }
        if let Some(path) = self.command.path() {
            config = config.with_path(self.command.format(), path.clone());
        }
        config
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("solar_structure={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Read the selected file and print a preview of its tables
pub fn run(args: &Args) -> anyhow::Result<()> {
    let format = args.command.format();
    let config = args.build_config();
    let path = config.path_for(format);
    let structure = read_with_config(format, &config)
        .with_context(|| format!("Failed to read {} file {}", format, path.display()))?;

    print_structure(format, &structure, args.rows);
    Ok(())
}

fn print_structure(format: StructureFormat, structure: &SolarStructure, rows: usize) {
    if let Some(global) = &structure.global {
        println!("{}", "Global parameters".bright_green().bold());
        println!("{}", global);
        println!();
    }

    let (height, width) = structure.shape();
    println!(
        "{} {}",
        format!("{} grid", format).bright_green().bold(),
        format!("({} rows x {} columns)", height, width).bright_black()
    );
    println!("{}", structure.data.head(Some(rows)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subcommand_with_path() {
        let args = Args::parse_from(["solar-structure", "gong", "/tmp/model.fgong"]);
        assert_eq!(args.command.format(), StructureFormat::Gong);
        assert_eq!(args.command.path(), Some(&PathBuf::from("/tmp/model.fgong")));
        assert_eq!(args.rows, 10);
    }

    #[test]
    fn test_path_override_reaches_config() {
        let args = Args::parse_from([
            "solar-structure",
            "atmosphere",
            "table.txt",
            "--data-dir",
            "/data",
            "--rows",
            "3",
        ]);
        let config = args.build_config();

        assert_eq!(args.rows, 3);
        assert_eq!(
            config.path_for(StructureFormat::Atmosphere),
            PathBuf::from("/data/table.txt")
        );
    }

    #[test]
    fn test_log_level_flags() {
        let quiet = Args::parse_from(["solar-structure", "limited", "-q"]);
        let verbose = Args::parse_from(["solar-structure", "limited", "-v"]);
        assert_eq!(quiet.get_log_level(), "error");
        assert_eq!(verbose.get_log_level(), "debug");
        assert!(Args::try_parse_from(["solar-structure", "limited", "-q", "-v"]).is_err());
    }
}
