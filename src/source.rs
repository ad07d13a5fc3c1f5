//! Opening reference data files.

use crate::error::{Result, SolarError};
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Open a data file for buffered line reading
///
/// A missing file is reported as [`SolarError::FileNotFound`] so callers can
/// tell it apart from other I/O failures.
pub fn open_data_file(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SolarError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => SolarError::Io(e),
    })?;

    debug!("Opened {}", path.display());
    Ok(BufReader::new(file))
}

/// Convert a failed line read into an error carrying the 1-based line number
///
/// Bytes that are not valid UTF-8 are a format problem of the file itself,
/// so they are reported as [`SolarError::InvalidFormat`].
pub fn line_read_error(error: std::io::Error, path: &Path, line: usize) -> SolarError {
    match error.kind() {
        ErrorKind::InvalidData => SolarError::InvalidFormat {
            path: PathBuf::from(path),
            line,
            reason: "Line is not valid UTF-8".to_string(),
        },
        _ => SolarError::Io(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.txt");

        match open_data_file(&missing) {
            Err(SolarError::FileNotFound { path }) => assert_eq!(path, missing),
            other => panic!("Expected FileNotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_line_read_error_kinds() {
        let path = Path::new("table.txt");

        let invalid =
            std::io::Error::new(ErrorKind::InvalidData, "stream did not contain valid UTF-8");
        assert!(matches!(
            line_read_error(invalid, path, 4),
            SolarError::InvalidFormat { line: 4, .. }
        ));

        let other = std::io::Error::new(ErrorKind::PermissionDenied, "denied");
        assert!(matches!(line_read_error(other, path, 4), SolarError::Io(_)));
    }
}
