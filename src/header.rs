//! GONG header parsing.
//!
//! Line 5 of a GONG file holds `nn iconst ivar ivers`: the number of grid
//! points, global constants, variables per point and the format version.
//! These counts drive the reshape of the fixed-width token stream.

use crate::constants::{GONG_HEADER_FIELDS, GONG_HEADER_LINE_INDEX};
use crate::error::{Result, SolarError};
use crate::models::GongHeader;
use crate::source::{line_read_error, open_data_file};
use std::io::BufRead;
use std::path::Path;
use tracing::debug;

/// Read the header counts from a GONG file
pub fn parse_gong_header(file_path: &Path) -> Result<GongHeader> {
    let reader = open_data_file(file_path)?;

    let mut header_line = None;
    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| line_read_error(e, file_path, line_num + 1))?;
        if line_num == GONG_HEADER_LINE_INDEX {
            header_line = Some(line);
            break;
        }
    }

    let header_line = header_line.ok_or_else(|| SolarError::HeaderParsingFailed {
        path: file_path.to_path_buf(),
        reason: format!(
            "File ends before header line {}",
            GONG_HEADER_LINE_INDEX + 1
        ),
    })?;

    let header =
        parse_header_line(&header_line).map_err(|reason| SolarError::HeaderParsingFailed {
            path: file_path.to_path_buf(),
            reason,
        })?;

    debug!(
        "Parsed GONG header for {}: nn={}, iconst={}, ivar={}, ivers={}",
        file_path.display(),
        header.nn,
        header.iconst,
        header.ivar,
        header.ivers
    );

    Ok(header)
}

/// Parse `nn iconst ivar ivers` from a single line
fn parse_header_line(line: &str) -> std::result::Result<GongHeader, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != GONG_HEADER_FIELDS {
        return Err(format!(
            "Expected {} integers on header line, found {} fields: '{}'",
            GONG_HEADER_FIELDS,
            tokens.len(),
            line.trim()
        ));
    }

    let count = |index: usize, name: &str| {
        tokens[index]
            .parse::<usize>()
            .map_err(|_| format!("Invalid {} value '{}'", name, tokens[index]))
    };

    let nn = count(0, "nn")?;
    let iconst = count(1, "iconst")?;
    let ivar = count(2, "ivar")?;
    let ivers = tokens[3]
        .parse::<i32>()
        .map_err(|_| format!("Invalid ivers value '{}'", tokens[3]))?;

    Ok(GongHeader {
        nn,
        iconst,
        ivar,
        ivers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_header_line() {
        let header = parse_header_line("    2482    15    25   210").unwrap();
        assert_eq!(
            header,
            GongHeader {
                nn: 2482,
                iconst: 15,
                ivar: 25,
                ivers: 210
            }
        );
    }

    #[test]
    fn test_parse_header_line_wrong_field_count() {
        assert!(parse_header_line("10 15 25").is_err());
        assert!(parse_header_line("10 15 25 210 1").is_err());
        assert!(parse_header_line("").is_err());
    }

    #[test]
    fn test_parse_header_line_non_integer() {
        let err = parse_header_line("10 15.0 25 210").unwrap_err();
        assert!(err.contains("iconst"));
        assert!(parse_header_line("-10 15 25 210").is_err());
    }

    #[test]
    fn test_gong_header_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "L5BI.D.15.PRES.950912.AARHUS").unwrap();
        writeln!(temp_file, "Model S").unwrap();
        writeln!(temp_file).unwrap();
        writeln!(temp_file, "comment").unwrap();
        writeln!(temp_file, "    10    15    25   210").unwrap();

        let header = parse_gong_header(temp_file.path()).unwrap();
        assert_eq!(header.nn, 10);
        assert_eq!(header.iconst, 15);
        assert_eq!(header.ivar, 25);
        assert_eq!(header.ivers, 210);
    }

    #[test]
    fn test_gong_header_file_too_short() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "only").unwrap();
        writeln!(temp_file, "three").unwrap();
        writeln!(temp_file, "lines").unwrap();

        match parse_gong_header(temp_file.path()) {
            Err(SolarError::HeaderParsingFailed { reason, .. }) => {
                assert!(reason.contains("line 5"))
            }
            other => panic!("Expected HeaderParsingFailed, got {:?}", other),
        }
    }
}
