//! CSV file reading.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = open(path)?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Returns true when the file has a non-blank first line.
fn has_header_line(path: &Path) -> Result<bool> {
    let reader = BufReader::new(open(path)?);
    match reader.lines().next() {
        Some(line) => {
            let line = line.map_err(|e| IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            })?;
            let cleaned = line.strip_prefix('\u{feff}').unwrap_or(&line);
            Ok(!cleaned.trim().is_empty())
        }
        None => Ok(false),
    }
}

/// Reads a CSV file into a Polars DataFrame with every column as text.
///
/// Types are decided per field when records are built, so a numeric-looking
/// `PatID` is never coerced to a float and mixed columns never fail inference.
pub fn read_patient_frame(path: &Path) -> Result<DataFrame> {
    validate_encoding(path)?;
    if !has_header_line(path)? {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_frame_keeps_text() {
        let file = create_temp_csv("PatID,SurgWtKg\n1023,3.8\n0007,\n");
        let df = read_patient_frame(file.path()).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 2);
        let ids = df.column("PatID").unwrap();
        assert_eq!(
            crate::polars_utils::any_to_string(ids.get(1).unwrap()),
            "0007"
        );
    }

    #[test]
    fn test_read_frame_empty_file() {
        let file = create_temp_csv("");
        let result = read_patient_frame(file.path());

        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_read_frame_missing_file() {
        let result = read_patient_frame(Path::new("/nonexistent/patients.csv"));

        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_rejects_utf16() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xFE, b'P', 0]).unwrap();
        let result = validate_encoding(file.path());

        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding { encoding: "UTF-16 LE", .. })
        ));
    }
}
