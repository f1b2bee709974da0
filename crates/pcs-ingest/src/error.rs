//! Error types for patient table loading and selection.

use std::path::PathBuf;
use thiserror::Error;

use pcs_model::PatientId;

/// Errors that can occur while loading the table or selecting a record.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("data file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File starts with a byte-order mark we cannot decode.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === Mapping Errors ===
    /// A column the dashboards read is absent from the source.
    #[error("data mapping error: column '{column}' not found in the source")]
    MissingColumn { column: String },

    /// A data row has a blank `PatID`; the loader skips such rows.
    #[error("row {row} has an empty patient identifier")]
    EmptyIdentifier { row: usize },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    // === Selection Errors ===
    /// No row carries the requested identifier.
    #[error("patient ID {id} not found")]
    PatientNotFound { id: PatientId },

    /// More than one row carries the identifier and the policy forbids picking one.
    #[error("patient ID {id} matches {count} rows")]
    DuplicatePatient { id: PatientId, count: usize },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/MS_copy_DeID_Complete.csv"),
        };
        assert_eq!(
            err.to_string(),
            "data file not found: /data/MS_copy_DeID_Complete.csv"
        );
        let err = IngestError::MissingColumn {
            column: "Gender".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "data mapping error: column 'Gender' not found in the source"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("PatID".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
