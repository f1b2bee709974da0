//! Error types for metrics building and risk scoring.

use thiserror::Error;

use pcs_ingest::IngestError;
use pcs_model::{PatientId, PcsError};

#[derive(Debug, Error)]
pub enum MetricsError {
    /// A risk-factor label or other operator input failed to parse.
    #[error(transparent)]
    Model(#[from] PcsError),

    /// Selecting the record to build for failed.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// The record handed to the builder is not part of the table it was given.
    #[error("patient ID {id} is not part of the loaded table")]
    ForeignRecord { id: PatientId },
}

pub type Result<T> = std::result::Result<T, MetricsError>;
