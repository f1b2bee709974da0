use thiserror::Error;

#[derive(Debug, Error)]
pub enum PcsError {
    #[error("unknown risk factor: {0}")]
    UnknownRiskFactor(String),
    #[error("unknown dashboard variant: {0}")]
    UnknownVariant(String),
    #[error("unknown scatter mode: {0}")]
    UnknownScatterMode(String),
    #[error("patient identifier is empty")]
    EmptyPatientId,
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, PcsError>;
