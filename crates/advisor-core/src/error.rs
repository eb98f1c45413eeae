use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("insufficient data: need at least {needed} bars, have {available}")]
    InsufficientData { needed: usize, available: usize },

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("no current price available for target generation")]
    UnavailableTarget,

    #[error("price series is empty")]
    EmptySeries,
}

impl AnalysisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::InsufficientData { .. } => ErrorKind::InsufficientData,
            AnalysisError::MalformedInput(_) => ErrorKind::MalformedInput,
            AnalysisError::UnavailableTarget => ErrorKind::UnavailableTarget,
            AnalysisError::EmptySeries => ErrorKind::EmptySeries,
        }
    }
}

/// Machine-readable error category carried inside a report section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    InsufficientData,
    MalformedInput,
    UnavailableTarget,
    EmptySeries,
}

/// Serializable marker for a report section that could not be computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionError {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&AnalysisError> for SectionError {
    fn from(err: &AnalysisError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<AnalysisError> for SectionError {
    fn from(err: AnalysisError) -> Self {
        SectionError::from(&err)
    }
}
