//! Result type definitions

use thiserror::Error;

/// Core error types
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Required tool not found in PATH: {0}")]
    ToolNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Duration probe failed: {0}")]
    Probe(String),

    #[error("Extraction of segment {index} failed: {message}")]
    Extraction { index: usize, message: String },
}

impl CoreError {
    /// Index of the failing segment, when the error came from extraction.
    pub fn segment_index(&self) -> Option<usize> {
        match self {
            CoreError::Extraction { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Core result type
pub type CoreResult<T> = Result<T, CoreError>;
