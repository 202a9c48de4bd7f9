use std::error::Error as StdError;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the file-driven stages.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(
        "invalid input path: {}. Provide a JSON file or a folder of JSON files",
        .0.display()
    )]
    InvalidInput(PathBuf),
    #[error("I/O failed on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed JSON in '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Element {} is missing required field '{field}'", id.as_deref().unwrap_or("<no id>"))]
    MissingField {
        id: Option<String>,
        field: &'static str,
    },
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl PipelineError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PipelineError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        PipelineError::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn missing(id: Option<&str>, field: &'static str) -> Self {
        PipelineError::MissingField {
            id: id.map(str::to_string),
            field,
        }
    }
}

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("Embedding invalid response: {0}")]
    InvalidResponse(String),
    #[error("Embedding provider error: {0}")]
    Provider(String),
    #[error("Embedding error: {0}")]
    Other(#[source] Box<dyn StdError + Send + Sync>),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("invalid record id: {0:?}")]
    InvalidId(String),
    #[error("Store error: {0}")]
    Internal(#[source] Box<dyn StdError + Send + Sync>),
}
