use std::path::PathBuf;

use sustainvec_core::{EmbeddingError, PipelineError, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("could not embed question: {0}")]
    Embedding(#[from] EmbeddingError),
    #[error("index query failed: {0}")]
    Store(#[from] StoreError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error("context file '{}' must hold a JSON object", path.display())]
    NotAnObject { path: PathBuf },
}

pub type RetrievalResult<T> = Result<T, RetrievalError>;
