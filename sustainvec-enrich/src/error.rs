use std::path::PathBuf;

use sustainvec_core::PipelineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnrichError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error("I/O failed on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed batch result at line {line}: {reason}")]
    MalformedResult { line: usize, reason: String },
}

impl EnrichError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EnrichError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type EnrichResult<T> = Result<T, EnrichError>;
