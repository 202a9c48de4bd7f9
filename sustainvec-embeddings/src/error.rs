use sustainvec_core::EmbeddingError;
use thiserror::Error;

/// Failures of a hosted embedding call, before they are folded into the
/// provider-neutral [`EmbeddingError`].
#[derive(Debug, Error)]
pub enum EmbeddingProviderError {
    #[error("embedding call failed: {0}")]
    Transport(String),
    #[error("asked for {requested} vectors, received {received}")]
    CountMismatch { requested: usize, received: usize },
    #[error("vector {index} has dimension {got}, index expects {expected}")]
    Dimension {
        index: usize,
        expected: usize,
        got: usize,
    },
}

impl From<EmbeddingProviderError> for EmbeddingError {
    fn from(error: EmbeddingProviderError) -> Self {
        match error {
            EmbeddingProviderError::Transport(message) => EmbeddingError::Provider(message),
            shape => EmbeddingError::InvalidResponse(shape.to_string()),
        }
    }
}
