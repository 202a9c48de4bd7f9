use sustainvec_core::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PineconeStoreError {
    #[error("pinecone is misconfigured: {0}")]
    Config(String),
    #[error("could not reach pinecone: {0}")]
    Transport(String),
    #[error("{endpoint} returned {status}: {message}")]
    Api {
        endpoint: &'static str,
        status: u16,
        message: String,
        retry_after_seconds: Option<u64>,
        namespace: Option<String>,
    },
    #[error("unexpected pinecone response: {0}")]
    Malformed(String),
    #[error("record id {0:?} is blank")]
    InvalidId(String),
    #[error("record has {got} values but the index expects {expected}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("chunk {chunk} of {total} ({records} records) was rejected: {source}")]
    ChunkFailed {
        chunk: usize,
        total: usize,
        records: usize,
        #[source]
        source: Box<PineconeStoreError>,
    },
}

impl PineconeStoreError {
    /// Rate limiting, server-side failures and dropped connections. Nothing
    /// here retries; callers use this to decide whether a rerun can help.
    pub fn is_transient(&self) -> bool {
        match self {
            PineconeStoreError::Transport(_) => true,
            PineconeStoreError::Api { status, .. } => *status == 429 || *status >= 500,
            PineconeStoreError::ChunkFailed { source, .. } => source.is_transient(),
            _ => false,
        }
    }
}

impl From<PineconeStoreError> for StoreError {
    fn from(err: PineconeStoreError) -> Self {
        match err {
            PineconeStoreError::InvalidId(id) => StoreError::InvalidId(id),
            PineconeStoreError::DimensionMismatch { expected, got } => {
                StoreError::DimensionMismatch { expected, got }
            }
            other => StoreError::Internal(Box::new(other)),
        }
    }
}
