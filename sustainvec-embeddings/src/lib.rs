mod error;

#[cfg(feature = "openai")]
mod openai;

pub use error::EmbeddingProviderError;

#[cfg(feature = "openai")]
pub use openai::{OpenAiEmbedding, DEFAULT_EMBEDDING_DIMENSION, DEFAULT_EMBEDDING_MODEL};
