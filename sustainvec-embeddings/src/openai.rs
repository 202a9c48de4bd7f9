use async_openai::config::OpenAIConfig;
use async_openai::types::{CreateEmbeddingRequestArgs, EncodingFormat};
use async_openai::Client;
use async_trait::async_trait;
use sustainvec_core::{Embedding, EmbeddingError};

use crate::EmbeddingProviderError;

/// Model used for both the chunk batch files and live question embedding, so
/// queries land in the same space as the indexed reports.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
pub const DEFAULT_EMBEDDING_DIMENSION: usize = 1536;

/// Live embeddings through the OpenAI `/embeddings` endpoint.
#[derive(Clone)]
pub struct OpenAiEmbedding {
    client: Client<OpenAIConfig>,
    model: String,
    dimension: usize,
}

impl OpenAiEmbedding {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, dimension: usize) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        Self::with_client(Client::with_config(config), model, dimension)
    }

    /// Same as [`OpenAiEmbedding::new`] against an OpenAI-compatible base
    /// such as `http://host/v1`.
    pub fn with_api_base(
        api_key: impl Into<String>,
        api_base: impl Into<String>,
        model: impl Into<String>,
        dimension: usize,
    ) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_base);
        Self::with_client(Client::with_config(config), model, dimension)
    }

    pub fn with_client(
        client: Client<OpenAIConfig>,
        model: impl Into<String>,
        dimension: usize,
    ) -> Self {
        Self {
            client,
            model: model.into(),
            dimension,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// One request for all `inputs`. Vectors come back in input order and
    /// each one is checked against the configured dimension.
    async fn create(&self, inputs: Vec<String>) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let requested = inputs.len();
        let request = CreateEmbeddingRequestArgs::default()
            .model(self.model.as_str())
            .input(inputs)
            .encoding_format(EncodingFormat::Float)
            .build()
            .map_err(|err| EmbeddingError::Other(Box::new(err)))?;

        tracing::debug!(model = %self.model, inputs = requested, "creating embeddings");
        let mut data = self
            .client
            .embeddings()
            .create(request)
            .await
            .map_err(|err| EmbeddingProviderError::Transport(err.to_string()))?
            .data;

        if data.len() != requested {
            return Err(EmbeddingProviderError::CountMismatch {
                requested,
                received: data.len(),
            }
            .into());
        }
        data.sort_by_key(|item| item.index);

        data.into_iter()
            .enumerate()
            .map(|(index, item)| {
                if item.embedding.len() == self.dimension {
                    Ok(item.embedding)
                } else {
                    Err(EmbeddingProviderError::Dimension {
                        index,
                        expected: self.dimension,
                        got: item.embedding.len(),
                    }
                    .into())
                }
            })
            .collect()
    }
}

#[async_trait]
impl Embedding for OpenAiEmbedding {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let mut vectors = self.create(vec![text.to_string()]).await?;
        Ok(vectors.swap_remove(0))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.create(texts.to_vec()).await
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
