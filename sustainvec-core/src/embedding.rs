use async_trait::async_trait;

use crate::EmbeddingError;

/// Turns text into vectors of a fixed dimension.
///
/// Report chunks are embedded offline through batch files; this trait covers
/// the live side, where questionnaire queries are embedded one at a time.
#[async_trait]
pub trait Embedding: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// One vector per input, in input order.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError>;

    fn dimension(&self) -> usize;
}
