use std::sync::Arc;

use async_trait::async_trait;

use sustainvec_core::{Embedding, EmbeddingError};

/// Embeds a text as `[chars, words]`.
struct CountingEmbedding;

#[async_trait]
impl Embedding for CountingEmbedding {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if text.is_empty() {
            return Err(EmbeddingError::InvalidResponse("empty input".to_string()));
        }
        Ok(vec![
            text.chars().count() as f32,
            text.split_whitespace().count() as f32,
        ])
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let mut vectors = Vec::with_capacity(texts.len());
        for text in texts {
            vectors.push(self.embed(text).await?);
        }
        Ok(vectors)
    }

    fn dimension(&self) -> usize {
        2
    }
}

#[tokio::test]
async fn usable_behind_a_trait_object() {
    let embedder: Arc<dyn Embedding> = Arc::new(CountingEmbedding);
    assert_eq!(embedder.dimension(), 2);
    assert_eq!(embedder.embed("Scope 1 emissions").await.unwrap(), vec![17.0, 3.0]);
}

#[tokio::test]
async fn batch_keeps_input_order_and_fails_whole() {
    let texts = vec!["board".to_string(), "risk management".to_string()];
    let vectors = CountingEmbedding.embed_batch(&texts).await.unwrap();
    assert_eq!(vectors, vec![vec![5.0, 1.0], vec![15.0, 2.0]]);

    let with_blank = vec!["board".to_string(), String::new()];
    assert!(matches!(
        CountingEmbedding.embed_batch(&with_blank).await,
        Err(EmbeddingError::InvalidResponse(_))
    ));
}
