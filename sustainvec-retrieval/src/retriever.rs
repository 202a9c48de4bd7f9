use serde::Serialize;
use sustainvec_core::{Embedding, MetadataFilter, SearchMatch, Value, VectorStore};

use crate::RetrievalResult;

/// Text and page of one retrieved chunk. `page_number` is whatever the index
/// stored, or `"N/A"` when it stored nothing.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Passage {
    pub text: String,
    pub page_number: Value,
}

impl Passage {
    /// Reads a passage out of match metadata. Matches without a string
    /// `text` yield `None`.
    pub fn from_match(found: &SearchMatch) -> Option<Self> {
        let text = found.metadata.get("text")?.as_str()?.to_string();
        let page_number = found
            .metadata
            .get("page_number")
            .cloned()
            .unwrap_or_else(|| Value::String("N/A".to_string()));
        Some(Self { text, page_number })
    }
}

pub struct Retriever<E, S> {
    embedder: E,
    store: S,
}

impl<E, S> Retriever<E, S>
where
    E: Embedding,
    S: VectorStore,
{
    pub fn new(embedder: E, store: S) -> Self {
        Self { embedder, store }
    }

    /// Embeds `query` with newlines flattened to spaces and returns the
    /// store's nearest matches.
    pub async fn retrieve(
        &self,
        query: &str,
        top_k: usize,
        filter: Option<&MetadataFilter>,
    ) -> RetrievalResult<Vec<SearchMatch>> {
        let query = query.replace('\n', " ");
        let embedding = self.embedder.embed(&query).await?;
        let results = self.store.query(&embedding, top_k, filter).await?;
        Ok(results)
    }

    pub async fn passages(
        &self,
        query: &str,
        top_k: usize,
        filter: Option<&MetadataFilter>,
    ) -> RetrievalResult<Vec<Passage>> {
        let matches = self.retrieve(query, top_k, filter).await?;
        Ok(matches
            .iter()
            .filter_map(|found| {
                let passage = Passage::from_match(found);
                if passage.is_none() {
                    tracing::warn!(id = %found.id, "match has no text metadata, skipping");
                }
                passage
            })
            .collect())
    }
}
