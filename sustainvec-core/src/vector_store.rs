use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{MetadataFilter, StoreError, Value};

/// Metadata stored next to each vector in the index.
///
/// `corporate` and `year` are either both present or both absent.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RecordMetadata {
    pub file_name: String,
    pub text: String,
    pub page_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corporate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
}

/// Final per-chunk unit written to the similarity index.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VectorRecord {
    pub id: String,
    pub values: Vec<f32>,
    pub metadata: RecordMetadata,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchMatch {
    pub id: String,
    pub score: f32,
    pub metadata: Value,
}

#[async_trait]
pub trait VectorStore: Send + Sync {
    async fn upsert(&self, records: Vec<VectorRecord>) -> Result<(), StoreError>;
    async fn query(
        &self,
        vector: &[f32],
        top_k: usize,
        filter: Option<&MetadataFilter>,
    ) -> Result<Vec<SearchMatch>, StoreError>;
}
