use serde_json::{Map, Value};
use sustainvec_core::{MetadataFilter, SearchMatch, StoreError, VectorRecord, VectorStore};
use tracing::Instrument;

use crate::client::{Endpoint, PineconeHttpClient};
use crate::config::PineconeStoreBuilder;
use crate::filter::{to_pinecone_filter_json, PineconeFilter};
use crate::types::{IndexStatsResponse, QueryBody, QueryReply, UpsertBody, UpsertReply};
use crate::PineconeStoreError;

/// One Pinecone index (optionally one namespace in it).
pub struct PineconeVectorStore {
    client: PineconeHttpClient,
    namespace: Option<String>,
    index_name: Option<String>,
    dimension: Option<usize>,
    max_batch_size: usize,
}

impl PineconeVectorStore {
    pub fn builder() -> PineconeStoreBuilder {
        PineconeStoreBuilder::new()
    }

    pub(crate) fn new(
        client: PineconeHttpClient,
        namespace: Option<String>,
        index_name: Option<String>,
        dimension: Option<usize>,
        max_batch_size: usize,
    ) -> Self {
        Self {
            client,
            namespace,
            index_name,
            dimension,
            max_batch_size,
        }
    }

    pub fn host(&self) -> &str {
        self.client.base_url()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn max_batch_size(&self) -> usize {
        self.max_batch_size
    }

    pub async fn describe_index_stats(&self) -> Result<IndexStatsResponse, PineconeStoreError> {
        self.client
            .send_json(
                Endpoint::DescribeIndexStats,
                &Value::Object(Map::new()),
                self.namespace.as_deref(),
            )
            .await
    }

    /// Logs a warning when the index dimension differs from the configured
    /// one. Never fails the build.
    pub(crate) async fn validate_dimension_on_init(&self) {
        let Some(expected) = self.dimension else {
            tracing::warn!("no dimension configured, skipping index dimension check");
            return;
        };

        let stats = match self.describe_index_stats().await {
            Ok(stats) => stats,
            Err(err) => {
                tracing::warn!(error = %err, "could not read index stats");
                return;
            }
        };
        match stats.dimension {
            Some(actual) if actual != expected => tracing::warn!(
                index_name = ?self.index_name,
                actual,
                expected,
                "index dimension differs from the embedding dimension"
            ),
            Some(_) => {}
            None => tracing::warn!("index stats carry no dimension"),
        }
    }

    fn check_records(&self, records: &[VectorRecord]) -> Result<(), PineconeStoreError> {
        for record in records {
            if record.id.trim().is_empty() {
                return Err(PineconeStoreError::InvalidId(record.id.clone()));
            }
            if let Some(expected) = self.dimension {
                if record.values.len() != expected {
                    return Err(PineconeStoreError::DimensionMismatch {
                        expected,
                        got: record.values.len(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Uploads `records` in chunks of `max_batch_size`, one request per chunk,
    /// in order. The first failing chunk stops the upload; chunks already sent
    /// stay in the index. Returns the number of records sent.
    pub async fn upsert_records(&self, records: &[VectorRecord]) -> Result<usize, PineconeStoreError> {
        self.check_records(records)?;

        let total_chunks = records.len().div_ceil(self.max_batch_size);
        for (chunk_index, chunk) in records.chunks(self.max_batch_size).enumerate() {
            let chunk_number = chunk_index + 1;
            let span = tracing::info_span!(
                "pinecone_upsert_chunk",
                namespace = ?self.namespace,
                chunk = chunk_number,
                records = chunk.len(),
            );

            let body = UpsertBody {
                vectors: chunk,
                namespace: self.namespace.as_deref(),
            };
            let result: Result<UpsertReply, _> = self
                .client
                .send_json(Endpoint::Upsert, &body, self.namespace.as_deref())
                .instrument(span)
                .await;

            match result {
                Ok(reply) => {
                    tracing::info!(
                        upserted = reply.upserted_count.unwrap_or(chunk.len()),
                        "upserted chunk {chunk_number} of {total_chunks}"
                    );
                }
                Err(err) => {
                    tracing::error!(
                        error = %err,
                        transient = err.is_transient(),
                        "failed to upsert chunk {chunk_number}"
                    );
                    return Err(PineconeStoreError::ChunkFailed {
                        chunk: chunk_number,
                        total: total_chunks,
                        records: chunk.len(),
                        source: Box::new(err),
                    });
                }
            }
        }

        Ok(records.len())
    }

    /// Nearest neighbours of `vector`, metadata included, best match first.
    pub async fn query_by_filter(
        &self,
        vector: &[f32],
        top_k: usize,
        filter: Option<PineconeFilter>,
    ) -> Result<Vec<SearchMatch>, PineconeStoreError> {
        let span = tracing::info_span!("pinecone_query", namespace = ?self.namespace, top_k);

        let body = QueryBody {
            vector,
            top_k,
            include_metadata: true,
            include_values: false,
            filter: filter.as_ref().map(to_pinecone_filter_json),
            namespace: self.namespace.as_deref(),
        };

        let reply: QueryReply = self
            .client
            .send_json(Endpoint::Query, &body, self.namespace.as_deref())
            .instrument(span)
            .await?;

        Ok(reply
            .matches
            .into_iter()
            .map(|scored| SearchMatch {
                id: scored.id,
                score: scored.score,
                metadata: scored.metadata.unwrap_or_else(|| Value::Object(Map::new())),
            })
            .collect())
    }

    pub async fn query_raw_filter(
        &self,
        vector: &[f32],
        top_k: usize,
        filter: Value,
    ) -> Result<Vec<SearchMatch>, PineconeStoreError> {
        self.query_by_filter(vector, top_k, Some(PineconeFilter::Raw(filter)))
            .await
    }
}

#[async_trait::async_trait]
impl VectorStore for PineconeVectorStore {
    async fn upsert(&self, records: Vec<VectorRecord>) -> Result<(), StoreError> {
        self.upsert_records(&records).await?;
        Ok(())
    }

    async fn query(
        &self,
        vector: &[f32],
        top_k: usize,
        filter: Option<&MetadataFilter>,
    ) -> Result<Vec<SearchMatch>, StoreError> {
        let filter = filter.cloned().map(PineconeFilter::Typed);
        Ok(self.query_by_filter(vector, top_k, filter).await?)
    }
}
