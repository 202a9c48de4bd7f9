//! Wire shapes of the data plane and control plane calls. Request bodies are
//! camelCase like the REST API.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sustainvec_core::VectorRecord;

#[derive(Serialize)]
pub(crate) struct UpsertBody<'a> {
    pub vectors: &'a [VectorRecord],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<&'a str>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpsertReply {
    #[serde(default)]
    pub upserted_count: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QueryBody<'a> {
    pub vector: &'a [f32],
    pub top_k: usize,
    pub include_metadata: bool,
    pub include_values: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<&'a str>,
}

#[derive(Deserialize)]
pub(crate) struct ScoredRecord {
    pub id: String,
    pub score: f32,
    #[serde(default)]
    pub metadata: Option<Value>,
}

#[derive(Deserialize)]
pub(crate) struct QueryReply {
    #[serde(default)]
    pub matches: Vec<ScoredRecord>,
}

/// Index-wide statistics from `describe_index_stats`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndexStatsResponse {
    #[serde(default)]
    pub dimension: Option<usize>,
    #[serde(default)]
    pub total_vector_count: Option<u64>,
}

#[derive(Deserialize)]
pub(crate) struct IndexDescription {
    pub host: String,
}
