use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Map;
use sustainvec_core::{MetadataFilter, SearchMatch, StoreError, Value, VectorRecord, VectorStore};
use tokio::sync::RwLock;

struct Entry {
    record: VectorRecord,
    metadata: Map<String, Value>,
}

#[derive(Default)]
struct Index {
    entries: Vec<Entry>,
    positions: HashMap<String, usize>,
    dimension: Option<usize>,
}

impl Index {
    fn admit(&mut self, record: &VectorRecord) -> Result<(), StoreError> {
        if record.id.trim().is_empty() {
            return Err(StoreError::InvalidId(record.id.clone()));
        }
        let got = record.values.len();
        match self.dimension {
            Some(expected) if expected != got => Err(StoreError::DimensionMismatch { expected, got }),
            Some(_) => Ok(()),
            None => {
                self.dimension = Some(got);
                Ok(())
            }
        }
    }

    fn put(&mut self, entry: Entry) {
        match self.positions.get(&entry.record.id) {
            Some(&position) => self.entries[position] = entry,
            None => {
                self.positions
                    .insert(entry.record.id.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }
}

/// Brute-force cosine index with the same upsert and filter semantics as the
/// hosted one. Useful offline and in tests.
#[derive(Clone, Default)]
pub struct InMemoryVectorStore {
    index: Arc<RwLock<Index>>,
}

impl InMemoryVectorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.index.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait::async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn upsert(&self, records: Vec<VectorRecord>) -> Result<(), StoreError> {
        let mut index = self.index.write().await;
        for record in records {
            index.admit(&record)?;
            let metadata = match serde_json::to_value(&record.metadata) {
                Ok(Value::Object(map)) => map,
                Ok(_) => Map::new(),
                Err(err) => return Err(StoreError::Internal(Box::new(err))),
            };
            index.put(Entry { record, metadata });
        }
        Ok(())
    }

    async fn query(
        &self,
        vector: &[f32],
        top_k: usize,
        filter: Option<&MetadataFilter>,
    ) -> Result<Vec<SearchMatch>, StoreError> {
        let index = self.index.read().await;
        if let Some(expected) = index.dimension.filter(|&dimension| dimension != vector.len()) {
            return Err(StoreError::DimensionMismatch {
                expected,
                got: vector.len(),
            });
        }

        let mut matches: Vec<SearchMatch> = index
            .entries
            .iter()
            .filter(|entry| filter.map_or(true, |filter| metadata_matches(filter, &entry.metadata)))
            .map(|entry| SearchMatch {
                id: entry.record.id.clone(),
                score: cosine(vector, &entry.record.values),
                metadata: Value::Object(entry.metadata.clone()),
            })
            .collect();

        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        matches.truncate(top_k);
        Ok(matches)
    }
}

/// Zero vectors score 0 rather than NaN.
fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let (dot, norm_a, norm_b) = a
        .iter()
        .zip(b)
        .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (x, y)| {
            (dot + x * y, na + x * x, nb + y * y)
        });
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a.sqrt() * norm_b.sqrt())
    }
}

fn metadata_matches(filter: &MetadataFilter, metadata: &Map<String, Value>) -> bool {
    match filter {
        MetadataFilter::Eq(key, value) => metadata.get(key) == Some(value),
        MetadataFilter::In(key, values) => metadata
            .get(key)
            .is_some_and(|entry| values.contains(entry)),
        MetadataFilter::Range { key, min, max } => {
            let Some(value) = metadata.get(key).and_then(Value::as_f64) else {
                return false;
            };
            let above_min = min
                .as_ref()
                .map_or(true, |min| min.as_f64().is_some_and(|min| value >= min));
            let below_max = max
                .as_ref()
                .map_or(true, |max| max.as_f64().is_some_and(|max| value <= max));
            above_min && below_max
        }
        MetadataFilter::All(filters) => filters
            .iter()
            .all(|filter| metadata_matches(filter, metadata)),
        MetadataFilter::Any(filters) => filters
            .iter()
            .any(|filter| metadata_matches(filter, metadata)),
    }
}
