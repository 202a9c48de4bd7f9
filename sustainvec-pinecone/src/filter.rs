use serde_json::{json, Map, Value};
use sustainvec_core::MetadataFilter;

/// A query filter: either built from [`MetadataFilter`] or passed through as
/// Pinecone filter JSON.
#[derive(Clone, Debug)]
pub enum PineconeFilter {
    Typed(MetadataFilter),
    Raw(Value),
}

impl From<MetadataFilter> for PineconeFilter {
    fn from(filter: MetadataFilter) -> Self {
        PineconeFilter::Typed(filter)
    }
}

pub fn to_pinecone_filter_json(filter: &PineconeFilter) -> Value {
    match filter {
        PineconeFilter::Raw(value) => value.clone(),
        PineconeFilter::Typed(filter) => metadata_filter_to_json(filter),
    }
}

fn metadata_filter_to_json(filter: &MetadataFilter) -> Value {
    match filter {
        MetadataFilter::Eq(key, value) => json!({ key: { "$eq": value } }),
        MetadataFilter::In(key, values) => json!({ key: { "$in": values } }),
        MetadataFilter::Range { key, min, max } => {
            let mut bounds = Map::new();
            if let Some(min) = min {
                bounds.insert("$gte".to_string(), min.clone());
            }
            if let Some(max) = max {
                bounds.insert("$lte".to_string(), max.clone());
            }
            json!({ key: bounds })
        }
        MetadataFilter::All(filters) => {
            json!({ "$and": filters.iter().map(metadata_filter_to_json).collect::<Vec<_>>() })
        }
        MetadataFilter::Any(filters) => {
            json!({ "$or": filters.iter().map(metadata_filter_to_json).collect::<Vec<_>>() })
        }
    }
}
