//! Shared data model for the sustainvec pipeline: extracted elements, vector
//! records, and the provider traits every stage is written against.

mod element;
mod embedding;
mod error;
pub mod filter;
pub mod io;
mod metadata_filter;
mod value;
mod vector_store;

pub use element::{Element, ElementMetadata, ElementType};
pub use embedding::Embedding;
pub use error::{EmbeddingError, PipelineError, StoreError};
pub use filter::{filter_elements, FilterStats};
pub use metadata_filter::MetadataFilter;
pub use value::Value;
pub use vector_store::{RecordMetadata, SearchMatch, VectorRecord, VectorStore};
