//! Pinecone integration for sustainvec.
//!
//! This crate provides:
//! - [`mapper`]: turning embedded elements into `{id, values, metadata}` records,
//! - `PineconeVectorStore`: chunked upserts and filtered queries against one index,
//! - `PineconeStoreBuilder`: index host resolution through the control plane.
//!
//! Environment variables commonly used by the binaries:
//! - `PINECONE_API_KEY`
//! - `PINECONE_INDEX_HOST` or `PINECONE_INDEX_NAME`
//! - `PINECONE_NAMESPACE` (optional)

pub mod client;
mod config;
mod error;
pub mod filter;
pub mod mapper;
mod store;
mod types;

pub use config::{PineconeStoreBuilder, DEFAULT_CONTROL_PLANE_URL, DEFAULT_UPSERT_BATCH_SIZE};
pub use error::PineconeStoreError;
pub use mapper::{element_to_record, format_records, report_tags, ReportTags};
pub use store::PineconeVectorStore;
pub use types::IndexStatsResponse;
