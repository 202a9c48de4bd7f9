//! Building provider batch files from extracted elements and folding the
//! asynchronous results back onto those elements.
//!
//! Tables get an LLM enrichment request that carries the text around them
//! (see [`context`]); text chunks get an embedding request. Both use the
//! element id as the correlation id, which [`merge`] later joins on.

pub mod batch_file;
pub mod context;
mod error;
pub mod merge;
pub mod prompt;
pub mod request;

pub use batch_file::{write_batch_file, write_jsonl};
pub use context::{context_window, context_window_at, CONTEXT_WINDOW};
pub use error::{EnrichError, EnrichResult};
pub use merge::{merge_result_file, merge_results, read_batch_results, ResultKind, ResultPayload};
pub use request::{
    build_embedding_request, build_embedding_requests, build_table_request, build_table_requests,
    BatchEndpoint, BatchRequest, EmbeddingRequestConfig, RequestBody, TableRequestConfig,
};
