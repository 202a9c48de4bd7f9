mod error;
mod in_memory;
pub mod questionnaire;
pub mod report;
mod retriever;

pub use error::{RetrievalError, RetrievalResult};
pub use in_memory::InMemoryVectorStore;
pub use questionnaire::{Question, TCFD_QUESTIONS};
pub use report::{
    collect_and_save, collect_contexts, merge_into_file, report_keys, ReportContexts, ReportKey,
    DEFAULT_TOP_K,
};
pub use retriever::{Passage, Retriever};
