//! Shared plumbing for the sustainvec stage binaries: credentials, logging and
//! walking file-or-directory inputs.

pub mod config;
pub mod inputs;
pub mod logging;

pub use config::{load_dotenv, require_env, ConfigError, OPENAI_API_KEY, PINECONE_API_KEY};
pub use inputs::{for_each_input, InputSummary};
