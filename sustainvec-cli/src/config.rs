use thiserror::Error;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const PINECONE_API_KEY: &str = "PINECONE_API_KEY";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set (export it or add it to .env)")]
    MissingEnv(&'static str),
}

/// Loads `.env` from the working directory or its parents, if there is one.
/// Variables already in the environment win.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!(error = %err, "ignoring unreadable .env"),
    }
}

/// Reads a required, non-blank environment variable.
pub fn require_env(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnv(name)),
    }
}
