//! Error types for Glimt.

use thiserror::Error;

/// Library-level error type for Glimt operations.
#[derive(Error, Debug)]
pub enum GlimtError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("VideoDB error: {0}")]
    Backend(String),

    #[error("RAG error: {0}")]
    Rag(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OpenAI API error: {0}")]
    OpenAI(String),
}

/// Result type alias for Glimt operations.
pub type Result<T> = std::result::Result<T, GlimtError>;
