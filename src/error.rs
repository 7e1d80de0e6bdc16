//! Domain-specific error types for doc-mind

use thiserror::Error;

/// Main error type for the doc-mind pipeline
#[derive(Error, Debug)]
pub enum DocMindError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Classification error: {message}")]
    Classification { message: String },

    #[error("Retrieval error: {message}")]
    Retrieval { message: String },

    #[error("Web search error: {message}")]
    Search { message: String },

    #[error("Generation error: {message}")]
    Generation { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<anyhow::Error> for DocMindError {
    fn from(err: anyhow::Error) -> Self {
        DocMindError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DocMindError {
    fn from(err: serde_json::Error) -> Self {
        DocMindError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for DocMindError {
    fn from(err: reqwest::Error) -> Self {
        DocMindError::Generation {
            message: format!("HTTP request failed: {}", err),
        }
    }
}

impl From<std::io::Error> for DocMindError {
    fn from(err: std::io::Error) -> Self {
        DocMindError::Internal {
            message: err.to_string(),
        }
    }
}

/// Result type alias for doc-mind operations
pub type Result<T> = std::result::Result<T, DocMindError>;
