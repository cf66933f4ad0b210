//! Error types for record retrieval and queries.

use thiserror::Error;

/// Main error type for record operations.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Compound not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream format error: {0}")]
    UpstreamFormat(String),

    #[error("Maximum nesting depth {limit} exceeded")]
    DepthExceeded { limit: usize },

    #[error("Section '{label}' is not a leaf")]
    NotALeaf { label: String },
}

impl From<serde_json::Error> for RecordError {
    fn from(e: serde_json::Error) -> Self {
        RecordError::UpstreamFormat(e.to_string())
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for RecordError {
    fn from(e: reqwest::Error) -> Self {
        RecordError::Network(e.to_string())
    }
}

/// Result type for record operations.
pub type Result<T> = std::result::Result<T, RecordError>;
