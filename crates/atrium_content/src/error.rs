//! Error types for atrium_content

use thiserror::Error;

/// Errors that can occur while reading content
#[derive(Error, Debug)]
pub enum ContentError {
    /// No content repository is configured
    #[error("content repository is not configured")]
    NotConfigured,

    /// The requested document doesn't exist
    #[error("{kind} '{key}' not found")]
    NotFound { kind: &'static str, key: String },

    /// The content source couldn't be reached or failed
    #[error("content source unavailable: {0}")]
    Unavailable(String),

    /// Content was reachable but malformed
    #[error("content decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ContentError {
    pub fn not_found(kind: &'static str, key: impl Into<String>) -> Self {
        ContentError::NotFound {
            kind,
            key: key.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound { .. })
    }
}

/// Result type for atrium_content operations
pub type Result<T> = std::result::Result<T, ContentError>;
