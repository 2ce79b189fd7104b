//! Error types for atrium_app

use std::path::PathBuf;

use atrium_content::ContentError;
use thiserror::Error;

/// Errors that can occur while setting up the site
#[derive(Error, Debug)]
pub enum AppError {
    /// Failed to read a file
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for the schema
    #[error("failed to parse {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Configuration parsed but names something that doesn't exist
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Content export couldn't be loaded
    #[error("content error: {0}")]
    Content(#[from] ContentError),
}

/// Result type for atrium_app operations
pub type Result<T> = std::result::Result<T, AppError>;
