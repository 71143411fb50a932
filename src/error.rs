//! Error types for asset-sha
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::UnsupportedContent;

/// Result type alias for manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Main error type for a manifest pass
#[derive(Error, Debug)]
pub enum ManifestError {
    /// A selected asset cannot be read as text. Fatal to the pass.
    #[error("asset '{asset}' cannot be digested: {source}")]
    UnsupportedContent {
        asset: String,
        #[source]
        source: UnsupportedContent,
    },

    /// A configuration option holds a value the pipeline cannot use
    #[error("invalid configuration for '{option}': {message}")]
    InvalidConfiguration {
        option: &'static str,
        message: String,
    },

    /// Config file could not be parsed
    #[error("invalid config file {file}: {message}")]
    ConfigFile { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
