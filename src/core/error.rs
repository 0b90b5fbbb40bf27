//! Error types and error handling for the site search engine.
//!
//! Errors only travel as far as the index provider boundary. The
//! public `search` entry points collapse every load failure into an
//! empty result list, so callers rendering a page never see these.

use thiserror::Error;

/// Result type alias for search operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Main error type for corpus loading and configuration
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Network error fetching {url}: {message}")]
    Network { url: String, message: String },

    #[error("HTTP error! status: {status} ({url})")]
    HttpStatus { status: u16, url: String },

    #[error("Corpus payload exceeds {limit_mb} MB")]
    PayloadTooLarge { limit_mb: u64 },

    #[error("Malformed corpus payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid keyword: {0}")]
    InvalidKeyword(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Corpus load task failed: {0}")]
    TaskFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl SearchError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if retrying the same load could plausibly succeed
    pub fn is_transient(&self) -> bool {
        match self {
            SearchError::Network { .. } | SearchError::TaskFailed(_) => true,
            SearchError::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    /// Check if the payload arrived but could not be decoded
    pub fn is_parse(&self) -> bool {
        matches!(self, SearchError::Parse(_))
    }
}
