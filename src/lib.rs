//! Pagedive: PDF link discovery and bounded web crawling
//!
//! This crate implements the deep-dive subsystem of a document-intake
//! system: it pulls URLs out of a source PDF (annotation layer and plain
//! text), then runs a breadth-first, depth- and fan-out-limited crawl of
//! the web graph rooted at those URLs, producing normalized page records
//! that are persisted through the surrounding system's object-store and
//! catalog collaborators.

pub mod config;
pub mod crawler;
pub mod dive;
pub mod pdf;
pub mod storage;
pub mod url;

use thiserror::Error;

/// Main error type for pagedive operations
#[derive(Debug, Error)]
pub enum DiveError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("PDF extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
///
/// Invalid URLs are expected and frequent during link discovery; callers
/// discard these rather than propagating them.
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Unsupported URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// PDF link extraction errors, one per failed strategy
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF parse error: {0}")]
    Parse(String),

    #[error("PDF text extraction error: {0}")]
    Text(String),
}

/// Page fetch errors
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Transport error for {url}: {source}")]
    Transport { url: String, source: reqwest::Error },
}

impl FetchError {
    pub(crate) fn from_reqwest(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else {
            Self::Transport {
                url: url.to_string(),
                source,
            }
        }
    }

    /// Returns true if retrying the request could plausibly succeed
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout { .. } => true,
            Self::Status { status, .. } => *status >= 500,
            Self::Transport { source, .. } => source.is_connect(),
        }
    }
}

/// Result type alias for pagedive operations
pub type Result<T> = std::result::Result<T, DiveError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::{load_config, Config, CrawlLimits};
pub use crawler::{crawl, CrawlResult};
pub use dive::{deep_dive, DiveReport};
pub use pdf::extract_links;
pub use self::url::{normalize_url, CanonicalUrl};
