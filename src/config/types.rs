use crate::config::validation::validate_limits;
use crate::ConfigError;
use serde::Deserialize;

/// Service configuration for the deep-dive subsystem
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerDefaults,
    #[serde(default)]
    pub store: StoreConfig,
}

/// Default crawl limits offered to the intake boundary
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerDefaults {
    /// Default maximum depth to crawl from seed URLs
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Default per-page cap on newly discovered links
    #[serde(rename = "max-links-per-page")]
    pub max_links_per_page: u32,
}

/// Object-store layout configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Key prefix under which document blobs are stored
    #[serde(rename = "folder-prefix", default = "default_folder_prefix")]
    pub folder_prefix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            folder_prefix: default_folder_prefix(),
        }
    }
}

fn default_folder_prefix() -> String {
    "qu-agents/documents/".to_string()
}

/// Validated per-invocation crawl parameters
///
/// `new` is the intake boundary: it rejects out-of-range values before
/// any crawl starts. The fields stay public so the crawler core can be
/// exercised with values below the boundary minimums in tests.
#[derive(Debug, Clone, Copy)]
pub struct CrawlLimits {
    pub max_depth: u32,
    pub max_links_per_page: u32,
}

impl CrawlLimits {
    /// Validates and constructs crawl limits
    ///
    /// `max_depth` must be in 1..=5 and `max_links_per_page` in 5..=50.
    pub fn new(max_depth: u32, max_links_per_page: u32) -> Result<Self, ConfigError> {
        validate_limits(max_depth, max_links_per_page)?;
        Ok(Self {
            max_depth,
            max_links_per_page,
        })
    }
}

impl Config {
    /// Returns the configured default limits, validated
    pub fn default_limits(&self) -> Result<CrawlLimits, ConfigError> {
        CrawlLimits::new(self.crawler.max_depth, self.crawler.max_links_per_page)
    }
}
