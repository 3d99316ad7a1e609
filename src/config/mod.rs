//! Configuration module for pagedive
//!
//! Service configuration loads from TOML; per-invocation crawl
//! parameters arrive from the intake boundary and are validated by
//! [`CrawlLimits::new`] before any crawl starts.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, CrawlLimits, CrawlerDefaults, StoreConfig};
pub use validation::{validate, DEPTH_RANGE, LINKS_RANGE};
