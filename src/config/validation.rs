use crate::config::types::Config;
use crate::ConfigError;
use std::ops::RangeInclusive;

/// Accepted crawl depth range
pub const DEPTH_RANGE: RangeInclusive<u32> = 1..=5;

/// Accepted per-page link cap range
pub const LINKS_RANGE: RangeInclusive<u32> = 5..=50;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_limits(
        config.crawler.max_depth,
        config.crawler.max_links_per_page,
    )?;
    validate_store(&config.store.folder_prefix)?;
    Ok(())
}

/// Validates crawl parameters at the intake boundary
pub(crate) fn validate_limits(max_depth: u32, max_links_per_page: u32) -> Result<(), ConfigError> {
    if !DEPTH_RANGE.contains(&max_depth) {
        return Err(ConfigError::Validation(format!(
            "max_depth must be between {} and {}, got {}",
            DEPTH_RANGE.start(),
            DEPTH_RANGE.end(),
            max_depth
        )));
    }

    if !LINKS_RANGE.contains(&max_links_per_page) {
        return Err(ConfigError::Validation(format!(
            "max_links_per_page must be between {} and {}, got {}",
            LINKS_RANGE.start(),
            LINKS_RANGE.end(),
            max_links_per_page
        )));
    }

    Ok(())
}

fn validate_store(folder_prefix: &str) -> Result<(), ConfigError> {
    if folder_prefix.is_empty() {
        return Err(ConfigError::Validation(
            "folder_prefix cannot be empty".to_string(),
        ));
    }

    if !folder_prefix.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "folder_prefix must end with '/', got '{}'",
            folder_prefix
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CrawlLimits;

    #[test]
    fn test_limits_within_bounds() {
        assert!(validate_limits(1, 5).is_ok());
        assert!(validate_limits(5, 50).is_ok());
        assert!(validate_limits(3, 10).is_ok());
    }

    #[test]
    fn test_depth_out_of_bounds() {
        assert!(validate_limits(0, 10).is_err());
        assert!(validate_limits(6, 10).is_err());
    }

    #[test]
    fn test_links_out_of_bounds() {
        assert!(validate_limits(2, 4).is_err());
        assert!(validate_limits(2, 51).is_err());
    }

    #[test]
    fn test_crawl_limits_boundary() {
        assert!(CrawlLimits::new(2, 10).is_ok());

        let err = CrawlLimits::new(0, 10).unwrap_err();
        assert!(matches!(err, crate::ConfigError::Validation(_)));
    }

    #[test]
    fn test_folder_prefix_must_end_with_slash() {
        assert!(validate_store("docs/").is_ok());
        assert!(validate_store("docs").is_err());
        assert!(validate_store("").is_err());
    }
}
