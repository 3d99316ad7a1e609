//! Plain-text PDF link extraction
//!
//! Fallback strategy built on the `pdf-extract` library, plus the URL
//! pattern shared with the structural strategy's prose scan.

use crate::ExtractError;
use regex::Regex;
use std::sync::LazyLock;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:[-\w.])+(?:[:\d]+)?(?:/(?:[\w/_.])*(?:\?(?:[\w&=%.])*)?(?:#(?:\w*))?)?")
        .expect("hardcoded regex pattern is valid")
});

/// Finds every URL-shaped substring in a block of text
pub fn find_urls(text: &str) -> Vec<String> {
    URL_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extracts raw URL candidates from the PDF's plain text
pub(crate) fn text_links(bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    let text =
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Text(e.to_string()))?;
    Ok(find_urls(&text))
}
