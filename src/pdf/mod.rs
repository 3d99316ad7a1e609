//! PDF link extraction
//!
//! This module pulls candidate URLs out of PDF bytes using an ordered list
//! of extraction strategies:
//!
//! 1. Structural: parse the document with `lopdf`, collect every link
//!    annotation carrying an external URI target, and scan each page's
//!    extracted text for URLs.
//! 2. Plain-text fallback: if the structural parser fails, extract text
//!    with the independent `pdf-extract` library and scan it with the same
//!    URL pattern. Annotation-layer links are not recoverable on this
//!    path.
//!
//! The first strategy that succeeds wins; its raw matches are normalized
//! and deduplicated into a set of canonical URLs. A PDF that defeats both
//! strategies yields an empty set and a warning, never an error: one bad
//! PDF must not abort a multi-document extraction.

mod annotations;
mod text;

pub use text::find_urls;

use crate::url::{normalize_url, CanonicalUrl};
use crate::{ExtractError, FetchError};
use reqwest::Client;
use std::collections::HashSet;
use std::time::Duration;

/// Timeout for downloading a PDF in the extractor's own fetch path
pub const PDF_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

type Strategy = fn(&[u8]) -> Result<Vec<String>, ExtractError>;

/// Extraction strategies in preference order
const STRATEGIES: &[(&str, Strategy)] = &[
    ("structural", annotations::structural_links),
    ("plain-text", text::text_links),
];

/// Extracts all external URLs from a PDF
///
/// Tries each extraction strategy in order and stops at the first success.
/// Raw matches are normalized via the URL canonicalizer; candidates that
/// fail normalization are discarded. Returns an empty set (with a logged
/// warning) if every strategy fails.
pub fn extract_links(bytes: &[u8]) -> HashSet<CanonicalUrl> {
    for (name, strategy) in STRATEGIES {
        match strategy(bytes) {
            Ok(candidates) => {
                tracing::debug!(
                    "PDF strategy '{}' produced {} raw candidates",
                    name,
                    candidates.len()
                );
                return normalize_candidates(candidates);
            }
            Err(e) => {
                tracing::warn!("PDF strategy '{}' failed: {}", name, e);
            }
        }
    }

    tracing::warn!("all PDF link extraction strategies failed, no links recovered");
    HashSet::new()
}

/// Downloads a PDF and extracts its links
///
/// This is the extractor's own fetch path, used when the PDF lives behind
/// a plain URL rather than in the object store. The download uses a longer
/// timeout than page crawling since PDFs can be large.
pub async fn fetch_and_extract(
    client: &Client,
    url: &str,
) -> Result<HashSet<CanonicalUrl>, FetchError> {
    let response = client
        .get(url)
        .timeout(PDF_FETCH_TIMEOUT)
        .send()
        .await
        .map_err(|e| FetchError::from_reqwest(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| FetchError::from_reqwest(url, e))?;

    Ok(extract_links(&bytes))
}

/// Normalizes raw URL candidates and collapses duplicates
fn normalize_candidates(candidates: impl IntoIterator<Item = String>) -> HashSet<CanonicalUrl> {
    let mut links = HashSet::new();
    for raw in candidates {
        match normalize_url(&raw) {
            Ok(url) => {
                links.insert(url);
            }
            Err(e) => {
                tracing::debug!("discarding URL candidate {:?}: {}", raw, e);
            }
        }
    }
    links
}
