//! Crawler module: frontier, fetching, parsing, and orchestration
//!
//! The pieces compose into a bounded breadth-first traversal: the
//! frontier owns ordering and deduplication, the fetcher performs single
//! page GETs with bounded retries, the parser turns HTML into titles,
//! cleaned text, and outbound links, and the coordinator drives them into
//! an ordered list of [`CrawlResult`]s.

mod coordinator;
mod fetcher;
mod frontier;
mod parser;

pub use coordinator::{Crawler, CrawlResult, CONTENT_PREVIEW_CHARS};
pub use fetcher::{
    build_http_client, fetch_page, FetchedPage, BROWSER_USER_AGENT, PAGE_FETCH_TIMEOUT,
};
pub use frontier::{CrawlTask, Frontier, MAX_RESULTS};
pub use parser::{parse_page, ParsedPage, DEFAULT_TITLE};

use crate::config::CrawlLimits;
use crate::url::CanonicalUrl;
use crate::DiveError;

/// Runs a complete crawl with a freshly built HTTP client
///
/// # Arguments
///
/// * `seeds` - Starting URLs, entered into the frontier at depth 0
/// * `limits` - Validated depth and fan-out limits
///
/// # Returns
///
/// The crawled pages in breadth-first order, at most
/// [`MAX_RESULTS`] of them.
pub async fn crawl(
    seeds: Vec<CanonicalUrl>,
    limits: CrawlLimits,
) -> Result<Vec<CrawlResult>, DiveError> {
    let client = build_http_client()?;
    Ok(Crawler::new(client, limits).run(seeds).await)
}
