//! Crawl orchestration
//!
//! Drives the frontier against the fetcher and parser, assembling the
//! final ordered list of page records. One task is fetched, parsed, and
//! fully resolved (including enqueuing its children) before the next task
//! is dequeued, which makes the traversal deterministically breadth-first
//! and keeps the visited-set consistent without synchronization.

use crate::config::CrawlLimits;
use crate::crawler::fetcher::fetch_page;
use crate::crawler::frontier::Frontier;
use crate::crawler::parser::parse_page;
use crate::url::CanonicalUrl;
use reqwest::Client;

/// Stored page content is truncated to this many characters, after
/// cleaning
pub const CONTENT_PREVIEW_CHARS: usize = 1000;

/// One crawled page
///
/// Results are appended in dequeue order, so the sequence as a whole is
/// in breadth-first order.
#[derive(Debug, Clone)]
pub struct CrawlResult {
    pub url: CanonicalUrl,
    pub title: String,
    pub content: String,
    pub links: Vec<CanonicalUrl>,
    pub depth: u32,
}

/// Drives one bounded crawl over a seeded frontier
pub struct Crawler {
    client: Client,
    limits: CrawlLimits,
}

impl Crawler {
    pub fn new(client: Client, limits: CrawlLimits) -> Self {
        Self { client, limits }
    }

    /// Runs the crawl to exhaustion or the result cap
    ///
    /// Per-task flow: dequeue, fetch, parse, enqueue children at
    /// `depth + 1`, emit a result. A fetch failure is logged and the task
    /// skipped; a single page failure never halts the crawl.
    pub async fn run(&self, seeds: impl IntoIterator<Item = CanonicalUrl>) -> Vec<CrawlResult> {
        let mut frontier = Frontier::new(self.limits.max_depth);
        frontier.seed(seeds);

        let mut results = Vec::new();
        while let Some(task) = frontier.next() {
            tracing::debug!("crawling {} at depth {}", task.url, task.depth);

            let page = match fetch_page(&self.client, &task.url).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!("failed to crawl {}: {}", task.url, e);
                    continue;
                }
            };

            // Children of pages at the depth limit would never be
            // enqueued, so skip link extraction there entirely.
            let follow = task.depth < self.limits.max_depth;
            let parsed = parse_page(
                &page.body,
                &task.url,
                follow,
                self.limits.max_links_per_page as usize,
            );

            for link in &parsed.links {
                frontier.enqueue(link.clone(), task.depth + 1);
            }

            frontier.record_result();
            results.push(CrawlResult {
                url: task.url,
                title: parsed.title,
                content: truncate_chars(&parsed.text, CONTENT_PREVIEW_CHARS),
                links: parsed.links,
                depth: task.depth,
            });
        }

        tracing::info!("crawl finished with {} pages", results.len());
        results
    }
}

/// Truncates on a character boundary
fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_short_input() {
        assert_eq!(truncate_chars("abc", 1000), "abc");
    }

    #[test]
    fn test_truncate_chars_limit() {
        let long = "x".repeat(2000);
        assert_eq!(truncate_chars(&long, 1000).len(), 1000);
    }

    #[test]
    fn test_truncate_chars_multibyte_boundary() {
        let text = "é".repeat(1500);
        let truncated = truncate_chars(&text, 1000);
        assert_eq!(truncated.chars().count(), 1000);
    }

    // Full crawl behavior is covered by the wiremock integration tests.
}
