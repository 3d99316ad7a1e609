//! HTTP fetcher for the page crawler
//!
//! Builds the shared HTTP client and performs single-page GETs with a
//! fixed timeout, a realistic browser user agent, and bounded retries for
//! transient failures.

use crate::url::CanonicalUrl;
use crate::FetchError;
use reqwest::Client;
use std::time::Duration;

/// User agent presented to crawled sites
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Timeout for a single page fetch
pub const PAGE_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Total attempts per page (one initial try plus retries)
const MAX_FETCH_ATTEMPTS: u32 = 3;

/// Fixed delay between retry attempts
const RETRY_DELAY: Duration = Duration::from_millis(500);

/// A successfully fetched page, before parsing
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: CanonicalUrl,
    pub status: u16,
    pub body: String,
}

/// Builds the HTTP client used for page crawling
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(BROWSER_USER_AGENT)
        .timeout(PAGE_FETCH_TIMEOUT)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single page
///
/// Timeouts, connection errors, and 5xx responses are retried up to two
/// times with a short fixed delay; other failures are terminal
/// immediately. A non-2xx status is an error, never a panic.
pub async fn fetch_page(client: &Client, url: &CanonicalUrl) -> Result<FetchedPage, FetchError> {
    let mut attempt = 1;
    loop {
        match try_fetch(client, url).await {
            Ok(page) => return Ok(page),
            Err(e) if attempt < MAX_FETCH_ATTEMPTS && e.is_transient() => {
                tracing::debug!(
                    "fetch attempt {} for {} failed ({}), retrying",
                    attempt,
                    url,
                    e
                );
                tokio::time::sleep(RETRY_DELAY).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

async fn try_fetch(client: &Client, url: &CanonicalUrl) -> Result<FetchedPage, FetchError> {
    let response = client
        .get(url.as_str())
        .send()
        .await
        .map_err(|e| FetchError::from_reqwest(url.as_str(), e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::from_reqwest(url.as_str(), e))?;

    Ok(FetchedPage {
        url: url.clone(),
        status: status.as_u16(),
        body,
    })
}
