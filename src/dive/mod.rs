//! Deep-dive pipeline
//!
//! The end-to-end flow behind "dive deeper" on a stored document: pull
//! the document's PDF files from the object store, extract their links,
//! crawl the web graph rooted at those links, then persist each page's
//! content as a text blob and save one aggregate record through the
//! catalog collaborator.

use crate::config::CrawlLimits;
use crate::crawler::Crawler;
use crate::pdf;
use crate::storage::{
    Catalog, CrawlRecord, DocumentRecord, FileEntry, ObjectStore, PageSummary,
};
use crate::url::CanonicalUrl;
use crate::DiveError;
use chrono::Utc;
use reqwest::Client;
use std::collections::HashSet;
use uuid::Uuid;

/// Outcome of one deep-dive invocation
#[derive(Debug, Clone)]
pub struct DiveReport {
    /// Unique seed URLs extracted from the document's PDFs
    pub seeds_found: usize,

    /// Pages successfully crawled
    pub pages_crawled: usize,

    /// Catalog id of the saved crawl record, if anything was crawled
    pub record_id: Option<String>,
}

/// Runs a deep dive over one stored document
///
/// # Arguments
///
/// * `store` - Object-store collaborator (PDF bytes in, page blobs out)
/// * `catalog` - Document-catalog collaborator
/// * `client` - HTTP client used for page crawling
/// * `document` - The stored document record to dive into
/// * `limits` - Validated crawl parameters
/// * `folder_prefix` - Object-store key prefix for the page blobs
///
/// # Returns
///
/// * `Ok(DiveReport)` - The dive ran; extraction failures on individual
///   PDFs degrade to warnings, and a document with no usable links yields
///   a report with `record_id: None`
/// * `Err(DiveError)` - A storage collaborator failed
pub async fn deep_dive(
    store: &dyn ObjectStore,
    catalog: &dyn Catalog,
    client: &Client,
    document: &DocumentRecord,
    limits: &CrawlLimits,
    folder_prefix: &str,
) -> Result<DiveReport, DiveError> {
    let pdf_files: Vec<&FileEntry> = document
        .files
        .iter()
        .filter(|f| f.filename.to_lowercase().ends_with(".pdf"))
        .collect();

    if pdf_files.is_empty() {
        tracing::warn!("document {} has no PDF files to dive into", document.doc_id);
        return Ok(DiveReport {
            seeds_found: 0,
            pages_crawled: 0,
            record_id: None,
        });
    }

    let mut seeds: HashSet<CanonicalUrl> = HashSet::new();
    for file in &pdf_files {
        tracing::info!("extracting links from {}", file.filename);
        let bytes = store.get(&file.url).await?;
        seeds.extend(pdf::extract_links(&bytes));
    }

    if seeds.is_empty() {
        tracing::warn!(
            "no links found in the PDF files of document {}",
            document.doc_id
        );
        return Ok(DiveReport {
            seeds_found: 0,
            pages_crawled: 0,
            record_id: None,
        });
    }

    let seed_count = seeds.len();
    tracing::info!(
        "found {} links across {} PDF files",
        seed_count,
        pdf_files.len()
    );

    // Stable seed order, so repeated dives traverse identically.
    let mut seeds: Vec<CanonicalUrl> = seeds.into_iter().collect();
    seeds.sort_by(|a, b| a.as_str().cmp(b.as_str()));

    let crawler = Crawler::new(client.clone(), *limits);
    let results = crawler.run(seeds).await;

    let crawl_doc_id = Uuid::new_v4().to_string();
    let now = Utc::now();

    let mut pages = Vec::with_capacity(results.len());
    let mut files = Vec::with_capacity(results.len());
    for (index, page) in results.iter().enumerate() {
        let body = format!(
            "URL: {}\nTitle: {}\nDepth: {}\n\n{}",
            page.url, page.title, page.depth, page.content
        );
        let filename = blob_filename(index + 1, &page.url);
        let key = format!("{}{}/{}", folder_prefix, crawl_doc_id, filename);

        let store_url = store
            .put(&key, body.clone().into_bytes(), "text/plain")
            .await?;

        files.push(FileEntry {
            filename,
            url: store_url.clone(),
            size: body.len() as u64,
            content_type: "text/plain".to_string(),
            source_url: Some(page.url.to_string()),
        });
        pages.push(PageSummary {
            url: page.url.to_string(),
            title: page.title.clone(),
            depth: page.depth,
            link_count: page.links.len(),
            store_url,
        });
    }

    let record = CrawlRecord {
        doc_id: crawl_doc_id,
        name: format!("Deep Dive: {}", document.name),
        description: format!(
            "Deep crawl results from {} - {} pages crawled",
            document.name,
            results.len()
        ),
        tags: document
            .tags
            .iter()
            .cloned()
            .chain(["deep-dive".to_string(), "crawled".to_string()])
            .collect(),
        notes: format!(
            "Original document: {}. Crawled at depth {}",
            document.doc_id, limits.max_depth
        ),
        flags: document.flags.clone(),
        original_doc_id: document.doc_id.clone(),
        pages,
        files,
        created_at: now,
        updated_at: now,
    };

    let record_id = catalog.save(record).await?;
    tracing::info!(
        "deep dive over document {} saved as record {}",
        document.doc_id,
        record_id
    );

    Ok(DiveReport {
        seeds_found: seed_count,
        pages_crawled: results.len(),
        record_id: Some(record_id),
    })
}

/// Deterministic blob name for the nth crawled page
fn blob_filename(n: usize, url: &CanonicalUrl) -> String {
    format!("crawled_page_{}_{}.txt", n, url.host_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url::normalize_url;

    #[test]
    fn test_blob_filename() {
        let url = normalize_url("https://docs.example.com/guide?v=2").unwrap();
        assert_eq!(blob_filename(3, &url), "crawled_page_3_docs.example.com.txt");
    }

    #[test]
    fn test_blob_filename_keeps_port_host_only() {
        let url = normalize_url("http://127.0.0.1:9000/x").unwrap();
        assert_eq!(blob_filename(1, &url), "crawled_page_1_127.0.0.1.txt");
    }
}
