//! HTML parser for crawled pages
//!
//! Extracts the page title, the visible text (with `<script>` and
//! `<style>` subtrees removed and whitespace collapsed), and the outbound
//! anchor targets resolved against the page's own URL.

use crate::url::CanonicalUrl;
use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{Html, Selector};
use std::collections::HashSet;

/// Title recorded for pages without a usable `<title>` element
pub const DEFAULT_TITLE: &str = "No Title";

/// Extracted information from one HTML page
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// The page title, or `"No Title"`
    pub title: String,

    /// Visible text with whitespace collapsed, untruncated
    pub text: String,

    /// Outbound links in document order, deduplicated, capped
    pub links: Vec<CanonicalUrl>,
}

/// Parses HTML content into a [`ParsedPage`]
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `base` - The page's own URL, used to resolve relative hrefs
/// * `collect_links` - When false, anchors are not walked at all; used
///   for pages at the depth limit, whose children would never be enqueued
/// * `max_links` - Fan-out cap; anchors beyond it are silently dropped
pub fn parse_page(
    html: &str,
    base: &CanonicalUrl,
    collect_links: bool,
    max_links: usize,
) -> ParsedPage {
    let document = Html::parse_document(html);

    let title = extract_title(&document);
    let text = visible_text(&document);
    let links = if collect_links {
        extract_links(&document, base, max_links)
    } else {
        Vec::new()
    };

    ParsedPage { title, text, links }
}

/// Extracts the page title, defaulting when absent or blank
fn extract_title(document: &Html) -> String {
    Selector::parse("title")
        .ok()
        .and_then(|selector| document.select(&selector).next())
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

/// Collects the document's visible text with runs of whitespace collapsed
fn visible_text(document: &Html) -> String {
    let mut raw = String::new();
    collect_text(*document.root_element(), &mut raw);
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            // Skip non-visible subtrees entirely
            Node::Element(element) if matches!(element.name(), "script" | "style") => {}
            Node::Text(text) => {
                out.push_str(text);
                out.push(' ');
            }
            _ => collect_text(child, out),
        }
    }
}

/// Extracts outbound anchor targets in document order
///
/// Each href is resolved against the page URL and normalized; anchors
/// that fail normalization (unsupported schemes, malformed hrefs) and
/// fragment-only self links are discarded. Duplicates within the page are
/// dropped, and the list is capped at `max_links`.
fn extract_links(document: &Html, base: &CanonicalUrl, max_links: usize) -> Vec<CanonicalUrl> {
    let mut links = Vec::new();
    let mut seen = HashSet::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if links.len() >= max_links {
                break;
            }

            let href = match element.value().attr("href") {
                Some(href) => href.trim(),
                None => continue,
            };
            if href.is_empty() || href.starts_with('#') {
                continue;
            }

            match base.join(href) {
                Ok(url) => {
                    if seen.insert(url.clone()) {
                        links.push(url);
                    }
                }
                Err(e) => {
                    tracing::trace!("discarding href {:?}: {}", href, e);
                }
            }
        }
    }

    links
}
