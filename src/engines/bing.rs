//! Bing results-page link extraction.
//!
//! Bing result anchors carry the destination URL directly, so every absolute
//! http(s) href that does not resolve back to Bing itself is a candidate.

use scraper::{Html, Selector};

use crate::{Result, ScrapeError};

use super::host_contains;

const BING_HOSTS: [&str; 2] = ["bing.com", "bing."];

/// Extracts up to `limit` off-Bing result links in document order.
pub fn extract_links(html: &str, limit: usize) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let anchor_selector = Selector::parse("a[href]")
        .map_err(|e| ScrapeError::Parse(format!("seletor inválido: {:?}", e)))?;

    let mut links = Vec::new();

    for anchor in document.select(&anchor_selector) {
        let href = anchor.value().attr("href").unwrap_or_default();
        if href.starts_with("http") && !host_contains(href, &BING_HOSTS) {
            links.push(href.to_string());
        }
        if links.len() >= limit {
            break;
        }
    }

    Ok(links)
}
