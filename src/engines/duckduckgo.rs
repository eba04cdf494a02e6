//! DuckDuckGo results-page link extraction.
//!
//! Targets the static HTML endpoint markup, where organic result anchors
//! carry the `result__a` class. Anchors without that class are ignored no
//! matter what their href looks like.

use scraper::{Html, Selector};

use crate::{Result, ScrapeError};

use super::host_contains;

const DUCKDUCKGO_HOSTS: [&str; 2] = ["duckduckgo.com", "duckduckgo."];

/// Extracts up to `limit` off-DuckDuckGo result links in document order.
pub fn extract_links(html: &str, limit: usize) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let anchor_selector = Selector::parse("a.result__a[href]")
        .map_err(|e| ScrapeError::Parse(format!("seletor inválido: {:?}", e)))?;

    let mut links = Vec::new();

    for anchor in document.select(&anchor_selector) {
        let href = anchor.value().attr("href").unwrap_or_default();
        if href.starts_with("http") && !host_contains(href, &DUCKDUCKGO_HOSTS) {
            links.push(href.to_string());
        }
        if links.len() >= limit {
            break;
        }
    }

    Ok(links)
}
