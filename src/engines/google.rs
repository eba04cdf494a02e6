//! Google results-page link extraction.
//!
//! Google wraps organic results in `/url?q=<target>&...` redirect hrefs; the
//! target is taken verbatim from the query string, no URL decoding applied.

use scraper::{Html, Selector};

use crate::{Result, ScrapeError};

use super::host_contains;

const GOOGLE_HOSTS: [&str; 2] = ["google.com", "google."];

/// Extracts up to `limit` off-Google result links in document order.
pub fn extract_links(html: &str, limit: usize) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let anchor_selector = Selector::parse("a[href]")
        .map_err(|e| ScrapeError::Parse(format!("seletor inválido: {:?}", e)))?;

    let mut links = Vec::new();

    for anchor in document.select(&anchor_selector) {
        let href = anchor.value().attr("href").unwrap_or_default();
        if let Some(rest) = href.splitn(2, "/url?q=").nth(1) {
            let link = rest.split('&').next().unwrap_or(rest);
            if link.starts_with("http") && !host_contains(link, &GOOGLE_HOSTS) {
                links.push(link.to_string());
            }
        }
        if links.len() >= limit {
            break;
        }
    }

    Ok(links)
}
