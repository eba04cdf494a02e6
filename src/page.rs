//! Content extraction for result pages.
//!
//! Pulls out the page title, the concatenated paragraph text and a
//! best-effort publication date. Extraction is generic over the fetcher so
//! tests can run it against canned HTML.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use scraper::{Html, Selector};
use tracing::debug;

use crate::fetcher::PageFetcher;
use crate::{Result, ScrapeError};

/// Title used when the page has no `<title>` element.
pub const MISSING_TITLE: &str = "Sem título";

/// Date formats tried against paragraph text, in priority order.
const DATE_FORMATS: [&str; 4] = ["%d/%m/%Y", "%Y-%m-%d", "%d %b %Y", "%B %d, %Y"];

/// Extracted page content.
#[derive(Debug, Clone)]
pub struct PageContent {
    /// Page title, or [`MISSING_TITLE`] when the page has none.
    pub title: String,
    /// All non-empty paragraph texts, trimmed and joined with single spaces.
    pub content: String,
    /// Publication date, when one could be resolved.
    pub published: Option<NaiveDate>,
}

/// Fetches a result page and extracts its content.
pub async fn extract_page(fetcher: &dyn PageFetcher, url: &str) -> Result<PageContent> {
    let html = fetcher.fetch(url).await?;
    let page = parse_page(&html)?;
    debug!(url, title = %page.title, "página extraída");
    Ok(page)
}

/// Extracts title, paragraph text and publication date from a document.
pub fn parse_page(html: &str) -> Result<PageContent> {
    let document = Html::parse_document(html);

    let title_selector = Selector::parse("title")
        .map_err(|e| ScrapeError::Parse(format!("seletor inválido: {:?}", e)))?;
    let paragraph_selector = Selector::parse("p")
        .map_err(|e| ScrapeError::Parse(format!("seletor inválido: {:?}", e)))?;
    let time_selector = Selector::parse("time[datetime]")
        .map_err(|e| ScrapeError::Parse(format!("seletor inválido: {:?}", e)))?;

    let title = document
        .select(&title_selector)
        .next()
        .map(|t| t.text().collect::<String>().trim().to_string())
        .unwrap_or_else(|| MISSING_TITLE.to_string());

    let paragraphs: Vec<String> = document
        .select(&paragraph_selector)
        .map(|p| p.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();
    let content = paragraphs.join(" ");

    // Stage 1: a machine-readable <time datetime="..."> wins outright. An
    // unparsable value is fatal for this page, it does not fall through to
    // the paragraph scan (preserved behavior of the original tool).
    let published = match document
        .select(&time_selector)
        .next()
        .and_then(|t| t.value().attr("datetime"))
    {
        Some(raw) => Some(parse_iso_date(raw)?),
        None => scan_paragraph_dates(&paragraphs),
    };

    Ok(PageContent {
        title,
        content,
        published,
    })
}

/// Parses an ISO-8601 date or datetime, keeping the date portion.
fn parse_iso_date(raw: &str) -> Result<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ScrapeError::Date(raw.to_string()))
}

/// Stage 2: tries each format over all paragraphs, in document order. Only a
/// full-string match counts; the first hit for the current format wins.
fn scan_paragraph_dates(paragraphs: &[String]) -> Option<NaiveDate> {
    for format in DATE_FORMATS {
        for text in paragraphs {
            if let Ok(date) = NaiveDate::parse_from_str(text, format) {
                return Some(date);
            }
        }
    }
    None
}
