//! Search engine identification and link-extraction dispatch.

use crate::engines;
use crate::Result;

/// Maximum number of result links extracted from one search page.
pub const RESULT_LIMIT: usize = 50;

/// The search engines whose result pages can be parsed.
///
/// One variant per supported engine, each with its own extraction strategy
/// in [`crate::engines`]. Detection is a substring test on the raw page URL,
/// checked in this order; anything else is unrecognized and skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEngine {
    Google,
    Bing,
    DuckDuckGo,
}

impl SearchEngine {
    /// Identifies the engine behind a search-page URL, if any.
    pub fn detect(url: &str) -> Option<Self> {
        if url.contains("google.com") {
            Some(Self::Google)
        } else if url.contains("bing.com") {
            Some(Self::Bing)
        } else if url.contains("duckduckgo.com") {
            Some(Self::DuckDuckGo)
        } else {
            None
        }
    }

    /// Returns the engine's display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Bing => "Bing",
            Self::DuckDuckGo => "DuckDuckGo",
        }
    }

    /// Extracts up to [`RESULT_LIMIT`] result links from a results page, in
    /// document order.
    pub fn extract_links(&self, html: &str) -> Result<Vec<String>> {
        match self {
            Self::Google => engines::extract_google(html, RESULT_LIMIT),
            Self::Bing => engines::extract_bing(html, RESULT_LIMIT),
            Self::DuckDuckGo => engines::extract_duckduckgo(html, RESULT_LIMIT),
        }
    }
}
