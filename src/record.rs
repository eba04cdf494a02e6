//! Scraped page record.

use chrono::NaiveDate;
use serde::Serialize;

/// One scraped result page.
///
/// Records are only created when both title and content are non-empty; a
/// missing publication date is allowed. The same link may appear more than
/// once, no deduplication is applied.
#[derive(Debug, Clone, Serialize)]
pub struct PageRecord {
    /// Page title.
    pub title: String,
    /// URL the page was fetched from.
    pub link: String,
    /// Best-effort publication date.
    pub published: Option<NaiveDate>,
    /// Concatenated paragraph text.
    pub content: String,
}

impl PageRecord {
    /// Creates a new record.
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        published: Option<NaiveDate>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            published,
            content: content.into(),
        }
    }
}
