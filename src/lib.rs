//! # raspador
//!
//! A small scraping pipeline that collects result links from search-engine
//! results pages (Google, Bing, DuckDuckGo), fetches every linked page,
//! extracts title, body text and a best-effort publication date, and writes
//! the collected records to an `.xlsx` spreadsheet.
//!
//! The pipeline is strictly sequential: up to 4 user-supplied search pages,
//! up to 50 result links per page, one HTTP request at a time. Failures are
//! reported per URL and never abort the run.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use raspador::{save_xlsx, Scraper, DEFAULT_OUTPUT};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let scraper = Scraper::new();
//!     let links = vec!["https://www.bing.com/search?q=rust".to_string()];
//!     let records = scraper.run(&links).await;
//!     save_xlsx(&records, Path::new(DEFAULT_OUTPUT))?;
//!     Ok(())
//! }
//! ```

mod engine;
mod error;
mod fetcher;
mod input;
mod page;
mod pipeline;
mod record;
mod writer;

pub mod engines;

pub use engine::{SearchEngine, RESULT_LIMIT};
pub use error::{Result, ScrapeError};
pub use fetcher::{HttpFetcher, PageFetcher, BROWSER_USER_AGENT, FETCH_TIMEOUT};
pub use input::{collect_links, MAX_SEARCH_PAGES};
pub use page::{extract_page, parse_page, PageContent, MISSING_TITLE};
pub use pipeline::Scraper;
pub use record::PageRecord;
pub use writer::{save_xlsx, DEFAULT_OUTPUT};
