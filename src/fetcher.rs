//! Page fetcher abstraction for retrieving HTML content.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::Result;

/// Timeout applied to every request.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// User-agent sent when fetching result pages, so that content sites serve
/// the same markup they would serve a regular browser.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Trait for fetching the full HTML content of a URL.
///
/// The pipeline only needs a URL-in, HTML-out interface; all configuration
/// (user-agent, timeout) is fixed at construction time. Tests substitute a
/// stub implementation to avoid network access.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the HTML content of the given URL.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// A page fetcher backed by plain HTTP requests via reqwest.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with default headers, used for search-result pages.
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Creates a fetcher that sends a browser-like user-agent, used for the
    /// content pages behind each result link.
    pub fn with_browser_agent() -> Self {
        Self {
            client: Client::builder()
                .user_agent(BROWSER_USER_AGENT)
                .timeout(FETCH_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Creates a fetcher with a custom reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let html = response.text().await?;
        Ok(html)
    }
}
