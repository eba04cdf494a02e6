//! Sequential scraping pipeline.

use tracing::{debug, warn};

use crate::engine::SearchEngine;
use crate::fetcher::{HttpFetcher, PageFetcher};
use crate::page::extract_page;
use crate::record::PageRecord;
use crate::ScrapeError;

/// Drives the search-page → result-link → content-record pipeline.
///
/// Search pages are fetched with default headers; content pages with a
/// browser-like user-agent. Everything runs strictly in order, one request
/// at a time; per-URL failures are reported and skipped.
pub struct Scraper {
    search_fetcher: Box<dyn PageFetcher>,
    page_fetcher: Box<dyn PageFetcher>,
}

impl Scraper {
    /// Creates a scraper backed by HTTP fetchers.
    pub fn new() -> Self {
        Self {
            search_fetcher: Box::new(HttpFetcher::new()),
            page_fetcher: Box::new(HttpFetcher::with_browser_agent()),
        }
    }

    /// Creates a scraper with custom fetchers, used by tests.
    pub fn with_fetchers(
        search_fetcher: Box<dyn PageFetcher>,
        page_fetcher: Box<dyn PageFetcher>,
    ) -> Self {
        Self {
            search_fetcher,
            page_fetcher,
        }
    }

    /// Processes each search page in order and returns the accumulated
    /// records. A record is kept only when both title and content came back
    /// non-empty.
    pub async fn run(&self, links: &[String]) -> Vec<PageRecord> {
        let mut records = Vec::new();

        for link in links {
            let Some(engine) = SearchEngine::detect(link) else {
                println!("Link não reconhecido: {}. Pulando para o próximo.", link);
                continue;
            };

            let html = match self.search_fetcher.fetch(link).await {
                Ok(html) => html,
                Err(e) => {
                    warn!(link, error = %e, "falha ao buscar página de pesquisa");
                    println!("Erro ao acessar o link de pesquisa {}: {}", link, e);
                    continue;
                }
            };

            println!("Extraindo links do {}...", engine.name());
            let urls = match engine.extract_links(&html) {
                Ok(urls) => urls,
                Err(e) => {
                    println!("Erro inesperado ao processar o link {}: {}", link, e);
                    continue;
                }
            };
            debug!(engine = engine.name(), count = urls.len(), "links extraídos");

            for url in urls {
                match extract_page(self.page_fetcher.as_ref(), &url).await {
                    Ok(page) => {
                        if !page.title.is_empty() && !page.content.is_empty() {
                            records.push(PageRecord::new(
                                page.title,
                                url,
                                page.published,
                                page.content,
                            ));
                        }
                    }
                    Err(ScrapeError::Http(e)) => {
                        println!("Erro ao acessar {}: {}", url, e);
                    }
                    Err(e) => {
                        println!("Erro inesperado ao processar {}: {}", url, e);
                    }
                }
            }
        }

        records
    }
}

impl Default for Scraper {
    fn default() -> Self {
        Self::new()
    }
}
