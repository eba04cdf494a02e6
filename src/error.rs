//! Error types for the scraping pipeline.

use thiserror::Error;

/// Result type alias for scraping operations.
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Errors that can occur while scraping.
///
/// Every variant is handled per-URL by the pipeline driver: a failing URL is
/// logged and skipped, never aborting the run.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// HTTP request failed (connection error, timeout or non-2xx status).
    #[error("falha na requisição HTTP: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse the fetched document.
    #[error("falha ao interpretar a página: {0}")]
    Parse(String),

    /// A `datetime` attribute was present but not ISO-8601.
    #[error("data inválida: {0}")]
    Date(String),

    /// Failed to write the spreadsheet.
    #[error("falha ao gravar a planilha: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
