//! Interactive scraping binary: prompts for search-page links, scrapes the
//! results and saves them to a spreadsheet.

use std::io;
use std::path::Path;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use raspador::{collect_links, save_xlsx, Scraper, DEFAULT_OUTPUT};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let links = collect_links(&mut stdin.lock(), &mut stdout)?;

    if links.is_empty() {
        println!("Nenhum link fornecido. Encerrando.");
        return Ok(());
    }

    let scraper = Scraper::new();
    let records = scraper.run(&links).await;

    save_xlsx(&records, Path::new(DEFAULT_OUTPUT))?;
    Ok(())
}
