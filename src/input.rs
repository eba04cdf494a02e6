//! Interactive collection of search-page URLs.

use std::io::{self, BufRead, Write};

/// Maximum number of search pages accepted per run.
pub const MAX_SEARCH_PAGES: usize = 4;

/// Reads up to [`MAX_SEARCH_PAGES`] search-page URLs.
///
/// Prompts `Link 1:`..`Link 4:`, trimming each line. The first blank line
/// (or EOF) stops collection early without being counted. No URL validation
/// happens here; unrecognized links are diagnosed later by the pipeline.
pub fn collect_links<R, W>(input: &mut R, output: &mut W) -> io::Result<Vec<String>>
where
    R: BufRead,
    W: Write,
{
    let mut links = Vec::new();

    writeln!(
        output,
        "Digite até 4 links de pesquisa (Google, Bing ou DuckDuckGo). Deixe em branco para encerrar."
    )?;

    for i in 1..=MAX_SEARCH_PAGES {
        write!(output, "Link {}: ", i)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let link = line.trim();
        if link.is_empty() {
            break;
        }
        links.push(link.to_string());
    }

    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(input: &str) -> Vec<String> {
        let mut reader = Cursor::new(input);
        let mut output = Vec::new();
        collect_links(&mut reader, &mut output).unwrap()
    }

    #[test]
    fn test_collects_up_to_four_links() {
        let links = collect("https://a.com\nhttps://b.com\nhttps://c.com\nhttps://d.com\nhttps://e.com\n");
        assert_eq!(
            links,
            vec!["https://a.com", "https://b.com", "https://c.com", "https://d.com"]
        );
    }

    #[test]
    fn test_blank_line_stops_early() {
        let links = collect("https://a.com\n\nhttps://b.com\n");
        assert_eq!(links, vec!["https://a.com"]);
    }

    #[test]
    fn test_blank_first_line_yields_empty() {
        let links = collect("\n");
        assert!(links.is_empty());
    }

    #[test]
    fn test_whitespace_only_counts_as_blank() {
        let links = collect("https://a.com\n   \nhttps://b.com\n");
        assert_eq!(links, vec!["https://a.com"]);
    }

    #[test]
    fn test_lines_are_trimmed() {
        let links = collect("  https://a.com  \n");
        assert_eq!(links, vec!["https://a.com"]);
    }

    #[test]
    fn test_eof_stops_collection() {
        let links = collect("https://a.com\nhttps://b.com");
        assert_eq!(links, vec!["https://a.com", "https://b.com"]);
    }

    #[test]
    fn test_prompts_are_written() {
        let mut reader = Cursor::new("https://a.com\n\n");
        let mut output = Vec::new();
        collect_links(&mut reader, &mut output).unwrap();
        let prompts = String::from_utf8(output).unwrap();
        assert!(prompts.contains("Link 1: "));
        assert!(prompts.contains("Link 2: "));
        assert!(!prompts.contains("Link 3: "));
    }
}
