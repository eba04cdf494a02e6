//! Per-engine result-link extraction strategies.

pub mod bing;
pub mod duckduckgo;
pub mod google;

pub(crate) use bing::extract_links as extract_bing;
pub(crate) use duckduckgo::extract_links as extract_duckduckgo;
pub(crate) use google::extract_links as extract_google;

use url::Url;

/// Returns true when the link's host contains any of the given fragments.
///
/// This is a raw substring check on the parsed host, not a suffix match, so
/// it can both over-exclude (a third-party host that happens to contain the
/// fragment) and under-exclude (a spoofed host). Known heuristic, kept as-is.
pub(crate) fn host_contains(link: &str, fragments: &[&str]) -> bool {
    let host = Url::parse(link)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default();
    fragments.iter().any(|fragment| host.contains(fragment))
}
