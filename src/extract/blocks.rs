use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

use crate::ScrapeError;

fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector)
        .map_err(|e| ScrapeError::Selector(format!("'{}': {}", selector, e)))
}

/// Full text of an element with internal newlines collapsed to single
/// spaces, one line per block.
fn flattened_text(el: &ElementRef) -> String {
    let raw: String = el.text().collect();
    raw.split('\n')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extract the normalized plain-text content of every element matching
/// `selector`, in document order.
///
/// One output string per matched element, no filtering, no truncation:
/// output length always equals the number of matches.
pub fn extract_blocks(doc: &Html, selector: &str) -> Result<Vec<String>, ScrapeError> {
    let sel = parse_selector(selector)?;
    let out: Vec<String> = doc.select(&sel).map(|el| flattened_text(&el)).collect();
    debug!(selector, count = out.len(), "extracted blocks");
    Ok(out)
}

/// Like [`extract_blocks`] but keeps at most the first `limit` matches.
pub fn extract_texts(
    doc: &Html,
    selector: &str,
    limit: Option<usize>,
) -> Result<Vec<String>, ScrapeError> {
    let sel = parse_selector(selector)?;
    let iter = doc.select(&sel).map(|el| flattened_text(&el));
    Ok(match limit {
        Some(n) => iter.take(n).collect(),
        None => iter.collect(),
    })
}

/// Collect the value of `attr` from every element matching `selector`.
///
/// Elements without the attribute are skipped. When `base` is given,
/// relative values (typically `href`) are joined onto it; values that fail
/// to join are dropped.
pub fn extract_attrs(
    doc: &Html,
    selector: &str,
    attr: &str,
    base: Option<&Url>,
) -> Result<Vec<String>, ScrapeError> {
    let sel = parse_selector(selector)?;
    let out = doc
        .select(&sel)
        .filter_map(|el| el.value().attr(attr))
        .filter_map(|value| match base {
            Some(base) => base.join(value).ok().map(|u| u.to_string()),
            None => Some(value.to_string()),
        })
        .collect();
    Ok(out)
}
