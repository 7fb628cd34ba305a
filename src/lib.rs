//! Scraping toolkit for pulling tabular data out of a single web page.
//!
//! Two routes in: field-level extraction from the parsed element tree
//! ([`extract`]), and decoding of embedded HTML tables with cleanup of
//! pagination artifacts ([`table`]). [`fetch`] and [`export`] are the thin
//! I/O edges on either side; neither is required to use the core.

pub mod export;
pub mod extract;
pub mod fetch;
pub mod table;

/// Errors surfaced by the extraction and table-cleaning routines.
///
/// Zero regex matches and ragged rows during dedup are deliberately *not*
/// errors: the former yields an empty result, the latter leaves the row in
/// place.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// Two sequences that must pair positionally have different lengths.
    #[error("length mismatch: {left} names vs {right} usages")]
    LengthMismatch { left: usize, right: usize },

    /// More than one table present and no index supplied by the caller.
    #[error("{count} tables found; supply an explicit index")]
    AmbiguousTable { count: usize },

    /// No table present where one is required.
    #[error("no tables found in document")]
    NoTables,

    /// Caller-supplied table index is out of range.
    #[error("table index {index} out of range ({count} tables)")]
    TableIndex { index: usize, count: usize },

    /// Named column does not exist in the table header.
    #[error("column '{column}' not found in header")]
    MissingColumn { column: String },

    /// Caller-supplied CSS selector failed to parse.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// An HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
