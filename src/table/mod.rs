// src/table/mod.rs
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use tracing::debug;

pub mod dedup;
pub mod select;
pub mod stats;

pub use dedup::strip_repeated_headers;
pub use select::select_block;
pub use stats::{bin_counts, numeric_column};

static TABLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table").expect("table selector should be valid"));
static ROW: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("row selector should be valid"));
static CELL: Lazy<Selector> =
    Lazy::new(|| Selector::parse("th, td").expect("cell selector should be valid"));

/// One decoded HTML table: a header row plus data rows, all cells as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabularBlock {
    /// Column names, from the table's first row (`<th>` or `<td>` cells).
    pub headers: Vec<String>,
    /// Each subsequent `<tr>`, one Vec of cell texts per row.
    pub rows: Vec<Vec<String>>,
}

fn cell_text(el: &ElementRef) -> String {
    let raw: String = el.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode every `<table>` element in the document, in document order.
///
/// The first row of each table is taken as its header; remaining rows
/// become data rows. Cells are carried as whitespace-normalized text with
/// no type coercion.
pub fn parse_tables(doc: &Html) -> Vec<TabularBlock> {
    let mut blocks = Vec::new();
    for table in doc.select(&TABLE) {
        let mut rows = table
            .select(&ROW)
            .map(|tr| tr.select(&CELL).map(|c| cell_text(&c)).collect::<Vec<_>>());

        let headers = rows.next().unwrap_or_default();
        let rows: Vec<Vec<String>> = rows.collect();
        debug!(columns = headers.len(), rows = rows.len(), "decoded table");
        blocks.push(TabularBlock { headers, rows });
    }
    blocks
}
