use tracing::debug;

use crate::table::TabularBlock;

/// True iff every cell of `row` textually equals the corresponding header
/// cell. A row whose cell count disagrees with the header can never be a
/// header echo, so it compares false rather than failing.
fn is_header_echo(row: &[String], headers: &[String]) -> bool {
    row.len() == headers.len() && row.iter().zip(headers).all(|(cell, h)| cell == h)
}

/// Drop every data row that duplicates the header row.
///
/// Paginated source pages re-render the header every fixed number of rows,
/// and table auto-detection happily reads those back as data. Comparison is
/// exact text equality per cell; survivor order is preserved and the
/// removed count is returned for diagnostics. Running this on already
/// clean data removes nothing.
pub fn strip_repeated_headers(block: &TabularBlock) -> (TabularBlock, usize) {
    let survivors: Vec<Vec<String>> = block
        .rows
        .iter()
        .filter(|row| !is_header_echo(row, &block.headers))
        .cloned()
        .collect();

    let removed = block.rows.len() - survivors.len();
    if removed > 0 {
        debug!(removed, "dropped repeated header rows");
    }
    (
        TabularBlock {
            headers: block.headers.clone(),
            rows: survivors,
        },
        removed,
    )
}
