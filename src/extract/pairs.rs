use serde::{Deserialize, Serialize};

use crate::table::TabularBlock;
use crate::ScrapeError;

/// One extracted entry: a namespaced identifier and its usage text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedRecord {
    pub name: String,
    pub usage: String,
}

/// Zip two independently extracted sequences into records by position.
///
/// The source page renders names and usage blocks in lockstep, but that is
/// an external invariant we cannot see from here, so it is checked: unequal
/// lengths fail with [`ScrapeError::LengthMismatch`] rather than silently
/// truncating.
pub fn pair_records(
    names: Vec<String>,
    usages: Vec<String>,
) -> Result<Vec<PairedRecord>, ScrapeError> {
    if names.len() != usages.len() {
        return Err(ScrapeError::LengthMismatch {
            left: names.len(),
            right: usages.len(),
        });
    }
    Ok(names
        .into_iter()
        .zip(usages)
        .map(|(name, usage)| PairedRecord { name, usage })
        .collect())
}

/// Build a [`TabularBlock`] from named columns, row-major.
///
/// Every column must have the same number of cells; the first column sets
/// the expected length and any disagreement is a [`ScrapeError::LengthMismatch`].
pub fn assemble_columns(
    columns: Vec<(String, Vec<String>)>,
) -> Result<TabularBlock, ScrapeError> {
    let expected = columns.first().map(|(_, cells)| cells.len()).unwrap_or(0);
    for (_, cells) in &columns {
        if cells.len() != expected {
            return Err(ScrapeError::LengthMismatch {
                left: expected,
                right: cells.len(),
            });
        }
    }

    let headers: Vec<String> = columns.iter().map(|(name, _)| name.clone()).collect();
    let mut rows = vec![Vec::with_capacity(headers.len()); expected];
    for (_, cells) in columns {
        for (row, cell) in rows.iter_mut().zip(cells) {
            row.push(cell);
        }
    }
    Ok(TabularBlock { headers, rows })
}
