// src/export/mod.rs
use std::path::Path;

use csv::Writer;
use tracing::info;

use crate::extract::PairedRecord;
use crate::table::TabularBlock;
use crate::ScrapeError;

/// Write name/usage records to `path` as CSV, header row first.
pub fn write_pairs_csv(path: impl AsRef<Path>, records: &[PairedRecord]) -> Result<(), ScrapeError> {
    let path = path.as_ref();
    let mut wtr = Writer::from_path(path)?;
    wtr.write_record(["name", "usage"])?;
    for record in records {
        wtr.write_record([&record.name, &record.usage])?;
    }
    wtr.flush()?;
    info!(path = %path.display(), rows = records.len(), "wrote pairs CSV");
    Ok(())
}

/// Write a decoded table to `path` as CSV, its header row first.
pub fn write_block_csv(path: impl AsRef<Path>, block: &TabularBlock) -> Result<(), ScrapeError> {
    let path = path.as_ref();
    let mut wtr = Writer::from_path(path)?;
    wtr.write_record(&block.headers)?;
    for row in &block.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    info!(path = %path.display(), rows = block.rows.len(), "wrote table CSV");
    Ok(())
}
