use tracing::debug;

use crate::table::TabularBlock;
use crate::ScrapeError;

/// Pull one named column out of a cleaned table as floats.
///
/// Blank and unparseable cells are skipped; a column name missing from the
/// header is [`ScrapeError::MissingColumn`]. Meant as the handoff to
/// whatever renders the histogram downstream.
pub fn numeric_column(block: &TabularBlock, column: &str) -> Result<Vec<f64>, ScrapeError> {
    let idx = block
        .headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| ScrapeError::MissingColumn {
            column: column.to_string(),
        })?;

    let values: Vec<f64> = block
        .rows
        .iter()
        .filter_map(|row| row.get(idx))
        .filter_map(|cell| cell.trim().parse::<f64>().ok())
        .collect();
    debug!(column, kept = values.len(), total = block.rows.len(), "parsed numeric column");
    Ok(values)
}

/// Equal-width histogram bins over `[min, max]`, as (lower edge, count)
/// pairs. Values on a boundary fall into the lower bin except the maximum,
/// which lands in the last.
pub fn bin_counts(values: &[f64], bins: usize) -> Vec<(f64, usize)> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let width = (max - min) / bins as f64;

    if width == 0.0 {
        // All values identical: one bin holds everything.
        return vec![(min, values.len())];
    }

    let mut counts = vec![0usize; bins];
    for &v in values {
        let i = (((v - min) / width) as usize).min(bins - 1);
        counts[i] += 1;
    }
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| (min + width * i as f64, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn ages_block() -> TabularBlock {
        TabularBlock {
            headers: strings(&["Player", "Age"]),
            rows: vec![
                strings(&["P1", "20"]),
                strings(&["P2", "22.5"]),
                strings(&["P3", ""]),
                strings(&["P4", "n/a"]),
            ],
        }
    }

    #[test]
    fn parses_and_skips_non_numeric_cells() {
        let values = numeric_column(&ages_block(), "Age").unwrap();
        assert_eq!(values, vec![20.0, 22.5]);
    }

    #[test]
    fn missing_column_is_a_named_error() {
        assert!(matches!(
            numeric_column(&ages_block(), "Height"),
            Err(ScrapeError::MissingColumn { .. })
        ));
    }

    #[test]
    fn bins_cover_the_range() {
        let values = [0.0, 1.0, 2.0, 3.0, 4.0];
        let bins = bin_counts(&values, 2);
        assert_eq!(bins.len(), 2);
        assert_eq!(bins[0], (0.0, 2)); // 0, 1
        assert_eq!(bins[1].1, 3); // 2, 3, and max 4
    }

    #[test]
    fn identical_values_collapse_to_one_bin() {
        assert_eq!(bin_counts(&[7.0, 7.0, 7.0], 4), vec![(7.0, 3)]);
    }

    #[test]
    fn empty_input_yields_no_bins() {
        assert!(bin_counts(&[], 5).is_empty());
        assert!(bin_counts(&[1.0], 0).is_empty());
    }
}
