use crate::table::TabularBlock;
use crate::ScrapeError;

/// Pick exactly one table out of the decoded blocks.
///
/// A lone table selects itself. With several present the caller must say
/// which one: guessing block 0 on an ambiguous page is how a scraper
/// silently reads the wrong data, so that case is an error.
pub fn select_block(
    blocks: &[TabularBlock],
    index: Option<usize>,
) -> Result<&TabularBlock, ScrapeError> {
    match index {
        Some(i) => blocks.get(i).ok_or(ScrapeError::TableIndex {
            index: i,
            count: blocks.len(),
        }),
        None => match blocks {
            [] => Err(ScrapeError::NoTables),
            [only] => Ok(only),
            _ => Err(ScrapeError::AmbiguousTable {
                count: blocks.len(),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(tag: &str) -> TabularBlock {
        TabularBlock {
            headers: vec![tag.to_string()],
            rows: vec![],
        }
    }

    #[test]
    fn single_block_selects_itself() {
        let blocks = vec![block("a")];
        assert_eq!(select_block(&blocks, None).unwrap().headers, vec!["a"]);
    }

    #[test]
    fn two_blocks_without_index_is_ambiguous() {
        let blocks = vec![block("a"), block("b")];
        assert!(matches!(
            select_block(&blocks, None),
            Err(ScrapeError::AmbiguousTable { count: 2 })
        ));
    }

    #[test]
    fn explicit_index_picks_among_many() {
        let blocks = vec![block("a"), block("b")];
        assert_eq!(select_block(&blocks, Some(1)).unwrap().headers, vec!["b"]);
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let blocks = vec![block("a")];
        assert!(matches!(
            select_block(&blocks, Some(3)),
            Err(ScrapeError::TableIndex { index: 3, count: 1 })
        ));
    }

    #[test]
    fn empty_document_is_an_error() {
        assert!(matches!(select_block(&[], None), Err(ScrapeError::NoTables)));
    }
}
