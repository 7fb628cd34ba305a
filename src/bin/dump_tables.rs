use scraper::Html;
use std::{env, fs, process::exit};
use tabscraper::table::{parse_tables, strip_repeated_headers};

/// Decode every table in a saved HTML file and print a JSON summary of
/// each, including how many repeated header rows a clean pass would drop.
/// Handy for picking the TABLE_INDEX to pass to the main binary.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <HTML_FILE>", args[0]);
        exit(1);
    }

    let markup = fs::read_to_string(&args[1])?;
    let doc = Html::parse_document(&markup);
    let blocks = parse_tables(&doc);
    if blocks.is_empty() {
        eprintln!("no tables found in {}", args[1]);
        exit(1);
    }

    for (index, block) in blocks.iter().enumerate() {
        let (clean, removed) = strip_repeated_headers(block);
        let summary = serde_json::json!({
            "index": index,
            "headers": block.headers,
            "rows": block.rows.len(),
            "repeated_header_rows": removed,
            "clean_rows": clean.rows.len(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}
