use anyhow::{Context, Result};
use reqwest::Client;
use scraper::Html;
use std::{env, fs, path::PathBuf, process::exit};
use tabscraper::{export, extract, fetch, table};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

/// Defaults for the field-extraction route; override per page shape via
/// TABSCRAPER_NAMESPACE / TABSCRAPER_USAGE_SELECTOR.
static DEFAULT_NAMESPACE: &str = "api";
static DEFAULT_USAGE_SELECTOR: &str = "dd";

const FETCH_RETRIES: u32 = 3;
const FETCH_BACKOFF_MS: u64 = 500;
const HIST_BINS: usize = 10;

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env_filter).init();

    // ─── 2) args + config ────────────────────────────────────────────
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!("Usage: {} <PAGE_URL> [TABLE_INDEX] [HIST_COLUMN]", args[0]);
        exit(1);
    }
    let url = Url::parse(&args[1]).with_context(|| format!("parsing page URL {}", args[1]))?;
    let table_index: Option<usize> = args
        .get(2)
        .map(|s| s.parse())
        .transpose()
        .context("TABLE_INDEX must be an unsigned integer")?;
    let hist_column = args.get(3).cloned();

    let namespace =
        env::var("TABSCRAPER_NAMESPACE").unwrap_or_else(|_| DEFAULT_NAMESPACE.to_string());
    let usage_selector = env::var("TABSCRAPER_USAGE_SELECTOR")
        .unwrap_or_else(|_| DEFAULT_USAGE_SELECTOR.to_string());

    let out_dir = PathBuf::from("out");
    fs::create_dir_all(&out_dir)?;

    // ─── 3) fetch + parse the page once ──────────────────────────────
    let client = Client::new();
    let body = fetch::page_text_with_retry(&client, &url, FETCH_RETRIES, FETCH_BACKOFF_MS)
        .await
        .with_context(|| format!("fetching {}", url))?;
    info!(bytes = body.len(), "page fetched");
    let doc = Html::parse_document(&body);

    // ─── 4) route (a): identifiers + usage blocks → pairs.csv ────────
    let names = extract::extract_identifiers(&body, &namespace);
    if names.is_empty() {
        info!(namespace = %namespace, "no identifiers matched; skipping pair export");
    } else {
        let usages = extract::extract_blocks(&doc, &usage_selector)?;
        match extract::pair_records(names, usages) {
            Ok(pairs) => {
                info!(count = pairs.len(), "assembled records");
                export::write_pairs_csv(out_dir.join("pairs.csv"), &pairs)?;
            }
            // Page drifted out of lockstep; the table route still runs.
            Err(e) => warn!(error = %e, "pair assembly failed; skipping pair export"),
        }
    }

    // ─── 5) route (b): decode tables, clean, export ──────────────────
    let blocks = table::parse_tables(&doc);
    info!(count = blocks.len(), "tables decoded");
    let selected = table::select_block(&blocks, table_index)
        .with_context(|| format!("selecting table from {}", url))?;
    let (clean, removed) = table::strip_repeated_headers(selected);
    info!(removed, rows = clean.rows.len(), "stripped repeated header rows");
    export::write_block_csv(out_dir.join("table.csv"), &clean)?;

    // ─── 6) histogram handoff ────────────────────────────────────────
    if let Some(column) = hist_column {
        let values = table::numeric_column(&clean, &column)
            .with_context(|| format!("extracting numeric column '{}'", column))?;
        info!(column = %column, values = values.len(), "histogram");
        for (edge, count) in table::bin_counts(&values, HIST_BINS) {
            info!("{:>10.2} | {}", edge, "#".repeat(count));
        }
    }

    info!("all done");
    Ok(())
}
