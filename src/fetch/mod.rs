// src/fetch/mod.rs
//
// Thin HTTP edge. The core never does network I/O; everything here just
// turns a URL into a text body for the parsers downstream.

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};
use url::Url;

/// GET `url` and return the response body as text.
pub async fn page_text(client: &Client, url: &Url) -> Result<String> {
    debug!(%url, "fetching page");
    client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("GET {} failed", url))?
        .error_for_status()
        .with_context(|| format!("non-success status from {}", url))?
        .text()
        .await
        .with_context(|| format!("reading body from {}", url))
}

/// [`page_text`] with bounded retries and exponential backoff.
pub async fn page_text_with_retry(
    client: &Client,
    url: &Url,
    max_retries: u32,
    initial_backoff_ms: u64,
) -> Result<String> {
    let mut attempts = 0;
    loop {
        match page_text(client, url).await {
            Ok(body) => return Ok(body),
            Err(e) if attempts < max_retries => {
                attempts += 1;
                let backoff = initial_backoff_ms * 2u64.pow(attempts - 1);
                warn!(%url, attempt = attempts, delay_ms = backoff, error = %e, "retrying fetch");
                sleep(Duration::from_millis(backoff)).await;
            }
            Err(e) => return Err(e),
        }
    }
}
