pub mod finnhub;
pub mod rss;
pub mod types;

use crate::config::HttpConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use types::StockRecord;

/// Source of per-ticker quote records.
#[async_trait]
pub trait QuoteFeed: Send + Sync {
    async fn fetch_stock(&self, ticker: &str) -> Result<StockRecord>;
}

/// Source of parsed RSS/Atom documents.
#[async_trait]
pub trait NewsFeed: Send + Sync {
    async fn fetch_feed(&self, url: &str) -> Result<feed_rs::model::Feed>;
}

/// Shared reqwest client: fixed per-request timeout, no retries.
pub(crate) fn build_client(http: &HttpConfig) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_millis(http.request_timeout_ms))
        .user_agent(http.user_agent.as_str())
        .build()
        .context("failed to build HTTP client")
}
