use super::types::*;
use super::{build_client, QuoteFeed};
use crate::config::HttpConfig;
use crate::engine::market_cap::{format_market_cap, round2};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

pub struct Finnhub {
    client: Client,
    api_key: String,
    base_url: String,
}

impl Finnhub {
    pub fn new(api_key: String, base_url: &str, http: &HttpConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(http)?,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str, ticker: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);

        // without_url(): the request URL carries the API token
        let resp = self
            .client
            .get(&url)
            .query(&[("symbol", ticker), ("token", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| e.without_url())
            .with_context(|| format!("finnhub {} request failed for {}", endpoint, ticker))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("finnhub {} {} ({}): {}", endpoint, ticker, status, body);
        }

        resp.json::<T>()
            .await
            .map_err(|e| e.without_url())
            .with_context(|| format!("failed to parse finnhub {} response for {}", endpoint, ticker))
    }

    pub async fn fetch_quote(&self, ticker: &str) -> Result<FinnhubQuote> {
        self.get_json("quote", ticker).await
    }

    pub async fn fetch_profile(&self, ticker: &str) -> Result<FinnhubProfile> {
        let profile: FinnhubProfile = self.get_json("stock/profile2", ticker).await?;
        if profile.is_empty() {
            anyhow::bail!("finnhub returned an empty profile for {}", ticker);
        }
        Ok(profile)
    }
}

/// Combine a quote and a profile into an output record.
pub fn build_record(ticker: &str, quote: &FinnhubQuote, profile: &FinnhubProfile) -> StockRecord {
    StockRecord {
        ticker: ticker.to_string(),
        name: profile.name.clone().unwrap_or_else(|| ticker.to_string()),
        price: round2(quote.c.unwrap_or(0.0)),
        market_cap: format_market_cap(profile.market_capitalization.unwrap_or(0.0)),
        change: round2(quote.dp.unwrap_or(0.0)),
        previous_close: Some(round2(quote.pc.unwrap_or(0.0))),
    }
}

#[async_trait]
impl QuoteFeed for Finnhub {
    async fn fetch_stock(&self, ticker: &str) -> Result<StockRecord> {
        let quote = self.fetch_quote(ticker).await?;
        let profile = self.fetch_profile(ticker).await?;
        Ok(build_record(ticker, &quote, &profile))
    }
}
