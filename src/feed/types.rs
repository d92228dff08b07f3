use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Normalized output records (provider-agnostic).

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    pub ticker: String,
    pub name: String,
    pub price: f64,
    pub market_cap: String,
    /// Daily percent change.
    pub change: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_close: Option<f64>,
}

impl StockRecord {
    /// Stand-in emitted when no quote API key is configured.
    pub fn placeholder() -> Self {
        Self {
            ticker: "NVDA".to_string(),
            name: "NVIDIA".to_string(),
            price: 0.0,
            market_cap: "N/A".to_string(),
            change: 0.0,
            previous_close: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsArticle {
    pub headline: String,
    pub source: String,
    /// Abbreviated month and year, e.g. "Oct 2026".
    pub date: String,
    pub link: String,
}

/// Finnhub `/quote` response. Unknown symbols come back as all zeros.
#[derive(Debug, Deserialize, Default)]
pub struct FinnhubQuote {
    /// Current price
    #[serde(default)]
    pub c: Option<f64>,
    /// Percent change
    #[serde(default)]
    pub dp: Option<f64>,
    /// Previous close
    #[serde(default)]
    pub pc: Option<f64>,
}

/// Finnhub `/stock/profile2` response. Unknown symbols come back as `{}`.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FinnhubProfile {
    #[serde(default)]
    pub name: Option<String>,
    /// In millions of the listing currency.
    #[serde(default)]
    pub market_capitalization: Option<f64>,
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub exchange: Option<String>,
    /// Remaining fields (country, currency, ipo, ...).
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl FinnhubProfile {
    /// True only for a literal `{}` body.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.market_capitalization.is_none()
            && self.ticker.is_none()
            && self.exchange.is_none()
            && self.extra.is_empty()
    }
}
