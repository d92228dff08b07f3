//! JSON snapshot envelopes and file writes.

use crate::feed::types::{NewsArticle, StockRecord};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StocksSnapshot {
    pub last_updated: String,
    pub stocks: Vec<StockRecord>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsSnapshot {
    pub last_updated: String,
    pub articles: Vec<NewsArticle>,
}

impl StocksSnapshot {
    pub fn new(stocks: Vec<StockRecord>) -> Self {
        Self { last_updated: timestamp_now(), stocks }
    }
}

impl NewsSnapshot {
    pub fn new(articles: Vec<NewsArticle>) -> Self {
        Self { last_updated: timestamp_now(), articles }
    }
}

/// ISO-8601 UTC with microseconds and a `Z` suffix, e.g. `2026-10-16T09:30:00.123456Z`.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

pub fn timestamp_now() -> String {
    format_timestamp(Utc::now())
}

/// Pretty-print `value` to `dir/file`, creating `dir` if needed.
pub fn write_json<T: Serialize>(dir: &Path, file: &str, value: &T) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let path = dir.join(file);
    let mut json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", file))?;
    json.push('\n');

    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
