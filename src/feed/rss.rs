use super::types::NewsArticle;
use super::{build_client, NewsFeed};
use crate::config::HttpConfig;
use crate::engine::articles::{clean_source, truncate_chars, MAX_HEADLINE_CHARS};
use crate::engine::KeywordMatcher;
use anyhow::{Context, Result};
use async_trait::async_trait;
use feed_rs::model::{Entry, Feed};
use reqwest::Client;

const UNKNOWN_SOURCE: &str = "Unknown";

/// Month-and-year format used for article dates ("Oct 2026").
pub const ARTICLE_DATE_FORMAT: &str = "%b %Y";

pub struct RssClient {
    client: Client,
}

impl RssClient {
    pub fn new(http: &HttpConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(http)?,
        })
    }
}

#[async_trait]
impl NewsFeed for RssClient {
    async fn fetch_feed(&self, url: &str) -> Result<Feed> {
        let resp = self.client.get(url).send().await
            .with_context(|| format!("feed request failed: {}", url))?;

        let status = resp.status();
        if !status.is_success() {
            anyhow::bail!("feed {} returned {}", url, status);
        }

        let body = resp.bytes().await
            .with_context(|| format!("failed to read feed body: {}", url))?;

        parse_feed(&body).with_context(|| format!("failed to parse feed: {}", url))
    }
}

/// Parse an RSS or Atom document.
pub fn parse_feed(body: &[u8]) -> Result<Feed> {
    Ok(feed_rs::parser::parse(body)?)
}

/// Turn the head of a parsed feed into articles matching `matcher`.
///
/// Title and summary are checked independently; entries without a summary are
/// matched against their content body instead. `fallback_date` is used for entries
/// that carry neither a published nor an updated timestamp.
pub fn extract_articles(
    feed: &Feed,
    matcher: &KeywordMatcher,
    entries_per_feed: usize,
    fallback_date: &str,
) -> Vec<NewsArticle> {
    let source = clean_source(
        feed.title
            .as_ref()
            .map(|t| t.content.as_str())
            .unwrap_or(UNKNOWN_SOURCE),
    );

    feed.entries
        .iter()
        .take(entries_per_feed)
        .filter_map(|entry| {
            let title = entry.title.as_ref().map(|t| t.content.as_str()).unwrap_or("");
            let summary = entry_summary(entry);

            if !matcher.matches(title) && !matcher.matches(summary) {
                return None;
            }

            let date = entry
                .published
                .or(entry.updated)
                .map(|dt| dt.format(ARTICLE_DATE_FORMAT).to_string())
                .unwrap_or_else(|| fallback_date.to_string());

            tracing::debug!(source = %source, headline = %truncate_chars(title, 60), "matched article");

            Some(NewsArticle {
                headline: truncate_chars(title, MAX_HEADLINE_CHARS),
                source: source.clone(),
                date,
                link: entry_link(entry),
            })
        })
        .collect()
}

/// `<summary>`/`<description>`, else `<content>`/`<content:encoded>`.
fn entry_summary(entry: &Entry) -> &str {
    match &entry.summary {
        Some(text) => text.content.as_str(),
        None => entry
            .content
            .as_ref()
            .and_then(|c| c.body.as_deref())
            .unwrap_or(""),
    }
}

/// Prefer the `alternate` link, as feed readers do.
fn entry_link(entry: &Entry) -> String {
    entry
        .links
        .iter()
        .find(|l| l.rel.as_deref().map_or(true, |rel| rel == "alternate"))
        .or_else(|| entry.links.first())
        .map(|l| l.href.clone())
        .unwrap_or_default()
}
