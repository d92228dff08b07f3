//! The two fetch pipelines. Each item (ticker or feed) is fetched independently;
//! a failure skips that item and never aborts the run.

use crate::config::{Config, NewsConfig, QuoteCredentials};
use crate::engine::articles::dedup_and_cap;
use crate::engine::KeywordMatcher;
use crate::feed::finnhub::Finnhub;
use crate::feed::rss::{extract_articles, RssClient, ARTICLE_DATE_FORMAT};
use crate::feed::types::{NewsArticle, StockRecord};
use crate::feed::{NewsFeed, QuoteFeed};
use crate::output::{write_json, NewsSnapshot, StocksSnapshot};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Result of fetching a single ticker or feed.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Fetched(T),
    Skipped { reason: String },
}

impl<T> FetchOutcome<T> {
    pub fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(value) => FetchOutcome::Fetched(value),
            Err(e) => FetchOutcome::Skipped { reason: format!("{:#}", e) },
        }
    }

    pub fn fetched(self) -> Option<T> {
        match self {
            FetchOutcome::Fetched(value) => Some(value),
            FetchOutcome::Skipped { .. } => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, FetchOutcome::Skipped { .. })
    }
}

// ── Quotes ───────────────────────────────────────────────────────────

pub async fn fetch_ticker(feed: &dyn QuoteFeed, ticker: &str) -> FetchOutcome<StockRecord> {
    let outcome = FetchOutcome::from_result(feed.fetch_stock(ticker).await);
    match &outcome {
        FetchOutcome::Fetched(record) => {
            tracing::info!(ticker, price = record.price, change = record.change, "fetched quote");
        }
        FetchOutcome::Skipped { reason } => {
            tracing::warn!(ticker, error = %reason, "skipping ticker");
        }
    }
    outcome
}

/// Fetch every ticker in order, one request at a time.
pub async fn collect_stocks(feed: &dyn QuoteFeed, tickers: &[String]) -> Vec<StockRecord> {
    let mut stocks = Vec::with_capacity(tickers.len());
    for ticker in tickers {
        if let Some(record) = fetch_ticker(feed, ticker).await.fetched() {
            stocks.push(record);
        }
    }
    stocks
}

/// Quote Fetcher. Without credentials no request is made and a single placeholder
/// record is returned. A client setup failure yields an empty list.
pub async fn fetch_stocks(creds: &QuoteCredentials, config: &Config) -> Vec<StockRecord> {
    match creds {
        QuoteCredentials::Unconfigured => {
            tracing::warn!("FINNHUB_API_KEY not set, using placeholder stock data");
            vec![StockRecord::placeholder()]
        }
        QuoteCredentials::Configured(key) => {
            tracing::info!(count = config.quotes.tickers.len(), "fetching stock data from Finnhub");
            match Finnhub::new(key.clone(), &config.quotes.base_url, &config.http) {
                Ok(finnhub) => collect_stocks(&finnhub, &config.quotes.tickers).await,
                Err(e) => {
                    tracing::error!(error = %format!("{:#}", e), "quote fetcher setup failed, no stocks fetched");
                    Vec::new()
                }
            }
        }
    }
}

// ── News ─────────────────────────────────────────────────────────────

pub async fn fetch_feed_articles(
    feed: &dyn NewsFeed,
    url: &str,
    matcher: &KeywordMatcher,
    entries_per_feed: usize,
    fallback_date: &str,
) -> FetchOutcome<Vec<NewsArticle>> {
    tracing::info!(feed = url, "parsing feed");
    let outcome = FetchOutcome::from_result(
        feed.fetch_feed(url)
            .await
            .map(|parsed| extract_articles(&parsed, matcher, entries_per_feed, fallback_date)),
    );
    match &outcome {
        FetchOutcome::Fetched(articles) => {
            tracing::info!(feed = url, matched = articles.len(), "feed parsed");
        }
        FetchOutcome::Skipped { reason } => {
            tracing::warn!(feed = url, error = %reason, "skipping feed");
        }
    }
    outcome
}

/// Scan every feed in order, then deduplicate and cap. Encounter order is kept;
/// articles are not re-sorted by date.
pub async fn collect_news(
    feed: &dyn NewsFeed,
    news: &NewsConfig,
    matcher: &KeywordMatcher,
    fallback_date: &str,
) -> Vec<NewsArticle> {
    let mut all_articles = Vec::new();
    for url in &news.feeds {
        if let Some(articles) =
            fetch_feed_articles(feed, url, matcher, news.entries_per_feed, fallback_date)
                .await
                .fetched()
        {
            all_articles.extend(articles);
        }
    }
    dedup_and_cap(all_articles, news.max_articles)
}

fn news_setup(config: &Config) -> Result<(KeywordMatcher, RssClient)> {
    let matcher = KeywordMatcher::new(&config.news.keywords)
        .context("invalid news keyword")?;
    let client = RssClient::new(&config.http)?;
    Ok((matcher, client))
}

/// News Filter. A setup failure (bad keyword, unusable HTTP settings) yields an
/// empty list.
pub async fn fetch_news(config: &Config) -> Vec<NewsArticle> {
    let (matcher, client) = match news_setup(config) {
        Ok(setup) => setup,
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "news filter setup failed, no articles fetched");
            return Vec::new();
        }
    };
    let fallback_date = chrono::Local::now().format(ARTICLE_DATE_FORMAT).to_string();
    collect_news(&client, &config.news, &matcher, &fallback_date).await
}

// ── Orchestration ────────────────────────────────────────────────────

/// Paths of the two snapshot files written by [`run`].
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub stocks_path: PathBuf,
    pub news_path: PathBuf,
}

/// Run both pipelines unconditionally and write both snapshots. Only output
/// write failures are returned as errors.
pub async fn run(creds: &QuoteCredentials, config: &Config) -> Result<RunSummary> {
    let stocks = fetch_stocks(creds, config).await;
    let articles = fetch_news(config).await;

    let out_dir = Path::new(&config.output.dir);
    let stock_count = stocks.len();
    let stocks_path = write_json(out_dir, &config.output.stocks_file, &StocksSnapshot::new(stocks))?;
    tracing::info!(count = stock_count, path = %stocks_path.display(), "wrote stocks");

    let article_count = articles.len();
    let news_path = write_json(out_dir, &config.output.news_file, &NewsSnapshot::new(articles))?;
    tracing::info!(count = article_count, path = %news_path.display(), "wrote news articles");

    Ok(RunSummary { stocks_path, news_path })
}
