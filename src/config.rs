use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

const ENV_FILE: &str = ".env";
const API_KEY_VAR: &str = "FINNHUB_API_KEY";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub quotes: QuotesConfig,
    #[serde(default)]
    pub news: NewsConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct QuotesConfig {
    #[serde(default = "default_tickers")]
    pub tickers: Vec<String>,
    #[serde(default = "default_quotes_base_url")]
    pub base_url: String,
}

fn default_tickers() -> Vec<String> {
    ["NVDA", "GOOGL", "MSFT", "AMZN", "META"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_quotes_base_url() -> String {
    "https://finnhub.io/api/v1".to_string()
}

impl Default for QuotesConfig {
    fn default() -> Self {
        Self {
            tickers: default_tickers(),
            base_url: default_quotes_base_url(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct NewsConfig {
    #[serde(default = "default_feeds")]
    pub feeds: Vec<String>,
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
    #[serde(default = "default_max_articles")]
    pub max_articles: usize,
    /// Only the head of each feed is scanned.
    #[serde(default = "default_entries_per_feed")]
    pub entries_per_feed: usize,
}

fn default_feeds() -> Vec<String> {
    [
        "https://techcrunch.com/category/artificial-intelligence/feed/",
        "https://www.theverge.com/rss/ai-artificial-intelligence/index.xml",
        "https://feeds.arstechnica.com/arstechnica/technology-lab",
        "https://venturebeat.com/category/ai/feed/",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_keywords() -> Vec<String> {
    [
        "AI",
        "LLM",
        "GPT",
        "Claude",
        "Gemini",
        "OpenAI",
        "Anthropic",
        "Google AI",
        "Microsoft Copilot",
        "artificial intelligence",
        "machine learning",
        "ChatGPT",
        "Llama",
        "AWS",
        "Amazon Bedrock",
        "neural network",
        "deep learning",
        "generative AI",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_max_articles() -> usize { 10 }
fn default_entries_per_feed() -> usize { 20 }

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            feeds: default_feeds(),
            keywords: default_keywords(),
            max_articles: default_max_articles(),
            entries_per_feed: default_entries_per_feed(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    #[serde(default = "default_timeout")]
    pub request_timeout_ms: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout() -> u64 { 10_000 }

fn default_user_agent() -> String {
    concat!("ticker-digest/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: String,
    #[serde(default = "default_stocks_file")]
    pub stocks_file: String,
    #[serde(default = "default_news_file")]
    pub news_file: String,
}

fn default_output_dir() -> String { "data".to_string() }
fn default_stocks_file() -> String { "stocks.json".to_string() }
fn default_news_file() -> String { "news.json".to_string() }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            stocks_file: default_stocks_file(),
            news_file: default_news_file(),
        }
    }
}

/// Whether the quote provider can be called at all.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteCredentials {
    Configured(String),
    Unconfigured,
}

impl QuoteCredentials {
    /// Empty or whitespace-only keys count as absent.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(sanitize_key) {
            Some(key) if !key.is_empty() => QuoteCredentials::Configured(key),
            _ => QuoteCredentials::Unconfigured,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .with_context(|| "Failed to parse config TOML")?;
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the built-in defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Load .env file into process environment. Real env vars take precedence.
    pub fn load_env_file() {
        let path = Path::new(ENV_FILE);
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return,
        };
        // Strip BOM if present (common on Windows-created files)
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
        for (key, value) in parse_env_lines(content) {
            if std::env::var(key).is_err() {
                std::env::set_var(key, value);
            }
        }
    }

    /// Finnhub key from the environment (after `.env` has been loaded).
    pub fn quote_credentials() -> QuoteCredentials {
        QuoteCredentials::from_raw(std::env::var(API_KEY_VAR).ok().as_deref())
    }
}

fn parse_env_lines(content: &str) -> Vec<(&str, &str)> {
    content
        .lines()
        .map(|line| line.trim().trim_matches('\r'))
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim().trim_matches('"').trim_matches('\'')))
        .collect()
}

/// Strip carriage returns, BOM, and other invisible chars from a key value.
fn sanitize_key(raw: &str) -> String {
    raw.replace(['\r', '\u{feff}', '\u{200b}'], "")
        .trim()
        .to_string()
}
