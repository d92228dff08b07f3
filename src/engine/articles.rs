//! Shaping and deduplication of filtered news articles.

use crate::feed::types::NewsArticle;
use std::collections::HashSet;

pub const MAX_HEADLINE_CHARS: usize = 150;
pub const MAX_SOURCE_CHARS: usize = 30;
const DEDUP_PREFIX_CHARS: usize = 50;
const SOURCE_SUFFIXES: [&str; 2] = [" - All Posts", " RSS Feed"];

/// Truncate to at most `max` characters (not bytes).
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

/// Strip boilerplate from a feed title and cap its length.
pub fn clean_source(feed_title: &str) -> String {
    let mut source = feed_title.to_string();
    for suffix in SOURCE_SUFFIXES {
        source = source.replace(suffix, "");
    }
    truncate_chars(source.trim(), MAX_SOURCE_CHARS)
}

/// Two headlines are duplicates when their first 50 characters agree, ignoring case.
pub fn dedup_key(headline: &str) -> String {
    truncate_chars(headline, DEDUP_PREFIX_CHARS).to_lowercase()
}

/// Drop later duplicates, then keep the first `max` articles. Order is preserved.
pub fn dedup_and_cap(articles: Vec<NewsArticle>, max: usize) -> Vec<NewsArticle> {
    let mut seen = HashSet::new();
    articles
        .into_iter()
        .filter(|a| seen.insert(dedup_key(&a.headline)))
        .take(max)
        .collect()
}
