//! Data models for search results and ranked articles.
//!
//! - [`SearchResponse`]: the JSON envelope returned by the news search API
//! - [`RawResult`]: one search hit, exactly as the API reported it
//! - [`Candidate`]: a hit that survived filtering and carries a trust score
//!
//! The search API uses lowercase/camelCase field names (`originallink`,
//! `pubDate`), so the raw types rename them onto snake_case fields.

use serde::Deserialize;

/// Envelope of a news search response.
///
/// Only `items` is read; paging metadata such as `total` and `start` is
/// ignored because every query asks for a single page.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<RawResult>,
}

/// A single search hit before any filtering.
///
/// `title` may still contain `<b>` highlight markup and HTML entities.
#[derive(Debug, Clone, Deserialize)]
pub struct RawResult {
    /// The headline as returned by the API (possibly marked up).
    pub title: String,
    /// The aggregator link for the article.
    pub link: String,
    /// The publisher's own URL, when the API knows it.
    #[serde(rename = "originallink", default)]
    pub original_link: Option<String>,
    /// RFC 2822 publish timestamp, e.g. `Mon, 12 May 2025 09:30:00 +0900`.
    #[serde(rename = "pubDate", default)]
    pub published_at: String,
}

impl RawResult {
    /// Host of the publisher link, for logging.
    /// For example: "https://www.yna.co.kr/view/AKR123" -> "www.yna.co.kr"
    pub fn source_host(&self) -> Option<String> {
        self.original_link
            .as_deref()
            .filter(|link| !link.is_empty())
            .and_then(|link| url::Url::parse(link).ok())
            .and_then(|parsed| parsed.host_str().map(str::to_string))
    }
}

/// An article that passed the recency and topic filters.
///
/// The score is assigned once by the trust scorer and is never changed
/// afterwards; deduplication only swaps whole candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Normalized, entity-decoded headline.
    pub title: String,
    pub link: String,
    pub score: f64,
}
