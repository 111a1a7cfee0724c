//! Naver News search API client.
//!
//! Calls `GET /v1/search/news.json` with the client id/secret headers and
//! returns the `items` of the JSON envelope as [`RawResult`]s.

use std::time::Duration;

use reqwest::{Client, Url};
use tracing::{debug, instrument};

use super::NewsSearch;
use crate::error::BotError;
use crate::models::{RawResult, SearchResponse};
use crate::utils::truncate_for_log;

const SEARCH_PATH: &str = "v1/search/news.json";

/// Client for the Naver news search endpoint.
///
/// The base URL is injectable so tests can point it at a mock server.
pub struct NaverClient {
    client: Client,
    client_id: String,
    client_secret: String,
    endpoint: Url,
    display: u32,
    sort: String,
}

impl NaverClient {
    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::Http`] if the HTTP client cannot be built, or
    /// [`BotError::InvalidConfig`] if `base_url` is not a valid URL.
    pub fn with_base_url(
        client_id: &str,
        client_secret: &str,
        display: u32,
        sort: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, BotError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join(SEARCH_PATH))
            .map_err(|e| {
                BotError::InvalidConfig(format!("invalid search base URL '{base_url}': {e}"))
            })?;

        Ok(Self {
            client,
            client_id: client_id.to_owned(),
            client_secret: client_secret.to_owned(),
            endpoint,
            display,
            sort: sort.to_owned(),
        })
    }
}

impl NewsSearch for NaverClient {
    #[instrument(level = "info", skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<RawResult>, BotError> {
        let display = self.display.to_string();
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("query", query),
                ("display", display.as_str()),
                ("sort", self.sort.as_str()),
            ])
            .header("X-Naver-Client-Id", &self.client_id)
            .header("X-Naver-Client-Secret", &self.client_secret)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            debug!(
                status = status.as_u16(),
                body = %truncate_for_log(&body, 300),
                "search API error body"
            );
            return Err(BotError::SearchStatus {
                query: query.to_string(),
                status: status.as_u16(),
            });
        }

        let envelope: SearchResponse = serde_json::from_str(&body)?;
        Ok(envelope.items)
    }
}
