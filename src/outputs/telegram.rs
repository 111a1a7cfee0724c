//! Telegram Bot API delivery.
//!
//! Posts the digest to `sendMessage` as a form with link previews disabled.
//! A send is not retried; the caller reports the failure and stops.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::error::BotError;
use crate::utils::truncate_for_log;

/// Subset of the Bot API response envelope.
#[derive(Debug, Deserialize)]
struct ApiReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

pub struct TelegramClient {
    client: Client,
    send_url: Url,
}

impl std::fmt::Debug for TelegramClient {
    // The send URL embeds the bot token.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient").finish_non_exhaustive()
    }
}

impl TelegramClient {
    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::Http`] if the HTTP client cannot be built, or
    /// [`BotError::InvalidConfig`] if the resulting URL is invalid.
    pub fn with_base_url(token: &str, timeout_secs: u64, base_url: &str) -> Result<Self, BotError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        // `Url::join` would parse a `123:ABC` token as a scheme.
        let send_url = Url::parse(&format!(
            "{}/bot{token}/sendMessage",
            base_url.trim_end_matches('/')
        ))
        .map_err(|e| {
            BotError::InvalidConfig(format!("invalid Telegram base URL '{base_url}': {e}"))
        })?;

        Ok(Self { client, send_url })
    }

    /// Send `text` to `chat_id` with link previews disabled.
    ///
    /// # Errors
    ///
    /// - [`BotError::Http`] on network failure (the token-bearing URL is stripped).
    /// - [`BotError::Delivery`] on a non-2xx status or an `ok: false` reply.
    #[instrument(level = "info", skip(self, text), fields(bytes = text.len()))]
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), BotError> {
        let response = self
            .client
            .post(self.send_url.clone())
            .form(&[
                ("chat_id", chat_id),
                ("text", text),
                ("disable_web_page_preview", "true"),
            ])
            .send()
            .await
            .map_err(|e| BotError::Http(e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BotError::Http(e.without_url()))?;
        let reply = serde_json::from_str::<ApiReply>(&body).ok();

        match reply {
            Some(ApiReply { ok: true, .. }) if status.is_success() => {
                info!("digest delivered");
                Ok(())
            }
            _ => {
                let reason = reply
                    .and_then(|r| r.description)
                    .unwrap_or_else(|| truncate_for_log(&body, 200));
                warn!(status = status.as_u16(), %reason, "Telegram rejected the message");
                Err(BotError::Delivery(format!("status {}: {reason}", status.as_u16())))
            }
        }
    }
}
