//! Command-line interface definitions.
//!
//! Credentials can be given as flags but are normally read from the
//! environment (`NAVER_ID`, `NAVER_SECRET`, `TELEGRAM_TOKEN`, `CHAT_ID`).

use clap::Parser;

/// Collect today's regional traffic news and send a briefing to Telegram.
///
/// # Examples
///
/// ```sh
/// # Credentials from the environment, built-in settings
/// traffic_news_bot
///
/// # Custom settings file, print instead of sending
/// traffic_news_bot -c bot.yaml --dry-run
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Naver search API client id
    #[arg(long, env = "NAVER_ID", hide_env_values = true)]
    pub naver_id: Option<String>,

    /// Naver search API client secret
    #[arg(long, env = "NAVER_SECRET", hide_env_values = true)]
    pub naver_secret: Option<String>,

    /// Telegram bot token
    #[arg(long, env = "TELEGRAM_TOKEN", hide_env_values = true)]
    pub telegram_token: Option<String>,

    /// Telegram chat id receiving the briefing
    #[arg(long, env = "CHAT_ID")]
    pub chat_id: Option<String>,

    /// Override the number of articles in the briefing
    #[arg(long)]
    pub top_n: Option<usize>,

    /// Print the briefing to stdout instead of sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Base URL of the news search API
    #[arg(long, hide = true, default_value = "https://openapi.naver.com")]
    pub naver_base_url: String,

    /// Base URL of the Telegram Bot API
    #[arg(long, hide = true, default_value = "https://api.telegram.org")]
    pub telegram_base_url: String,
}
