//! # Traffic News Bot
//!
//! Collects regional traffic news from the Naver news search API, keeps only
//! fresh and on-topic articles, merges near-identical stories reported by
//! several outlets, ranks the rest by a trust heuristic, and sends the top
//! of the list to a Telegram chat as a short briefing.
//!
//! ## Usage
//!
//! ```sh
//! NAVER_ID=... NAVER_SECRET=... TELEGRAM_TOKEN=... CHAT_ID=... traffic_news_bot
//! ```
//!
//! ## Architecture
//!
//! One invocation is one pass; scheduling is left to cron or a CI timer.
//! 1. **Collecting**: run every search query, skipping the ones that fail
//! 2. **Filtering**: normalize titles, drop stale and off-topic hits
//! 3. **Ranking**: score, deduplicate across queries, keep the top N
//! 4. **Delivery**: render the briefing and post it to Telegram
//!
//! Nothing is remembered between runs, so an article still inside the
//! recency window is sent again on the next run.

use chrono::{Local, Utc};
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod models;
mod outputs;
mod pipeline;
mod scrapers;
mod utils;

use cli::Cli;
use config::{Credentials, Settings};
use error::BotError;
use outputs::digest::format_digest;
use outputs::telegram::TelegramClient;
use scrapers::collect_results;
use scrapers::naver::NaverClient;

#[tokio::main]
async fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(config = ?args.config, dry_run = args.dry_run, "Parsed CLI arguments");

    match run(&args).await {
        Ok(count) => {
            println!("[{}] {}", Local::now(), status_line(args.dry_run, count));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Run failed");
            println!("[{}] 오류 발생: {e}", Local::now());
            ExitCode::FAILURE
        }
    }
}

fn status_line(dry_run: bool, count: usize) -> String {
    if dry_run {
        format!("미리보기 완료: {count}건 (전송 안 함)")
    } else {
        format!("전송 성공: {count}건")
    }
}

/// One full pass. Returns the number of articles in the briefing.
#[instrument(level = "info", skip_all)]
async fn run(args: &Cli) -> Result<usize, BotError> {
    let start_time = std::time::Instant::now();
    info!("traffic_news_bot starting up");

    // ---- Settings & credentials, before any network call ----
    let mut settings = Settings::load(args.config.as_deref()).await?;
    if let Some(top_n) = args.top_n {
        settings.top_n = top_n;
        settings.validate()?;
    }
    let credentials = Credentials::from_cli(args)?;
    debug!(?credentials, "Credentials present");

    // ---- Collect ----
    let naver = NaverClient::with_base_url(
        &credentials.naver_id,
        &credentials.naver_secret,
        settings.search.display_count_per_query,
        &settings.search.sort,
        settings.http_timeout_secs,
        &args.naver_base_url,
    )?;
    let queries = settings.queries();
    let raw = collect_results(&naver, &queries, settings.search.concurrency).await;

    // ---- Filter, score, dedupe, rank ----
    let ranked = pipeline::run(&raw, &settings.pipeline_rules(), Utc::now());

    // ---- Render & deliver ----
    let message = format_digest(&ranked, Local::now().date_naive(), &settings.digest_style());

    match &credentials.telegram {
        Some(target) => {
            let telegram = TelegramClient::with_base_url(
                &target.token,
                settings.http_timeout_secs,
                &args.telegram_base_url,
            )?;
            telegram.send_message(&target.chat_id, &message).await?;
        }
        None => {
            info!("Dry run; printing briefing instead of sending");
            println!("{message}");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        articles = ranked.len(),
        "Execution complete"
    );
    Ok(ranked.len())
}
