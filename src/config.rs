//! Run settings and credentials.
//!
//! [`Settings`] holds every tunable of a run and is read from an optional
//! YAML file; any field left out keeps the built-in default. Credentials are
//! never part of that file: they come from the CLI/environment and are
//! checked by [`Credentials::from_cli`] before any network call is made.
//!
//! ```yaml
//! region: 충북
//! search:
//!   queries: [충북 교통 사고, 청주 도로 통제]
//!   display_count_per_query: 20
//! recency_window_hours: 24
//! similarity_threshold: 0.45
//! top_n: 10
//! topic:
//!   blocklist: [부고, 화재]
//!   allowlist: [도로, 교통]
//! scoring:
//!   length_weight: 0.1
//!   rules:
//!     - name: national_outlet
//!       field: original_link
//!       weight: 5
//!       patterns: [yna.co.kr]
//! ```

use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::cli::Cli;
use crate::error::BotError;
use crate::outputs::digest::DigestStyle;
use crate::pipeline::PipelineRules;
use crate::pipeline::classify::TopicClassifier;
use crate::pipeline::score::TrustScorer;

/// Default search queries.
pub const DEFAULT_QUERIES: &[&str] = &[
    "충북 교통 사고",
    "청주 도로 통제",
    "충북 도로공사",
    "충북 실시간 교통",
    "충북 교통 정체",
];

/// Upper bound the search API accepts for `display`.
const MAX_DISPLAY: u32 = 100;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SearchSettings {
    pub queries: Vec<String>,
    /// Results requested per query.
    pub display_count_per_query: u32,
    /// `sim` (relevance) or `date`.
    pub sort: String,
    /// Queries in flight at once; 1 runs them one after another.
    pub concurrency: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            queries: DEFAULT_QUERIES.iter().map(|q| q.to_string()).collect(),
            display_count_per_query: 20,
            sort: "sim".to_string(),
            concurrency: 1,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Region named in the briefing text.
    pub region: String,
    pub search: SearchSettings,
    pub recency_window_hours: u32,
    pub similarity_threshold: f64,
    pub top_n: usize,
    pub topic: TopicClassifier,
    pub scoring: TrustScorer,
    pub http_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            region: "충북".to_string(),
            search: SearchSettings::default(),
            recency_window_hours: 24,
            similarity_threshold: 0.45,
            top_n: 10,
            topic: TopicClassifier::default(),
            scoring: TrustScorer::default(),
            http_timeout_secs: 30,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or the defaults when no path is given.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::ConfigRead`], [`BotError::ConfigParse`] or
    /// [`BotError::InvalidConfig`].
    #[instrument(level = "info")]
    pub async fn load(path: Option<&str>) -> Result<Self, BotError> {
        let settings = match path {
            Some(path) => {
                let text = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| BotError::ConfigRead {
                        path: path.to_string(),
                        source,
                    })?;
                let settings = Self::from_yaml(&text)?;
                info!(path, "Loaded settings file");
                settings
            }
            None => {
                info!("No settings file given; using built-in defaults");
                Self::default()
            }
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_yaml(text: &str) -> Result<Self, BotError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Reject settings that would make a run meaningless or break the
    /// non-negative score guarantee.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::InvalidConfig`] describing the first problem found.
    pub fn validate(&self) -> Result<(), BotError> {
        let invalid = |msg: String| Err(BotError::InvalidConfig(msg));

        if self.search.queries.iter().all(|q| q.trim().is_empty()) {
            return invalid("search.queries must contain at least one query".into());
        }
        if !(1..=MAX_DISPLAY).contains(&self.search.display_count_per_query) {
            return invalid(format!(
                "search.display_count_per_query must be between 1 and {MAX_DISPLAY}, got {}",
                self.search.display_count_per_query
            ));
        }
        if self.recency_window_hours == 0 {
            return invalid("recency_window_hours must be positive".into());
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return invalid(format!(
                "similarity_threshold must be within [0, 1], got {}",
                self.similarity_threshold
            ));
        }
        if self.top_n == 0 {
            return invalid("top_n must be positive".into());
        }
        if self.topic.allowlist.is_empty() {
            return invalid("topic.allowlist must not be empty".into());
        }
        // A blank substring matches every title.
        if self.topic.allowlist.iter().any(|w| w.trim().is_empty()) {
            return invalid("topic.allowlist must not contain blank entries".into());
        }
        if self.topic.blocklist.iter().any(|w| w.trim().is_empty()) {
            return invalid("topic.blocklist must not contain blank entries".into());
        }
        if let Some(rule) = self
            .scoring
            .rules
            .iter()
            .find(|r| r.patterns.iter().any(|p| p.trim().is_empty()))
        {
            return invalid(format!("scoring rule '{}' has a blank pattern", rule.name));
        }
        if !(self.scoring.length_weight >= 0.0) {
            return invalid("scoring.length_weight must be non-negative".into());
        }
        if let Some(rule) = self.scoring.rules.iter().find(|r| !(r.weight >= 0.0)) {
            return invalid(format!(
                "scoring rule '{}' has negative weight {}",
                rule.name, rule.weight
            ));
        }
        Ok(())
    }

    pub fn pipeline_rules(&self) -> PipelineRules {
        PipelineRules {
            classifier: self.topic.clone(),
            scorer: self.scoring.clone(),
            recency_window: Duration::hours(i64::from(self.recency_window_hours)),
            similarity_threshold: self.similarity_threshold,
            top_n: self.top_n,
        }
    }

    pub fn digest_style(&self) -> DigestStyle {
        DigestStyle {
            region: self.region.clone(),
            recency_hours: self.recency_window_hours,
            top_n: self.top_n,
        }
    }

    /// Non-blank queries, trimmed.
    pub fn queries(&self) -> Vec<String> {
        self.search
            .queries
            .iter()
            .map(|q| q.trim())
            .filter(|q| !q.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Where the briefing is delivered.
pub struct TelegramTarget {
    pub token: String,
    pub chat_id: String,
}

/// Validated credentials for one run.
pub struct Credentials {
    pub naver_id: String,
    pub naver_secret: String,
    /// `None` only in dry-run mode.
    pub telegram: Option<TelegramTarget>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("naver_id", &self.naver_id)
            .field("naver_secret", &"<redacted>")
            .field(
                "telegram_chat_id",
                &self.telegram.as_ref().map(|t| t.chat_id.as_str()),
            )
            .finish_non_exhaustive()
    }
}

fn required(value: Option<&String>, name: &'static str) -> Result<String, BotError> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or(BotError::MissingCredential(name))
}

impl Credentials {
    /// Collect credentials from parsed CLI arguments.
    ///
    /// The Telegram pair is only required when the digest is actually sent.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::MissingCredential`] naming the first absent value.
    pub fn from_cli(cli: &Cli) -> Result<Self, BotError> {
        let naver_id = required(cli.naver_id.as_ref(), "NAVER_ID")?;
        let naver_secret = required(cli.naver_secret.as_ref(), "NAVER_SECRET")?;
        let telegram = if cli.dry_run {
            None
        } else {
            Some(TelegramTarget {
                token: required(cli.telegram_token.as_ref(), "TELEGRAM_TOKEN")?,
                chat_id: required(cli.chat_id.as_ref(), "CHAT_ID")?,
            })
        };
        Ok(Self {
            naver_id,
            naver_secret,
            telegram,
        })
    }
}
