//! Filtering, scoring, deduplication and ranking of raw search results.
//!
//! Every raw result goes through the same fixed sequence:
//!
//! 1. [`normalize`]: strip highlight markup from the title
//! 2. [`recency`]: drop anything published outside the recency window
//! 3. [`classify`]: drop anything that is not traffic news
//! 4. [`score`]: assign the trust score
//! 5. [`dedup`]: merge near-identical stories, keeping the best-scored one
//!
//! Deduplication sees the whole batch at once, best score first, so the
//! outcome does not depend on which query returned an article first. The
//! surviving stories are then ranked by score and cut to `top_n`.
//! Nothing here performs I/O or knows about credentials.

pub mod classify;
pub mod dedup;
pub mod normalize;
pub mod recency;
pub mod score;
pub mod similarity;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, instrument};

use crate::models::{Candidate, RawResult};
use classify::TopicClassifier;
use dedup::rank_unique;
use normalize::normalize_title;
use recency::is_recent;
use score::{ScoreContext, TrustScorer};

/// Everything the pipeline needs to turn raw results into a ranking.
#[derive(Debug, Clone)]
pub struct PipelineRules {
    pub classifier: TopicClassifier,
    pub scorer: TrustScorer,
    pub recency_window: Duration,
    /// Titles more similar than this are one story.
    pub similarity_threshold: f64,
    pub top_n: usize,
}

/// Per-run counters, logged once at the end of [`run`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStats {
    pub received: usize,
    pub stale: usize,
    pub off_topic: usize,
    pub duplicates: usize,
    pub unique: usize,
}

/// Normalize, filter and score one raw result.
///
/// Returns `None` (and bumps the matching counter) for stale or off-topic items.
fn screen(
    raw: &RawResult,
    rules: &PipelineRules,
    now: DateTime<Utc>,
    stats: &mut PipelineStats,
) -> Option<Candidate> {
    let title = normalize_title(&raw.title);

    if !is_recent(&raw.published_at, now, rules.recency_window) {
        debug!(%title, published_at = %raw.published_at, "dropped: not recent");
        stats.stale += 1;
        return None;
    }
    if !rules.classifier.accepts(&title) {
        debug!(%title, "dropped: off topic");
        stats.off_topic += 1;
        return None;
    }

    let ctx = ScoreContext {
        title: &title,
        link: &raw.link,
        original_link: raw.original_link.as_deref(),
    };
    let score = rules.scorer.score(&ctx);
    debug!(
        %title,
        score,
        source = raw.source_host().as_deref().unwrap_or("-"),
        rules = ?rules.scorer.matched_rules(&ctx),
        "scored candidate"
    );

    Some(Candidate {
        title,
        link: raw.link.clone(),
        score,
    })
}

/// Turn the raw results of all queries into the final ranked list.
#[instrument(level = "info", skip_all, fields(received = raw.len()))]
pub fn run(raw: &[RawResult], rules: &PipelineRules, now: DateTime<Utc>) -> Vec<Candidate> {
    let mut stats = PipelineStats {
        received: raw.len(),
        ..PipelineStats::default()
    };
    let candidates: Vec<Candidate> = raw
        .iter()
        .filter_map(|item| screen(item, rules, now, &mut stats))
        .collect();

    let ranking = rank_unique(candidates, rules.similarity_threshold, rules.top_n);
    stats.duplicates = ranking.duplicates;
    stats.unique = ranking.unique;
    info!(
        received = stats.received,
        stale = stats.stale,
        off_topic = stats.off_topic,
        duplicates = stats.duplicates,
        unique = stats.unique,
        kept = ranking.ranked.len(),
        "pipeline finished"
    );
    ranking.ranked
}
