//! Search collaborators that supply raw results to the pipeline.
//!
//! A source implements [`NewsSearch`] for one query at a time;
//! [`collect_results`] runs every configured query against it and
//! concatenates the hits in query order.
//!
//! # Supported Sources
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | Naver News | [`naver`] | Search API (JSON) | Requires client id + secret |
//!
//! A query that fails is logged and contributes nothing; the remaining
//! queries still run.

pub mod naver;

use futures::stream::{self, StreamExt};
use tracing::{info, instrument, warn};

use crate::error::BotError;
use crate::models::RawResult;

/// One-query news search.
pub trait NewsSearch {
    async fn search(&self, query: &str) -> Result<Vec<RawResult>, BotError>;
}

/// Run all `queries` against `source` and return the union of their hits.
///
/// Up to `concurrency` queries are in flight at once; results are still
/// concatenated in query order.
#[instrument(level = "info", skip_all, fields(queries = queries.len(), concurrency = concurrency))]
pub async fn collect_results<S: NewsSearch>(
    source: &S,
    queries: &[String],
    concurrency: usize,
) -> Vec<RawResult> {
    let per_query: Vec<Vec<RawResult>> = stream::iter(queries)
        .map(|query| async move {
            match source.search(query).await {
                Ok(items) => {
                    info!(%query, count = items.len(), "collected search results");
                    items
                }
                Err(e) => {
                    warn!(%query, error = %e, "search failed; skipping query");
                    Vec::new()
                }
            }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let results: Vec<RawResult> = per_query.into_iter().flatten().collect();
    info!(count = results.len(), "Total raw results collected");
    results
}
