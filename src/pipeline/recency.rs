//! Publish-date freshness check.

use chrono::{DateTime, Duration, Utc};

/// Whether an RFC 2822 timestamp lies within `window` of `now`.
///
/// Accepts iff `now - published < window`. Unparsable dates are never
/// recent. A timestamp slightly in the future counts as recent.
pub fn is_recent(published_at: &str, now: DateTime<Utc>, window: Duration) -> bool {
    match DateTime::parse_from_rfc2822(published_at.trim()) {
        Ok(published) => now.signed_duration_since(published) < window,
        Err(e) => {
            tracing::debug!(published_at, error = %e, "unparsable publish date; treating as stale");
            false
        }
    }
}
