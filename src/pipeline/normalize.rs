//! Title cleanup applied before any matching or scoring.

use once_cell::sync::Lazy;
use regex::Regex;

/// Search highlight markup wrapped around matched query terms.
static HIGHLIGHT_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?b>").unwrap());

/// Strip `<b>`/`</b>` highlight tags and decode the quote entities.
///
/// Nothing else is touched: other entities and characters pass through as-is.
pub fn normalize_title(raw: &str) -> String {
    HIGHLIGHT_TAG
        .replace_all(raw, "")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
}
