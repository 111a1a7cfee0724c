//! Small helpers for logging and message formatting.

use chrono::NaiveDate;

/// Truncate a string for logging purposes.
///
/// Strings longer than `max` bytes are cut at the last character boundary at
/// or before `max`, with an ellipsis and the number of dropped bytes appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Korean long-form date, e.g. `2025년 05월 12일`.
pub fn date_label(date: NaiveDate) -> String {
    date.format("%Y년 %m월 %d일").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_for_log_short_string() {
        let s = "Hello, world!";
        assert_eq!(truncate_for_log(s, 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_multibyte() {
        // Each syllable is 3 bytes; a cut at 4 falls inside the second one.
        let result = truncate_for_log("도로통제", 4);
        assert_eq!(result, "도…(+9 bytes)");
    }

    #[test]
    fn test_date_label() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 2).unwrap();
        assert_eq!(date_label(date), "2025년 05월 02일");
    }
}
