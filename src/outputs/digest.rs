//! Plain-text briefing rendering.
//!
//! The message looks like:
//!
//! ```text
//! 🚗 [2025년 05월 12일 충북 교통 뉴스 브리핑]
//!
//! 1. 청주 도로 통제 안내
//! 🔗 https://n.news.naver.com/...
//!
//! 💡 24시간 이내 최신 뉴스 중 신뢰도가 높은 기사를 엄선했습니다.
//! ```
//!
//! An empty ranking produces a short "no news today" notice instead.

use chrono::NaiveDate;
use std::fmt::Write;

use crate::models::Candidate;
use crate::utils::date_label;

/// Presentation settings for the briefing.
#[derive(Debug, Clone)]
pub struct DigestStyle {
    /// Region named in the header, e.g. `충북`.
    pub region: String,
    /// Recency window quoted in the footer.
    pub recency_hours: u32,
    /// Maximum number of entries rendered.
    pub top_n: usize,
}

/// Render `entries` (already ranked) as the outbound message.
///
/// Titles and links are written out in full.
pub fn format_digest(entries: &[Candidate], date: NaiveDate, style: &DigestStyle) -> String {
    let date = date_label(date);
    if entries.is_empty() {
        return format!(
            "📢 {date}\n오늘 {region} 지역의 신규 교통 뉴스가 없습니다.",
            region = style.region
        );
    }

    let mut message = format!("🚗 [{date} {region} 교통 뉴스 브리핑]\n\n", region = style.region);
    for (i, entry) in entries.iter().take(style.top_n).enumerate() {
        // Writing into a String cannot fail.
        let _ = write!(message, "{}. {}\n🔗 {}\n\n", i + 1, entry.title, entry.link);
    }
    let _ = write!(
        message,
        "💡 {}시간 이내 최신 뉴스 중 신뢰도가 높은 기사를 엄선했습니다.",
        style.recency_hours
    );
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(top_n: usize) -> DigestStyle {
        DigestStyle {
            region: "충북".to_string(),
            recency_hours: 24,
            top_n,
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 12).unwrap()
    }

    fn entry(i: usize) -> Candidate {
        #[allow(clippy::cast_precision_loss)]
        let score = 100.0 - i as f64;
        Candidate {
            title: format!("기사 {i}"),
            link: format!("https://example.com/{i}"),
            score,
        }
    }

    #[test]
    fn empty_ranking_gives_no_news_notice() {
        let message = format_digest(&[], date(), &style(10));
        assert_eq!(message, "📢 2025년 05월 12일\n오늘 충북 지역의 신규 교통 뉴스가 없습니다.");
    }

    #[test]
    fn renders_header_entries_and_footer() {
        let entries = vec![
            Candidate {
                title: "청주 도로 통제 안내".to_string(),
                link: "https://n.news.naver.com/1".to_string(),
                score: 12.0,
            },
            Candidate {
                title: "하이패스 차로 확대".to_string(),
                link: "https://n.news.naver.com/2".to_string(),
                score: 11.0,
            },
        ];
        let message = format_digest(&entries, date(), &style(10));
        assert_eq!(
            message,
            "🚗 [2025년 05월 12일 충북 교통 뉴스 브리핑]\n\n\
             1. 청주 도로 통제 안내\n🔗 https://n.news.naver.com/1\n\n\
             2. 하이패스 차로 확대\n🔗 https://n.news.naver.com/2\n\n\
             💡 24시간 이내 최신 뉴스 중 신뢰도가 높은 기사를 엄선했습니다."
        );
    }

    #[test]
    fn renders_at_most_top_n_entries() {
        let entries: Vec<Candidate> = (1..=15).map(entry).collect();
        let message = format_digest(&entries, date(), &style(10));
        assert_eq!(message.matches("🔗 ").count(), 10);
        assert!(message.contains("10. 기사 10\n"));
        assert!(!message.contains("11. "));
    }

    #[test]
    fn long_titles_are_not_truncated() {
        let title = "도로".repeat(200);
        let entries = vec![Candidate {
            title: title.clone(),
            link: "https://example.com/long".to_string(),
            score: 1.0,
        }];
        assert!(format_digest(&entries, date(), &style(10)).contains(&title));
    }

    #[test]
    fn footer_quotes_recency_window() {
        let mut s = style(10);
        s.recency_hours = 12;
        let message = format_digest(&[entry(1)], date(), &s);
        assert!(message.ends_with("💡 12시간 이내 최신 뉴스 중 신뢰도가 높은 기사를 엄선했습니다."));
    }
}
