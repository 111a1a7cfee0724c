//! Blocklist-then-allowlist topic filter over normalized titles.

use serde::{Deserialize, Serialize};

/// Off-topic markers: columns, personnel notices, obituaries, fortune-telling,
/// crime and court reporting, fires, hiring.
pub const DEFAULT_BLOCKLIST: &[&str] = &[
    "직업군인이야기",
    "칼럼",
    "인사",
    "부고",
    "운세",
    "게시판",
    "동정",
    "검거",
    "구속",
    "살인",
    "폭행",
    "사기",
    "마약",
    "성범죄",
    "횡령",
    "절도",
    "압수수색",
    "재판",
    "법원",
    "검찰",
    "경찰관",
    "습격",
    "화재",
    "불",
    "공채",
    "채용",
];

/// Traffic-domain markers.
pub const DEFAULT_ALLOWLIST: &[&str] = &[
    "도로",
    "교통",
    "사고",
    "통제",
    "공사",
    "정체",
    "단속",
    "개통",
    "우회",
    "차량",
    "신호",
    "운전",
    "면허",
    "하이패스",
    "터널",
];

/// Substring rules deciding whether a headline is traffic news.
///
/// Matching is plain, case-sensitive substring containment with no word
/// boundaries, so a single-syllable entry like `불` also hits longer words.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TopicClassifier {
    pub blocklist: Vec<String>,
    pub allowlist: Vec<String>,
}

impl Default for TopicClassifier {
    fn default() -> Self {
        Self {
            blocklist: DEFAULT_BLOCKLIST.iter().map(|s| s.to_string()).collect(),
            allowlist: DEFAULT_ALLOWLIST.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TopicClassifier {
    /// First blocklist entry contained in `title`, if any.
    pub fn blocked_by(&self, title: &str) -> Option<&str> {
        self.blocklist
            .iter()
            .map(String::as_str)
            .find(|word| title.contains(word))
    }

    /// `true` iff no blocklist entry and at least one allowlist entry occur in `title`.
    pub fn accepts(&self, title: &str) -> bool {
        if let Some(word) = self.blocked_by(title) {
            tracing::trace!(title, word, "blocked");
            return false;
        }
        self.allowlist.iter().any(|word| title.contains(word.as_str()))
    }
}
