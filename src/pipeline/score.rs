//! Additive trust score built from independent `(signal, weight)` rules.
//!
//! Each [`ScoreRule`] looks for any of its patterns in one field of the
//! article and contributes its weight at most once. A small per-character
//! bonus on the title breaks ties in favour of more descriptive headlines.

use serde::{Deserialize, Serialize};

/// The article fields a score is computed from.
#[derive(Debug, Clone, Copy)]
pub struct ScoreContext<'a> {
    pub title: &'a str,
    /// Aggregator link.
    pub link: &'a str,
    /// Publisher link; `None` when the search API did not report one.
    pub original_link: Option<&'a str>,
}

/// Which field a rule inspects.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Link,
    OriginalLink,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ScoreRule {
    pub name: String,
    pub field: Field,
    pub weight: f64,
    /// Lowercase substrings; any one of them triggers the rule.
    pub patterns: Vec<String>,
}

impl ScoreRule {
    fn new(name: &str, field: Field, weight: f64, patterns: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            field,
            weight,
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Whether the rule fires. Matching is case-insensitive on the haystack.
    pub fn matches(&self, ctx: &ScoreContext<'_>) -> bool {
        let haystack = match self.field {
            Field::Link => ctx.link,
            Field::OriginalLink => match ctx.original_link {
                Some(link) => link,
                None => return false,
            },
        }
        .to_lowercase();
        self.patterns
            .iter()
            .any(|p| haystack.contains(p.to_lowercase().as_str()))
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TrustScorer {
    pub rules: Vec<ScoreRule>,
    /// Points per title character.
    pub length_weight: f64,
}

impl Default for TrustScorer {
    fn default() -> Self {
        Self {
            rules: vec![
                ScoreRule::new("aggregator_hosted", Field::Link, 10.0, &["n.news.naver.com"]),
                ScoreRule::new(
                    "national_outlet",
                    Field::OriginalLink,
                    5.0,
                    &[
                        "yna.co.kr",
                        "newsis.com",
                        "news1.kr",
                        "nocutnews.co.kr",
                        "kbs.co.kr",
                        "mbc.com",
                        "sbs.co.kr",
                        "ytn.co.kr",
                    ],
                ),
                ScoreRule::new(
                    "regional_outlet",
                    Field::OriginalLink,
                    5.0,
                    &["inews365", "ccdailynews", "jbnews", "cctoday", "chungbuk"],
                ),
            ],
            length_weight: 0.1,
        }
    }
}

impl TrustScorer {
    /// Sum of all matching rule weights plus the title-length bonus.
    ///
    /// Title length is counted in characters, not bytes.
    pub fn score(&self, ctx: &ScoreContext<'_>) -> f64 {
        let rules: f64 = self
            .rules
            .iter()
            .filter(|rule| rule.matches(ctx))
            .map(|rule| rule.weight)
            .sum();
        #[allow(clippy::cast_precision_loss)]
        let length = ctx.title.chars().count() as f64;
        rules + length * self.length_weight
    }

    /// Names of the rules that fire for `ctx`, for debug logging.
    pub fn matched_rules<'s>(&'s self, ctx: &ScoreContext<'_>) -> Vec<&'s str> {
        self.rules
            .iter()
            .filter(|rule| rule.matches(ctx))
            .map(|rule| rule.name.as_str())
            .collect()
    }
}
