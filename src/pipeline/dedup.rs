//! Cross-query story deduplication and final ranking.

use itertools::Itertools;

use super::similarity::similarity;
use crate::models::Candidate;

/// What happened to a candidate offered to the [`Deduplicator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// No similar story yet; appended at the end.
    Appended,
    /// Outscored every similar member; took the first one's slot.
    /// `removed` counts further similar members dropped alongside.
    Replaced { removed: usize },
    /// A similar member scores at least as high.
    Discarded,
}

/// Owner of the set of distinct stories seen so far.
///
/// No two members ever have a title similarity above the threshold.
#[derive(Debug)]
pub struct Deduplicator {
    threshold: f64,
    unique: Vec<Candidate>,
}

impl Deduplicator {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            unique: Vec::new(),
        }
    }

    /// Merge one scored candidate into the set.
    ///
    /// The candidate only survives a collision if it strictly outscores every
    /// member it collides with. It then takes the slot of the earliest such
    /// member and the others are dropped, so the set never holds two versions
    /// of one story.
    pub fn offer(&mut self, candidate: Candidate) -> Offer {
        let similar: Vec<usize> = self
            .unique
            .iter()
            .positions(|member| similarity(&candidate.title, &member.title) > self.threshold)
            .collect();

        let Some(&slot) = similar.first() else {
            self.unique.push(candidate);
            return Offer::Appended;
        };

        if similar
            .iter()
            .any(|&idx| self.unique[idx].score >= candidate.score)
        {
            tracing::debug!(
                title = %candidate.title,
                score = candidate.score,
                "duplicate discarded"
            );
            return Offer::Discarded;
        }

        tracing::debug!(
            title = %candidate.title,
            replaced = %self.unique[slot].title,
            score = candidate.score,
            "duplicate replaced lower-scoring member"
        );
        self.unique[slot] = candidate;
        // Later indices first so earlier ones stay valid.
        for &idx in similar[1..].iter().rev() {
            self.unique.remove(idx);
        }
        Offer::Replaced {
            removed: similar.len() - 1,
        }
    }

    pub fn len(&self) -> usize {
        self.unique.len()
    }

    /// Members sorted by score, highest first, keeping at most `top_n`.
    /// Equal scores keep their insertion order.
    pub fn into_ranked(self, top_n: usize) -> Vec<Candidate> {
        self.unique
            .into_iter()
            .sorted_by(|a, b| b.score.total_cmp(&a.score))
            .take(top_n)
            .collect()
    }
}

/// Outcome of [`rank_unique`].
#[derive(Debug, Default, PartialEq)]
pub struct Ranking {
    pub ranked: Vec<Candidate>,
    /// Distinct stories before truncation.
    pub unique: usize,
    /// Candidates merged into another story.
    pub duplicates: usize,
}

/// Deduplicate a whole candidate batch and rank what survives.
///
/// Candidates are offered highest score first (stable, so ties keep their
/// arrival order). Every story is then represented by its best-scored
/// headline no matter which query reported it first.
pub fn rank_unique(candidates: Vec<Candidate>, threshold: f64, top_n: usize) -> Ranking {
    let mut dedup = Deduplicator::new(threshold);
    let mut duplicates = 0;
    for candidate in candidates
        .into_iter()
        .sorted_by(|a, b| b.score.total_cmp(&a.score))
    {
        match dedup.offer(candidate) {
            Offer::Appended => {}
            Offer::Replaced { removed } => duplicates += 1 + removed,
            Offer::Discarded => duplicates += 1,
        }
    }
    let unique = dedup.len();
    Ranking {
        ranked: dedup.into_ranked(top_n),
        unique,
        duplicates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 0.45;

    fn cand(title: &str, score: f64) -> Candidate {
        Candidate {
            title: title.to_string(),
            link: format!("https://example.com/{score}"),
            score,
        }
    }

    #[test]
    fn distinct_stories_are_appended() {
        let mut d = Deduplicator::new(THRESHOLD);
        assert_eq!(d.offer(cand("청주 도로 통제", 3.0)), Offer::Appended);
        assert_eq!(d.offer(cand("하이패스 단말기 교체 안내", 4.0)), Offer::Appended);
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn higher_score_wins_in_either_order() {
        let low = cand("충북 청주 도로 공사로 우회 안내", 7.2);
        let high = cand("충북 청주 도로공사 우회 안내합니다", 9.5);

        let mut d = Deduplicator::new(THRESHOLD);
        d.offer(low.clone());
        assert_eq!(d.offer(high.clone()), Offer::Replaced { removed: 0 });
        assert_eq!(d.into_ranked(10), vec![high.clone()]);

        let mut d = Deduplicator::new(THRESHOLD);
        d.offer(high.clone());
        assert_eq!(d.offer(low), Offer::Discarded);
        assert_eq!(d.into_ranked(10), vec![high]);
    }

    #[test]
    fn equal_score_keeps_first_seen() {
        let mut d = Deduplicator::new(THRESHOLD);
        let first = cand("청주 터널 야간 통제", 5.0);
        d.offer(first.clone());
        assert_eq!(d.offer(cand("청주 터널 야간 통제 안내", 5.0)), Offer::Discarded);
        assert_eq!(d.into_ranked(10), vec![first]);
    }

    #[test]
    fn replacement_keeps_position() {
        let mut d = Deduplicator::new(THRESHOLD);
        d.offer(cand("청주 도로 통제", 1.0));
        d.offer(cand("하이패스 단말기 교체", 1.0));
        d.offer(cand("청주 도로 통제 해제", 2.0));
        assert_eq!(d.unique[0].title, "청주 도로 통제 해제");
        assert_eq!(d.unique[1].title, "하이패스 단말기 교체");
    }

    #[test]
    fn replacement_absorbs_every_similar_member() {
        let mut d = Deduplicator::new(THRESHOLD);
        // Two unrelated members that are both similar to the incoming "bridge" title.
        d.offer(cand("aaaaaxyz", 1.0));
        d.offer(cand("bbbbbuvw", 2.0));
        assert_eq!(d.len(), 2);
        // "aaaaabbbbb" vs "aaaaaxyz": 2*5/18 = 0.56; vs "bbbbbuvw": 0.56
        assert_eq!(d.offer(cand("aaaaabbbbb", 3.0)), Offer::Replaced { removed: 1 });
        assert_eq!(d.len(), 1);
        assert_eq!(d.unique[0].title, "aaaaabbbbb");
    }

    #[test]
    fn bridge_loses_to_any_stronger_member() {
        let mut d = Deduplicator::new(THRESHOLD);
        d.offer(cand("aaaaaxyz", 1.0));
        d.offer(cand("bbbbbuvw", 5.0));
        assert_eq!(d.offer(cand("aaaaabbbbb", 3.0)), Offer::Discarded);
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn survivors_are_pairwise_distinct() {
        let titles = [
            ("충북 교통 사고 다발 구간 점검", 4.0),
            ("충북 교통사고 다발구간 점검 나서", 6.5),
            ("청주 도로 통제 안내", 3.1),
            ("청주시 도로 통제 안내", 8.0),
            ("오창 나들목 정체 극심", 2.2),
            ("하이패스 차로 확대 운영", 1.4),
            ("aaaaaxyz", 1.0),
            ("bbbbbuvw", 2.0),
            ("aaaaabbbbb", 3.0),
        ];
        let mut d = Deduplicator::new(THRESHOLD);
        for (title, score) in titles {
            d.offer(cand(title, score));
        }
        let survivors = d.into_ranked(usize::MAX);
        for (i, a) in survivors.iter().enumerate() {
            for b in &survivors[i + 1..] {
                assert!(
                    similarity(&a.title, &b.title) <= THRESHOLD,
                    "{:?} ~ {:?}",
                    a.title,
                    b.title
                );
            }
        }
    }

    #[test]
    fn ranking_sorts_and_truncates() {
        let mut d = Deduplicator::new(THRESHOLD);
        // Titles are pairwise disjoint, so all 15 survive.
        let alphabet: Vec<char> = "ABCDEFGHIJKLMNO".chars().collect();
        for (i, ch) in alphabet.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let score = ((i * 7) % 15) as f64;
            d.offer(cand(&ch.to_string().repeat(5), score));
        }
        assert_eq!(d.len(), 15);

        let ranked = d.into_ranked(10);
        assert_eq!(ranked.len(), 10);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        assert!((ranked[0].score - 14.0).abs() < 1e-9);
        assert!((ranked[9].score - 5.0).abs() < 1e-9);
    }

    #[test]
    fn ranking_is_stable_on_ties() {
        let mut d = Deduplicator::new(THRESHOLD);
        d.offer(cand("AAAA", 1.0));
        d.offer(cand("BBBB", 2.0));
        d.offer(cand("CCCC", 1.0));
        let titles: Vec<String> = d.into_ranked(10).into_iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["BBBB", "AAAA", "CCCC"]);
    }

    #[test]
    fn rank_unique_ignores_arrival_order() {
        // a~b and b~c are the same story, a and c are not.
        let a = cand("aaaaaxxx", 1.0);
        let b = cand("aaaaabbbbb", 2.0);
        let c = cand("xbbbbbyyy", 3.0);
        let orders = [
            [&a, &b, &c],
            [&a, &c, &b],
            [&b, &a, &c],
            [&b, &c, &a],
            [&c, &a, &b],
            [&c, &b, &a],
        ];
        for order in orders {
            let batch: Vec<Candidate> = order.iter().map(|&c| c.clone()).collect();
            let ranking = rank_unique(batch, THRESHOLD, 10);
            let titles: Vec<&str> = ranking.ranked.iter().map(|c| c.title.as_str()).collect();
            assert_eq!(titles, vec!["xbbbbbyyy", "aaaaaxxx"], "order {order:?}");
            assert_eq!(ranking.unique, 2);
            assert_eq!(ranking.duplicates, 1);
        }
    }

    #[test]
    fn rank_unique_keeps_first_seen_on_ties() {
        let first = cand("청주 터널 야간 통제", 5.0);
        let second = cand("청주 터널 야간 통제 안내", 5.0);
        let ranking = rank_unique(vec![first.clone(), second], THRESHOLD, 10);
        assert_eq!(ranking.ranked, vec![first]);
    }

    #[test]
    fn empty_set_ranks_to_nothing() {
        assert!(Deduplicator::new(THRESHOLD).into_ranked(10).is_empty());
    }
}
