//! Character-level headline similarity.
//!
//! Headlines are compared as character sequences after stripping whitespace,
//! commas and quote marks, so spacing differences ("도로 공사" vs "도로공사")
//! do not count. The score is the Ratcliff/Obershelp matching ratio
//! `2 * M / (len(a) + len(b))`, where `M` is the number of characters covered
//! by recursively found longest common blocks.

/// Characters ignored when comparing headlines, besides whitespace.
const NOISE: &[char] = &[',', '\'', '"'];

fn strip_noise(title: &str) -> Vec<char> {
    title
        .chars()
        .filter(|c| !c.is_whitespace() && !NOISE.contains(c))
        .collect()
}

/// Similarity in `[0, 1]`. Symmetric; identical titles score `1.0`.
#[allow(clippy::cast_precision_loss)]
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = strip_noise(a);
    let b = strip_noise(b);
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    // Block matching can depend on argument order; fix one.
    let (first, second) = if a <= b { (&a, &b) } else { (&b, &a) };
    let matched = matching_chars(first, second);
    (2 * matched) as f64 / total as f64
}

/// Total length of the matching blocks between `a` and `b`.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, k) = longest_match(a, b, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        matched += k;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            pending.push((i + k, ahi, j + k, bhi));
        }
    }
    matched
}

/// Longest common block in `a[alo..ahi]` and `b[blo..bhi]` as `(i, j, len)`.
///
/// Ties go to the block starting earliest in `a`, then earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_k) = (alo, blo, 0);
    // run[j - blo] = length of the common run ending at a[i - 1], b[j - 1]
    let width = bhi - blo;
    let mut prev = vec![0usize; width + 1];
    let mut curr = vec![0usize; width + 1];
    for i in alo..ahi {
        for j in blo..bhi {
            let col = j - blo + 1;
            curr[col] = if a[i] == b[j] { prev[col - 1] + 1 } else { 0 };
            let k = curr[col];
            if k > best_k {
                best_i = i + 1 - k;
                best_j = j + 1 - k;
                best_k = k;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    (best_i, best_j, best_k)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn identical_titles_score_one() {
        for title in ["충북 청주 도로 통제", "a", "  교통 , 정체  "] {
            assert!(approx(similarity(title, title), 1.0), "{title:?}");
        }
    }

    #[test]
    fn spacing_and_punctuation_are_ignored() {
        assert!(approx(
            similarity("충북 청주, \"도로 공사\"", "충북청주 '도로공사'"),
            1.0
        ));
    }

    #[test]
    fn disjoint_titles_score_zero() {
        assert!(approx(similarity("도로 통제", "축하 행사"), 0.0));
        assert!(approx(similarity("abc", ""), 0.0));
    }

    #[test]
    fn both_empty_is_one() {
        assert!(approx(similarity("", " , "), 1.0));
    }

    #[test]
    fn ratio_matches_matching_blocks() {
        // "abcd" vs "bcde": one block "bcd" -> 2*3/8
        assert!(approx(similarity("abcd", "bcde"), 0.75));
        // "충북청주도로공사로우회안내" (13) vs "충북청주도로공사우회안내합니다" (15):
        // blocks "충북청주도로공사" (8) + "우회안내" (4) -> 24/28
        let s = similarity(
            "충북 청주 도로 공사로 우회 안내",
            "충북 청주 도로공사 우회 안내합니다",
        );
        assert!(approx(s, 24.0 / 28.0), "got {s}");
    }

    #[test]
    fn recursion_covers_both_sides() {
        // Longest block "XYZ" leaves "abQ"/"ab" on the left and "Rcd"/"cd" on
        // the right; each side adds a 2-char block -> 2*7/16.
        assert!(approx(similarity("abXYZcd", "abQXYZRcd"), 14.0 / 16.0));
    }

    #[test]
    fn symmetric() {
        let pairs = [
            ("청주 도로 통제 안내", "청주시 도로 전면 통제"),
            ("abcabc", "cbacba"),
            ("하이패스 차로 확대", "하이패스 단말기 교체"),
            ("tide", "diet"),
        ];
        for (a, b) in pairs {
            assert!(approx(similarity(a, b), similarity(b, a)), "{a:?} / {b:?}");
        }
    }

    #[test]
    fn bounded() {
        let s = similarity("충북 교통 사고 다발 구간", "교통 사고 줄이기 캠페인");
        assert!((0.0..=1.0).contains(&s));
    }
}
