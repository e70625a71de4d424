//! Similarity scoring between a typed fragment and a candidate string.
//!
//! Two strategies share the same [0, 100] contract. The reference formula
//! normalizes Damerau-Levenshtein distance (optimal string alignment) by
//! the longer input; the matching-block ratio reproduces the scorer the
//! host app shipped with before the engine moved to Rust. Both fold case
//! first, so "PYTHON" and "python" are interchangeable everywhere.

/// Case-fold for comparison. Unicode-aware lowercasing.
pub(crate) fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// Similarity score in [0, 100] between a query and a candidate.
///
/// Case-insensitive. Scores exactly 100 when the folded strings are equal
/// and degrades with edit distance normalized by the longer folded length:
/// `100 * (1 - distance / longest)`, rounded to the nearest integer.
/// Insertions, deletions, substitutions, and adjacent transpositions each
/// count as a single edit.
///
/// Total over all inputs. If either folded string is empty the score is
/// 100 when both are, otherwise 0, so an empty query never "matches" a
/// real candidate.
pub fn score(query: &str, candidate: &str) -> u8 {
    score_folded(&fold(query), &fold(candidate))
}

/// [`score`] over inputs that are already case-folded.
///
/// The ranker folds the query once per call and memoizes candidate folds
/// per corpus snapshot, so the per-candidate hot path never re-lowercases.
pub(crate) fn score_folded(query: &str, candidate: &str) -> u8 {
    let query_len = query.chars().count();
    let candidate_len = candidate.chars().count();

    let longest = query_len.max(candidate_len);
    if longest == 0 {
        return 100;
    }
    if query_len == 0 || candidate_len == 0 {
        return 0;
    }

    normalize(osa_distance(query, candidate), longest)
}

/// Legacy matching-block similarity in [0, 100].
///
/// Reproduces the ratio the host app scored with historically:
/// `100 * 2 * lcs / (len_query + len_candidate)`, rounded. Same case
/// folding, empty-input edges, symmetry, and totality as [`score`].
/// Selectable per ranker for call sites whose saved thresholds were tuned
/// against the old scorer.
pub fn block_ratio(query: &str, candidate: &str) -> u8 {
    block_ratio_folded(&fold(query), &fold(candidate))
}

/// [`block_ratio`] over inputs that are already case-folded.
pub(crate) fn block_ratio_folded(query: &str, candidate: &str) -> u8 {
    let query_len = query.chars().count();
    let candidate_len = candidate.chars().count();

    let total = query_len + candidate_len;
    if total == 0 {
        return 100;
    }
    if query_len == 0 || candidate_len == 0 {
        return 0;
    }

    let matched = 2 * lcs_len(query, candidate);
    let ratio = 100.0 * matched as f64 / total as f64;
    ratio.round().clamp(0.0, 100.0) as u8
}

/// Map an edit distance onto the [0, 100] scale.
/// `distance <= longest` always holds, the clamp guards the cast.
fn normalize(distance: usize, longest: usize) -> u8 {
    let score = 100.0 * (1.0 - distance as f64 / longest as f64);
    score.round().clamp(0.0, 100.0) as u8
}

/// Damerau-Levenshtein edit distance (optimal string alignment).
/// Counts insertions, deletions, substitutions, and adjacent
/// transpositions each as 1 edit. Operates on `char`s so multi-byte input
/// cannot split a code point.
fn osa_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev2 = vec![0usize; n + 1];
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);

            if i >= 2
                && j >= 2
                && a_chars[i - 1] == b_chars[j - 2]
                && a_chars[i - 2] == b_chars[j - 1]
            {
                curr[j] = curr[j].min(prev2[j - 2] + 1);
            }
        }

        std::mem::swap(&mut prev2, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Length of the longest common subsequence, the matched-character total
/// the block ratio is built from.
fn lcs_len(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() || b_chars.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; b_chars.len() + 1];
    let mut curr = vec![0usize; b_chars.len() + 1];

    for &ac in &a_chars {
        for (j, &bc) in b_chars.iter().enumerate() {
            curr[j + 1] = if ac == bc {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── osa_distance tests ───────────────────────────────────────

    #[test]
    fn test_distance_exact() {
        assert_eq!(osa_distance("hello", "hello"), 0);
    }

    #[test]
    fn test_distance_one_deletion() {
        assert_eq!(osa_distance("riversde", "riverside"), 1);
    }

    #[test]
    fn test_distance_one_substitution() {
        assert_eq!(osa_distance("hello", "hallo"), 1);
    }

    #[test]
    fn test_distance_one_insertion() {
        assert_eq!(osa_distance("pyton", "python"), 1);
    }

    #[test]
    fn test_distance_transposition() {
        // Adjacent swap counts as 1 edit with Damerau-Levenshtein
        assert_eq!(osa_distance("improt", "import"), 1);
        assert_eq!(osa_distance("teh", "the"), 1);
        assert_eq!(osa_distance("recieve", "receive"), 1);
    }

    #[test]
    fn test_distance_empty_strings() {
        assert_eq!(osa_distance("", ""), 0);
        assert_eq!(osa_distance("ab", ""), 2);
        assert_eq!(osa_distance("", "abc"), 3);
    }

    #[test]
    fn test_distance_unrelated() {
        // One shared char ("y") saves one edit against the length bound
        assert_eq!(osa_distance("xyz", "python"), 5);
    }

    #[test]
    fn test_distance_symmetric() {
        assert_eq!(osa_distance("ab", "ba"), 1);
        assert_eq!(osa_distance("pyton", "python"), osa_distance("python", "pyton"));
    }

    // ── score tests ──────────────────────────────────────────────

    #[test]
    fn test_score_identical() {
        assert_eq!(score("python", "python"), 100);
    }

    #[test]
    fn test_score_case_insensitive() {
        assert_eq!(score("PYTHON", "python"), 100);
        assert_eq!(score("Python", "pYTHON"), 100);
    }

    #[test]
    fn test_score_one_missing_char() {
        // distance 1 over length 6
        assert_eq!(score("pyton", "python"), 83);
    }

    #[test]
    fn test_score_transposition() {
        assert_eq!(score("improt", "import"), 83);
    }

    #[test]
    fn test_score_prefix_fragment() {
        // "pyt" needs 3 insertions to reach "python"
        assert_eq!(score("pyt", "python"), 50);
        assert_eq!(score("pyt", "pyside"), 33);
    }

    #[test]
    fn test_score_longer_query_than_candidate() {
        assert_eq!(score("pythonista", "python"), 60);
    }

    #[test]
    fn test_score_empty_inputs() {
        assert_eq!(score("", ""), 100);
        assert_eq!(score("python", ""), 0);
        assert_eq!(score("", "python"), 0);
    }

    #[test]
    fn test_score_whitespace_query_bottoms_out() {
        // No shared chars, distance equals the longer length
        assert_eq!(score("   ", "python"), 0);
    }

    #[test]
    fn test_score_symmetric() {
        assert_eq!(score("pyton", "python"), score("python", "pyton"));
        assert_eq!(score("a", "xyz"), score("xyz", "a"));
    }

    #[test]
    fn test_score_unicode() {
        assert_eq!(score("ÜBER", "über"), 100);
        // One substitution over 4 chars, not 5 bytes
        assert_eq!(score("über", "uber"), 75);
        assert_eq!(score("日本語", "日本"), 67);
    }

    #[test]
    fn test_score_never_panics_on_odd_input() {
        score("\u{0}", "a\u{0301}");
        score("🦀🦀🦀", "crab");
        score(&"x".repeat(500), "x");
    }

    // ── block_ratio tests ────────────────────────────────────────

    #[test]
    fn test_block_ratio_identical() {
        assert_eq!(block_ratio("python", "python"), 100);
    }

    #[test]
    fn test_block_ratio_case_insensitive() {
        assert_eq!(block_ratio("PYTHON", "python"), 100);
    }

    #[test]
    fn test_block_ratio_typo() {
        // 5 matched chars out of 11 total: 2 * 5 / 11
        assert_eq!(block_ratio("pyton", "python"), 91);
    }

    #[test]
    fn test_block_ratio_mostly_disjoint() {
        // Only "y"... "p" and "t" survive in order
        assert_eq!(block_ratio("xyz", "python"), 22);
    }

    #[test]
    fn test_block_ratio_empty_inputs() {
        assert_eq!(block_ratio("", ""), 100);
        assert_eq!(block_ratio("x", ""), 0);
        assert_eq!(block_ratio("", "x"), 0);
    }

    #[test]
    fn test_block_ratio_symmetric() {
        assert_eq!(block_ratio("pyton", "python"), block_ratio("python", "pyton"));
    }

    // ── lcs_len tests ────────────────────────────────────────────

    #[test]
    fn test_lcs_full_overlap() {
        assert_eq!(lcs_len("python", "python"), 6);
    }

    #[test]
    fn test_lcs_subsequence() {
        assert_eq!(lcs_len("pyton", "python"), 5);
    }

    #[test]
    fn test_lcs_disjoint() {
        assert_eq!(lcs_len("abc", "xyz"), 0);
    }
}
