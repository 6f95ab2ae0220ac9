// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance over code points, with an early-exit bound.
//!
//! `|len(a) - len(b)|` is a lower bound on edit distance, so a length check
//! rejects most far-apart pairs before any DP row is allocated. This is the
//! reference metric the automaton in [`super::dfa`] must agree with.

/// Plain Levenshtein distance (insertions, deletions, substitutions, all cost 1).
pub fn levenshtein_distance(a: &[char], b: &[char]) -> usize {
    let mut dp: Vec<usize> = (0..=b.len()).collect();
    for (i, &ac) in a.iter().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }
    dp[b.len()]
}

/// Are these code-point sequences within `max` edits of each other?
///
/// Bails out as soon as the length difference or a whole DP row exceeds `max`.
pub fn levenshtein_within(a: &[char], b: &[char], max: usize) -> bool {
    if a.len().abs_diff(b.len()) > max {
        return false;
    }

    let mut dp: Vec<usize> = (0..=b.len()).collect();
    for (i, &ac) in a.iter().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, &bc) in b.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        if min_row > max {
            return false;
        }
    }

    dp[b.len()] <= max
}
