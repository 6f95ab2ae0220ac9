//! Property tests for the error-budget policy.

use proptest::prelude::*;
use toponym::{
    build_levenshtein_dfa, max_errors_for_length, max_errors_for_token, MAX_ERRORS_FOR_TOKEN,
    MAX_SUPPORTED_ERRORS,
};

proptest! {
    /// Property: the budget never exceeds the per-token maximum.
    #[test]
    fn prop_budget_is_bounded(length in 0usize..10_000) {
        prop_assert!(max_errors_for_length(length) <= MAX_ERRORS_FOR_TOKEN);
        prop_assert!(MAX_ERRORS_FOR_TOKEN <= MAX_SUPPORTED_ERRORS);
    }

    /// Property: longer tokens never get a smaller budget.
    #[test]
    fn prop_budget_is_monotonic(a in 0usize..64, b in 0usize..64) {
        let (short, long) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(max_errors_for_length(short) <= max_errors_for_length(long));
    }

    /// Property: the budget counts code points, not bytes.
    #[test]
    fn prop_budget_counts_code_points(word in "[а-я]{1,12}") {
        let chars: Vec<char> = word.chars().collect();
        prop_assert_eq!(max_errors_for_token(&chars), max_errors_for_length(chars.len()));
    }

    /// Property: the query automaton carries the policy budget.
    #[test]
    fn prop_query_automaton_uses_policy(word in "[a-z]{1,12}") {
        let chars: Vec<char> = word.chars().collect();
        prop_assert_eq!(build_levenshtein_dfa(&chars).max_errors(), max_errors_for_token(&chars));
    }
}

#[test]
fn budget_thresholds() {
    let expected = [0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2];
    for (length, &budget) in expected.iter().enumerate() {
        assert_eq!(max_errors_for_length(length), budget, "length {}", length);
    }
}
