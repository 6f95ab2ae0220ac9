// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Brute-force oracles shared by unit and integration tests.
//!
//! This module is always compiled but hidden from documentation. Each oracle
//! states the acceptance rule of [`crate::LevenshteinDfa`] directly in terms
//! of edit distance, with no automaton involved.

#![doc(hidden)]

use crate::fuzzy::levenshtein_distance;

/// Distance from `input` to the closest prefix of `reference`.
pub fn prefix_edit_distance(input: &[char], reference: &[char]) -> usize {
    (0..=reference.len())
        .map(|end| levenshtein_distance(input, &reference[..end]))
        .min()
        .unwrap_or(0)
}

/// Options mirrored from [`crate::LevenshteinDfaBuilder`].
#[derive(Debug, Clone, Default)]
pub struct OracleOptions {
    pub prefix_mode: bool,
    pub exact_prefix: usize,
    pub misprints: Vec<(char, char)>,
}

/// Reference acceptance: the distance an automaton built from
/// (`reference`, `max_errors`, `options`) should report for `input`, or
/// `None` if it should reject.
pub fn oracle_distance(
    input: &[char],
    reference: &[char],
    max_errors: usize,
    options: &OracleOptions,
) -> Option<usize> {
    let exact = options.exact_prefix.min(reference.len());
    let is_misprint = |a: char, b: char| {
        options
            .misprints
            .iter()
            .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
    };

    // Aligned one-to-one over the exact prefix; returns the misprint cost.
    let aligned_cost = |len: usize| -> Option<usize> {
        let mut cost = 0;
        for (&a, &b) in input[..len].iter().zip(&reference[..len]) {
            if a == b {
                continue;
            }
            if is_misprint(a, b) {
                cost += 1;
            } else {
                return None;
            }
        }
        Some(cost)
    };

    if input.len() < exact {
        if !options.prefix_mode {
            return None;
        }
        return aligned_cost(input.len()).filter(|&cost| cost <= max_errors);
    }

    let cost = aligned_cost(exact)?;
    let rest = &input[exact..];
    let distance = if options.prefix_mode {
        (exact..=reference.len())
            .map(|end| levenshtein_distance(rest, &reference[exact..end]))
            .min()
            .unwrap_or(0)
    } else {
        levenshtein_distance(rest, &reference[exact..])
    };

    Some(cost + distance).filter(|&total| total <= max_errors)
}

/// Every string over `alphabet` with length at most `max_len`.
pub fn all_strings(alphabet: &[char], max_len: usize) -> Vec<Vec<char>> {
    let mut result = vec![Vec::new()];
    let mut frontier = vec![Vec::new()];
    for _ in 0..max_len {
        let mut next = Vec::with_capacity(frontier.len() * alphabet.len());
        for prefix in &frontier {
            for &c in alphabet {
                let mut s = prefix.clone();
                s.push(c);
                next.push(s);
            }
        }
        result.extend(next.iter().cloned());
        frontier = next;
    }
    result
}
