// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: how many misprints to tolerate, and how to recognize them.
//!
//! Three pieces here: the error-budget policy (token length to edit distance),
//! a bounded Levenshtein for one-off comparisons, and a Levenshtein automaton
//! for matching one reference token against many candidates.

mod budget;
pub mod dfa;
mod levenshtein;

pub use budget::*;
pub use dfa::{
    build_levenshtein_dfa, build_prefix_levenshtein_dfa, LevenshteinDfa, LevenshteinDfaBuilder,
    StateId, FIRST_LETTER_MISPRINTS, MAX_SUPPORTED_ERRORS,
};
pub use levenshtein::*;
