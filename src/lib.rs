// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Misprint-tolerant tokenization for place-name search.
//!
//! Names and queries go through the same pipeline so that "Пр-т Мира",
//! "проспект мира" and "prospekt mirra" can meet in the index.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  text::     │────▶│  text::      │────▶│  street::filter  │──▶ sink(token, tag)
//! │  normalize  │     │  tokenize    │     │  (drop lone type │
//! └─────────────┘     └──────────────┘     │   words)         │
//!                            │             └──────────────────┘
//!                            ▼                      │
//!                     ┌──────────────┐     ┌──────────────────┐
//!                     │ fuzzy::budget│────▶│ street::synonyms │
//!                     │ (len → k)    │     │ (exact / misprint│
//!                     └──────────────┘     │  classification) │
//!                            │             └──────────────────┘
//!                            ▼                      ▲
//!                     ┌──────────────┐              │
//!                     │  fuzzy::dfa  │──────────────┘
//!                     │ (Levenshtein │
//!                     │  automaton)  │
//!                     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use toponym::{build_levenshtein_dfa, default_street_synonyms, filter_street_tokens,
//!               normalize_and_tokenize};
//!
//! let tokens = normalize_and_tokenize("Улица Ленина");
//! let kept = filter_street_tokens(&tokens, false, default_street_synonyms(), true);
//! assert_eq!(kept.len(), 1);
//!
//! let dfa = build_levenshtein_dfa(&kept[0].0);
//! assert!(dfa.accepts_str("ленена"));
//! ```

pub mod error;
pub mod fuzzy;
pub mod street;
pub mod testing;
pub mod text;

pub use error::{Error, Result};
pub use fuzzy::{
    build_levenshtein_dfa, build_prefix_levenshtein_dfa, levenshtein_distance, levenshtein_within,
    max_errors_for_length, max_errors_for_token, LevenshteinDfa, LevenshteinDfaBuilder, StateId,
    FIRST_LETTER_MISPRINTS, MAX_ERRORS_FOR_TOKEN, MAX_SUPPORTED_ERRORS,
};
pub use street::{
    default_street_synonyms, filter_street_tokens, street_name_as_key, DictionaryFile,
    FilterState, StreetSynonyms, StreetTokensFilter, SynonymKind, MISPRINT_BUDGET,
};
pub use text::{
    drop_last_token, for_each_normalized_token, normalize_and_simplify,
    normalize_and_simplify_utf8, normalize_and_tokenize, normalize_and_tokenize_utf8,
    normalize_and_tokenize_with, preprocess_before_tokenization, to_uni_string, to_utf8,
    tokenize, tokenize_and_check_last_is_prefix, tokenize_str_and_check_last_is_prefix,
    Delimiters, SearchDelimiters, Tokens, UniString,
};
