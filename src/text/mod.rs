// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text pipeline: raw place-name text to canonical tokens.
//!
//! ```text
//! "Пр-т  Мира, 5"  ──normalize──▶  "проспект  мира, 5"  ──tokenize──▶  [проспект, мира, 5]
//! ```
//!
//! Everything downstream compares code points, never bytes, so tokens are
//! carried as [`UniString`].

mod delimiters;
mod normalize;
mod tokenize;

pub use delimiters::{Delimiters, SearchDelimiters};
pub use normalize::{
    normalize_and_simplify, normalize_and_simplify_utf8, preprocess_before_tokenization,
};
pub use tokenize::{
    drop_last_token, for_each_normalized_token, normalize_and_tokenize,
    normalize_and_tokenize_utf8, normalize_and_tokenize_with, tokenize,
    tokenize_and_check_last_is_prefix, tokenize_str_and_check_last_is_prefix, Tokens,
};

/// A canonical token or normalized string: a sequence of code points.
pub type UniString = Vec<char>;

/// UTF-8 re-encoding of a code-point sequence.
pub fn to_utf8(s: &[char]) -> String {
    s.iter().collect()
}

/// Code points of a UTF-8 string, without any normalization.
pub fn to_uni_string(s: &str) -> UniString {
    s.chars().collect()
}
