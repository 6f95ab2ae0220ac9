// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Splitting normalized text into tokens.
//!
//! Tokens are maximal runs of non-delimiter code points. Queries also need to
//! know whether the user stopped mid-word: "lenina st" should treat "st" as a
//! prefix ("street", "station", ...), while "lenina st " should not.

use std::iter::FusedIterator;

use super::delimiters::{Delimiters, SearchDelimiters};
use super::normalize::normalize_and_simplify;
use super::UniString;

/// Lazy iterator over the tokens of a code-point slice.
///
/// Borrows the text and the delimiter policy. Clones are independent cursors;
/// calling [`tokenize`] again restarts from the beginning.
pub struct Tokens<'a, D: ?Sized> {
    text: &'a [char],
    pos: usize,
    delimiters: &'a D,
}

impl<D: ?Sized> Clone for Tokens<'_, D> {
    fn clone(&self) -> Self {
        Self {
            text: self.text,
            pos: self.pos,
            delimiters: self.delimiters,
        }
    }
}

impl<'a, D: Delimiters + ?Sized> Iterator for Tokens<'a, D> {
    type Item = &'a [char];

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.text;
        while self.pos < text.len() && self.delimiters.is_delimiter(text[self.pos]) {
            self.pos += 1;
        }
        if self.pos == text.len() {
            return None;
        }

        let start = self.pos;
        while self.pos < text.len() && !self.delimiters.is_delimiter(text[self.pos]) {
            self.pos += 1;
        }
        Some(&text[start..self.pos])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.text.len() - self.pos;
        (0, Some(remaining.div_ceil(2)))
    }
}

impl<D: Delimiters + ?Sized> FusedIterator for Tokens<'_, D> {}

/// Tokens of `text`, left to right, skipping delimiter runs.
pub fn tokenize<'a, D: Delimiters + ?Sized>(text: &'a [char], delimiters: &'a D) -> Tokens<'a, D> {
    Tokens {
        text,
        pos: 0,
        delimiters,
    }
}

/// Collects the tokens of `text` and reports whether the last one is a prefix.
///
/// The last token is a prefix when the text is non-empty and does not end on
/// a delimiter, i.e. the user may still be typing it.
pub fn tokenize_and_check_last_is_prefix<D: Delimiters + ?Sized>(
    text: &[char],
    delimiters: &D,
) -> (Vec<UniString>, bool) {
    let tokens = tokenize(text, delimiters).map(<[char]>::to_vec).collect();
    let is_prefix = text.last().is_some_and(|&c| !delimiters.is_delimiter(c));
    (tokens, is_prefix)
}

/// [`tokenize_and_check_last_is_prefix`] on raw text, normalizing first.
pub fn tokenize_str_and_check_last_is_prefix<D: Delimiters + ?Sized>(
    text: &str,
    delimiters: &D,
) -> (Vec<UniString>, bool) {
    tokenize_and_check_last_is_prefix(&normalize_and_simplify(text), delimiters)
}

/// Normalizes `text` and splits it with the default [`SearchDelimiters`].
pub fn normalize_and_tokenize(text: &str) -> Vec<UniString> {
    normalize_and_tokenize_with(text, &SearchDelimiters)
}

/// Normalizes `text` and splits it with a custom delimiter policy.
pub fn normalize_and_tokenize_with<D: Delimiters + ?Sized>(
    text: &str,
    delimiters: &D,
) -> Vec<UniString> {
    let normalized = normalize_and_simplify(text);
    tokenize(&normalized, delimiters).map(<[char]>::to_vec).collect()
}

/// [`normalize_and_tokenize`] with every token re-encoded as UTF-8.
pub fn normalize_and_tokenize_utf8(text: &str) -> Vec<String> {
    let normalized = normalize_and_simplify(text);
    tokenize(&normalized, &SearchDelimiters)
        .map(|token| token.iter().collect())
        .collect()
}

/// Calls `f` for each normalized token of `text`, without collecting.
pub fn for_each_normalized_token<F: FnMut(&[char])>(text: &str, mut f: F) {
    let normalized = normalize_and_simplify(text);
    tokenize(&normalized, &SearchDelimiters).for_each(|token| f(token));
}

/// Chops the trailing (prefix) token off a raw query.
///
/// Everything up to and including the last delimiter is kept, so a query that
/// already ends on a delimiter comes back unchanged.
pub fn drop_last_token(query: &str) -> &str {
    let delims = SearchDelimiters;
    let cut = query
        .char_indices()
        .rev()
        .find(|&(_, c)| delims.is_delimiter(c))
        .map_or(0, |(i, c)| i + c.len_utf8());
    &query[..cut]
}
