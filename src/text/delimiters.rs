// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Which code points split text into tokens.

/// Classifies a single code point as a token separator.
///
/// Implemented for any `Fn(char) -> bool`, so tests and locale variants can
/// pass a closure instead of a dedicated type.
pub trait Delimiters {
    fn is_delimiter(&self, c: char) -> bool;
}

impl<F> Delimiters for F
where
    F: Fn(char) -> bool,
{
    fn is_delimiter(&self, c: char) -> bool {
        self(c)
    }
}

/// Default policy for search queries and indexed names: whitespace, ASCII
/// punctuation and the typographic punctuation common in addresses.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchDelimiters;

impl Delimiters for SearchDelimiters {
    fn is_delimiter(&self, c: char) -> bool {
        c.is_whitespace()
            || c.is_ascii_punctuation()
            || matches!(
                c,
                '«' | '»'
                    | '„'
                    | '“'
                    | '”'
                    | '‘'
                    | '’'
                    | '‹'
                    | '›'
                    | '…'
                    | '‐'
                    | '‑'
                    | '–'
                    | '—'
                    | '№'
                    | '·'
                    | '¡'
                    | '¿'
                    | '、'
                    | '。'
                    | '，'
            )
    }
}
