// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Normalization for every string that enters search: names at index time,
//! queries at lookup time. Both sides must agree byte for byte, so this is the
//! only place text gets simplified.
//!
//! - "Café" → "cafe"
//! - "Straße" → "strasse"
//! - "Ёлочная" → "елочная"
//! - "пр-т Мира" → "проспект мира"

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::delimiters::{Delimiters, SearchDelimiters};
use super::UniString;

/// Abbreviations that contain a delimiter and would otherwise be split into
/// meaningless fragments by the tokenizer.
const SPLIT_ABBREVIATIONS: &[(&str, &str)] = &[
    ("пр-т", "проспект"),
    ("пр-д", "проезд"),
    ("наб-я", "набережная"),
];

/// Normalize text for search: lowercase, strip diacritics, fold letters that
/// do not decompose, and expand split-prone abbreviations.
///
/// # Algorithm
///
/// 1. NFKD decompose, drop combining marks
/// 2. Lowercase
/// 3. NFKD again (lowercasing can reintroduce composed forms), drop marks
/// 4. Fold non-decomposing letters and typographic punctuation
/// 5. [`preprocess_before_tokenization`]
///
/// Idempotent: normalizing normalized text is a no-op.
pub fn normalize_and_simplify(text: &str) -> UniString {
    let lowered = text
        .nfkd()
        .filter(|&c| !is_combining_mark(c))
        .collect::<String>()
        .to_lowercase();

    let mut result = UniString::with_capacity(lowered.len());
    for c in lowered.nfkd().filter(|&c| !is_combining_mark(c)) {
        fold_char(c, &mut result);
    }

    preprocess_before_tokenization(&mut result);
    result
}

/// [`normalize_and_simplify`] re-encoded as UTF-8.
pub fn normalize_and_simplify_utf8(text: &str) -> String {
    normalize_and_simplify(text).into_iter().collect()
}

fn fold_char(c: char, out: &mut UniString) {
    match c {
        'ß' => out.extend(['s', 's']),
        'æ' => out.extend(['a', 'e']),
        'œ' => out.extend(['o', 'e']),
        'ø' => out.push('o'),
        'ł' => out.push('l'),
        'đ' => out.push('d'),
        'ı' => out.push('i'),
        '‘' | '’' | 'ʼ' | '`' => out.push('\''),
        '‐' | '‑' | '‒' | '–' | '—' => out.push('-'),
        _ => out.push(c),
    }
}

/// Replace whole-word abbreviations that tokenization would split with their
/// full form, e.g. "пр-т" → "проспект".
///
/// A match only counts when both ends sit on a string boundary or a
/// delimiter, so "пр-т" inside a longer word is left alone.
pub fn preprocess_before_tokenization(query: &mut UniString) {
    let delims = SearchDelimiters;

    for (abbreviation, expansion) in SPLIT_ABBREVIATIONS {
        let from: Vec<char> = abbreviation.chars().collect();
        let to: Vec<char> = expansion.chars().collect();

        let mut start = 0;
        while start + from.len() <= query.len() {
            let end = start + from.len();
            let bounded = (start == 0 || delims.is_delimiter(query[start - 1]))
                && (end == query.len() || delims.is_delimiter(query[end]));

            if bounded && query[start..end] == from[..] {
                query.splice(start..end, to.iter().copied());
                start += to.len();
            } else {
                start += 1;
            }
        }
    }
}
