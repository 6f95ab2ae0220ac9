// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Compact keys for grouping street names.

use super::synonyms::StreetSynonyms;
use crate::text::{normalize_and_simplify, UniString};

/// Word boundaries inside a street name. "ул." must split off its dot to be
/// recognized as a synonym.
const STREET_TOKEN_SEPARATORS: [char; 5] = ['\t', ' ', '-', ',', '.'];

/// Normalized street name with word boundaries removed, optionally without
/// its street-type words.
///
/// "улица Ленина" and "Ленина улица" both key to "ленина" when synonyms are
/// ignored. If every word is a synonym the whole normalized name is returned,
/// so a key is empty only for an empty name.
pub fn street_name_as_key(
    name: &str,
    synonyms: &StreetSynonyms,
    ignore_street_synonyms: bool,
) -> UniString {
    if name.is_empty() {
        return UniString::new();
    }

    let mut key = UniString::new();
    for part in name.split(STREET_TOKEN_SEPARATORS).filter(|part| !part.is_empty()) {
        let normalized = normalize_and_simplify(part);
        if !ignore_street_synonyms || !synonyms.is_synonym(&normalized) {
            key.extend(normalized);
        }
    }

    if key.is_empty() {
        normalize_and_simplify(name)
    } else {
        key
    }
}
