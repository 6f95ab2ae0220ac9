// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Street-type words: recognizing them and deciding when to drop them.
//!
//! Street names arrive with and without their type word ("улица Ленина",
//! "Ленина"), abbreviated or not ("ул", "улица"), sometimes misspelled
//! ("улитса"). Indexing and lookup must agree on which of those tokens carry
//! the name, so both sides run the same classifier and filter.

mod filter;
mod key;
mod synonyms;

pub use filter::{filter_street_tokens, FilterState, StreetTokensFilter};
pub use key::street_name_as_key;
pub use synonyms::{
    default_street_synonyms, DictionaryFile, StreetSynonyms, SynonymKind, MISPRINT_BUDGET,
};
