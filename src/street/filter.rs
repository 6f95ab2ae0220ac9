// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Streaming filter that drops a lone street-type word.
//!
//! A street name usually carries one type word that is noise for matching:
//! ["улица", "ленина"] should index as ["ленина"]. But some names are made of
//! type words: ["улица", "набережная"] must stay as is. The filter holds the
//! first synonym back until the next token decides its fate.
//!
//! ```text
//!            synonym                         synonym: emit held, emit new
//!   Idle ─────────────▶ Holding(token) ────────────────────────────────▶ Idle
//!    │ ▲                   │
//!    │ └───────────────────┘ other: drop held, emit new
//!    └─ other: emit
//!
//!   finish() or drop: Holding(token) emits token
//! ```

use log::trace;

use super::synonyms::StreetSynonyms;
use crate::text::UniString;

/// Where the filter is between two tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterState<T> {
    Idle,
    /// A synonym seen with no successor yet.
    Holding { token: UniString, tag: T },
}

/// Filters one token stream, calling `callback(token, tag)` for every token it
/// keeps, in input order.
///
/// Tags are opaque and travel with their token. A trailing held synonym is
/// emitted by [`finish`](Self::finish), [`flush`](Self::flush), or when the
/// filter is dropped.
pub struct StreetTokensFilter<'a, T, F: FnMut(&[char], T)> {
    synonyms: &'a StreetSynonyms,
    callback: F,
    with_misprints: bool,
    state: FilterState<T>,
}

impl<'a, T, F> StreetTokensFilter<'a, T, F>
where
    F: FnMut(&[char], T),
{
    pub fn new(synonyms: &'a StreetSynonyms, callback: F, with_misprints: bool) -> Self {
        Self {
            synonyms,
            callback,
            with_misprints,
            state: FilterState::Idle,
        }
    }

    /// Feeds the next token. `is_prefix` marks a token the user may still be
    /// typing, which also counts as a synonym when it starts one.
    pub fn put(&mut self, token: &[char], is_prefix: bool, tag: T) {
        let is_synonym = self
            .synonyms
            .classify_with_prefix(token, is_prefix, self.with_misprints)
            .is_synonym();

        match std::mem::replace(&mut self.state, FilterState::Idle) {
            FilterState::Idle if is_synonym => {
                self.state = FilterState::Holding {
                    token: token.to_vec(),
                    tag,
                };
            }
            FilterState::Idle => (self.callback)(token, tag),
            FilterState::Holding {
                token: held,
                tag: held_tag,
            } => {
                if is_synonym {
                    (self.callback)(&held, held_tag);
                } else {
                    trace!(
                        "dropping lone street synonym {:?} before {:?}",
                        held.iter().collect::<String>(),
                        token.iter().collect::<String>()
                    );
                }
                (self.callback)(token, tag);
            }
        }
    }

    /// Emits a held synonym, if any. The stream may continue afterwards.
    pub fn flush(&mut self) {
        if let FilterState::Holding { token, tag } =
            std::mem::replace(&mut self.state, FilterState::Idle)
        {
            trace!(
                "flushing trailing street synonym {:?}",
                token.iter().collect::<String>()
            );
            (self.callback)(&token, tag);
        }
    }

    /// Ends the stream, emitting a held synonym.
    pub fn finish(mut self) {
        self.flush();
    }

    pub fn state(&self) -> &FilterState<T> {
        &self.state
    }
}

impl<T, F: FnMut(&[char], T)> Drop for StreetTokensFilter<'_, T, F> {
    fn drop(&mut self) {
        self.flush();
    }
}

/// Runs a whole token sequence through a fresh [`StreetTokensFilter`] and
/// returns the kept tokens tagged with their input positions.
pub fn filter_street_tokens(
    tokens: &[UniString],
    last_is_prefix: bool,
    synonyms: &StreetSynonyms,
    with_misprints: bool,
) -> Vec<(UniString, usize)> {
    let mut kept = Vec::with_capacity(tokens.len());
    let mut filter = StreetTokensFilter::new(
        synonyms,
        |token: &[char], position: usize| kept.push((token.to_vec(), position)),
        with_misprints,
    );
    for (position, token) in tokens.iter().enumerate() {
        let is_prefix = last_is_prefix && position + 1 == tokens.len();
        filter.put(token, is_prefix, position);
    }
    filter.finish();
    kept
}
