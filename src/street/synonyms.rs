// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Street-type synonym dictionary and classifier.
//!
//! Entries are stored normalized, so lookups take tokens straight from the
//! tokenizer. Misprint lookups walk one prebuilt Levenshtein automaton per
//! entry; the automata are built once with the dictionary and reused for
//! every token.

use std::collections::BTreeSet;
use std::ops::Bound;
use std::path::Path;
use std::sync::LazyLock;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fuzzy::{
    max_errors_for_token, LevenshteinDfa, LevenshteinDfaBuilder, MAX_SUPPORTED_ERRORS,
};
use crate::text::{normalize_and_simplify, UniString};

/// Most misprints tolerated against a dictionary entry.
///
/// Entries shorter than the length policy's first threshold match exactly
/// only; a looser budget would turn ordinary name words into street types.
pub const MISPRINT_BUDGET: usize = 1;

const _: () = assert!(MISPRINT_BUDGET <= MAX_SUPPORTED_ERRORS);

/// Leading entry code points a prefix token must match exactly before
/// misprints are considered. Without it every one-letter token would be
/// within one edit of the empty prefix.
const PREFIX_EXACT_LEN: usize = 1;

/// Built-in street types: English and Russian, full forms and abbreviations.
/// Stored un-normalized; [`StreetSynonyms::new`] normalizes them.
static DEFAULT_SYNONYMS: &[&str] = &[
    // English
    "street", "st", "str", "avenue", "ave", "av", "road", "rd", "boulevard", "blvd", "lane",
    "ln", "drive", "dr", "court", "ct", "place", "pl", "square", "sq", "highway", "hwy",
    "embankment", "alley", "terrace", "ter", "way", "parkway", "pkwy", "crescent", "cres",
    "close", "circle", "cir", "row", "passage", "quay",
    // Russian
    "улица", "ул", "проспект", "пр", "переулок", "пер", "проезд", "набережная", "наб",
    "площадь", "пл", "шоссе", "ш", "бульвар", "бул", "тупик", "туп", "аллея", "линия",
    "спуск", "тракт", "микрорайон", "мкр",
];

static DEFAULT: LazyLock<StreetSynonyms> =
    LazyLock::new(|| StreetSynonyms::new(DEFAULT_SYNONYMS.iter().copied()).with_locale("en,ru"));

/// Shared built-in dictionary.
pub fn default_street_synonyms() -> &'static StreetSynonyms {
    &DEFAULT
}

/// How a token relates to the street-type dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SynonymKind {
    NotSynonym,
    /// Matches an entry (or, for prefix tokens, starts one) exactly.
    Exact,
    /// Matches an entry within [`MISPRINT_BUDGET`] edits.
    Misprint,
}

impl SynonymKind {
    pub fn is_synonym(self) -> bool {
        !matches!(self, SynonymKind::NotSynonym)
    }
}

/// On-disk dictionary format.
///
/// ```json
/// { "locale": "de", "synonyms": ["strasse", "str", "weg", "platz"] }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DictionaryFile {
    #[serde(default)]
    pub locale: Option<String>,
    pub synonyms: Vec<String>,
}

/// A closed set of street-type words with exact, prefix and fuzzy lookups.
#[derive(Debug, Clone)]
pub struct StreetSynonyms {
    locale: Option<String>,
    words: BTreeSet<UniString>,
    misprint_budget: usize,
    automata: Vec<LevenshteinDfa>,
    prefix_automata: Vec<LevenshteinDfa>,
}

impl StreetSynonyms {
    /// Builds a dictionary with the default [`MISPRINT_BUDGET`].
    ///
    /// Words are normalized on insertion; words that normalize to nothing are
    /// skipped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = normalize_words(words);
        let (automata, prefix_automata) = build_automata(&words, MISPRINT_BUDGET);
        Self {
            locale: None,
            words,
            misprint_budget: MISPRINT_BUDGET,
            automata,
            prefix_automata,
        }
    }

    /// Builds a dictionary with a custom misprint budget.
    ///
    /// The budget is a ceiling: short entries still get the smaller budget
    /// the length policy allows them.
    pub fn with_misprint_budget<I, S>(words: I, misprint_budget: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if misprint_budget > MAX_SUPPORTED_ERRORS {
            return Err(Error::InvalidBudget {
                budget: misprint_budget,
                max: MAX_SUPPORTED_ERRORS,
            });
        }
        let words = normalize_words(words);
        let (automata, prefix_automata) = build_automata(&words, misprint_budget);
        Ok(Self {
            locale: None,
            words,
            misprint_budget,
            automata,
            prefix_automata,
        })
    }

    /// Built-in English and Russian street types.
    pub fn builtin() -> Self {
        default_street_synonyms().clone()
    }

    pub fn from_dictionary(file: DictionaryFile) -> Self {
        let synonyms = Self::new(&file.synonyms);
        debug!(
            "loaded {} street synonyms (locale {:?})",
            synonyms.len(),
            file.locale
        );
        match file.locale {
            Some(locale) => synonyms.with_locale(locale),
            None => synonyms,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: DictionaryFile = serde_json::from_str(json)?;
        Ok(Self::from_dictionary(file))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn misprint_budget(&self) -> usize {
        self.misprint_budget
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Normalized entries in code-point order.
    pub fn words(&self) -> impl Iterator<Item = &[char]> {
        self.words.iter().map(Vec::as_slice)
    }

    /// Exact membership. `token` must already be normalized.
    pub fn is_synonym(&self, token: &[char]) -> bool {
        self.words.contains(token)
    }

    /// Does some entry start with `token`?
    pub fn is_synonym_prefix(&self, token: &[char]) -> bool {
        if token.is_empty() {
            return false;
        }
        // Entries starting with `token` sort contiguously right after it.
        self.words
            .range::<[char], _>((Bound::Included(token), Bound::Unbounded))
            .next()
            .is_some_and(|word| word.starts_with(token))
    }

    /// Is `token` within the misprint budget of some entry?
    pub fn is_synonym_with_misprints(&self, token: &[char]) -> bool {
        self.is_synonym(token) || self.automata.iter().any(|dfa| dfa.accepts(token))
    }

    /// Is `token` within the misprint budget of a prefix of some entry?
    ///
    /// The first code point must match exactly.
    pub fn is_synonym_prefix_with_misprints(&self, token: &[char]) -> bool {
        if token.is_empty() {
            return false;
        }
        self.is_synonym_prefix(token) || self.prefix_automata.iter().any(|dfa| dfa.accepts(token))
    }

    /// Classifies a complete token.
    pub fn classify(&self, token: &[char], allow_misprints: bool) -> SynonymKind {
        self.classify_with_prefix(token, false, allow_misprints)
    }

    /// Classifies a token that may still be incomplete.
    ///
    /// With `is_prefix`, starting an entry counts the same as matching it.
    pub fn classify_with_prefix(
        &self,
        token: &[char],
        is_prefix: bool,
        allow_misprints: bool,
    ) -> SynonymKind {
        if self.is_synonym(token) || (is_prefix && self.is_synonym_prefix(token)) {
            return SynonymKind::Exact;
        }
        if allow_misprints
            && (self.is_synonym_with_misprints(token)
                || (is_prefix && self.is_synonym_prefix_with_misprints(token)))
        {
            return SynonymKind::Misprint;
        }
        SynonymKind::NotSynonym
    }
}

impl Default for StreetSynonyms {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize_words<I, S>(words: I) -> BTreeSet<UniString>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| normalize_and_simplify(word.as_ref().trim()))
        .filter(|word| !word.is_empty())
        .collect()
}

fn prefix_builder(word: &[char], budget: usize) -> LevenshteinDfaBuilder {
    LevenshteinDfaBuilder::new(word, budget)
        .prefix_mode(true)
        .exact_prefix(PREFIX_EXACT_LEN)
}

/// Callers check `budget` against `MAX_SUPPORTED_ERRORS`. Each entry gets
/// at most what the length policy allows, so a one-letter entry like "ш"
/// never swallows every one-letter token.
fn build_automata(
    words: &BTreeSet<UniString>,
    budget: usize,
) -> (Vec<LevenshteinDfa>, Vec<LevenshteinDfa>) {
    words
        .iter()
        .map(|word| {
            let budget = budget.min(max_errors_for_token(word));
            (
                LevenshteinDfaBuilder::new(word, budget).compile(),
                prefix_builder(word, budget).compile(),
            )
        })
        .unzip()
}
