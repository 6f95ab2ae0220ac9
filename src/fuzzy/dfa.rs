// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein automaton for a single reference token.
//!
//! Brute-force edit distance against every index term is O(|query| * |term|)
//! per term. A DFA built once per query token answers "within k edits?" in
//! one table lookup per input code point, and can be walked in lockstep with
//! a trie or FST of index terms so whole subtrees are pruned on rejection.
//!
//! # Construction
//!
//! NFA positions are `(offset, edits)` pairs: the reference has been consumed
//! up to `offset` at a cost of `edits`. A DFA state is the set of positions
//! reachable after some input, closed under deletions from the reference and
//! reduced by subsumption:
//!
//! ```text
//! (i, e) subsumes (j, f)  iff  e < f  and  |i - j| <= f - e
//! ```
//!
//! A subsumed position can never accept anything its subsumer would reject,
//! so dropping it keeps the language intact while bounding each state to
//! O(k^2) positions. States are interned by their position set, which gives
//! O(|reference| * f(k)) states in total.
//!
//! # Layout
//!
//! ```text
//! alphabet:    [c_0, c_1, ..., c_m-1]            sorted distinct code points
//! transitions: [state * (m + 1) + symbol]        symbol m = "any other char"
//! distances:   [state] -> Some(d) if accepting
//! ```
//!
//! State 0 is the start state and state 1 is the rejecting sink.
//!
//! # Cost
//!
//! Every state is stepped once per alphabet column, and the alphabet holds
//! each distinct reference code point. Construction is therefore
//! O(|reference| * |alphabet| * f(k)), which is quadratic for references
//! with no repeated letters. Street and place-name tokens are short, so the
//! table stays small; characteristic-vector symbols would make the width
//! independent of the reference, at the price of a per-step vector lookup.

use std::collections::{HashMap, VecDeque};

use log::debug;
use serde::{Deserialize, Serialize};

use super::budget::{max_errors_for_token, MAX_ERRORS_FOR_TOKEN};
use crate::error::{Error, Result};

/// Largest budget the builder accepts. State count grows quickly past this.
pub const MAX_SUPPORTED_ERRORS: usize = 3;

const _: () = assert!(MAX_ERRORS_FOR_TOKEN <= MAX_SUPPORTED_ERRORS);

/// Index of a state in a [`LevenshteinDfa`].
pub type StateId = u32;

const START_STATE: StateId = 0;
const REJECTING_STATE: StateId = 1;

/// First letters commonly confused when typing place names.
///
/// Used as 1-error substitutions inside the exact prefix of
/// [`build_levenshtein_dfa`]. Pairs are symmetric.
pub const FIRST_LETTER_MISPRINTS: &[(char, char)] = &[
    ('c', 'k'),
    ('c', 'q'),
    ('k', 'q'),
    ('e', 'i'),
    ('e', 'y'),
    ('i', 'y'),
    ('g', 'j'),
    ('s', 'z'),
    ('а', 'о'),
    ('е', 'и'),
    ('е', 'э'),
    ('б', 'п'),
    ('в', 'ф'),
    ('г', 'к'),
    ('д', 'т'),
    ('ж', 'ш'),
    ('з', 'с'),
];

/// Number of reference code points that must match exactly in
/// [`build_levenshtein_dfa`].
const SEARCH_EXACT_PREFIX: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct Position {
    offset: usize,
    edits: usize,
}

impl Position {
    fn new(offset: usize, edits: usize) -> Self {
        Self { offset, edits }
    }

    /// Inside the exact prefix only same-offset domination is sound: those
    /// positions cannot use insertions or deletions to catch up.
    fn subsumes(&self, other: &Position, exact_prefix: usize) -> bool {
        if self.edits >= other.edits {
            return false;
        }
        if self.offset == other.offset {
            return true;
        }
        self.offset >= exact_prefix && self.offset.abs_diff(other.offset) <= other.edits - self.edits
    }
}

/// Nondeterministic side of the construction: positions and their moves.
struct PositionNfa<'a> {
    reference: &'a [char],
    max_errors: usize,
    exact_prefix: usize,
    misprints: &'a [(char, char)],
}

impl PositionNfa<'_> {
    fn is_misprint(&self, expected: char, actual: char) -> bool {
        self.misprints
            .iter()
            .any(|&(a, b)| (a == expected && b == actual) || (a == actual && b == expected))
    }

    /// Adds every position reachable by deleting reference code points.
    fn expand(&self, positions: &[Position]) -> Vec<Position> {
        let mut expanded = positions.to_vec();
        for pos in positions {
            if pos.offset < self.exact_prefix {
                continue;
            }
            let room = (self.max_errors - pos.edits).min(self.reference.len() - pos.offset);
            for d in 1..=room {
                expanded.push(Position::new(pos.offset + d, pos.edits + d));
            }
        }
        expanded
    }

    fn close(&self, positions: &[Position]) -> Vec<Position> {
        let mut expanded = self.expand(positions);
        expanded.sort_unstable();
        expanded.dedup();
        expanded
            .iter()
            .filter(|&&pos| {
                !expanded
                    .iter()
                    .any(|other| other.subsumes(&pos, self.exact_prefix))
            })
            .copied()
            .collect()
    }

    fn initial(&self) -> Vec<Position> {
        self.close(&[Position::new(0, 0)])
    }

    /// `input` is `None` for a code point outside the automaton's alphabet.
    fn step(&self, state: &[Position], input: Option<char>) -> Vec<Position> {
        let n = self.reference.len();
        let mut next = Vec::new();

        for pos in self.expand(state) {
            let Position { offset, edits } = pos;

            if offset < self.exact_prefix {
                if let Some(c) = input {
                    let expected = self.reference[offset];
                    if expected == c {
                        next.push(Position::new(offset + 1, edits));
                    } else if edits < self.max_errors && self.is_misprint(expected, c) {
                        next.push(Position::new(offset + 1, edits + 1));
                    }
                }
                continue;
            }

            if offset < n && input == Some(self.reference[offset]) {
                next.push(Position::new(offset + 1, edits));
            }
            if edits < self.max_errors {
                // Insertion: input code point has no counterpart.
                next.push(Position::new(offset, edits + 1));
                // Substitution.
                if offset < n {
                    next.push(Position::new(offset + 1, edits + 1));
                }
            }
        }

        self.close(&next)
    }

    /// Smallest total edit count an accepting run could report from here.
    fn distance(&self, state: &[Position], prefix_mode: bool) -> Option<usize> {
        if prefix_mode {
            return state.iter().map(|pos| pos.edits).min();
        }
        let n = self.reference.len();
        state
            .iter()
            .filter(|pos| pos.offset >= self.exact_prefix)
            .map(|pos| pos.edits + (n - pos.offset))
            .filter(|&d| d <= self.max_errors)
            .min()
    }
}

/// Options for building a [`LevenshteinDfa`].
///
/// ```
/// use toponym::LevenshteinDfaBuilder;
///
/// let reference: Vec<char> = "avenue".chars().collect();
/// let dfa = LevenshteinDfaBuilder::new(&reference, 1)
///     .prefix_mode(true)
///     .build()
///     .unwrap();
/// assert!(dfa.accepts_str("aven"));
/// ```
#[derive(Debug, Clone)]
pub struct LevenshteinDfaBuilder {
    reference: Vec<char>,
    max_errors: usize,
    prefix_mode: bool,
    exact_prefix: usize,
    misprints: Vec<(char, char)>,
}

impl LevenshteinDfaBuilder {
    pub fn new(reference: &[char], max_errors: usize) -> Self {
        Self {
            reference: reference.to_vec(),
            max_errors,
            prefix_mode: false,
            exact_prefix: 0,
            misprints: Vec::new(),
        }
    }

    /// Accept inputs within budget of any prefix of the reference.
    ///
    /// This is the mode for the last query token while the user is still typing.
    pub fn prefix_mode(mut self, enabled: bool) -> Self {
        self.prefix_mode = enabled;
        self
    }

    /// Require the first `len` reference code points to align one-to-one with
    /// the input. Clamped to the reference length.
    pub fn exact_prefix(mut self, len: usize) -> Self {
        self.exact_prefix = len;
        self
    }

    /// Code-point pairs that may substitute for each other inside the exact
    /// prefix, at a cost of one error.
    pub fn allowed_misprints(mut self, pairs: &[(char, char)]) -> Self {
        self.misprints = pairs.to_vec();
        self
    }

    pub fn build(self) -> Result<LevenshteinDfa> {
        if self.max_errors > MAX_SUPPORTED_ERRORS {
            return Err(Error::InvalidBudget {
                budget: self.max_errors,
                max: MAX_SUPPORTED_ERRORS,
            });
        }
        Ok(self.compile())
    }

    /// Subset construction. Callers must have checked the budget.
    pub(crate) fn compile(self) -> LevenshteinDfa {
        let exact_prefix = self.exact_prefix.min(self.reference.len());
        let nfa = PositionNfa {
            reference: &self.reference,
            max_errors: self.max_errors,
            exact_prefix,
            misprints: &self.misprints,
        };

        let mut alphabet = self.reference.clone();
        for &expected in &self.reference[..exact_prefix] {
            for &(a, b) in &self.misprints {
                if a == expected {
                    alphabet.push(b);
                } else if b == expected {
                    alphabet.push(a);
                }
            }
        }
        alphabet.sort_unstable();
        alphabet.dedup();
        let width = alphabet.len() + 1;

        let start = nfa.initial();
        let mut states: Vec<Vec<Position>> = vec![start.clone(), Vec::new()];
        let mut ids: HashMap<Vec<Position>, StateId> = HashMap::new();
        ids.insert(start, START_STATE);
        ids.insert(Vec::new(), REJECTING_STATE);

        let mut transitions = vec![REJECTING_STATE; 2 * width];
        let mut queue = VecDeque::from([START_STATE]);

        while let Some(state_id) = queue.pop_front() {
            for symbol in 0..width {
                let input = alphabet.get(symbol).copied();
                let next = nfa.step(&states[state_id as usize], input);

                let next_id = if let Some(&id) = ids.get(&next) {
                    id
                } else {
                    let id = states.len() as StateId;
                    states.push(next.clone());
                    ids.insert(next, id);
                    transitions.extend(std::iter::repeat(REJECTING_STATE).take(width));
                    queue.push_back(id);
                    id
                };

                transitions[state_id as usize * width + symbol] = next_id;
            }
        }

        let distances = states
            .iter()
            .map(|state| nfa.distance(state, self.prefix_mode).map(|d| d as u8))
            .collect();

        debug!(
            "built Levenshtein DFA: reference length {}, max errors {}, prefix mode {}, {} states",
            self.reference.len(),
            self.max_errors,
            self.prefix_mode,
            states.len()
        );

        LevenshteinDfa {
            alphabet,
            transitions,
            distances,
            max_errors: self.max_errors,
            prefix_mode: self.prefix_mode,
        }
    }
}

/// Deterministic acceptor for every code-point sequence within a fixed edit
/// distance of one reference token.
///
/// Immutable once built; share it freely across threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevenshteinDfa {
    alphabet: Vec<char>,
    transitions: Vec<StateId>,
    distances: Vec<Option<u8>>,
    max_errors: usize,
    prefix_mode: bool,
}

impl LevenshteinDfa {
    /// Standard automaton: accepts exactly the strings within `max_errors`
    /// edits of `reference`.
    pub fn new(reference: &[char], max_errors: usize) -> Result<Self> {
        LevenshteinDfaBuilder::new(reference, max_errors).build()
    }

    /// Prefix-accepting automaton: accepts strings within `max_errors` edits
    /// of some prefix of `reference`.
    pub fn new_prefix(reference: &[char], max_errors: usize) -> Result<Self> {
        LevenshteinDfaBuilder::new(reference, max_errors)
            .prefix_mode(true)
            .build()
    }

    pub fn initial_state(&self) -> StateId {
        START_STATE
    }

    /// Transition on one input code point.
    #[inline]
    pub fn next(&self, state: StateId, c: char) -> StateId {
        let symbol = match self.alphabet.binary_search(&c) {
            Ok(index) => index,
            Err(_) => self.alphabet.len(),
        };
        self.transitions[state as usize * (self.alphabet.len() + 1) + symbol]
    }

    pub fn is_accepting(&self, state: StateId) -> bool {
        self.distances[state as usize].is_some()
    }

    /// No continuation from this state can ever be accepted.
    pub fn is_rejecting(&self, state: StateId) -> bool {
        state == REJECTING_STATE
    }

    /// Edit distance reported by an accepting state.
    ///
    /// In prefix mode this is the distance to the closest reference prefix.
    pub fn distance(&self, state: StateId) -> Option<usize> {
        self.distances[state as usize].map(usize::from)
    }

    /// Runs the automaton over `input`, stopping early on rejection.
    pub fn walk(&self, input: impl IntoIterator<Item = char>) -> StateId {
        let mut state = self.initial_state();
        for c in input {
            state = self.next(state, c);
            if self.is_rejecting(state) {
                break;
            }
        }
        state
    }

    pub fn accepts(&self, input: &[char]) -> bool {
        self.is_accepting(self.walk(input.iter().copied()))
    }

    pub fn accepts_str(&self, input: &str) -> bool {
        self.is_accepting(self.walk(input.chars()))
    }

    pub fn num_states(&self) -> usize {
        self.distances.len()
    }

    pub fn max_errors(&self) -> usize {
        self.max_errors
    }

    pub fn is_prefix_mode(&self) -> bool {
        self.prefix_mode
    }

    /// Distinct code points with their own transition column.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }
}

/// Automaton for a query token as the search engine uses it: budget from
/// [`max_errors_for_token`], first letter fixed up to [`FIRST_LETTER_MISPRINTS`].
pub fn build_levenshtein_dfa(token: &[char]) -> LevenshteinDfa {
    search_builder(token).compile()
}

/// [`build_levenshtein_dfa`] for the trailing, still-being-typed query token.
pub fn build_prefix_levenshtein_dfa(token: &[char]) -> LevenshteinDfa {
    search_builder(token).prefix_mode(true).compile()
}

fn search_builder(token: &[char]) -> LevenshteinDfaBuilder {
    LevenshteinDfaBuilder::new(token, max_errors_for_token(token))
        .exact_prefix(SEARCH_EXACT_PREFIX)
        .allowed_misprints(FIRST_LETTER_MISPRINTS)
}
