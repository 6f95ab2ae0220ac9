// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the toponym command-line interface.
//!
//! Each subcommand exposes one stage of the pipeline so it can be poked at
//! from a shell: `tokenize`, `classify`, `filter`, `key`, `dfa` and `budget`.
//! Commands that consult street synonyms take `--dictionary` to swap the
//! built-in list for a JSON file.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "toponym",
    about = "Misprint-tolerant tokenization for street and place names",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize and split text into tokens
    Tokenize {
        /// Text to tokenize
        text: String,
    },

    /// Classify a word against the street synonym dictionary
    Classify {
        /// Word to classify
        word: String,

        /// Also accept synonyms within the misprint budget
        #[arg(short, long)]
        misprints: bool,

        /// Treat the word as an unfinished prefix
        #[arg(short, long)]
        prefix: bool,

        /// JSON dictionary file replacing the built-in synonyms
        #[arg(short, long)]
        dictionary: Option<String>,
    },

    /// Drop lone street-type words from a street name or query
    Filter {
        /// Text to filter
        text: String,

        /// Also treat misspelled synonyms as synonyms
        #[arg(short, long)]
        misprints: bool,

        /// JSON dictionary file replacing the built-in synonyms
        #[arg(short, long)]
        dictionary: Option<String>,
    },

    /// Build the compact lookup key for a street name
    Key {
        /// Street name
        name: String,

        /// Keep street-type words in the key
        #[arg(long)]
        keep_synonyms: bool,

        /// JSON dictionary file replacing the built-in synonyms
        #[arg(short, long)]
        dictionary: Option<String>,
    },

    /// Build a Levenshtein automaton for a token
    Dfa {
        /// Reference token
        token: String,

        /// Error budget (defaults to the length-based policy)
        #[arg(short, long)]
        errors: Option<usize>,

        /// Accept anything within budget of a prefix of the token
        #[arg(short, long)]
        prefix: bool,

        /// Candidate words to run through the automaton
        #[arg(short, long = "test")]
        test: Vec<String>,

        /// Dump the automaton as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the error budget the policy assigns to a token
    Budget {
        /// Token to measure
        token: String,
    },
}
