// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::error::Error;

use toponym::{
    build_levenshtein_dfa, build_prefix_levenshtein_dfa, default_street_synonyms,
    filter_street_tokens, max_errors_for_token, normalize_and_simplify, normalize_and_tokenize,
    street_name_as_key, to_utf8, tokenize_and_check_last_is_prefix, LevenshteinDfa,
    LevenshteinDfaBuilder, SearchDelimiters, StreetSynonyms, FIRST_LETTER_MISPRINTS,
};

mod cli;
use cli::display::{self, pad_right, row, section_bot, section_top, styled};
use cli::{Cli, Commands};

type CliResult = Result<(), Box<dyn Error>>;

fn main() {
    pretty_env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Tokenize { text } => run_tokenize(&text),
        Commands::Classify {
            word,
            misprints,
            prefix,
            dictionary,
        } => run_classify(&word, misprints, prefix, dictionary.as_deref()),
        Commands::Filter {
            text,
            misprints,
            dictionary,
        } => run_filter(&text, misprints, dictionary.as_deref()),
        Commands::Key {
            name,
            keep_synonyms,
            dictionary,
        } => run_key(&name, keep_synonyms, dictionary.as_deref()),
        Commands::Dfa {
            token,
            errors,
            prefix,
            test,
            json,
        } => run_dfa(&token, errors, prefix, &test, json),
        Commands::Budget { token } => run_budget(&token),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Built-in synonyms unless a dictionary file is given.
enum Synonyms {
    Builtin(&'static StreetSynonyms),
    Loaded(StreetSynonyms),
}

impl Synonyms {
    fn load(dictionary: Option<&str>) -> toponym::Result<Self> {
        match dictionary {
            Some(path) => Ok(Self::Loaded(StreetSynonyms::from_file(path)?)),
            None => Ok(Self::Builtin(default_street_synonyms())),
        }
    }

    fn get(&self) -> &StreetSynonyms {
        match self {
            Self::Builtin(synonyms) => synonyms,
            Self::Loaded(synonyms) => synonyms,
        }
    }
}

fn run_tokenize(text: &str) -> CliResult {
    let normalized = normalize_and_simplify(text);
    let (tokens, last_is_prefix) =
        tokenize_and_check_last_is_prefix(&normalized, &SearchDelimiters);

    section_top("TOKENS");
    row(&format!(" normalized: {}", to_utf8(&normalized)));
    for (i, token) in tokens.iter().enumerate() {
        row(&format!(" {:>3}  {}", i, to_utf8(token)));
    }
    row(&format!(
        " last token is prefix: {}",
        styled(&[display::BOLD], &last_is_prefix.to_string())
    ));
    section_bot();
    Ok(())
}

fn run_classify(word: &str, misprints: bool, prefix: bool, dictionary: Option<&str>) -> CliResult {
    let synonyms = Synonyms::load(dictionary)?;
    let token = normalize_and_simplify(word);
    let kind = synonyms.get().classify_with_prefix(&token, prefix, misprints);

    println!("{}  {}", to_utf8(&token), display::synonym_label(kind));
    Ok(())
}

fn run_filter(text: &str, misprints: bool, dictionary: Option<&str>) -> CliResult {
    let synonyms = Synonyms::load(dictionary)?;
    let tokens = normalize_and_tokenize(text);
    let kept = filter_street_tokens(&tokens, false, synonyms.get(), misprints);

    section_top("FILTER");
    for (i, token) in tokens.iter().enumerate() {
        let word = pad_right(&to_utf8(token), 24);
        let status = if kept.iter().any(|&(_, position)| position == i) {
            styled(&[display::GREEN], "kept")
        } else {
            styled(&[display::DIM], "dropped")
        };
        row(&format!(" {:>3}  {} {}", i, word, status));
    }
    section_bot();
    Ok(())
}

fn run_key(name: &str, keep_synonyms: bool, dictionary: Option<&str>) -> CliResult {
    let synonyms = Synonyms::load(dictionary)?;
    let key = street_name_as_key(name, synonyms.get(), !keep_synonyms);
    println!("{}", to_utf8(&key));
    Ok(())
}

fn run_dfa(
    token: &str,
    errors: Option<usize>,
    prefix: bool,
    candidates: &[String],
    json: bool,
) -> CliResult {
    let reference = normalize_and_simplify(token);
    let dfa: LevenshteinDfa = match errors {
        Some(max_errors) => LevenshteinDfaBuilder::new(&reference, max_errors)
            .prefix_mode(prefix)
            .exact_prefix(1)
            .allowed_misprints(FIRST_LETTER_MISPRINTS)
            .build()?,
        None if prefix => build_prefix_levenshtein_dfa(&reference),
        None => build_levenshtein_dfa(&reference),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&dfa)?);
        return Ok(());
    }

    section_top("AUTOMATON");
    row(&format!(" reference:  {}", to_utf8(&reference)));
    row(&format!(" errors:     {}", dfa.max_errors()));
    row(&format!(" prefix:     {}", dfa.is_prefix_mode()));
    row(&format!(" alphabet:   {}", dfa.alphabet().len()));
    row(&format!(" states:     {}", dfa.num_states()));
    section_bot();

    if !candidates.is_empty() {
        section_top("CANDIDATES");
        for candidate in candidates {
            let input = normalize_and_simplify(candidate);
            let state = dfa.walk(input.iter().copied());
            let word = pad_right(&to_utf8(&input), 24);
            row(&format!(" {} {}", word, display::verdict(dfa.distance(state))));
        }
        section_bot();
    }
    Ok(())
}

fn run_budget(token: &str) -> CliResult {
    let normalized = normalize_and_simplify(token);
    println!(
        "{}  length {}  max errors {}",
        to_utf8(&normalized),
        normalized.len(),
        max_errors_for_token(&normalized)
    );
    Ok(())
}
