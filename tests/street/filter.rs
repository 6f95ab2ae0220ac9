//! Street token filter scenarios.

use toponym::{
    default_street_synonyms, filter_street_tokens, FilterState, StreetSynonyms,
    StreetTokensFilter,
};

use crate::common::{chars, filter_text};

/// Feeds `(word, tag)` pairs through a fresh filter and collects the output.
fn run(words: &[(&str, u32)], synonyms: &StreetSynonyms) -> Vec<(String, u32)> {
    let mut out = Vec::new();
    let mut filter = StreetTokensFilter::new(
        synonyms,
        |token: &[char], tag: u32| out.push((token.iter().collect::<String>(), tag)),
        false,
    );
    for &(word, tag) in words {
        filter.put(&chars(word), false, tag);
    }
    filter.finish();
    out
}

#[test]
fn lone_leading_synonym_is_dropped() {
    let out = run(&[("street", 0), ("lenina", 1)], default_street_synonyms());
    assert_eq!(out, vec![("lenina".to_string(), 1)]);
}

#[test]
fn synonym_pair_is_kept_in_order() {
    let out = run(&[("street", 0), ("embankment", 1)], default_street_synonyms());
    assert_eq!(
        out,
        vec![("street".to_string(), 0), ("embankment".to_string(), 1)]
    );
}

#[test]
fn trailing_synonym_is_flushed() {
    let out = run(&[("street", 0)], default_street_synonyms());
    assert_eq!(out, vec![("street".to_string(), 0)]);
}

#[test]
fn three_synonyms_all_survive() {
    let out = run(
        &[("street", 0), ("avenue", 1), ("road", 2)],
        default_street_synonyms(),
    );
    let tags: Vec<u32> = out.iter().map(|(_, tag)| *tag).collect();
    assert_eq!(tags, vec![0, 1, 2]);
}

#[test]
fn trailing_type_word_after_name_is_kept() {
    // Only a synonym that is followed by a name word gets dropped.
    assert_eq!(
        filter_text("Lenina Street", default_street_synonyms(), false),
        vec!["lenina", "street"]
    );
}

#[test]
fn empty_stream_emits_nothing() {
    let out = run(&[], default_street_synonyms());
    assert!(out.is_empty());
}

#[test]
fn state_is_observable_between_tokens() {
    let synonyms = default_street_synonyms();
    let mut filter = StreetTokensFilter::new(synonyms, |_: &[char], _: usize| {}, false);
    assert_eq!(filter.state(), &FilterState::Idle);

    filter.put(&chars("ул"), false, 7);
    assert_eq!(
        filter.state(),
        &FilterState::Holding {
            token: chars("ул"),
            tag: 7
        }
    );

    filter.put(&chars("мира"), false, 8);
    assert_eq!(filter.state(), &FilterState::Idle);
}

#[test]
fn flush_mid_stream_then_continue() {
    let synonyms = default_street_synonyms();
    let mut out = Vec::new();
    let mut filter = StreetTokensFilter::new(
        synonyms,
        |token: &[char], tag: usize| out.push((token.to_vec(), tag)),
        false,
    );
    filter.put(&chars("улица"), false, 0);
    filter.flush();
    filter.put(&chars("ленина"), false, 1);
    filter.finish();
    assert_eq!(out, vec![(chars("улица"), 0), (chars("ленина"), 1)]);
}

#[test]
fn misprinted_synonym_only_dropped_with_misprints() {
    let synonyms = default_street_synonyms();
    assert_eq!(filter_text("улицв ленина", synonyms, false), vec!["улицв", "ленина"]);
    assert_eq!(filter_text("улицв ленина", synonyms, true), vec!["ленина"]);
}

#[test]
fn prefix_token_counts_as_synonym() {
    let synonyms = default_street_synonyms();
    let tokens = vec![chars("ленина"), chars("ули")];
    // "ули" is still being typed: held, then flushed at the end.
    let kept = filter_street_tokens(&tokens, true, synonyms, false);
    assert_eq!(kept, vec![(chars("ленина"), 0), (chars("ули"), 1)]);

    let tokens = vec![chars("проспе"), chars("мира")];
    let kept = filter_street_tokens(&tokens, false, synonyms, false);
    assert_eq!(kept.len(), 2, "complete tokens are not prefix-matched");
}

#[test]
fn custom_dictionary_drives_the_filter() {
    let synonyms = StreetSynonyms::new(["calle", "avenida"]);
    assert_eq!(filter_text("Calle Mayor", &synonyms, false), vec!["mayor"]);
    assert_eq!(
        filter_text("Street Mayor", &synonyms, false),
        vec!["street", "mayor"]
    );
}

#[test]
fn dropping_a_holding_filter_emits_the_held_token() {
    let mut out = Vec::new();
    {
        let mut filter = StreetTokensFilter::new(
            default_street_synonyms(),
            |token: &[char], tag: usize| out.push((token.to_vec(), tag)),
            false,
        );
        filter.put(&chars("street"), false, 0);
    }
    assert_eq!(out, vec![(chars("street"), 0)]);
}
