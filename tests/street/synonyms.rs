//! Synonym classifier and dictionary loading.

use toponym::{default_street_synonyms, Error, StreetSynonyms, SynonymKind, MISPRINT_BUDGET};

use crate::common::{chars, filter_text, write_dictionary};

#[test]
fn one_substitution_is_a_misprint_only_when_allowed() {
    let synonyms = default_street_synonyms();
    let token = chars("avenua");
    assert_eq!(synonyms.classify(&token, true), SynonymKind::Misprint);
    assert_eq!(synonyms.classify(&token, false), SynonymKind::NotSynonym);
}

#[test]
fn exact_entries_classify_exact_either_way() {
    let synonyms = default_street_synonyms();
    for word in ["street", "avenue", "улица", "проспект", "ул"] {
        assert_eq!(synonyms.classify(&chars(word), false), SynonymKind::Exact, "{}", word);
        assert_eq!(synonyms.classify(&chars(word), true), SynonymKind::Exact, "{}", word);
    }
}

#[test]
fn name_words_are_not_synonyms() {
    let synonyms = default_street_synonyms();
    for word in ["lenina", "тверская", "pushkinskaya", "baker"] {
        assert_eq!(synonyms.classify(&chars(word), true), SynonymKind::NotSynonym, "{}", word);
    }
}

#[test]
fn two_edits_exceed_the_misprint_budget() {
    assert_eq!(MISPRINT_BUDGET, 1);
    let synonyms = default_street_synonyms();
    assert!(!synonyms.is_synonym_with_misprints(&chars("boolevarx")));
    assert!(synonyms.is_synonym_with_misprints(&chars("boulevarx")));
}

#[test]
fn prefix_classification() {
    let synonyms = default_street_synonyms();
    assert_eq!(
        synonyms.classify_with_prefix(&chars("набер"), true, false),
        SynonymKind::Exact
    );
    assert_eq!(
        synonyms.classify_with_prefix(&chars("набер"), false, false),
        SynonymKind::NotSynonym
    );
    assert_eq!(
        synonyms.classify_with_prefix(&chars("набир"), true, true),
        SynonymKind::Misprint
    );
    // The first letter of a prefix must match an entry exactly.
    assert!(!synonyms.is_synonym_prefix_with_misprints(&chars("жабер")));
}

#[test]
fn entries_are_normalized_on_insert() {
    let synonyms = StreetSynonyms::new(["Straße", "  ", "RUE"]);
    assert_eq!(synonyms.len(), 2);
    assert!(synonyms.is_synonym(&chars("strasse")));
    assert!(synonyms.is_synonym(&chars("rue")));
}

#[test]
fn oversized_misprint_budget_is_rejected() {
    let err = StreetSynonyms::with_misprint_budget(["street"], 7).unwrap_err();
    assert!(matches!(err, Error::InvalidBudget { budget: 7, .. }));

    let loose = StreetSynonyms::with_misprint_budget(["street", "boulevard"], 2).unwrap();
    assert_eq!(loose.misprint_budget(), 2);
    assert!(loose.is_synonym_with_misprints(&chars("bolevxrd")));
    // Six code points only earn one misprint, whatever the ceiling.
    assert!(loose.is_synonym_with_misprints(&chars("strext")));
    assert!(!loose.is_synonym_with_misprints(&chars("strxxt")));
}

#[test]
fn single_letter_tokens_are_not_misprinted_synonyms() {
    let synonyms = default_street_synonyms();
    for token in ["5", "a", "x"] {
        assert_eq!(synonyms.classify(&chars(token), true), SynonymKind::NotSynonym, "{}", token);
    }
    assert_eq!(
        filter_text("5 lenina", synonyms, true),
        vec!["5", "lenina"]
    );
}

#[test]
fn dictionary_file_round_trip() {
    let file = write_dictionary(r#"{"locale": "fr", "synonyms": ["Rue", "Avenue", "Boulevard"]}"#);
    let synonyms = StreetSynonyms::from_file(file.path()).unwrap();
    assert_eq!(synonyms.locale(), Some("fr"));
    assert_eq!(synonyms.len(), 3);
    assert_eq!(synonyms.classify(&chars("rue"), false), SynonymKind::Exact);
    assert_eq!(synonyms.classify(&chars("street"), true), SynonymKind::NotSynonym);
}

#[test]
fn dictionary_without_locale() {
    let synonyms = StreetSynonyms::from_json(r#"{"synonyms": ["calle"]}"#).unwrap();
    assert_eq!(synonyms.locale(), None);
    assert!(synonyms.is_synonym(&chars("calle")));
}

#[test]
fn malformed_dictionary_is_an_error() {
    let file = write_dictionary("{\"synonyms\": 42}");
    let err = StreetSynonyms::from_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::Dictionary(_)));
}

#[test]
fn missing_dictionary_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = StreetSynonyms::from_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn builtin_matches_shared_default() {
    let builtin = StreetSynonyms::builtin();
    assert_eq!(builtin.len(), default_street_synonyms().len());
    assert_eq!(builtin.locale(), Some("en,ru"));
}
