//! Property tests for normalization and tokenization.

use proptest::prelude::*;
use toponym::{
    drop_last_token, normalize_and_simplify, normalize_and_simplify_utf8, tokenize,
    tokenize_and_check_last_is_prefix, Delimiters, SearchDelimiters,
};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Latin-1 letters with diacritics, Cyrillic, and the punctuation that shows
/// up in addresses.
fn address_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-zÀ-ÖØ-öø-ÿА-яЁё0-9 .,/-]{0,24}").unwrap()
}

/// Known address fragments mixed with random text.
fn mixed_strategy() -> impl Strategy<Value = String> {
    let fragments = prop::sample::select(vec![
        "Пр-т Мира",
        "ул. Ленина",
        "Straße",
        "Café de Flore",
        "Ёлочная наб-я",
        "пр-д Серебрякова",
        "Rue de l’Église",
    ]);
    (fragments, address_strategy()).prop_map(|(fragment, rest)| format!("{} {}", fragment, rest))
}

proptest! {
    /// Property: normalizing twice is the same as normalizing once.
    #[test]
    fn prop_normalize_idempotent(text in mixed_strategy()) {
        let once = normalize_and_simplify_utf8(&text);
        let twice = normalize_and_simplify_utf8(&once);
        prop_assert_eq!(once, twice);
    }

    /// Property: normalized text has no uppercase letters.
    #[test]
    fn prop_normalize_lowercases(text in address_strategy()) {
        let normalized = normalize_and_simplify(&text);
        prop_assert!(normalized.iter().all(|c| !c.is_uppercase()));
    }

    /// Property: tokens are non-empty and free of delimiters.
    #[test]
    fn prop_tokens_have_no_delimiters(text in address_strategy()) {
        let normalized = normalize_and_simplify(&text);
        for token in tokenize(&normalized, &SearchDelimiters) {
            prop_assert!(!token.is_empty());
            prop_assert!(token.iter().all(|&c| !SearchDelimiters.is_delimiter(c)));
        }
    }

    /// Property: tokens cover exactly the non-delimiter code points, in order.
    #[test]
    fn prop_tokens_cover_text(text in address_strategy()) {
        let chars: Vec<char> = text.chars().collect();
        let joined: Vec<char> = tokenize(&chars, &SearchDelimiters).flatten().copied().collect();
        let expected: Vec<char> = chars
            .iter()
            .copied()
            .filter(|&c| !SearchDelimiters.is_delimiter(c))
            .collect();
        prop_assert_eq!(joined, expected);
    }

    /// Property: the last token is a prefix iff the text does not end on a delimiter.
    #[test]
    fn prop_last_is_prefix(text in address_strategy()) {
        let chars: Vec<char> = text.chars().collect();
        let (tokens, last_is_prefix) = tokenize_and_check_last_is_prefix(&chars, &SearchDelimiters);
        let ends_in_token = chars.last().is_some_and(|&c| !SearchDelimiters.is_delimiter(c));
        prop_assert_eq!(last_is_prefix, ends_in_token);
        if last_is_prefix {
            prop_assert!(!tokens.is_empty());
        }
    }

    /// Property: dropping the last token leaves a prefix ending on a delimiter.
    #[test]
    fn prop_drop_last_token(text in address_strategy()) {
        let dropped = drop_last_token(&text);
        prop_assert!(text.starts_with(dropped));
        if let Some(last) = dropped.chars().last() {
            prop_assert!(SearchDelimiters.is_delimiter(last));
        }
        prop_assert!(text[dropped.len()..].chars().all(|c| !SearchDelimiters.is_delimiter(c)));
    }
}
