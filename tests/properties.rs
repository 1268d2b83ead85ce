//! Property-based tests using proptest.
//!
//! Random word lists are sorted and deduplicated (which keeps every
//! two-byte prefix run contiguous) and then searched and encoded.

use std::collections::BTreeSet;

use cobalt::guide::prefix_key;
use cobalt::{Dictionary, SearchError, Token, BEGIN_STRING, TERMINATOR};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Word-like strings; a small alphabet so prefixes collide often.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{1,6}").unwrap()
}

/// A sorted, duplicate-free word list.
fn wordlist_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(word_strategy(), 1..80)
        .prop_map(|set: BTreeSet<String>| set.into_iter().collect())
}

proptest! {
    /// Every dictionary word is found at its own ordinal.
    #[test]
    fn prop_find_word_returns_own_ordinal(words in wordlist_strategy()) {
        let dict = Dictionary::from_words(&words).unwrap();
        for (i, word) in words.iter().enumerate() {
            prop_assert_eq!(dict.find_word(word), Ok(i as u16));
            // Tables are immutable: a second lookup agrees.
            prop_assert_eq!(dict.find_word(word), Ok(i as u16));
        }
    }

    /// Anything outside the list is reported missing.
    #[test]
    fn prop_find_word_rejects_absent(
        words in wordlist_strategy(),
        probe in "[a-f]{1,7}"
    ) {
        let dict = Dictionary::from_words(&words).unwrap();
        if !words.contains(&probe) {
            prop_assert_eq!(dict.find_word(&probe), Err(SearchError::NotFound));
        }
    }

    /// The guide entry of every present prefix is the start of its run.
    #[test]
    fn prop_guide_points_at_run_start(words in wordlist_strategy()) {
        let dict = Dictionary::from_words(&words).unwrap();
        for (i, word) in words.iter().enumerate() {
            let key = prefix_key(word.as_bytes());
            let run = dict.prefix_run(key).unwrap();
            prop_assert!(run.contains(&i));
            prop_assert_eq!(run.start, dict.guide_entry(key) as usize);
            let first = words.iter().position(|w| prefix_key(w.as_bytes()) == key).unwrap();
            prop_assert_eq!(run.start, first);
        }
    }

    /// A sentence of dictionary words becomes one code per word plus a terminator.
    #[test]
    fn prop_known_sentence_shape(
        words in wordlist_strategy(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..12)
    ) {
        let dict = Dictionary::from_words(&words).unwrap();
        let chosen: Vec<usize> = picks.iter().map(|p| p.index(words.len())).collect();
        let sentence = chosen
            .iter()
            .map(|&i| words[i].as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let codes = dict.encode_sentence(Some(sentence.as_bytes())).unwrap();
        let mut expected: Vec<u16> = chosen.iter().map(|&i| i as u16).collect();
        expected.push(TERMINATOR);
        prop_assert_eq!(codes, expected);
    }

    /// An unknown token shows up as the sentinel plus its packed bytes, in place.
    #[test]
    fn prop_unknown_token_fallback(
        words in wordlist_strategy(),
        before in 0usize..3,
        after in 0usize..3
    ) {
        let dict = Dictionary::from_words(&words).unwrap();
        let known = words[0].as_str();
        let mut sentence: Vec<&str> = vec![known; before];
        sentence.push("xyzzy");
        sentence.extend(std::iter::repeat(known).take(after));

        let encoded = dict.encode(sentence.join(" ")).unwrap();
        prop_assert_eq!(encoded.literal_count(), 1);
        prop_assert_eq!(&encoded.tokens()[before], &Token::Literal(b"xyzzy".to_vec()));

        let codes = encoded.to_codes().unwrap();
        prop_assert_eq!(codes[before], BEGIN_STRING);
        let packed: Vec<u8> = codes[before + 1..before + 4]
            .iter()
            .flat_map(|c| c.to_ne_bytes())
            .collect();
        prop_assert_eq!(packed, b"xyzzy\0".to_vec());
        prop_assert_eq!(codes.len(), before + 4 + after + 1);
    }
}

#[test]
fn test_empty_inputs() {
    let dict = Dictionary::from_words(["only"]).unwrap();
    assert_eq!(dict.find_word(""), Err(SearchError::EmptyWord));
    assert_eq!(dict.encode_sentence(Some(&b""[..])).unwrap(), vec![TERMINATOR]);
    assert!(dict.encode_sentence(None).is_err());
}
