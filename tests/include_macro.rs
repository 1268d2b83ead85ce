use cobalt::{include_wordlist, SearchError, Token, BEGIN_STRING, TERMINATOR};

#[test]
fn test_include_macro_basic_lookup() {
    // Build the tables at compile time from tests/data/words.txt
    let dict = include_wordlist!("tests/data/words.txt");

    assert_eq!(dict.len(), 12);
    assert_eq!(dict.find_word("apple"), Ok(0));
    assert_eq!(dict.find_word("hello"), Ok(6));
    assert_eq!(dict.find_word("world"), Ok(11));

    // Shares the "he" bucket with hell/hello/help but is absent.
    assert_eq!(dict.find_word("helm"), Err(SearchError::NotFound));
    assert_eq!(dict.find_word(""), Err(SearchError::EmptyWord));
}

#[test]
fn test_include_macro_matches_runtime_build() {
    let embedded = include_wordlist!("tests/data/words.txt");
    let words: Vec<&[u8]> = embedded.words().collect();
    let runtime = cobalt::Dictionary::from_words(&words).unwrap();

    assert_eq!(embedded.table(), runtime.table());
    assert_eq!(embedded.offsets(), runtime.offsets());
    for key in [b"ap", b"he", b"th", b"zq"] {
        let key = cobalt::guide::prefix_key(key);
        assert_eq!(embedded.guide_entry(key), runtime.guide_entry(key));
    }
}

#[test]
fn test_include_macro_options() {
    let dict = include_wordlist!("tests/data/unsorted.txt", lowercase = true, sort = true);
    let words: Vec<&[u8]> = dict.words().collect();
    assert_eq!(words, vec![&b"apple"[..], b"cat", b"hello", b"the", b"world"]);

    let raw = include_wordlist!("tests/data/unsorted.txt");
    assert_eq!(raw.find_word("World"), Ok(0));
    assert_eq!(raw.find_word("world"), Err(SearchError::NotFound));
}

#[test]
fn test_include_macro_encode() {
    let dict = include_wordlist!("tests/data/words.txt");
    let encoded = dict.encode("hello xyzzy world").unwrap();
    assert_eq!(
        encoded.tokens(),
        &[
            Token::Word(6),
            Token::Literal(b"xyzzy".to_vec()),
            Token::Word(11)
        ]
    );

    let codes = encoded.to_codes().unwrap();
    assert_eq!(codes[0], 6);
    assert_eq!(codes[1], BEGIN_STRING);
    let literal: Vec<u8> = codes[2..5].iter().flat_map(|c| c.to_ne_bytes()).collect();
    assert_eq!(literal, b"xyzzy\0");
    assert_eq!(&codes[5..], &[11, TERMINATOR]);
}
