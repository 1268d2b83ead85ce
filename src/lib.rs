//! cobalt - word-level compression against a compile-time lookup table
//!
//! Every word of a sentence is looked up in a fixed, sorted word list and
//! replaced by its 16-bit ordinal. Words missing from the list are kept
//! verbatim behind the `BEGIN_STRING` sentinel.
//!
//! The word list is embedded at compile time by the `include_wordlist!`
//! proc-macro (from the `cobalt_macros` crate), which emits the flat word
//! table, the offset index, and the prefix guide as statics.
//!
//! Examples
//!
//! - The built-in dictionary:
//!
//! ```ignore
//! let codes = cobalt::encode_sentence(Some("the cat sat on the mat")).unwrap();
//! assert_eq!(codes.last(), Some(&cobalt::TERMINATOR));
//! ```
//!
//! - A dictionary of your own, embedded at compile time:
//!
//! ```ignore
//! use cobalt::include_wordlist;
//!
//! let dict: &'static cobalt::Dictionary = include_wordlist!("path/to/words.txt", sort = true);
//! let ordinal = dict.find_word("hello");
//! ```
//!
//! - Or built at runtime, e.g. in tests:
//!
//! ```ignore
//! let dict = cobalt::Dictionary::from_words(["a", "cat", "the"]).unwrap();
//! let encoded = dict.encode("the cat")?;
//! ```

// Lets `include_wordlist!` expansions name `::cobalt` from inside this crate.
extern crate self as cobalt;

pub mod dictionary;
pub mod encode;
pub mod error;
pub mod guide;
pub mod search;

pub use dictionary::{Dictionary, LoadOptions, Ordinal, MAX_WORDS};
pub use encode::{EncodedSentence, Token, BEGIN_STRING, COMMA, PERIOD, TERMINATOR};
pub use error::{EncodeError, Error, SearchError, EMPTY_WORD_ARG, WORD_NOT_FOUND};
pub use search::equal_strings;

/// Re-export the compile-time word list macro from the proc-macro crate.
///
///   use cobalt::include_wordlist;
pub use cobalt_macros::include_wordlist;

/// The dictionary embedded from `data/words.txt`.
pub fn builtin() -> &'static Dictionary {
    include_wordlist!("data/words.txt")
}

/// Look `word` up in the built-in dictionary.
pub fn find_word(word: impl AsRef<[u8]>) -> Result<Ordinal, SearchError> {
    builtin().find_word(word)
}

/// Encode `sentence` against the built-in dictionary.
///
/// `None` models a null sentence and is rejected with `EncodeError::NullSentence`.
pub fn encode_sentence<S: AsRef<[u8]>>(sentence: Option<S>) -> Result<Vec<u16>, EncodeError> {
    builtin().encode_sentence(sentence.as_ref().map(|s| s.as_ref()))
}
