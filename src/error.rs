//! Error types for dictionary construction, word search, and sentence encoding.

use std::collections::TryReserveError;

use thiserror::Error;

/// Returned by `find_word` when the word is not in the dictionary.
pub const WORD_NOT_FOUND: i32 = -1;
/// Returned by `find_word` when passed an empty word.
pub const EMPTY_WORD_ARG: i32 = -2;

/// Errors raised while building a `Dictionary` at runtime.
#[derive(Error, Debug)]
pub enum Error {
    #[error("word list contains no words")]
    EmptyDictionary,

    #[error("word {ordinal} is empty")]
    EmptyWord { ordinal: usize },

    #[error("word {ordinal} ({word:?}) contains the reserved byte {byte:#04x}")]
    InvalidByte { ordinal: usize, word: String, byte: u8 },

    #[error("word {word:?} appears more than once (again at ordinal {ordinal})")]
    DuplicateWord { ordinal: usize, word: String },

    /// Words sharing a two-byte prefix must form one contiguous run.
    #[error("word {word:?} at ordinal {ordinal} reopens a prefix run that already ended")]
    PrefixRunSplit { ordinal: usize, word: String },

    #[error("{0} words do not fit below the reserved sentinel codes")]
    TooManyWords(usize),

    #[error("word table of {0} bytes does not fit 32-bit offsets")]
    TableTooLarge(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of a failed word search.
///
/// Not-found is an ordinary result (the encoder falls back to literal text);
/// `EmptyWord` signals a tokenization bug in the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    #[error("word not found in dictionary")]
    NotFound,
    #[error("empty word passed to search")]
    EmptyWord,
}

impl SearchError {
    /// The signed code of the classic interface: `-1` or `-2`.
    pub fn code(self) -> i32 {
        match self {
            SearchError::NotFound => WORD_NOT_FOUND,
            SearchError::EmptyWord => EMPTY_WORD_ARG,
        }
    }
}

/// Errors raised while encoding a sentence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("sentence is null")]
    NullSentence,

    #[error("failed to allocate encoder output: {0}")]
    Alloc(#[from] TryReserveError),

    #[error("internal encoder error (this is a bug): {0}")]
    Internal(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
