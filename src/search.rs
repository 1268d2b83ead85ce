//! Word search over a `Dictionary`, bucketed by the prefix guide.

use crate::dictionary::{Dictionary, Ordinal};
use crate::error::SearchError;
use crate::guide;

/// True only if `a` and `b` hold identical NUL-terminated strings.
///
/// The end of a slice counts as a terminator, so `b"cat"` equals `b"cat\0dog"`.
/// Unlike an ordering comparison this returns at the first differing byte.
pub fn equal_strings(a: &[u8], b: &[u8]) -> bool {
    let mut i = 0;
    loop {
        let ca = a.get(i).copied().unwrap_or(0);
        let cb = b.get(i).copied().unwrap_or(0);
        if ca != cb {
            return false;
        }
        if ca == 0 {
            return true;
        }
        i += 1;
    }
}

/// The part of `bytes` before its first NUL.
pub(crate) fn until_nul(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

impl Dictionary {
    /// Find the ordinal of `word`.
    ///
    /// Only the words in the guide's bucket for the first two bytes of `word`
    /// are compared. Input after a NUL byte is ignored.
    pub fn find_word(&self, word: impl AsRef<[u8]>) -> Result<Ordinal, SearchError> {
        let word = until_nul(word.as_ref());
        if word.is_empty() {
            return Err(SearchError::EmptyWord);
        }

        let key = guide::prefix_key(word);
        let start = self.guide_entry(key) as usize;
        for ordinal in start..self.len() {
            let candidate = self.word_with_nul(ordinal);
            if guide::prefix_key(candidate) != key {
                break;
            }
            if equal_strings(candidate, word) {
                return Ok(ordinal as Ordinal);
            }
        }
        Err(SearchError::NotFound)
    }

    /// `find_word` flattened to the classic signed code: an ordinal,
    /// `WORD_NOT_FOUND`, or `EMPTY_WORD_ARG`.
    pub fn find_word_code(&self, word: impl AsRef<[u8]>) -> i32 {
        match self.find_word(word) {
            Ok(ordinal) => i32::from(ordinal),
            Err(e) => e.code(),
        }
    }
}
