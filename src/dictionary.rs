/*!
dictionary module

The dictionary store: every word, NUL-terminated and concatenated into one
flat byte table, plus a table of per-word byte offsets and the prefix guide
(see `crate::guide`). A `Dictionary` is immutable once built and is shared
freely between threads.

How to get a `Dictionary`
- Compile-time: `include_wordlist!` embeds a word list as statics and
  evaluates to `&'static Dictionary`. `crate::builtin()` is one of these.
- Runtime: `Dictionary::from_words` or `Dictionary::from_reader`, which apply
  the same checks the macro applies at compile time.
*/

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::io::BufRead;
use std::ops::Range;

use crate::error::{Error, Result};
use crate::guide::{self, GUIDE_LEN};

/// Zero-based position of a word in the dictionary.
pub type Ordinal = u16;

/// Largest word count whose ordinals all stay below the sentinel codes.
pub const MAX_WORDS: usize = 0xFFFD;

/// Options for loading a newline-separated word list at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// ASCII-lowercase every word before building the table.
    pub lowercase: bool,
    /// Sort the words bytewise instead of keeping file order.
    pub sort: bool,
}

/// Immutable word table with its offset index and prefix guide.
#[derive(Clone)]
pub struct Dictionary {
    /// Every word followed by a NUL; the last word's NUL closes the table.
    table: Cow<'static, [u8]>,
    offsets: Cow<'static, [u32]>,
    guide: Cow<'static, [u16]>,
}

impl Dictionary {
    /// Wrap tables emitted by `include_wordlist!`.
    ///
    /// `table` must end with the last word's NUL and `guide` must have been
    /// produced by `guide::build` over the same table and offsets.
    pub const fn from_static(
        table: &'static [u8],
        offsets: &'static [u32],
        guide: &'static [u16; GUIDE_LEN],
    ) -> Self {
        Self {
            table: Cow::Borrowed(table),
            offsets: Cow::Borrowed(offsets),
            guide: Cow::Borrowed(guide.as_slice()),
        }
    }

    /// Build a dictionary from words in ordinal order.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut table = Vec::new();
        let mut offsets = Vec::new();
        let mut seen: HashSet<Vec<u8>> = HashSet::new();
        let mut finished_runs: HashSet<u16> = HashSet::new();
        let mut current_run: Option<u16> = None;

        for (ordinal, word) in words.into_iter().enumerate() {
            let word = word.as_ref();
            if word.is_empty() {
                return Err(Error::EmptyWord { ordinal });
            }
            if let Some(&byte) = word
                .iter()
                .find(|&&b| b == 0 || b.is_ascii_whitespace())
            {
                return Err(Error::InvalidByte {
                    ordinal,
                    word: String::from_utf8_lossy(word).into_owned(),
                    byte,
                });
            }
            if !seen.insert(word.to_vec()) {
                return Err(Error::DuplicateWord {
                    ordinal,
                    word: String::from_utf8_lossy(word).into_owned(),
                });
            }

            let key = guide::prefix_key(word);
            if current_run != Some(key) {
                if finished_runs.contains(&key) {
                    return Err(Error::PrefixRunSplit {
                        ordinal,
                        word: String::from_utf8_lossy(word).into_owned(),
                    });
                }
                if let Some(previous) = current_run.replace(key) {
                    finished_runs.insert(previous);
                }
            }

            if ordinal >= MAX_WORDS {
                return Err(Error::TooManyWords(ordinal + 1));
            }
            let offset =
                u32::try_from(table.len()).map_err(|_| Error::TableTooLarge(table.len()))?;
            offsets.push(offset);
            table.extend_from_slice(word);
            table.push(0);
        }

        if offsets.is_empty() {
            return Err(Error::EmptyDictionary);
        }
        if u32::try_from(table.len()).is_err() {
            return Err(Error::TableTooLarge(table.len()));
        }

        let guide = guide::build_boxed(&table, &offsets);
        log::debug!(
            "built dictionary: {} words, {} table bytes",
            offsets.len(),
            table.len() - 1
        );

        Ok(Self {
            table: Cow::Owned(table),
            offsets: Cow::Owned(offsets),
            guide: Cow::Owned(guide.into_vec()),
        })
    }

    /// Load a newline-separated word list.
    ///
    /// Lines are trimmed; blank lines and lines starting with `#` are skipped.
    pub fn from_reader<R: BufRead>(reader: R, options: &LoadOptions) -> Result<Self> {
        let mut words = Vec::new();
        for line in reader.split(b'\n') {
            let line = line?;
            let trimmed = line.trim_ascii();
            if trimmed.is_empty() || trimmed.starts_with(b"#") {
                continue;
            }
            let word = if options.lowercase {
                trimmed.to_ascii_lowercase()
            } else {
                trimmed.to_vec()
            };
            words.push(word);
        }

        if options.sort {
            words.sort_unstable();
        }
        log::debug!("loaded {} words from word list", words.len());
        Self::from_words(words)
    }

    /// Number of words (`numberOfWords`).
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Byte length of the table, excluding its closing NUL.
    pub fn table_len(&self) -> usize {
        self.table.len().saturating_sub(1)
    }

    /// The raw NUL-delimited table, closing NUL included.
    pub fn table(&self) -> &[u8] {
        &self.table
    }

    /// Byte offset of each word within `table()`.
    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    /// Text of the word at `ordinal`, without its terminator.
    pub fn word(&self, ordinal: usize) -> Option<&[u8]> {
        let start = *self.offsets.get(ordinal)? as usize;
        let end = match self.offsets.get(ordinal + 1) {
            Some(&next) => next as usize - 1,
            None => self.table_len(),
        };
        self.table.get(start..end)
    }

    /// The word starting at `ordinal`, still followed by its NUL terminator.
    pub(crate) fn word_with_nul(&self, ordinal: usize) -> &[u8] {
        &self.table[self.offsets[ordinal] as usize..]
    }

    /// Iterate words in ordinal order.
    pub fn words(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.len()).filter_map(move |i| self.word(i))
    }

    /// Raw guide entry for a packed prefix key.
    pub fn guide_entry(&self, key: u16) -> Ordinal {
        self.guide[key as usize]
    }

    /// Ordinals of every word sharing the prefix `key`, or `None` if no word does.
    pub fn prefix_run(&self, key: u16) -> Option<Range<usize>> {
        let start = self.guide_entry(key) as usize;
        let matches = |ordinal: usize| {
            ordinal < self.len() && guide::prefix_key(self.word_with_nul(ordinal)) == key
        };
        if !matches(start) {
            return None;
        }
        let mut end = start + 1;
        while matches(end) {
            end += 1;
        }
        Some(start..end)
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("words", &self.len())
            .field("table_len", &self.table_len())
            .finish()
    }
}
