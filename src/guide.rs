/*!
Prefix guide

The guide maps the first two bytes of a word, packed into a `u16` in the
target's native byte order, to the ordinal of the first dictionary word that
starts with those bytes. Prefixes that no word starts with map to the last
ordinal, so a search always lands on a valid word and detects the mismatch
on its first comparison.

A one-byte word packs its own NUL terminator as the second byte. Encoding and
lookup only ever use `prefix_key`, so the byte order never leaks out.
*/

use crate::dictionary::MAX_WORDS;

/// Number of entries in a prefix guide: one per possible `u16` key.
pub const GUIDE_LEN: usize = 1 << 16;

/// Pack the leading two bytes of a word into a guide key.
///
/// A missing byte (or anything after a NUL) counts as NUL.
pub const fn prefix_key(bytes: &[u8]) -> u16 {
    let first = if bytes.is_empty() { 0 } else { bytes[0] };
    let second = if first != 0 && bytes.len() > 1 {
        bytes[1]
    } else {
        0
    };
    u16::from_ne_bytes([first, second])
}

/// Key of the NUL-terminated word starting at `start` in `table`.
const fn key_at(table: &[u8], start: usize) -> u16 {
    let first = table[start];
    let second = if first != 0 && start + 1 < table.len() {
        table[start + 1]
    } else {
        0
    };
    u16::from_ne_bytes([first, second])
}

/// Build a guide in const context.
///
/// Used by `include_wordlist!` so the guide is computed for the target
/// rather than the machine running the proc-macro.
///
/// The asserts only fire during const evaluation, as a compile error; the
/// macro has already rejected empty and oversized word lists by then.
pub const fn build(table: &[u8], offsets: &[u32]) -> [u16; GUIDE_LEN] {
    let count = offsets.len();
    assert!(count > 0, "prefix guide needs at least one word");
    assert!(count <= MAX_WORDS, "too many words for 16-bit ordinals");

    let mut guide = [(count - 1) as u16; GUIDE_LEN];
    // Walk backwards so the first word of each run wins.
    let mut i = count;
    while i > 0 {
        i -= 1;
        guide[key_at(table, offsets[i] as usize) as usize] = i as u16;
    }
    guide
}

/// Heap-allocated counterpart of `build` for dictionaries assembled at runtime.
pub(crate) fn build_boxed(table: &[u8], offsets: &[u32]) -> Box<[u16]> {
    let last = offsets.len().saturating_sub(1) as u16;
    let mut guide = vec![last; GUIDE_LEN].into_boxed_slice();
    for (ordinal, &offset) in offsets.iter().enumerate().rev() {
        guide[key_at(table, offset as usize) as usize] = ordinal as u16;
    }
    guide
}
