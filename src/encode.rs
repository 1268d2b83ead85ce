/*!
Sentence encoder

A sentence is split on spaces and each token becomes either a dictionary
ordinal or a literal. Internally that is a list of `Token`s; the flat `u16`
code stream is produced only by `EncodedSentence::to_codes`:

- a matched word is its ordinal, as one code
- an unmatched word is `BEGIN_STRING` followed by the word's bytes and a NUL,
  packed two bytes per code in native byte order (padded with a NUL when odd)
- the stream ends with `TERMINATOR`
*/

use crate::dictionary::{Dictionary, Ordinal};
use crate::error::{EncodeError, SearchError};
use crate::search::until_nul;

/// Marks that the following codes hold a NUL-terminated literal.
pub const BEGIN_STRING: u16 = 0xFFFF;
/// Reserved for `.`; not produced by the encoder yet.
pub const PERIOD: u16 = 0xFFFE;
/// Reserved for `,`; not produced by the encoder yet.
pub const COMMA: u16 = 0xFFFD;
/// Ends every code stream.
pub const TERMINATOR: u16 = 0x0000;

/// The only token delimiter.
const DELIMITER: u8 = b' ';

/// One token of an encoded sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A dictionary word, by ordinal.
    Word(Ordinal),
    /// A word missing from the dictionary, kept verbatim.
    Literal(Vec<u8>),
}

impl Token {
    /// Number of codes this token occupies in the flat stream.
    pub fn code_len(&self) -> usize {
        match self {
            Token::Word(_) => 1,
            // sentinel + (bytes + NUL) rounded up to whole codes
            Token::Literal(bytes) => 1 + (bytes.len() + 2) / 2,
        }
    }
}

/// A sentence as a sequence of dictionary references and literals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedSentence {
    tokens: Vec<Token>,
}

impl EncodedSentence {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// How many tokens fell back to literal text.
    pub fn literal_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, Token::Literal(_)))
            .count()
    }

    /// Serialize to the flat, `TERMINATOR`-ended code stream.
    pub fn to_codes(&self) -> Result<Vec<u16>, EncodeError> {
        let total = self.tokens.iter().map(Token::code_len).sum::<usize>() + 1;
        let mut codes = Vec::new();
        codes.try_reserve_exact(total)?;

        for token in &self.tokens {
            match token {
                Token::Word(ordinal) => codes.push(*ordinal),
                Token::Literal(bytes) => {
                    codes.push(BEGIN_STRING);
                    pack_literal(bytes, &mut codes);
                }
            }
        }
        codes.push(TERMINATOR);
        Ok(codes)
    }
}

/// Append `bytes` plus a NUL terminator as native-order `u16` units.
fn pack_literal(bytes: &[u8], codes: &mut Vec<u16>) {
    let mut pairs = bytes.chunks_exact(2);
    for pair in pairs.by_ref() {
        codes.push(u16::from_ne_bytes([pair[0], pair[1]]));
    }
    match pairs.remainder() {
        [last] => codes.push(u16::from_ne_bytes([*last, 0])),
        _ => codes.push(0),
    }
}

impl Dictionary {
    /// Split `sentence` on spaces and look up every token.
    ///
    /// Runs of spaces yield no empty tokens; input after a NUL is ignored.
    pub fn encode(&self, sentence: impl AsRef<[u8]>) -> Result<EncodedSentence, EncodeError> {
        let sentence = until_nul(sentence.as_ref());
        let mut tokens = Vec::new();

        for word in sentence
            .split(|&b| b == DELIMITER)
            .filter(|w| !w.is_empty())
        {
            tokens.try_reserve(1)?;
            match self.find_word(word) {
                Ok(ordinal) => tokens.push(Token::Word(ordinal)),
                Err(SearchError::NotFound) => {
                    log::trace!(
                        "no dictionary entry for {:?}, emitting literal",
                        String::from_utf8_lossy(word)
                    );
                    let mut literal = Vec::new();
                    literal.try_reserve_exact(word.len())?;
                    literal.extend_from_slice(word);
                    tokens.push(Token::Literal(literal));
                }
                Err(SearchError::EmptyWord) => {
                    return Err(EncodeError::Internal(
                        "tokenizer produced an empty word".to_string(),
                    ));
                }
            }
        }

        Ok(EncodedSentence { tokens })
    }

    /// Encode straight to the flat code stream.
    ///
    /// `None` stands for a null sentence and fails with `NullSentence`;
    /// an empty sentence yields `[TERMINATOR]`.
    pub fn encode_sentence(&self, sentence: Option<&[u8]>) -> Result<Vec<u16>, EncodeError> {
        let sentence = sentence.ok_or(EncodeError::NullSentence)?;
        self.encode(sentence)?.to_codes()
    }
}
