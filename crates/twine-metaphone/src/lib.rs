//! Double Metaphone phonetic encoder.
//!
//! Produces a primary and an alternate phonetic code for a word so that
//! words which sound alike ("Smith" / "Schmidt", "Catherine" / "Katherine")
//! share a code.
//!
//! # Architecture
//!
//! - [`context`]: cursor over the uppercased word with bounds-checked
//!   substring and vowel tests, silent-start and Slavo-Germanic detection
//! - [`rules`]: per-letter rule tables, first matching rule wins
//! - `encoder`: the driving loop that applies the rule groups and
//!   truncates the two output streams
//!
//! ```
//! let code = twine_metaphone::encode("richard", 4).unwrap();
//! assert_eq!(code.primary(), "RXRT");
//! assert_eq!(code.alternate(), "RKRT");
//! ```

pub mod context;
mod encoder;
pub mod rules;

use twine_core::DualCode;
use twine_core::character::to_upper_chars;

/// Code length used when the caller passes `0`.
pub const DEFAULT_CODE_LENGTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("cannot encode an empty word")]
    EmptyInput,
}

/// Encode `word`, truncating both codes to `max_code_length` characters.
///
/// A `max_code_length` of zero selects [`DEFAULT_CODE_LENGTH`].
pub fn encode(word: &str, max_code_length: usize) -> Result<DualCode, EncodeError> {
    if word.is_empty() {
        return Err(EncodeError::EmptyInput);
    }
    let max = if max_code_length == 0 {
        DEFAULT_CODE_LENGTH
    } else {
        max_code_length
    };
    let upper = to_upper_chars(word);
    Ok(encoder::encode_chars(&upper, max))
}

/// An encoder bound to a fixed code length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoder {
    max_code_length: usize,
}

impl Encoder {
    pub fn new(max_code_length: usize) -> Self {
        let max_code_length = if max_code_length == 0 {
            DEFAULT_CODE_LENGTH
        } else {
            max_code_length
        };
        Self { max_code_length }
    }

    pub fn max_code_length(&self) -> usize {
        self.max_code_length
    }

    pub fn encode(&self, word: &str) -> Result<DualCode, EncodeError> {
        encode(word, self.max_code_length)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(word: &str) -> (String, String) {
        let code = encode(word, 4).unwrap();
        (code.primary().to_string(), code.alternate().to_string())
    }

    #[test]
    fn empty_word_is_rejected() {
        assert_eq!(encode("", 4), Err(EncodeError::EmptyInput));
        assert_eq!(Encoder::default().encode(""), Err(EncodeError::EmptyInput));
    }

    #[test]
    fn known_vectors() {
        assert_eq!(codes("richard"), ("RXRT".into(), "RKRT".into()));
        assert_eq!(codes("Jose"), ("JS".into(), "HS".into()));
        assert_eq!(codes("cambrillo"), ("KMPR".into(), String::new()));
    }

    #[test]
    fn case_does_not_matter() {
        assert_eq!(encode("SMITH", 4), encode("smith", 4));
        assert_eq!(encode("McHugh", 4), encode("MCHUGH", 4));
    }

    #[test]
    fn zero_length_means_default() {
        assert_eq!(encode("richard", 0), encode("richard", DEFAULT_CODE_LENGTH));
        assert_eq!(Encoder::new(0).max_code_length(), DEFAULT_CODE_LENGTH);
    }

    #[test]
    fn code_length_is_honored() {
        let short = encode("richard", 2).unwrap();
        assert_eq!(short.primary(), "RX");
        assert_eq!(short.alternate(), "RK");

        let long = encode("antidisestablishmentarianism", 8).unwrap();
        assert_eq!(long.primary().len(), 8);
    }

    #[test]
    fn alternate_collapses_when_equal_after_truncation() {
        // RXRT and RKRT only differ from the second character on.
        let code = encode("richard", 1).unwrap();
        assert_eq!(code.primary(), "R");
        assert_eq!(code.alternate(), "");
        assert!(!code.has_alternate());
    }

    #[test]
    fn codes_never_exceed_length() {
        for word in ["swordfish", "filipowicz", "schermerhorn", "xavier", "zzz"] {
            for n in 1..6 {
                let code = encode(word, n).unwrap();
                assert!(code.primary().len() <= n, "{word} {n}");
                assert!(code.alternate().len() <= n, "{word} {n}");
                assert_ne!(code.primary(), code.alternate(), "{word} {n}");
            }
        }
    }

    #[test]
    fn non_latin_input_produces_empty_codes() {
        let code = encode("日本語", 4).unwrap();
        assert_eq!(code.primary(), "");
        assert_eq!(code.alternate(), "");
    }

    #[test]
    fn encoder_reuses_length() {
        let enc = Encoder::new(3);
        assert_eq!(enc.encode("richard").unwrap().primary(), "RXR");
    }
}
