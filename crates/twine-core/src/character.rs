// Character classification used by the encoder and the tokenizer.

/// Uppercase vowels recognised by the encoder's context tests.
///
/// The accented forms only ever matter for lookbehind/lookahead checks
/// (e.g. "is the letter before H a vowel"); word-initial vowel output is
/// decided by the plain Latin vowels alone.
const VOWELS: &str = "AEIOUYÁÂÃÄÅÆÈÉÊËÌÍÎÏÒÓÔÕÖŒØÙÚÛÜÝŸ";

/// Returns `true` if `c` is an uppercase vowel.
///
/// The input is expected to be uppercased already; lowercase vowels are not
/// recognised.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// Returns `true` if `c` belongs inside a word token.
///
/// Any Unicode letter counts. Digits, punctuation, whitespace and symbols
/// all end a token.
pub fn is_word_char(c: char) -> bool {
    c.is_alphabetic()
}

/// Uppercase `word` and return it as a random-access character buffer.
///
/// Uses the full Unicode mapping, so a single input character may expand
/// to several (`ß` becomes `SS`).
pub fn to_upper_chars(word: &str) -> Vec<char> {
    word.chars().flat_map(char::to_uppercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_vowels() {
        for c in "AEIOUY".chars() {
            assert!(is_vowel(c), "{c} should be a vowel");
        }
    }

    #[test]
    fn consonants_are_not_vowels() {
        for c in "BCDFGHJKLMNPQRSTVWXZ".chars() {
            assert!(!is_vowel(c), "{c} should not be a vowel");
        }
    }

    #[test]
    fn accented_vowels() {
        assert!(is_vowel('\u{00C4}')); // Ä
        assert!(is_vowel('\u{00D6}')); // Ö
        assert!(is_vowel('\u{0152}')); // Œ
        assert!(is_vowel('\u{0178}')); // Ÿ
        assert!(!is_vowel('\u{00C7}')); // Ç
        assert!(!is_vowel('\u{00D1}')); // Ñ
    }

    #[test]
    fn lowercase_is_not_recognised() {
        assert!(!is_vowel('a'));
        assert!(!is_vowel('\u{00E4}'));
    }

    #[test]
    fn word_chars() {
        assert!(is_word_char('a'));
        assert!(is_word_char('\u{00FC}')); // ü
        assert!(is_word_char('\u{00E7}')); // ç
        assert!(!is_word_char('1'));
        assert!(!is_word_char('-'));
        assert!(!is_word_char(' '));
        assert!(!is_word_char('"'));
    }

    #[test]
    fn uppercase_buffer() {
        let expected: Vec<char> = "FRAN\u{00C7}AIS".chars().collect();
        assert_eq!(to_upper_chars("fran\u{00E7}ais"), expected);
        assert_eq!(to_upper_chars("Jose"), vec!['J', 'O', 'S', 'E']);
        assert!(to_upper_chars("").is_empty());
    }

    #[test]
    fn uppercase_expands_sharp_s() {
        assert_eq!(to_upper_chars("stra\u{00DF}e"), "STRASSE".chars().collect::<Vec<_>>());
    }
}
