// Word-list tokenization: lowercase and split on every non-letter.

use std::io::BufRead;

use twine_core::character::is_word_char;

use crate::loader::LoadError;

/// Split `line` into lowercased words.
///
/// A word is a maximal run of letters; digits, punctuation and whitespace
/// all separate words and are dropped.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    for c in line.chars().flat_map(char::to_lowercase) {
        if is_word_char(c) {
            current.push(c);
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Lowercase `word` and drop every character that is not a letter.
///
/// Unlike [`parse_line`], the letters on both sides of a separator are
/// joined: `"records--of"` becomes `"recordsof"`.
pub fn sanitize_word(word: &str) -> String {
    word.chars()
        .flat_map(char::to_lowercase)
        .filter(|&c| is_word_char(c))
        .collect()
}

/// Iterator over the words of a line-oriented reader.
///
/// Each line must be valid UTF-8; the first line that is not ends the
/// iteration with [`LoadError::InvalidUtf8`].
pub struct Tokens<R> {
    reader: R,
    buf: Vec<u8>,
    line: usize,
    pending: std::vec::IntoIter<String>,
    finished: bool,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line: 0,
            pending: Vec::new().into_iter(),
            finished: false,
        }
    }

    fn next_line(&mut self) -> Result<bool, LoadError> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(false);
        }
        self.line += 1;
        let text = std::str::from_utf8(&self.buf)
            .map_err(|_| LoadError::InvalidUtf8 { line: self.line })?;
        self.pending = parse_line(text).into_iter();
        Ok(true)
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = Result<String, LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(word) = self.pending.next() {
                return Some(Ok(word));
            }
            if self.finished {
                return None;
            }
            match self.next_line() {
                Ok(true) => {}
                Ok(false) => {
                    self.finished = true;
                    return None;
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_splits_on_non_letters() {
        assert_eq!(parse_line("a b c d"), vec!["a", "b", "c", "d"]);
        assert!(parse_line("").is_empty());
        assert_eq!(
            parse_line("Sch\u{00FC}bler d.? \"' e fff fran\u{00E7}ais"),
            vec!["sch\u{00FC}bler", "d", "e", "fff", "fran\u{00E7}ais"]
        );
        assert_eq!(parse_line("records--of"), vec!["records", "of"]);
        assert_eq!(parse_line("  abc123def  "), vec!["abc", "def"]);
    }

    #[test]
    fn sanitize_word_keeps_letters_only() {
        assert_eq!(sanitize_word(""), "");
        assert_eq!(sanitize_word("Sch\u{00FC}bler?"), "sch\u{00FC}bler");
        assert_eq!(sanitize_word(".Sch\u{00FC}bler!"), "sch\u{00FC}bler");
        assert_eq!(sanitize_word(".Sch\u{00FC}bler "), "sch\u{00FC}bler");
        assert_eq!(sanitize_word("records--of"), "recordsof");
    }

    #[test]
    fn tokens_walks_every_line() {
        let input = "The cat\nsat, on\n\nthe MAT.\n";
        let words: Vec<String> = Tokens::new(input.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(words, vec!["the", "cat", "sat", "on", "the", "mat"]);
    }

    #[test]
    fn tokens_handles_missing_final_newline() {
        let mut tokens = Tokens::new("alpha\nbeta".as_bytes());
        assert_eq!(tokens.next().unwrap().unwrap(), "alpha");
        assert_eq!(tokens.next().unwrap().unwrap(), "beta");
        assert!(tokens.next().is_none());
    }

    #[test]
    fn tokens_reports_bad_utf8_line() {
        let input: &[u8] = b"good\nbad \xFF\xFE\nnever";
        let mut tokens = Tokens::new(input);
        assert_eq!(tokens.next().unwrap().unwrap(), "good");
        match tokens.next() {
            Some(Err(LoadError::InvalidUtf8 { line })) => assert_eq!(line, 2),
            other => panic!("expected InvalidUtf8, got {other:?}"),
        }
        assert!(tokens.next().is_none());
    }
}
