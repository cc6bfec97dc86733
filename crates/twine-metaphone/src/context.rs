// Cursor and bounds-checked window tests over an uppercased word.

use twine_core::character::is_vowel;

/// Word starts whose first letter is silent ("gnome", "knight", "psalm").
const SILENT_STARTS: &[&str] = &["GN", "KN", "PN", "WR", "PS"];

/// Prefixes that mark a word as probably Slavic or Germanic.
const SLAVO_GERMANIC_PREFIXES: &[&str] = &["SCH", "SW", "J", "W", "CZ", "K", "WITZ"];

/// Returns `true` if `pattern` occurs in `word` starting at `start`.
///
/// A window that starts before the word or runs past its end never matches.
fn window_matches(word: &[char], start: isize, pattern: &str) -> bool {
    if start < 0 || pattern.is_empty() {
        return false;
    }
    let start = start as usize;
    let mut idx = start;
    for pc in pattern.chars() {
        match word.get(idx) {
            Some(&wc) if wc == pc => idx += 1,
            _ => return false,
        }
    }
    true
}

/// Returns `true` if `word` begins with a silent consonant cluster.
pub fn has_silent_start(word: &[char]) -> bool {
    SILENT_STARTS.iter().any(|p| window_matches(word, 0, p))
}

/// Returns `true` if `word` begins with one of the Slavo-Germanic prefixes.
pub fn is_slavo_germanic(word: &[char]) -> bool {
    SLAVO_GERMANIC_PREFIXES
        .iter()
        .any(|p| window_matches(word, 0, p))
}

/// Read-only view of the word at the current cursor position.
///
/// All offset-taking methods are relative to the cursor and accept negative
/// offsets for lookbehind.
pub struct Context<'a> {
    word: &'a [char],
    pos: usize,
    slavo_germanic: bool,
}

impl<'a> Context<'a> {
    /// Create a context positioned at the start of `word`.
    ///
    /// `word` must already be uppercased.
    pub fn new(word: &'a [char]) -> Self {
        Self {
            word,
            pos: 0,
            slavo_germanic: is_slavo_germanic(word),
        }
    }

    /// Create a context positioned at `pos`.
    pub fn at_position(word: &'a [char], pos: usize) -> Self {
        let mut ctx = Self::new(word);
        ctx.pos = pos;
        ctx
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    /// The character under the cursor, if any.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.word.get(self.pos).copied()
    }

    #[inline]
    pub fn is_first(&self) -> bool {
        self.pos == 0
    }

    #[inline]
    pub fn is_last(&self) -> bool {
        self.pos + 1 == self.word.len()
    }

    /// Index of the last character as a signed value (`-1` for an empty word).
    #[inline]
    pub fn last_index(&self) -> isize {
        self.word.len() as isize - 1
    }

    #[inline]
    pub fn slavo_germanic(&self) -> bool {
        self.slavo_germanic
    }

    /// Returns `true` if any of `patterns` occurs at `offset` from the cursor.
    pub fn at(&self, offset: isize, patterns: &[&str]) -> bool {
        self.at_index(self.pos as isize + offset, patterns)
    }

    /// Returns `true` if any of `patterns` occurs at absolute `index`.
    pub fn at_index(&self, index: isize, patterns: &[&str]) -> bool {
        patterns.iter().any(|p| window_matches(self.word, index, p))
    }

    /// Returns `true` if the word begins with any of `patterns`.
    pub fn starts_with(&self, patterns: &[&str]) -> bool {
        self.at_index(0, patterns)
    }

    /// Returns `true` if the character at `offset` from the cursor is a vowel.
    pub fn vowel_at(&self, offset: isize) -> bool {
        self.vowel_at_index(self.pos as isize + offset)
    }

    /// Returns `true` if the character at absolute `index` is a vowel.
    pub fn vowel_at_index(&self, index: isize) -> bool {
        if index < 0 {
            return false;
        }
        self.word.get(index as usize).is_some_and(|&c| is_vowel(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn window_inside_word() {
        let w = chars("ABCDEFG");
        assert!(window_matches(&w, 2, "CD"));
        assert!(!window_matches(&w, 2, "DA"));
        assert!(window_matches(&w, 0, "ABCDEFG"));
    }

    #[test]
    fn window_out_of_range_never_matches() {
        let w = chars("AB");
        assert!(!window_matches(&w, 2, "DA"));
        assert!(!window_matches(&w, -1, "A"));
        assert!(!window_matches(&w, 1, "BC"));
        assert!(!window_matches(&[], 0, "A"));
        assert!(!window_matches(&w, 0, ""));
    }

    #[test]
    fn any_of_several_patterns() {
        let w = chars("ABCDEFG");
        let ctx = Context::at_position(&w, 3);
        assert!(!ctx.at(0, &["DC", "DA"]));
        assert!(ctx.at(0, &["DC", "DA", "DE"]));
        assert!(ctx.at(1, &["DC", "EF"]));
        assert!(ctx.at(-1, &["CD"]));
        assert!(!ctx.at(-4, &["A"]));
    }

    #[test]
    fn silent_starts() {
        assert!(has_silent_start(&chars("KNOWING")));
        assert!(has_silent_start(&chars("GNU")));
        assert!(has_silent_start(&chars("PSALM")));
        assert!(!has_silent_start(&chars("ABCDEFG")));
        assert!(!has_silent_start(&[]));
    }

    #[test]
    fn slavo_germanic_prefixes() {
        assert!(is_slavo_germanic(&chars("SCHMIDT")));
        assert!(is_slavo_germanic(&chars("SWOBODA")));
        assert!(is_slavo_germanic(&chars("JOSE")));
        assert!(is_slavo_germanic(&chars("WITZ")));
        assert!(is_slavo_germanic(&chars("KATHERINE")));
        assert!(is_slavo_germanic(&chars("CZERNY")));
        assert!(!is_slavo_germanic(&chars("CATHERINE")));
        // Only prefixes count.
        assert!(!is_slavo_germanic(&chars("FILIPOWICZ")));
    }

    #[test]
    fn cursor_position_queries() {
        let w = chars("CAT");
        let mut ctx = Context::new(&w);
        assert!(ctx.is_first());
        assert_eq!(ctx.current(), Some('C'));
        ctx.advance(2);
        assert!(ctx.is_last());
        assert_eq!(ctx.last_index(), 2);
        ctx.advance(1);
        assert_eq!(ctx.current(), None);
    }

    #[test]
    fn vowel_lookaround() {
        let w = chars("AHA");
        let ctx = Context::at_position(&w, 1);
        assert!(ctx.vowel_at(-1));
        assert!(ctx.vowel_at(1));
        assert!(!ctx.vowel_at(0));
        assert!(!ctx.vowel_at(-2));
        assert!(!ctx.vowel_at(2));
    }
}
