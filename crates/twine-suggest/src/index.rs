// Phonetic bucket index: code -> set of words sharing that code.

use hashbrown::{HashMap, HashSet};
use twine_core::DualCode;
use twine_metaphone::{EncodeError, encode};

/// Words grouped by phonetic code.
///
/// Every word is stored under its primary code and, when it has one, under
/// its alternate code. Empty codes are never used as keys. The index only
/// grows; there is no removal.
#[derive(Debug, Default, Clone)]
pub struct PhoneticIndex {
    buckets: HashMap<String, HashSet<String>>,
    words: HashSet<String>,
}

impl PhoneticIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode `word` and add it under each of its codes.
    ///
    /// Returns `true` if the word was not in the index before.
    pub fn insert_word(&mut self, word: &str, code_length: usize) -> Result<bool, EncodeError> {
        let code = encode(word, code_length)?;
        Ok(self.insert(word, &code))
    }

    /// Add `word` under the codes of an already computed `code`.
    pub fn insert(&mut self, word: &str, code: &DualCode) -> bool {
        for key in code.codes() {
            match self.buckets.get_mut(key) {
                Some(bucket) => {
                    bucket.insert(word.to_string());
                }
                None => {
                    let mut bucket = HashSet::new();
                    bucket.insert(word.to_string());
                    self.buckets.insert(key.to_string(), bucket);
                }
            }
        }
        if self.words.contains(word) {
            false
        } else {
            self.words.insert(word.to_string())
        }
    }

    /// Words stored under `code`, if any.
    pub fn bucket(&self, code: &str) -> Option<&HashSet<String>> {
        self.buckets.get(code)
    }

    /// The union of the buckets for the primary and alternate of `code`.
    ///
    /// Each word appears once even when it sits in both buckets. The order
    /// is unspecified.
    pub fn candidates<'a>(&'a self, code: &DualCode) -> Vec<&'a str> {
        let primary = self.bucket(code.primary());
        let mut out: Vec<&str> = primary
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect();
        if code.has_alternate() {
            if let Some(alternate) = self.bucket(code.alternate()) {
                out.extend(
                    alternate
                        .iter()
                        .filter(|w| !primary.is_some_and(|p| p.contains(*w)))
                        .map(String::as_str),
                );
            }
        }
        out
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct phonetic codes.
    pub fn code_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of distinct words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(words: &[&str]) -> PhoneticIndex {
        let mut index = PhoneticIndex::new();
        for w in words {
            index.insert_word(w, 4).unwrap();
        }
        index
    }

    fn sorted(mut v: Vec<&str>) -> Vec<&str> {
        v.sort_unstable();
        v
    }

    #[test]
    fn words_land_in_both_buckets() {
        let index = index_of(&["smith"]);
        assert!(index.bucket("SM0").unwrap().contains("smith"));
        assert!(index.bucket("XMT").unwrap().contains("smith"));
        assert_eq!(index.code_count(), 2);
        assert_eq!(index.word_count(), 1);
    }

    #[test]
    fn duplicates_collapse() {
        let mut index = index_of(&["cat"]);
        assert!(!index.insert_word("cat", 4).unwrap());
        assert_eq!(index.bucket("KT").unwrap().len(), 1);
        assert_eq!(index.word_count(), 1);
    }

    #[test]
    fn empty_codes_are_not_keys() {
        // No rule emits anything for digits.
        let index = index_of(&["1234"]);
        assert_eq!(index.code_count(), 0);
        assert!(index.bucket("").is_none());
        assert!(index.contains("1234"));
    }

    #[test]
    fn empty_word_is_an_error() {
        let mut index = PhoneticIndex::new();
        assert_eq!(index.insert_word("", 4), Err(EncodeError::EmptyInput));
        assert!(index.is_empty());
    }

    #[test]
    fn candidates_are_the_deduplicated_union() {
        // "smith" and "schmidt" share XMT; "smyth" shares SM0 with "smith".
        let index = index_of(&["smith", "schmidt", "smyth", "cat"]);
        let code = encode("smith", 4).unwrap();
        assert_eq!(
            sorted(index.candidates(&code)),
            vec!["schmidt", "smith", "smyth"]
        );
    }

    #[test]
    fn candidates_without_alternate() {
        let index = index_of(&["cat", "kit", "smith"]);
        let code = encode("cot", 4).unwrap();
        assert!(!code.has_alternate());
        assert_eq!(sorted(index.candidates(&code)), vec!["cat", "kit"]);
    }

    #[test]
    fn candidates_from_alternate_only() {
        let index = index_of(&["schmidt"]);
        // "smith" has primary SM0, which no indexed word uses.
        let code = encode("smith", 4).unwrap();
        assert!(index.bucket(code.primary()).is_none());
        assert_eq!(index.candidates(&code), vec!["schmidt"]);
    }
}
