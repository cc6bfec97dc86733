// Spelling suggestion engine over a shared phonetic index.

use log::{debug, trace, warn};
use parking_lot::RwLock;
use twine_core::edit_distance;
use twine_metaphone::{DEFAULT_CODE_LENGTH, EncodeError, Encoder};

use crate::index::PhoneticIndex;

/// Tuning knobs for [`SuggestionEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestOptions {
    /// Phonetic code length used for both indexing and queries.
    pub max_code_length: usize,
    /// Upper bound on the list returned by [`SuggestionEngine::suggestions`].
    pub max_suggestions: usize,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            max_code_length: DEFAULT_CODE_LENGTH,
            max_suggestions: 5,
        }
    }
}

/// A ranked suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub word: String,
    /// Edit distance from the query.
    pub distance: usize,
}

/// Totals reported by [`SuggestionEngine::build`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Non-empty words seen in the batch, duplicates included.
    pub words: usize,
    /// Words that were new to the index.
    pub added: usize,
    /// Distinct phonetic codes in the index after the batch.
    pub codes: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    #[error("no suggestion for {0:?}")]
    NotFound(String),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Suggests known words that sound like a query.
///
/// The index sits behind a read/write lock: [`build`](Self::build) holds
/// the write lock for a whole batch, queries only ever take the read lock,
/// so any number of threads can call [`suggest`](Self::suggest) at once.
#[derive(Debug)]
pub struct SuggestionEngine {
    index: RwLock<PhoneticIndex>,
    options: SuggestOptions,
    encoder: Encoder,
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new(SuggestOptions::default())
    }
}

impl SuggestionEngine {
    pub fn new(options: SuggestOptions) -> Self {
        Self {
            index: RwLock::new(PhoneticIndex::new()),
            encoder: Encoder::new(options.max_code_length),
            options,
        }
    }

    /// Create an engine and index `words` into it.
    pub fn from_words<I, S>(words: I, options: SuggestOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let engine = Self::new(options);
        engine.build(words);
        engine
    }

    /// Index a batch of words. Empty words are skipped.
    pub fn build<I, S>(&self, words: I) -> BuildStats
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stats = BuildStats::default();
        let mut index = self.index.write();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            stats.words += 1;
            match self.encoder.encode(word) {
                Ok(code) => {
                    if index.insert(word, &code) {
                        stats.added += 1;
                    }
                }
                Err(e) => warn!("skipping {word:?}: {e}"),
            }
        }
        stats.codes = index.code_count();
        debug!("total words: {} codes: {}", stats.words, stats.codes);
        stats
    }

    /// Best match for `query`.
    ///
    /// Candidates are the words sharing the query's primary or alternate
    /// code. The winner has the smallest edit distance to `query`; ties go
    /// to the shorter word, then to the lexicographically smaller one.
    pub fn suggest(&self, query: &str) -> Result<String, SuggestError> {
        let ranked = self.rank(query)?;
        ranked
            .into_iter()
            .min_by(|a, b| rank_key(a).cmp(&rank_key(b)))
            .map(|s| s.word)
            .ok_or_else(|| SuggestError::NotFound(query.to_string()))
    }

    /// Candidates for `query`, best first, at most `max_suggestions` of them.
    pub fn suggestions(&self, query: &str) -> Result<Vec<Suggestion>, SuggestError> {
        let mut ranked = self.rank(query)?;
        ranked.sort_by(|a, b| rank_key(a).cmp(&rank_key(b)));
        ranked.truncate(self.options.max_suggestions);
        Ok(ranked)
    }

    /// Returns `true` if `word` has been indexed.
    pub fn contains(&self, word: &str) -> bool {
        self.index.read().contains(word)
    }

    pub fn word_count(&self) -> usize {
        self.index.read().word_count()
    }

    pub fn code_count(&self) -> usize {
        self.index.read().code_count()
    }

    pub fn options(&self) -> &SuggestOptions {
        &self.options
    }

    pub fn set_max_suggestions(&mut self, max_suggestions: usize) {
        self.options.max_suggestions = max_suggestions;
    }

    /// Score every candidate; fails when there are none.
    fn rank(&self, query: &str) -> Result<Vec<Suggestion>, SuggestError> {
        let code = self.encoder.encode(query)?;
        let index = self.index.read();
        let ranked: Vec<Suggestion> = index
            .candidates(&code)
            .into_iter()
            .map(|word| Suggestion {
                word: word.to_string(),
                distance: edit_distance(query, word),
            })
            .collect();
        drop(index);

        trace!("{query:?} ({code}): {} candidates", ranked.len());
        if ranked.is_empty() {
            return Err(SuggestError::NotFound(query.to_string()));
        }
        Ok(ranked)
    }
}

fn rank_key(s: &Suggestion) -> (usize, usize, &str) {
    (s.distance, s.word.chars().count(), s.word.as_str())
}
