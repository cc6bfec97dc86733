//! Spelling suggestions by sound.
//!
//! Words from a corpus are grouped by their Double Metaphone codes. A query
//! is encoded the same way and the closest word (by edit distance) among
//! those sharing one of its codes is returned.
//!
//! # Architecture
//!
//! - [`tokenizer`]: lowercasing word splitter for corpus lines
//! - [`loader`]: plain or gzip-compressed word list reader
//! - [`index`]: phonetic code to word set buckets
//! - [`engine`]: lock-guarded index with ranked suggestion queries
//! - [`trie`]: standalone prefix tree with counted prefixes
//!
//! ```
//! use twine_suggest::{SuggestOptions, SuggestionEngine};
//!
//! let words = ["filipowicz", "français", "cat"];
//! let engine = SuggestionEngine::from_words(words, SuggestOptions::default());
//! assert_eq!(engine.suggest("caaat").unwrap(), "cat");
//! assert_eq!(engine.suggest("france").unwrap(), "français");
//! ```

pub mod engine;
pub mod index;
pub mod loader;
pub mod tokenizer;
pub mod trie;

pub use engine::{BuildStats, SuggestError, SuggestOptions, Suggestion, SuggestionEngine};
pub use index::PhoneticIndex;
pub use loader::{LoadError, load_words, load_words_from_path};
pub use trie::{Trie, TrieError};
