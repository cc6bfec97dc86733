// Criterion benchmarks for index building and suggestion queries.
//
// Run: cargo bench -p twine-suggest

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use twine_suggest::{SuggestOptions, SuggestionEngine};

/// Deterministic synthetic corpus: every consonant-vowel-consonant word
/// plus a handful of common suffixes.
fn synthetic_words() -> Vec<String> {
    const CONSONANTS: &str = "bcdfghjklmnprstvwz";
    const VOWELS: &str = "aeiou";
    const SUFFIXES: &[&str] = &["", "er", "ing", "s", "ton"];
    let mut words = Vec::new();
    for a in CONSONANTS.chars() {
        for v in VOWELS.chars() {
            for b in CONSONANTS.chars() {
                for s in SUFFIXES {
                    words.push(format!("{a}{v}{b}{s}"));
                }
            }
        }
    }
    words
}

fn bench_build(c: &mut Criterion) {
    let words = synthetic_words();
    c.bench_function("build_synthetic_corpus", |b| {
        b.iter(|| {
            let engine = SuggestionEngine::new(SuggestOptions::default());
            black_box(engine.build(words.iter()))
        })
    });
}

fn bench_suggest(c: &mut Criterion) {
    let engine = SuggestionEngine::from_words(synthetic_words(), SuggestOptions::default());
    let queries = ["kaat", "biting", "mosten", "wezzer", "dzug"];
    c.bench_function("suggest_queries", |b| {
        b.iter(|| {
            for q in queries {
                let _ = black_box(engine.suggest(black_box(q)));
            }
        })
    });
}

criterion_group!(benches, bench_build, bench_suggest);
criterion_main!(benches);
