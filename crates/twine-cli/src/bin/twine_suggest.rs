// twine-suggest: Suggest known words that sound like the given ones.
//
// Reads words from stdin (one per line) or the command line and prints
// the closest known word for each. Known words are printed as-is.
//
// Usage:
//   twine-suggest [-w WORDS] [OPTIONS] [WORD...]
//
// Options:
//   -w, --words PATH         Word list (plain text or gzip)
//   -l, --code-length N      Phonetic code length (default: 4)
//   -n, --max-suggestions N  Maximum number of suggestions (default: 1)
//   -h, --help               Print help

use std::io::{self, BufRead, Write};

use twine_suggest::tokenizer::sanitize_word;
use twine_suggest::{SuggestError, SuggestOptions, SuggestionEngine};

fn main() {
    twine_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if twine_cli::wants_help(&args) {
        println!("twine-suggest: Suggest known words that sound alike.");
        println!();
        println!("Usage: twine-suggest [-w WORDS] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, suggests for each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -w, --words PATH         Word list, plain text or gzip");
        println!("                           (default: $TWINE_WORDLIST, ~/.twine/words.txt[.gz])");
        println!("  -l, --code-length N      Phonetic code length (default: 4)");
        println!("  -n, --max-suggestions N  Maximum number of suggestions (default: 1)");
        println!("  -h, --help               Print this help");
        return;
    }

    let (words_path, args) = twine_cli::parse_words_path(&args);
    let (code_length, args) = twine_cli::parse_code_length(&args);

    let mut max_suggestions: usize = 1;
    let mut words: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "-n" || arg == "--max-suggestions" {
            if i + 1 < args.len() {
                max_suggestions = twine_cli::parse_count(&args[i + 1], "--max-suggestions");
                skip_next = true;
            } else {
                twine_cli::fatal("--max-suggestions requires a value");
            }
        } else if !arg.starts_with('-') {
            words.push(arg.clone());
        }
    }

    let options = SuggestOptions {
        max_code_length: code_length,
        max_suggestions: max_suggestions.max(1),
    };
    let engine = twine_cli::load_engine(words_path.as_deref(), options)
        .unwrap_or_else(|e| twine_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            suggest_word(word, &engine, &mut out);
        }
    } else {
        for word in &words {
            suggest_word(word, &engine, &mut out);
        }
    }
}

fn suggest_word(word: &str, engine: &SuggestionEngine, out: &mut impl Write) {
    let query = sanitize_word(word);
    if query.is_empty() {
        let _ = writeln!(out, "{word}: (no suggestions)");
        return;
    }
    if engine.contains(&query) {
        let _ = writeln!(out, "{word} (known)");
        return;
    }
    match engine.suggestions(&query) {
        Ok(list) if list.len() == 1 || engine.options().max_suggestions == 1 => {
            let _ = writeln!(out, "{word}: {}", list[0].word);
        }
        Ok(list) => {
            let _ = writeln!(out, "{word}:");
            for s in &list {
                let _ = writeln!(out, "  {} ({})", s.word, s.distance);
            }
        }
        Err(SuggestError::NotFound(_)) => {
            let _ = writeln!(out, "{word}: (no suggestions)");
        }
        Err(e) => twine_cli::fatal(&e.to_string()),
    }
}
