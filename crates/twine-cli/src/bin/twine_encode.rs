// twine-encode: Print Double Metaphone codes for words.
//
// Usage:
//   twine-encode [-l N] [WORD...]
//
// Prints one line per word: word, primary code and alternate code,
// separated by tabs. Reads one word per line from stdin when no WORD
// arguments are given.

use std::io::{self, BufRead, Write};

use twine_metaphone::Encoder;

fn main() {
    twine_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if twine_cli::wants_help(&args) {
        println!("twine-encode: Print Double Metaphone codes.");
        println!();
        println!("Usage: twine-encode [-l N] [WORD...]");
        println!();
        println!("If WORD arguments are given, encodes each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -l, --code-length N  Maximum code length (default: 4)");
        println!("  -h, --help           Print this help");
        return;
    }

    let (code_length, words) = twine_cli::parse_code_length(&args);
    let encoder = Encoder::new(code_length);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut encode_word = |word: &str| match encoder.encode(word) {
        Ok(code) => {
            let _ = writeln!(out, "{word}\t{}\t{}", code.primary(), code.alternate());
        }
        Err(e) => log::warn!("{word:?}: {e}"),
    };

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
            encode_word(word);
        }
    } else {
        for word in &words {
            encode_word(word);
        }
    }
}
