// twine-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use log::{debug, info};
use twine_metaphone::DEFAULT_CODE_LENGTH;
use twine_suggest::{SuggestOptions, SuggestionEngine, load_words_from_path};

/// Environment variable naming the word list file.
pub const WORDLIST_ENV: &str = "TWINE_WORDLIST";

/// Per-user data directory under `$HOME`.
const DATA_DIR: &str = ".twine";

/// Word list file names, compressed first.
const WORDLIST_NAMES: &[&str] = &["words.txt.gz", "words.txt"];

/// Initialize `env_logger`, defaulting to `warn` when `RUST_LOG` is unset.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Locate a word list and build a suggestion engine from it.
///
/// Search order:
/// 1. `words_path` argument (if provided)
/// 2. `TWINE_WORDLIST` environment variable
/// 3. `~/.twine/words.txt.gz`, `~/.twine/words.txt`
/// 4. `words.txt.gz`, `words.txt` in the current working directory
pub fn load_engine(
    words_path: Option<&str>,
    options: SuggestOptions,
) -> Result<SuggestionEngine, String> {
    load_first(&build_search_paths(words_path), options)
}

/// Build an engine from the first existing file in `search_paths`.
fn load_first(
    search_paths: &[PathBuf],
    options: SuggestOptions,
) -> Result<SuggestionEngine, String> {
    for path in search_paths {
        if !path.is_file() {
            continue;
        }
        info!("reading word list {}", path.display());
        let words = load_words_from_path(path)
            .map_err(|e| format!("failed to load {}: {}", path.display(), e))?;
        let engine = SuggestionEngine::new(options);
        let stats = engine.build(words);
        debug!(
            "indexed {} distinct words under {} codes",
            stats.added, stats.codes
        );
        return Ok(engine);
    }

    Err(format!(
        "could not find a word list in any of the search paths:\n{}",
        describe_paths(search_paths)
    ))
}

/// Build the list of candidate word list files.
fn build_search_paths(words_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = words_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(WORDLIST_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        for name in WORDLIST_NAMES {
            paths.push(home.join(DATA_DIR).join(name));
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        for name in WORDLIST_NAMES {
            paths.push(cwd.join(name));
        }
    }

    paths
}

fn describe_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Remove a `--long=VALUE`, `--long VALUE` or `-s VALUE` option from `args`.
///
/// Returns `(value, remaining_args)`; the last occurrence wins.
fn take_option(args: &[String], short: &str, long: &str) -> (Option<String>, Vec<String>) {
    let prefix = format!("{long}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(&prefix) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            match iter.next() {
                Some(val) => value = Some(val.clone()),
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Parse a `--words=PATH`, `--words PATH` or `-w PATH` argument.
///
/// Returns `(words_path, remaining_args)`.
pub fn parse_words_path(args: &[String]) -> (Option<String>, Vec<String>) {
    take_option(args, "-w", "--words")
}

/// Parse a `--code-length N` or `-l N` argument, defaulting to 4.
///
/// Returns `(code_length, remaining_args)`.
pub fn parse_code_length(args: &[String]) -> (usize, Vec<String>) {
    let (value, remaining) = take_option(args, "-l", "--code-length");
    let length = match value {
        Some(v) => parse_count(&v, "--code-length"),
        None => DEFAULT_CODE_LENGTH,
    };
    (length, remaining)
}

/// Parse a non-negative integer option value or exit.
pub fn parse_count(value: &str, option: &str) -> usize {
    value
        .parse()
        .unwrap_or_else(|_| fatal(&format!("invalid number for {option}: {value}")))
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
