// Word-list loading from plain text or gzip-compressed input.

use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

use flate2::bufread::MultiGzDecoder;
use log::debug;

use crate::tokenizer::Tokens;

/// First two bytes of every gzip member.
const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
    #[error("word list line {line} is not valid UTF-8")]
    InvalidUtf8 { line: usize },
}

/// Returns `true` if `header` starts with the gzip magic bytes.
pub fn is_gzip(header: &[u8]) -> bool {
    header.starts_with(&GZIP_MAGIC)
}

/// Read every word from `reader`.
///
/// Gzip input is detected from its first two bytes and decompressed on the
/// fly; anything else, including input that ends before two bytes, is read
/// as plain UTF-8 text. Words are produced by
/// [`parse_line`](crate::tokenizer::parse_line), in input order and with
/// duplicates kept.
pub fn load_words<R: Read>(mut reader: R) -> Result<Vec<String>, LoadError> {
    // Keeps reading until the header is complete or the input ends.
    let mut header = Vec::with_capacity(GZIP_MAGIC.len());
    (&mut reader)
        .take(GZIP_MAGIC.len() as u64)
        .read_to_end(&mut header)?;
    let compressed = is_gzip(&header);
    let input = BufReader::new(Cursor::new(header).chain(reader));

    let words: Vec<String> = if compressed {
        debug!("word list is gzip-compressed");
        Tokens::new(BufReader::new(MultiGzDecoder::new(input))).collect::<Result<_, _>>()?
    } else {
        Tokens::new(input).collect::<Result<_, _>>()?
    };

    debug!("loaded {} words", words.len());
    Ok(words)
}

/// Open `path` and read its words with [`load_words`].
pub fn load_words_from_path(path: impl AsRef<Path>) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    debug!("loading word list from {}", path.display());
    load_words(File::open(path)?)
}
