//! Word lists: dictionaries and stop words, one word per line.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Result, WordCountError};

/// Stop words used when no list is configured.
const BUNDLED_STOP_WORDS: &str = include_str!("../stopwords.txt");

/// Parses one word per line; lines are taken verbatim.
pub fn parse_word_list(content: &str) -> HashSet<String> {
    content.lines().map(str::to_owned).collect()
}

/// Reads a word list from `path`.
pub fn read_word_list(path: &Path) -> Result<HashSet<String>> {
    let content = fs::read_to_string(path).map_err(|source| WordCountError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_word_list(&content);
    info!(path = %path.display(), words = words.len(), "word list loaded");
    Ok(words)
}

/// The stop-word list shipped with the binary.
pub fn default_stop_words() -> HashSet<String> {
    parse_word_list(BUNDLED_STOP_WORDS)
}
