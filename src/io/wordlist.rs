//! Word list file parsing
//!
//! A word list is a UTF-8 text file with one word per line. Blank lines and
//! lines starting with `#` are ignored; everything else must survive
//! vocabulary normalization.

use std::path::Path;

use crate::algorithm::vocabulary::Vocabulary;
use crate::io::error::{PlacementError, Result};

/// Load a vocabulary from a word list file
///
/// # Errors
///
/// Returns an error if the file cannot be read or any word fails
/// normalization.
pub fn load_word_list(path: &Path) -> Result<Vocabulary> {
    let content = std::fs::read_to_string(path).map_err(|e| PlacementError::WordListLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_word_list(&content)
}

/// Parse word list content into a vocabulary
///
/// # Errors
///
/// Returns [`PlacementError::InvalidWord`] for entries containing anything
/// other than ASCII letters.
pub fn parse_word_list(content: &str) -> Result<Vocabulary> {
    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));
    Vocabulary::from_words(words)
}
