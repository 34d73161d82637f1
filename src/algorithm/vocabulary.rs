//! Vocabulary normalization and membership checks
//!
//! The same word list drives both placement order and crossword legality:
//! a perpendicular run of letters is legal only when it is a single letter
//! or a member of this vocabulary. There is no separate dictionary source.

use std::collections::HashSet;

use crate::io::error::{PlacementError, Result};

/// Normalized candidate word list with membership lookup
///
/// Words are lowercased at construction and deduplicated while preserving
/// first-occurrence order, so duplicate entries in the input carry no
/// meaning beyond "place once".
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<String>,
    members: HashSet<Vec<u8>>,
}

impl Vocabulary {
    /// Build a vocabulary from candidate words
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidWord`] for empty words or words
    /// containing anything other than ASCII letters.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized = Vec::new();
        let mut members = HashSet::new();

        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                return Err(PlacementError::InvalidWord {
                    word: String::new(),
                    reason: "words must contain at least one letter".to_string(),
                });
            }
            if !word.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(PlacementError::InvalidWord {
                    word: word.to_string(),
                    reason: "words must contain only ASCII letters".to_string(),
                });
            }

            let lowered = word.to_ascii_lowercase();
            if members.insert(lowered.clone().into_bytes()) {
                normalized.push(lowered);
            }
        }

        Ok(Self {
            words: normalized,
            members,
        })
    }

    /// Normalized words in first-occurrence order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the vocabulary holds no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Membership test for a letter sequence
    ///
    /// Used by crossword legality on runs assembled directly from grid
    /// bytes; input is expected to already be lowercase ASCII.
    pub fn contains_letters(&self, letters: &[u8]) -> bool {
        self.members.contains(letters)
    }

    /// Membership test for a string, normalizing case first
    pub fn contains(&self, word: &str) -> bool {
        self.contains_letters(word.to_ascii_lowercase().as_bytes())
    }
}
