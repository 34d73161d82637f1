//! Candidate enumeration for one word against the current grid
//!
//! The first word of a run is anchored at the grid centre; every later word
//! is anchored at an occupied cell whose letter it shares, trying both
//! orientations for every matching letter index. Everything the validator
//! accepts is returned; an empty result is the normal "word cannot be
//! placed" signal.

use crate::algorithm::validator::{Candidate, is_valid};
use crate::algorithm::vocabulary::Vocabulary;
use crate::spatial::{Grid, Orientation, WordSpan};

/// Enumerate all legal placements for a word
///
/// `word` must already be normalized lowercase ASCII.
pub fn find_candidates(grid: &Grid, vocabulary: &Vocabulary, word: &str) -> Vec<Candidate> {
    if grid.occupied_count() == 0 {
        centre_candidates(grid, vocabulary, word)
    } else {
        connecting_candidates(grid, vocabulary, word)
    }
}

/// Candidates for the first word, anchored at the grid centre
///
/// Both orientations start at the fixed centre cell. The row count feeds
/// both axes; grids are square in the common case and the centre column
/// follows the row axis on rectangular ones.
fn centre_candidates(grid: &Grid, vocabulary: &Vocabulary, word: &str) -> Vec<Candidate> {
    let centre = (grid.rows() / 2) as i32;

    Orientation::both()
        .into_iter()
        .map(|orientation| Candidate {
            span: WordSpan::new([centre, centre], orientation, word.len()),
            intersection: None,
        })
        .filter(|candidate| is_valid(grid, vocabulary, word, candidate))
        .collect()
}

/// Candidates intersecting the existing structure
///
/// For every occupied cell and every index where the word's letter equals
/// that cell's letter, derive the start so the letter lands on the cell and
/// submit both orientations to the validator.
fn connecting_candidates(grid: &Grid, vocabulary: &Vocabulary, word: &str) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for (position, existing) in grid.occupied_cells() {
        for (index, &letter) in word.as_bytes().iter().enumerate() {
            if letter != existing {
                continue;
            }

            for orientation in Orientation::both() {
                let candidate = Candidate {
                    span: WordSpan::through(position, index, orientation, word.len()),
                    intersection: Some(position),
                };
                if is_valid(grid, vocabulary, word, &candidate) {
                    candidates.push(candidate);
                }
            }
        }
    }

    candidates
}
