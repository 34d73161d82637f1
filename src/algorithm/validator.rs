//! Placement legality rules
//!
//! Decides whether one candidate placement is legal against the current
//! grid. Rules apply in order and short-circuit on the first failure:
//! boundary, end padding, per-cell compatibility with crossword legality,
//! then connectivity. A rejection is an expected search outcome, not an
//! error; the typed reason exists for diagnostics and tests.

use crate::algorithm::vocabulary::Vocabulary;
use crate::spatial::{Grid, WordSpan};

/// A proposed, not-yet-committed placement
///
/// Purely a search-time value: the span the word would occupy plus the
/// declared intersection cell linking it to the existing structure. The
/// first word of a run carries no intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Cells the word would occupy
    pub span: WordSpan,
    /// Cell shared with an already-placed word, if any
    pub intersection: Option<[i32; 2]>,
}

/// Why a candidate placement was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// A cell of the span lies outside the grid
    OutOfBounds {
        /// First offending cell
        position: [i32; 2],
    },

    /// The cell before the first letter or after the last is occupied
    ///
    /// Allowing this would silently concatenate two words end-to-end into
    /// an unintended longer string.
    EndAdjacent {
        /// The occupied padding cell
        position: [i32; 2],
    },

    /// A non-intersection cell of the span is already occupied
    ///
    /// Raised even when the existing letter happens to match: only the
    /// declared intersection cell may coincide with an existing letter.
    CellConflict {
        /// The occupied cell
        position: [i32; 2],
    },

    /// A perpendicular letter run is neither a single letter nor a word
    IllegalCrossword {
        /// Cell of the word the run passes through
        position: [i32; 2],
        /// The assembled perpendicular string
        crossword: String,
    },

    /// A non-first word does not touch the existing structure
    Disconnected,
}

/// Check a candidate against all placement rules
///
/// `word` must already be normalized lowercase ASCII and match the
/// candidate span's length; candidate search constructs both together.
///
/// # Errors
///
/// Returns the first [`Rejection`] encountered, in rule order.
pub fn validate(
    grid: &Grid,
    vocabulary: &Vocabulary,
    word: &str,
    candidate: &Candidate,
) -> Result<(), Rejection> {
    let span = &candidate.span;

    for cell in span.cells() {
        if !grid.is_in_bounds(cell) {
            return Err(Rejection::OutOfBounds { position: cell });
        }
    }

    for padding in [span.before(), span.after()] {
        if grid.letter_at(padding).is_some() {
            return Err(Rejection::EndAdjacent { position: padding });
        }
    }

    let mut connected = false;
    for (index, &letter) in word.as_bytes().iter().enumerate() {
        let cell = span.cell(index);

        if candidate.intersection == Some(cell) {
            // Letter equality at the intersection is established by search
            connected = true;
            continue;
        }

        if grid.is_occupied(cell) {
            return Err(Rejection::CellConflict { position: cell });
        }

        check_crossword(grid, vocabulary, span, cell, letter)?;
    }

    if grid.occupied_count() > 0 && !connected {
        return Err(Rejection::Disconnected);
    }

    Ok(())
}

/// Boolean convenience wrapper over [`validate`]
pub fn is_valid(grid: &Grid, vocabulary: &Vocabulary, word: &str, candidate: &Candidate) -> bool {
    validate(grid, vocabulary, word, candidate).is_ok()
}

/// Validate the perpendicular run through one cell of the span
///
/// Only runs where a perpendicular neighbor already holds a letter need
/// checking; an isolated letter always forms a run of length 1.
fn check_crossword(
    grid: &Grid,
    vocabulary: &Vocabulary,
    span: &WordSpan,
    cell: [i32; 2],
    letter: u8,
) -> Result<(), Rejection> {
    let perpendicular = span.orientation.perpendicular();
    let delta = perpendicular.delta();

    let neighbors = [
        [cell[0] - delta[0], cell[1] - delta[1]],
        [cell[0] + delta[0], cell[1] + delta[1]],
    ];

    if neighbors
        .iter()
        .all(|&neighbor| grid.letter_at(neighbor).is_none())
    {
        return Ok(());
    }

    let crossword = assemble_crossword(grid, cell, delta, letter);
    if crossword.len() == 1 || vocabulary.contains_letters(&crossword) {
        Ok(())
    } else {
        Err(Rejection::IllegalCrossword {
            position: cell,
            crossword: String::from_utf8_lossy(&crossword).into_owned(),
        })
    }
}

/// Assemble the perpendicular string through a cell
///
/// Walks outward in both perpendicular directions until an empty cell or
/// the grid edge, concatenating letters in positional order with the
/// candidate letter in place.
fn assemble_crossword(grid: &Grid, cell: [i32; 2], delta: [i32; 2], letter: u8) -> Vec<u8> {
    let mut letters = Vec::new();

    let mut current = [cell[0] - delta[0], cell[1] - delta[1]];
    while let Some(existing) = grid.letter_at(current) {
        letters.push(existing);
        current = [current[0] - delta[0], current[1] - delta[1]];
    }
    letters.reverse();

    letters.push(letter);

    let mut current = [cell[0] + delta[0], cell[1] + delta[1]];
    while let Some(existing) = grid.letter_at(current) {
        letters.push(existing);
        current = [current[0] + delta[0], current[1] + delta[1]];
    }

    letters
}
