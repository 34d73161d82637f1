//! Placement orchestration and run results
//!
//! The placer owns the run state (grid, placed words) exclusively for the
//! duration of one `place_words` call. Each run resets the state wholesale,
//! shuffles the word order, and commits one randomly chosen candidate per
//! word. There is no backtracking: a word with no legal candidate is
//! skipped for the run and never revisited.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::algorithm::search::find_candidates;
use crate::algorithm::vocabulary::Vocabulary;
use crate::io::error::Result;
use crate::spatial::{Grid, WordSpan};

/// A committed word with the cells it owns
///
/// Created exactly once when a candidate is committed; never mutated or
/// removed within a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    /// The placed word, lowercase
    pub word: String,
    /// Cells the word occupies
    pub span: WordSpan,
    /// Ordered cells, first letter first
    pub cells: Vec<[i32; 2]>,
}

/// One occupied cell in the final grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedLetter {
    /// Cell holding the letter
    pub position: [i32; 2],
    /// The letter, lowercase
    pub letter: char,
}

/// Outcome of one placement run
///
/// The placed list may be a strict subset of the input; `unplaced` holds
/// the remainder in vocabulary order. A presentation layer renders this
/// however it likes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementResult {
    /// Grid row count
    pub rows: usize,
    /// Grid column count
    pub cols: usize,
    /// Letter for each occupied cell, in row-major order
    pub letters: Vec<PlacedLetter>,
    /// Words committed during the run, in placement order
    pub placed: Vec<PlacedWord>,
    /// Input words that found no legal position
    pub unplaced: Vec<String>,
}

impl PlacementResult {
    /// Letter at a cell, if occupied
    pub fn letter_at(&self, position: [i32; 2]) -> Option<char> {
        self.letters
            .iter()
            .find(|cell| cell.position == position)
            .map(|cell| cell.letter)
    }

    /// Number of words placed
    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }
}

/// Drives placement runs over a fixed grid shape and vocabulary
///
/// One placer supports any number of sequential runs; runs never share
/// state beyond the seeded generator, so re-running may place a different
/// subset. Not safe to share across threads mid-run: intermediate occupancy
/// is unguarded mutable state, one run at a time per instance.
#[derive(Debug)]
pub struct WordPlacer {
    grid: Grid,
    vocabulary: Vocabulary,
    rng: StdRng,
    placed: Vec<PlacedWord>,
}

impl WordPlacer {
    /// Create a placer for a grid shape and candidate word list
    ///
    /// # Errors
    ///
    /// Returns an error if the grid shape is degenerate or any word fails
    /// vocabulary normalization.
    pub fn new<I, S>(rows: usize, cols: usize, words: I, seed: u64) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::from_vocabulary(
            Grid::new(rows, cols)?,
            Vocabulary::from_words(words)?,
            seed,
        ))
    }

    /// Create a placer from already-constructed parts
    pub fn from_vocabulary(grid: Grid, vocabulary: Vocabulary, seed: u64) -> Self {
        Self {
            grid,
            vocabulary,
            rng: StdRng::seed_from_u64(seed),
            placed: Vec::new(),
        }
    }

    /// Current grid state
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The normalized vocabulary
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Execute one complete placement run
    ///
    /// Resets the run state, shuffles the vocabulary uniformly, then for
    /// each word enumerates candidates and commits one chosen uniformly at
    /// random. An empty vocabulary yields an empty placement.
    pub fn place_words(&mut self) -> PlacementResult {
        self.grid.reset();
        self.placed.clear();

        let mut order = self.vocabulary.words().to_vec();
        order.shuffle(&mut self.rng);

        for word in &order {
            self.try_place_word(word);
        }

        self.build_result()
    }

    /// Run placement repeatedly and keep the densest outcome
    ///
    /// Each attempt is a full independent run; density improves by
    /// re-invoking whole runs, never by partial backtracking. Stops early
    /// once every word is placed. `attempts` is clamped to at least one.
    pub fn place_words_best_of(&mut self, attempts: usize) -> PlacementResult {
        let mut best: Option<PlacementResult> = None;
        let total = self.vocabulary.len();

        for _ in 0..attempts.max(1) {
            let result = self.place_words();
            let complete = result.placed_count() == total;
            if best
                .as_ref()
                .is_none_or(|current| result.placed_count() > current.placed_count())
            {
                best = Some(result);
            }
            if complete {
                break;
            }
        }

        // The loop always runs at least once
        best.unwrap_or_else(|| self.build_result())
    }

    /// Attempt to place one word, committing a random legal candidate
    fn try_place_word(&mut self, word: &str) -> bool {
        let candidates = find_candidates(&self.grid, &self.vocabulary, word);
        if candidates.is_empty() {
            return false;
        }

        let choice = self.rng.random_range(0..candidates.len());
        let Some(candidate) = candidates.get(choice).copied() else {
            return false;
        };

        for (index, &letter) in word.as_bytes().iter().enumerate() {
            let cell = candidate.span.cell(index);
            // The intersection cell already holds the identical letter
            if !self.grid.is_occupied(cell) {
                self.grid.commit_letter(cell, letter);
            }
        }

        self.placed.push(PlacedWord {
            word: word.to_string(),
            span: candidate.span,
            cells: candidate.span.cells().collect(),
        });
        true
    }

    /// Snapshot the current run state into a result
    fn build_result(&self) -> PlacementResult {
        let letters = self
            .grid
            .occupied_cells()
            .map(|(position, letter)| PlacedLetter {
                position,
                letter: char::from(letter),
            })
            .collect();

        let unplaced = self
            .vocabulary
            .words()
            .iter()
            .filter(|word| !self.placed.iter().any(|placed| &placed.word == *word))
            .cloned()
            .collect();

        PlacementResult {
            rows: self.grid.rows(),
            cols: self.grid.cols(),
            letters,
            placed: self.placed.clone(),
            unplaced,
        }
    }
}
