//! Fixed-shape letter grid with occupancy tracking
//!
//! The grid owns the rows × cols cell matrix for one placement run. Shape is
//! fixed at construction; content is cleared wholesale by [`Grid::reset`].
//! Lookups for out-of-range coordinates fail silently with "no letter", so
//! adjacency probes never need their own bounds handling.

use bitvec::prelude::{BitVec, bitvec};
use ndarray::Array2;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{PlacementError, Result};

/// Letter matrix and occupancy state for a single placement run
///
/// Letters are lowercase ASCII bytes; `0` marks an empty cell. Occupancy is
/// a packed bit set keyed `row * cols + col`, one bit per cell.
#[derive(Debug, Clone)]
pub struct Grid {
    letters: Array2<u8>,
    occupied: BitVec,
    dimensions: (usize, usize),
}

impl Grid {
    /// Create an empty grid
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidGridShape`] if either dimension is
    /// zero or exceeds [`MAX_GRID_DIMENSION`].
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 || rows > MAX_GRID_DIMENSION || cols > MAX_GRID_DIMENSION {
            return Err(PlacementError::InvalidGridShape { rows, cols });
        }

        Ok(Self {
            letters: Array2::zeros((rows, cols)),
            occupied: bitvec![0; rows * cols],
            dimensions: (rows, cols),
        })
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.dimensions.0
    }

    /// Number of columns
    pub const fn cols(&self) -> usize {
        self.dimensions.1
    }

    /// Whether a position lies inside the grid
    pub const fn is_in_bounds(&self, position: [i32; 2]) -> bool {
        position[0] >= 0
            && (position[0] as usize) < self.dimensions.0
            && position[1] >= 0
            && (position[1] as usize) < self.dimensions.1
    }

    /// Letter at a position, or `None` when empty
    ///
    /// Out-of-range positions are treated as "no letter" rather than an
    /// error; the boundary rule is responsible for range checks.
    pub fn letter_at(&self, position: [i32; 2]) -> Option<u8> {
        let index = self.matrix_index(position)?;
        self.letters
            .get(index)
            .copied()
            .filter(|&letter| letter != 0)
    }

    /// Whether a letter has been committed at a position in this run
    pub fn is_occupied(&self, position: [i32; 2]) -> bool {
        self.bit_index(position)
            .and_then(|index| self.occupied.get(index).as_deref().copied())
            .unwrap_or(false)
    }

    /// Write a letter into a cell and mark it occupied
    ///
    /// The caller guarantees the write targets an empty cell or a cell
    /// already holding the identical letter; the validator establishes this
    /// before any commit. Out-of-range positions are ignored.
    pub fn commit_letter(&mut self, position: [i32; 2], letter: u8) {
        let Some(index) = self.matrix_index(position) else {
            return;
        };
        if let Some(cell) = self.letters.get_mut(index) {
            *cell = letter;
        }
        if let Some(bit) = self.bit_index(position) {
            self.occupied.set(bit, true);
        }
    }

    /// Clear all letters and occupancy
    ///
    /// Idempotent; called at the start of every placement run.
    pub fn reset(&mut self) {
        self.letters.fill(0);
        self.occupied.fill(false);
    }

    /// Count of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.occupied.count_ones()
    }

    /// Iterate all occupied cells as `(position, letter)` pairs
    pub fn occupied_cells(&self) -> impl Iterator<Item = ([i32; 2], u8)> + '_ {
        self.occupied.iter_ones().filter_map(move |bit| {
            let position = [(bit / self.cols()) as i32, (bit % self.cols()) as i32];
            self.letter_at(position).map(|letter| (position, letter))
        })
    }

    const fn matrix_index(&self, position: [i32; 2]) -> Option<(usize, usize)> {
        if self.is_in_bounds(position) {
            Some((position[0] as usize, position[1] as usize))
        } else {
            None
        }
    }

    const fn bit_index(&self, position: [i32; 2]) -> Option<usize> {
        if self.is_in_bounds(position) {
            Some(position[0] as usize * self.dimensions.1 + position[1] as usize)
        } else {
            None
        }
    }
}
