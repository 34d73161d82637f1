//! Orientation and word-span geometry
//!
//! A span is the line of cells a word would occupy: a start cell, an
//! orientation, and a length. Positions use `[row, col]` pairs; spans
//! derived from intersections may start outside the grid, so coordinates
//! stay signed until the boundary check converts them.

/// Axis a word is written along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Row fixed, column increases
    Across,
    /// Column fixed, row increases
    Down,
}

impl Orientation {
    /// Per-index step as a `[row, col]` delta
    pub const fn delta(self) -> [i32; 2] {
        match self {
            Self::Across => [0, 1],
            Self::Down => [1, 0],
        }
    }

    /// The other axis
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    /// Both orientations, in the order candidates are tried
    pub const fn both() -> [Self; 2] {
        [Self::Across, Self::Down]
    }
}

/// The line of cells a word occupies or would occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan {
    /// Cell of the word's first letter
    pub start: [i32; 2],
    /// Axis the word is written along
    pub orientation: Orientation,
    /// Number of letters
    pub len: usize,
}

impl WordSpan {
    /// Create a span from its start cell
    pub const fn new(start: [i32; 2], orientation: Orientation, len: usize) -> Self {
        Self {
            start,
            orientation,
            len,
        }
    }

    /// Create the span whose letter at `index` lands on `intersection`
    ///
    /// The start is walked back `index` steps along the orientation, so it
    /// may lie outside the grid; the boundary check rejects such spans.
    pub const fn through(
        intersection: [i32; 2],
        index: usize,
        orientation: Orientation,
        len: usize,
    ) -> Self {
        let delta = orientation.delta();
        let start = [
            intersection[0] - delta[0] * index as i32,
            intersection[1] - delta[1] * index as i32,
        ];
        Self::new(start, orientation, len)
    }

    /// Cell occupied by the letter at `index`
    pub const fn cell(&self, index: usize) -> [i32; 2] {
        let delta = self.orientation.delta();
        [
            self.start[0] + delta[0] * index as i32,
            self.start[1] + delta[1] * index as i32,
        ]
    }

    /// Cell of the last letter
    pub const fn end(&self) -> [i32; 2] {
        self.cell(self.len.saturating_sub(1))
    }

    /// Cell immediately before the first letter, along the orientation
    pub const fn before(&self) -> [i32; 2] {
        let delta = self.orientation.delta();
        [self.start[0] - delta[0], self.start[1] - delta[1]]
    }

    /// Cell immediately after the last letter, along the orientation
    pub const fn after(&self) -> [i32; 2] {
        let delta = self.orientation.delta();
        let end = self.end();
        [end[0] + delta[0], end[1] + delta[1]]
    }

    /// Iterate the cells of the span in letter order
    pub fn cells(&self) -> impl Iterator<Item = [i32; 2]> + '_ {
        (0..self.len).map(|index| self.cell(index))
    }

    /// Whether `position` is one of the span's cells
    pub fn contains(&self, position: [i32; 2]) -> bool {
        self.cells().any(|cell| cell == position)
    }
}
