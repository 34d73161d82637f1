//! Crossword-style word placement on a rectangular grid
//!
//! Given a fixed vocabulary, the engine arranges a subset of it so that
//! every word after the first shares a letter with the existing structure
//! and every perpendicular letter run is itself a vocabulary word. Words
//! with no legal position are dropped; the result reports both outcomes.

#![forbid(unsafe_code)]

/// Core placement engine: validation, candidate search, and orchestration
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Grid model and span geometry
pub mod spatial;

pub use algorithm::placer::{PlacementResult, WordPlacer};
pub use io::error::{PlacementError, Result};
