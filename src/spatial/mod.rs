//! Spatial data structures for the placement engine
//!
//! This module contains the grid model and span geometry:
//! - Letter grid with occupancy tracking
//! - Orientation and word-span cell arithmetic

/// Letter grid with occupancy tracking
pub mod grid;
/// Orientation and word-span geometry
pub mod span;

pub use grid::Grid;
pub use span::{Orientation, WordSpan};
