//! Core placement engine
//!
//! Validation, candidate search, and run orchestration over the spatial
//! grid model.

/// Placement orchestration and run results
pub mod placer;
/// Candidate enumeration for words against the current grid
pub mod search;
/// Placement legality rules
pub mod validator;
/// Vocabulary normalization and membership checks
pub mod vocabulary;

pub use placer::{PlacementResult, WordPlacer};
pub use vocabulary::Vocabulary;
