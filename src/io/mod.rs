//! Input/output operations and error handling

/// Command-line interface and batch processing
pub mod cli;
/// Placement constants and configuration defaults
pub mod configuration;
/// Error types for setup and output operations
pub mod error;
/// PNG export of placement results
pub mod image;
/// Progress reporting for batch processing
pub mod progress;
/// Plain-text rendering of placement results
pub mod render;
/// Word list file parsing
pub mod wordlist;
