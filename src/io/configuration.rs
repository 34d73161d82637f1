//! Placement constants and runtime configuration defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible layouts
pub const DEFAULT_SEED: u64 = 42;

/// Default grid size (square unless columns are overridden)
pub const DEFAULT_GRID_SIZE: usize = 9;

/// Default number of full runs to try per word list, keeping the densest
pub const DEFAULT_ATTEMPTS: usize = 25;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_layout";

/// Side length in pixels of one grid cell in exported images
pub const EXPORT_CELL_PIXELS: u32 = 16;
