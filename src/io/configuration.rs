//! Naming constants and runtime defaults

// Input layout produced by the independent-set experiments
/// Root directory holding one subdirectory per experiment instance
pub const DEFAULT_DATA_DIR: &str = "data";
/// File inside each instance directory holding the maximum independent-set size
pub const THRESHOLD_FILE_NAME: &str = "SizeMax1.dat";
/// Sample count embedded in every tile file name
pub const TILE_SAMPLE_COUNT: u32 = 10_000;
/// Density factor embedded in diagonal family directory names
pub const DIAGONAL_DENSITY: &str = "0.8";

// Default values for configurable parameters
/// Vertex degree used for regular graphs
pub const DEFAULT_DEGREE: u32 = 3;
/// Side length of the tile grid
pub const DEFAULT_GRAPHSIZE: u32 = 10;

/// Largest selection index tried when searching for any available tile
pub const SEARCH_MAX_INDEX: u32 = 20;

// Output settings
/// Prefix of composite file names
pub const OUTPUT_PREFIX: &str = "combined";
/// Extension of composite file names
pub const OUTPUT_EXTENSION: &str = "jpg";
/// JPEG encoder quality for the composite
pub const JPEG_QUALITY: u8 = 75;
// Baseline JPEG stores dimensions as 16-bit values
/// Maximum width or height of the composite
pub const MAX_CANVAS_DIMENSION: u32 = 65_535;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
