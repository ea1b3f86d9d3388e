//! Input/output: command line, constants, errors and file formats

/// Command-line parsing and command dispatch
pub mod cli;
/// Naming constants and defaults
pub mod configuration;
/// Error types for all compose operations
pub mod error;
/// Tile decoding, pasting and JPEG export
pub mod image;
/// Terminal progress bars
pub mod progress;
/// Threshold file parsing
pub mod threshold;
