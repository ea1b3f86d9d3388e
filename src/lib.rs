//! Combine per-seed independent-set visualizations into one composite image
//!
//! Every experiment instance lives in its own directory, named after the graph
//! family, graph size and seed. An instance holds its maximum independent-set
//! size and several renderings indexed by `K`. For a chosen fraction alpha the
//! rendering `K = ceil(size * alpha)` of each instance is pasted into a square
//! grid and the result written as a single JPEG.

#![forbid(unsafe_code)]

/// Tile naming, selection and grid composition
pub mod compose;
/// Input/output operations and error handling
pub mod io;

pub use compose::{CombineConfig, Composer, combine};
pub use io::error::{ComposeError, Result};
