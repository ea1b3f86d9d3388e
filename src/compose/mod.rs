//! Tile naming, selection and grid composition

/// Top-level planning and composing of the tile grid
pub mod composer;
/// Graph families and their directory and output names
pub mod family;
/// Grid geometry mapping seeds to canvas positions
pub mod layout;
/// Selection index arithmetic and tile lookup
pub mod selection;

pub use composer::{CombineConfig, Composer, TilePlan, combine};
pub use family::GraphFamily;
pub use layout::GridLayout;
pub use selection::{TileChoice, TileSelection};
