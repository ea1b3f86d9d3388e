//! Square tile grid geometry
//!
//! Seeds are numbered row-major by the outer index `i`, but `i` runs along the
//! horizontal axis of the canvas and `j` along the vertical one. Seed 2 therefore
//! sits directly below seed 1, not beside it.

use crate::io::configuration::MAX_CANVAS_DIMENSION;
use crate::io::error::{ComposeError, Result, invalid_argument};
use ndarray::Array2;
use std::ops::RangeInclusive;

/// Square arrangement of `side * side` tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    side: u32,
    tile_count: u32,
}

impl GridLayout {
    /// Create a layout with `side` tiles along each axis
    ///
    /// # Errors
    ///
    /// Returns an error if `side` is zero or `side * side` overflows `u32`
    pub fn new(side: u32) -> Result<Self> {
        if side == 0 {
            return Err(invalid_argument(
                "graphsize",
                &side,
                &"must be greater than zero",
            ));
        }
        let tile_count = side
            .checked_mul(side)
            .ok_or_else(|| invalid_argument("graphsize", &side, &"too many tiles"))?;
        Ok(Self { side, tile_count })
    }

    /// Tiles along each axis
    pub const fn side(&self) -> u32 {
        self.side
    }

    /// Total number of tiles, which is also the largest seed
    pub const fn tile_count(&self) -> u32 {
        self.tile_count
    }

    /// All seeds in placement order
    pub const fn seeds(&self) -> RangeInclusive<u32> {
        1..=self.tile_count
    }

    /// Seed placed at grid index `(i, j)`
    pub const fn seed_at(&self, i: u32, j: u32) -> u32 {
        i * self.side + j + 1
    }

    /// Grid index `(i, j)` of a seed, or `None` if the seed is outside the grid
    pub const fn position_of(&self, seed: u32) -> Option<(u32, u32)> {
        if seed == 0 || seed > self.tile_count {
            return None;
        }
        let offset = seed - 1;
        Some((offset / self.side, offset % self.side))
    }

    /// Seeds arranged by grid index, `map[[i, j]] == seed_at(i, j)`
    pub fn seed_map(&self) -> Array2<u32> {
        let side = self.side as usize;
        Array2::from_shape_fn((side, side), |(i, j)| self.seed_at(i as u32, j as u32))
    }

    /// Pixel offset `(x, y)` of grid index `(i, j)` for tiles of the given size
    pub const fn tile_offset(i: u32, j: u32, tile_width: u32, tile_height: u32) -> (i64, i64) {
        (
            i as i64 * tile_width as i64,
            j as i64 * tile_height as i64,
        )
    }

    /// Canvas `(width, height)` holding every tile
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension exceeds the output format limit
    pub fn canvas_dimensions(&self, tile_width: u32, tile_height: u32) -> Result<(u32, u32)> {
        let width = u64::from(tile_width) * u64::from(self.side);
        let height = u64::from(tile_height) * u64::from(self.side);
        let limit = u64::from(MAX_CANVAS_DIMENSION);

        if width > limit || height > limit {
            return Err(ComposeError::CanvasTooLarge {
                width,
                height,
                limit: MAX_CANVAS_DIMENSION,
            });
        }

        Ok((width as u32, height as u32))
    }
}
