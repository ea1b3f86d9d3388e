//! Selection index arithmetic and tile lookup
//!
//! Each instance directory holds several renderings named by a selection index
//! `K`. The index normally comes from the instance's maximum independent-set
//! size scaled by alpha.

use crate::io::configuration::{SEARCH_MAX_INDEX, THRESHOLD_FILE_NAME, TILE_SAMPLE_COUNT};
use crate::io::error::{ComposeError, Result, data_read_error};
use crate::io::threshold::read_threshold;
use num_traits::ToPrimitive;
use std::path::{Path, PathBuf};

/// How the tile of an instance directory is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileSelection {
    /// Use exactly `K = ceil(threshold * alpha)`
    #[default]
    Exact,
    /// Ignore the threshold and take the lowest `K` in `1..=20` that has a tile
    FirstAvailable,
}

/// Tile chosen for one seed
#[derive(Debug, Clone, PartialEq)]
pub struct TileChoice {
    /// Seed of the experiment instance
    pub seed: u32,
    /// Instance directory the tile lives in
    pub directory: PathBuf,
    /// Threshold read from the instance, absent when it was not consulted
    pub threshold: Option<f64>,
    /// Selection index `K` of the tile
    pub index: u32,
    /// Full path of the tile image
    pub path: PathBuf,
}

/// Compute `ceil(threshold * alpha)`
///
/// Returns `None` when the product is not representable as a `u32`.
pub fn selection_index(threshold: f64, alpha: f64) -> Option<u32> {
    (threshold * alpha).ceil().to_u32()
}

/// File name of the tile rendered for selection index `index`
pub fn tile_file_name(index: u32) -> String {
    format!("hamming-K{index}-n{TILE_SAMPLE_COUNT}.png")
}

/// Path of the threshold file inside an instance directory
pub fn threshold_path(directory: &Path) -> PathBuf {
    directory.join(THRESHOLD_FILE_NAME)
}

/// Locate the tile of one instance directory
///
/// # Errors
///
/// Returns an error if:
/// - The threshold file is missing or malformed (exact selection only)
/// - The derived index does not fit in a `u32`
/// - No tile exists for the index, or for any index searched
pub fn locate_tile(
    directory: &Path,
    seed: u32,
    alpha: f64,
    selection: TileSelection,
) -> Result<TileChoice> {
    match selection {
        TileSelection::Exact => locate_exact(directory, seed, alpha),
        TileSelection::FirstAvailable => locate_first_available(directory, seed),
    }
}

fn locate_exact(directory: &Path, seed: u32, alpha: f64) -> Result<TileChoice> {
    let data_path = threshold_path(directory);
    let threshold = read_threshold(&data_path)?;
    let index = selection_index(threshold, alpha).ok_or_else(|| {
        data_read_error(
            &data_path,
            &format!("selection index for {threshold} * {alpha} is out of range"),
        )
    })?;

    let path = directory.join(tile_file_name(index));
    if !path.is_file() {
        return Err(ComposeError::MissingTile {
            directory: directory.to_path_buf(),
            searched: index..=index,
        });
    }

    Ok(TileChoice {
        seed,
        directory: directory.to_path_buf(),
        threshold: Some(threshold),
        index,
        path,
    })
}

fn locate_first_available(directory: &Path, seed: u32) -> Result<TileChoice> {
    (1..=SEARCH_MAX_INDEX)
        .map(|index| (index, directory.join(tile_file_name(index))))
        .find(|(_, path)| path.is_file())
        .map(|(index, path)| TileChoice {
            seed,
            directory: directory.to_path_buf(),
            threshold: None,
            index,
            path,
        })
        .ok_or_else(|| ComposeError::MissingTile {
            directory: directory.to_path_buf(),
            searched: 1..=SEARCH_MAX_INDEX,
        })
}
