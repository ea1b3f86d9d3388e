//! Planning and composing the tile grid
//!
//! Composition runs in two passes. Planning resolves every seed's tile from the
//! filesystem without decoding any image, so a missing threshold or tile aborts
//! the run before anything is written. Composing then decodes each planned tile
//! and pastes it into a single canvas.

use crate::compose::family::GraphFamily;
use crate::compose::layout::GridLayout;
use crate::compose::selection::{TileChoice, TileSelection, locate_tile};
use crate::io::configuration::{DEFAULT_DATA_DIR, DEFAULT_DEGREE, DEFAULT_GRAPHSIZE, JPEG_QUALITY};
use crate::io::error::{Result, invalid_argument};
use crate::io::image::{load_tile, paste_opaque, save_jpeg, tile_dimensions};
use crate::io::progress::ProgressReporter;
use image::RgbImage;
use ndarray::Array2;
use std::path::{Path, PathBuf};

/// Validated parameters of one composite
#[derive(Debug, Clone, PartialEq)]
pub struct CombineConfig {
    family: GraphFamily,
    size: u32,
    alpha: f64,
    layout: GridLayout,
    data_dir: PathBuf,
    output_dir: PathBuf,
    selection: TileSelection,
}

impl CombineConfig {
    /// Build a configuration from raw parameters
    ///
    /// `degree` is ignored for the diagonal family.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `family` is not `regular` or `diagonal`
    /// - `size`, `graphsize` or (for regular graphs) `degree` is zero
    /// - `alpha` is not in `(0, 1]`
    pub fn new(
        family: &str,
        size: u32,
        alpha: f64,
        degree: u32,
        graphsize: u32,
    ) -> Result<Self> {
        let family = GraphFamily::from_name(family, degree)?;

        if size == 0 {
            return Err(invalid_argument("n", &size, &"must be greater than zero"));
        }

        if !(alpha.is_finite() && alpha > 0.0 && alpha <= 1.0) {
            return Err(invalid_argument("alpha", &alpha, &"must be in (0, 1]"));
        }

        let layout = GridLayout::new(graphsize)?;

        Ok(Self {
            family,
            size,
            alpha,
            layout,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            output_dir: PathBuf::new(),
            selection: TileSelection::Exact,
        })
    }

    /// Build a configuration with the default degree and grid side
    ///
    /// # Errors
    ///
    /// Same conditions as [`CombineConfig::new`]
    pub fn with_defaults(family: &str, size: u32, alpha: f64) -> Result<Self> {
        Self::new(family, size, alpha, DEFAULT_DEGREE, DEFAULT_GRAPHSIZE)
    }

    /// Read instance directories from `data_dir` instead of `data`
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Write the composite into `output_dir` instead of the working directory
    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Choose how each instance's tile is selected
    #[must_use]
    pub const fn with_selection(mut self, selection: TileSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Graph family of the instances
    pub const fn family(&self) -> GraphFamily {
        self.family
    }

    /// Graph size parameter
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Fraction applied to each threshold
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Tile arrangement
    pub const fn layout(&self) -> GridLayout {
        self.layout
    }

    /// Root of the instance directories
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Tile selection strategy
    pub const fn selection(&self) -> TileSelection {
        self.selection
    }

    /// Instance directory of `seed`
    pub fn instance_directory(&self, seed: u32) -> PathBuf {
        self.family.instance_directory(&self.data_dir, self.size, seed)
    }

    /// Where the composite is written
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(self.family.output_file_name(self.size, self.alpha))
    }
}

/// Every seed's tile, resolved before any image is decoded
#[derive(Debug, Clone)]
pub struct TilePlan {
    layout: GridLayout,
    tiles: Vec<TileChoice>,
}

impl TilePlan {
    /// Layout the plan was resolved for
    pub const fn layout(&self) -> GridLayout {
        self.layout
    }

    /// Resolved tiles in seed order
    pub fn tiles(&self) -> &[TileChoice] {
        &self.tiles
    }

    /// Tile resolved for `seed`
    pub fn tile(&self, seed: u32) -> Option<&TileChoice> {
        let index = usize::try_from(seed.checked_sub(1)?).ok()?;
        self.tiles.get(index)
    }

    /// Selection indices by grid position, `grid[[i, j]]`
    pub fn selection_grid(&self) -> Array2<u32> {
        self.layout
            .seed_map()
            .mapv(|seed| self.tile(seed).map_or(0, |tile| tile.index))
    }

    /// Selection indices as they appear on the canvas: row `j`, column `i`
    pub fn canvas_grid(&self) -> Array2<u32> {
        self.selection_grid().reversed_axes()
    }
}

/// Builds one composite from a [`CombineConfig`]
pub struct Composer {
    config: CombineConfig,
    progress: ProgressReporter,
}

impl Composer {
    /// Create a composer that reports no progress
    pub fn new(config: CombineConfig) -> Self {
        Self {
            config,
            progress: ProgressReporter::hidden(),
        }
    }

    /// Report progress through `progress`
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressReporter) -> Self {
        self.progress = progress;
        self
    }

    /// Configuration in use
    pub const fn config(&self) -> &CombineConfig {
        &self.config
    }

    /// Progress reporter in use
    pub const fn progress(&self) -> &ProgressReporter {
        &self.progress
    }

    /// Resolve every seed's tile
    ///
    /// # Errors
    ///
    /// Returns the first threshold or tile lookup failure, in seed order
    pub fn plan(&self) -> Result<TilePlan> {
        let layout = self.config.layout;
        self.progress
            .start_stage("planning", u64::from(layout.tile_count()));

        let mut tiles = Vec::with_capacity(layout.tile_count() as usize);
        for seed in layout.seeds() {
            let directory = self.config.instance_directory(seed);
            let tile = locate_tile(&directory, seed, self.config.alpha, self.config.selection)?;
            tiles.push(tile);
            self.progress.tile_done(seed);
        }

        Ok(TilePlan { layout, tiles })
    }

    /// Resolve every seed's tile without composing, then clear the progress bar
    ///
    /// # Errors
    ///
    /// See [`Composer::plan`]
    pub fn dry_run(&self) -> Result<TilePlan> {
        let result = self.plan();
        self.progress.abandon();
        result
    }

    /// Paste every planned tile into a new canvas
    ///
    /// The canvas is sized from the seed 1 tile; other tiles are pasted as they
    /// are, clipped at the canvas edge.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A tile cannot be decoded
    /// - The seed 1 tile's header cannot be read
    /// - The canvas would exceed the output size limit
    pub fn compose(&self, plan: &TilePlan) -> Result<RgbImage> {
        let layout = plan.layout;
        let first = plan
            .tile(1)
            .ok_or_else(|| invalid_argument("seed", &1, &"plan holds no tile"))?;

        let (tile_width, tile_height) = tile_dimensions(&first.path)?;
        let (width, height) = layout.canvas_dimensions(tile_width, tile_height)?;
        let mut canvas = RgbImage::new(width, height);

        self.progress
            .start_stage("composing", u64::from(layout.tile_count()));

        for tile in &plan.tiles {
            let (i, j) = layout
                .position_of(tile.seed)
                .ok_or_else(|| invalid_argument("seed", &tile.seed, &"outside the tile grid"))?;
            let image = load_tile(&tile.path)?;
            let (x, y) = GridLayout::tile_offset(i, j, tile_width, tile_height);
            paste_opaque(&mut canvas, &image, x, y);
            self.progress.tile_done(tile.seed);
        }

        Ok(canvas)
    }

    /// Plan, compose and write the composite, returning its path
    ///
    /// # Errors
    ///
    /// Returns the first planning, decoding or export failure; nothing is
    /// written unless every tile was pasted
    pub fn combine(&self) -> Result<PathBuf> {
        let result = self.plan().and_then(|plan| self.compose(&plan)).and_then(|canvas| {
            let output_path = self.config.output_path();
            save_jpeg(&canvas, &output_path, JPEG_QUALITY)?;
            Ok(output_path)
        });

        match &result {
            Ok(output_path) => self.progress.finish(output_path),
            Err(_) => self.progress.abandon(),
        }

        result
    }
}

/// Build the composite described by `config` without progress output
///
/// # Errors
///
/// See [`Composer::combine`]
pub fn combine(config: CombineConfig) -> Result<PathBuf> {
    Composer::new(config).combine()
}
