//! Progress display for planning and composing a tile grid

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>9}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar reused across the stages of one composite
///
/// Each stage resets the bar to the tile count and ticks once per tile.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a progress reporter drawing to stderr
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(STAGE_STYLE.clone());
        Self { bar }
    }

    /// Create a progress reporter that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Begin a new stage covering `tiles` steps
    pub fn start_stage(&self, stage: &'static str, tiles: u64) {
        self.bar.reset();
        self.bar.set_length(tiles);
        self.bar.set_position(0);
        self.bar.set_prefix(stage);
        self.bar.set_message(String::new());
    }

    /// Record one finished tile, showing the seed it belonged to
    pub fn tile_done(&self, seed: u32) {
        self.bar.set_message(format!("seed {seed}"));
        self.bar.inc(1);
    }

    /// Current position within the stage
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Length of the current stage
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Finish the bar, naming the written composite
    pub fn finish(&self, output_path: &Path) {
        self.bar
            .finish_with_message(format!("wrote {}", output_path.display()));
    }

    /// Remove the bar from the terminal without a final message
    pub fn abandon(&self) {
        self.bar.finish_and_clear();
    }

    /// Whether the bar has been finished or abandoned
    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}
