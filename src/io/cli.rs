//! Command-line interface for combining tile grids

use crate::compose::composer::{CombineConfig, Composer, TilePlan};
use crate::compose::selection::TileSelection;
use crate::io::configuration::{DEFAULT_DATA_DIR, DEFAULT_DEGREE, DEFAULT_GRAPHSIZE};
use crate::io::error::Result;
use std::fmt::Write as _;
use std::io::Write;
use crate::io::progress::ProgressReporter;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "iscompose")]
#[command(
    author,
    version,
    about = "Combine independent-set visualizations into a single composite image"
)]
/// Command-line arguments for the composite tool
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Available commands
#[derive(Subcommand)]
pub enum Command {
    /// Paste the selected tile of every seed into one composite JPEG
    Combine(CombineArgs),
}

/// Arguments of the `combine` command
#[derive(Args)]
pub struct CombineArgs {
    /// Graph family: `regular` or `diagonal`
    #[arg(value_name = "WHICH")]
    pub which: String,

    /// Graph size embedded in directory and file names
    #[arg(value_name = "N")]
    pub n: u32,

    /// Fraction of the maximum independent-set size selecting the tile
    #[arg(value_name = "ALPHA")]
    pub alpha: f64,

    /// Vertex degree of regular graphs
    #[arg(short, long, default_value_t = DEFAULT_DEGREE)]
    pub degree: u32,

    /// Tiles along each side of the composite
    #[arg(short, long, default_value_t = DEFAULT_GRAPHSIZE)]
    pub graphsize: u32,

    /// Directory holding the experiment instances
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Directory the composite is written to (defaults to the working directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Ignore thresholds and use the lowest K that has a tile
    #[arg(short, long)]
    pub search: bool,

    /// Resolve every tile and print the selection grid without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl CombineArgs {
    /// Tile selection strategy requested by the flags
    pub const fn selection(&self) -> TileSelection {
        if self.search {
            TileSelection::FirstAvailable
        } else {
            TileSelection::Exact
        }
    }

    /// Validate the arguments into a compose configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of range or the family is unknown
    pub fn to_config(&self) -> Result<CombineConfig> {
        let config = CombineConfig::new(
            &self.which,
            self.n,
            self.alpha,
            self.degree,
            self.graphsize,
        )?
        .with_data_dir(&self.data_dir)
        .with_selection(self.selection());

        Ok(match &self.output_dir {
            Some(output_dir) => config.with_output_dir(output_dir),
            None => config,
        })
    }
}

/// Runs the parsed command
pub struct CommandProcessor {
    cli: Cli,
}

impl CommandProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the command
    ///
    /// # Errors
    ///
    /// Returns an error if validation, tile lookup, decoding or export fails
    pub fn process(&self) -> Result<()> {
        match &self.cli.command {
            Command::Combine(args) => self.combine(args),
        }
    }

    fn combine(&self, args: &CombineArgs) -> Result<()> {
        let config = args.to_config()?;
        let progress = if self.cli.should_show_progress() {
            ProgressReporter::new()
        } else {
            ProgressReporter::hidden()
        };
        let composer = Composer::new(config).with_progress(progress);

        if args.dry_run {
            return Self::report_plan(&composer);
        }

        composer.combine()?;
        Ok(())
    }

    // Allow print for the dry-run report, which is the command's output
    #[allow(clippy::print_stdout)]
    fn report_plan(composer: &Composer) -> Result<()> {
        let plan = composer.dry_run()?;
        print!("{}", describe_plan(composer.config(), &plan));
        Ok(())
    }
}

/// Dry-run report: tile count, the K grid in canvas orientation and the output path
pub fn describe_plan(config: &CombineConfig, plan: &TilePlan) -> String {
    let mut report = String::new();
    let _ = writeln!(
        report,
        "{} tiles for {}, n={}, alpha={}",
        plan.tiles().len(),
        config.family(),
        config.size(),
        config.alpha()
    );
    let _ = writeln!(report, "K by canvas position (j down, i across):");
    let _ = writeln!(report, "{}", plan.canvas_grid());
    let _ = writeln!(report, "would write {}", config.output_path().display());
    report
}

/// Process exit status for a finished command
///
/// Failures are reported on `stderr` as `error: <message>` and map to 1;
/// success maps to 0.
pub fn exit_status(result: &Result<()>, stderr: &mut impl Write) -> u8 {
    match result {
        Ok(()) => 0,
        Err(error) => {
            let _ = writeln!(stderr, "error: {error}");
            1
        }
    }
}
