//! Command-line interface: calibrate against measured anchors, then run shows
//! on a virtual canvas

use crate::choreography::shows::{Show, run_show};
use crate::choreography::stage::Stage;
use crate::color::cache::RecentColorCache;
use crate::io::calibration::{AnchorFileCalibration, CalibrationProvider};
use crate::io::canvas::CanvasSink;
use crate::io::configuration::{
    DEFAULT_N_COLS, DEFAULT_N_ROWS, DEFAULT_ROUNDS, DEFAULT_SEED, GIF_FRAME_DELAY_MS,
    PREVIEW_CELL_PIXELS,
};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::spatial::geometry::CalibrationRecord;
use crate::spatial::grid::GridShape;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "boxes")]
#[command(
    author,
    version,
    about = "Paint procedural patterns into a spreadsheet grid by recoloring cells"
)]
/// Command-line arguments of the pattern painter
pub struct Cli {
    /// Phase to execute
    #[command(subcommand)]
    pub command: Command,
}

/// The two phases of a session
#[derive(Subcommand)]
pub enum Command {
    /// Build a calibration record from a measured anchor file and print it
    Calibrate(CalibrateArgs),
    /// Run a show from an encoded calibration record
    Run(RunArgs),
}

/// Arguments of the `calibrate` phase
#[derive(Args)]
pub struct CalibrateArgs {
    /// JSON file with the anchors located on screen
    #[arg(long, value_name = "FILE")]
    pub anchors: PathBuf,

    /// Number of grid columns
    #[arg(long, default_value_t = DEFAULT_N_COLS)]
    pub cols: usize,

    /// Number of grid rows
    #[arg(long, default_value_t = DEFAULT_N_ROWS)]
    pub rows: usize,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Continue straight into a run with the new record
    #[arg(long)]
    pub run: bool,

    /// Options used when `--run` is given
    #[command(flatten)]
    pub options: RunOptions,
}

/// Arguments of the `run` phase
#[derive(Args)]
pub struct RunArgs {
    /// Encoded calibration record printed by `calibrate`
    #[arg(value_name = "RECORD")]
    pub record: String,

    /// Show and output options
    #[command(flatten)]
    pub options: RunOptions,
}

/// Show selection and output options
#[derive(Args, Clone)]
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct RunOptions {
    /// Show to perform
    #[arg(long, value_enum, default_value_t = Show::Spirals)]
    pub show: Show,

    /// Number of times the show repeats its program
    #[arg(long, default_value_t = DEFAULT_ROUNDS)]
    pub rounds: usize,

    /// Random seed for reproducible shows
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Source image for shows that draw one
    #[arg(long, value_name = "FILE")]
    pub image: Option<PathBuf>,

    /// Write the final canvas as a PNG
    #[arg(long, value_name = "FILE")]
    pub preview: Option<PathBuf>,

    /// Write the painting process as an animated GIF
    #[arg(long, value_name = "FILE")]
    pub gif: Option<PathBuf>,

    /// Pixels per cell edge in previews
    #[arg(long, default_value_t = PREVIEW_CELL_PIXELS)]
    pub cell_pixels: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress and informational logs should be suppressed
    pub const fn is_quiet(&self) -> bool {
        match &self.command {
            Command::Calibrate(args) => args.options.quiet,
            Command::Run(args) => args.options.quiet,
        }
    }

    /// Execute the selected phase
    ///
    /// # Errors
    ///
    /// Returns an error if calibration fails, the record is malformed, an
    /// asset is missing, or an output cannot be written
    pub fn execute(&self) -> Result<()> {
        match &self.command {
            Command::Calibrate(args) => calibrate(args),
            Command::Run(args) => {
                let record = CalibrationRecord::from_encoded(&args.record)?;
                run_session(&record, &args.options)?;
                Ok(())
            }
        }
    }
}

// The encoded record is the command's output and must reach stdout
#[allow(clippy::print_stdout)]
fn calibrate(args: &CalibrateArgs) -> Result<()> {
    let grid = GridShape::new(args.cols, args.rows)?;
    let mut provider = AnchorFileCalibration::new(&args.anchors, grid);
    if !args.yes {
        provider = provider.with_confirmation(std::io::stdin().lock());
    }

    let Some(record) = provider.calibrate()? else {
        warn!("calibration declined, nothing to do");
        return Ok(());
    };
    println!("{}", record.to_encoded()?);

    if args.run {
        run_session(&record, &args.options)?;
    }
    Ok(())
}

/// Perform a show on a virtual canvas and export the requested previews
///
/// # Errors
///
/// Returns an error if the show fails or an output cannot be written
pub fn run_session(record: &CalibrationRecord, options: &RunOptions) -> Result<CanvasSink> {
    let start_time = Instant::now();
    let show_calib = options.show.calibration(record)?;

    let mut canvas = CanvasSink::new(show_calib.grid());
    if options.gif.is_some() {
        canvas = canvas.with_capture(options.cell_pixels);
    }
    let mut cache = RecentColorCache::new();

    {
        let mut stage = Stage::new(&mut canvas, &mut cache, options.seed);
        if !options.quiet {
            stage = stage.with_progress(ProgressManager::new());
        }
        run_show(
            options.show,
            record,
            &mut stage,
            options.rounds,
            options.image.as_deref(),
        )?;
    }

    if let Some(path) = &options.preview {
        canvas.export_png(path, options.cell_pixels)?;
        info!(path = %path.display(), "preview written");
    }
    if let Some(path) = &options.gif {
        canvas.export_gif(path, GIF_FRAME_DELAY_MS)?;
        info!(path = %path.display(), "animation written");
    }

    info!(
        show = ?options.show,
        strokes = canvas.strokes(),
        elapsed_ms = start_time.elapsed().as_millis(),
        "session finished"
    );
    Ok(canvas)
}
