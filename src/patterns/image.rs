use crate::algorithm::decomposition::{DecompositionOptions, simplify_monochrome_colors};
use crate::algorithm::grouping::group_by_color;
use crate::color::paint::ArbitraryColor;
use crate::color::rgb::Rgb;
use crate::color::rich::{Action, RichColor, SharedColor};
use crate::io::configuration::{ALPHA_THRESHOLD, COLOR_GROUPING_TOLERANCE};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::load_raster;
use crate::patterns::{Pattern, StepList, pattern_name};
use crate::spatial::geometry::CalibrationRecord;
use crate::spatial::grid::{Cell, GridShape};
use image::RgbaImage;
use image::imageops::{self, FilterType};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use tracing::debug;

/// How a raster is brought to the grid's physical proportions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitMode {
    /// Stretch to the physical grid size
    Resize,
    /// Center-crop to the physical grid aspect ratio
    Crop,
}

/// Downsampled raster painted one color group at a time
///
/// Each grid cell takes the box average of the raster pixels it covers.
/// Cells at or below the alpha threshold are left alone; the rest are
/// grouped by color and every group is decomposed into rectangles.
pub struct ImagePattern {
    name: String,
    pixels: Vec<(Cell, Rgb)>,
    tolerance: f64,
    coerce: bool,
    rng: StdRng,
    steps: StepList<RichColor>,
}

impl ImagePattern {
    /// Image pattern from a file, with default tolerance and alpha threshold
    ///
    /// # Errors
    ///
    /// Returns `MissingAsset` or `ImageLoad` if the file cannot be read, or
    /// `InvalidParameter` if it has no pixels
    pub fn from_path(
        calib: &CalibrationRecord,
        path: &Path,
        mode: FitMode,
        seed: u64,
    ) -> Result<Self> {
        let raster = load_raster(path)?;
        Self::from_raster(calib, &raster, mode, seed)
    }

    /// Image pattern from an in-memory raster
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the raster has no pixels
    pub fn from_raster(
        calib: &CalibrationRecord,
        raster: &RgbaImage,
        mode: FitMode,
        seed: u64,
    ) -> Result<Self> {
        Self::with_options(
            calib,
            raster,
            mode,
            COLOR_GROUPING_TOLERANCE,
            ALPHA_THRESHOLD,
            false,
            seed,
        )
    }

    /// Image pattern with explicit grouping tolerance, alpha threshold and
    /// palette coercion
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the raster has no pixels
    pub fn with_options(
        calib: &CalibrationRecord,
        raster: &RgbaImage,
        mode: FitMode,
        tolerance: f64,
        alpha_threshold: u8,
        coerce: bool,
        seed: u64,
    ) -> Result<Self> {
        if raster.width() == 0 || raster.height() == 0 {
            return Err(invalid_parameter(
                "raster",
                &format!("{}x{}", raster.width(), raster.height()),
                &"must have at least one pixel",
            ));
        }
        let fitted = fit_raster(calib, raster, mode);
        let pixels = box_resample(&fitted, calib.grid())
            .into_iter()
            .filter(|&(_, _, alpha)| alpha > alpha_threshold)
            .map(|(cell, rgb, _)| (cell, rgb))
            .collect();

        let mut pattern = Self {
            name: pattern_name("image"),
            pixels,
            tolerance,
            coerce,
            rng: StdRng::seed_from_u64(seed),
            steps: StepList::default(),
        };
        pattern.derive_steps();
        Ok(pattern)
    }

    /// Opaque cells with their downsampled colors, row-major
    pub fn pixels(&self) -> &[(Cell, Rgb)] {
        &self.pixels
    }

    fn derive_steps(&mut self) {
        let groups = group_by_color(self.pixels.iter().copied(), |(_, rgb)| *rgb, self.tolerance);
        let mut strokes = Vec::new();
        for group in groups {
            let mut color = ArbitraryColor::from_rgb(group.color);
            if self.coerce {
                color = color.coerced();
            }
            let cells: Vec<Cell> = group.members.iter().map(|(cell, _)| *cell).collect();
            strokes.extend(simplify_monochrome_colors(
                &cells,
                &SharedColor::new(color),
                DecompositionOptions::default(),
                &mut self.rng,
            ));
        }
        debug!(pattern = %self.name, steps = strokes.len(), "image decomposed");
        self.steps.replace(strokes);
    }
}

/// Bring a raster to the physical proportions of the grid
pub fn fit_raster(calib: &CalibrationRecord, raster: &RgbaImage, mode: FitMode) -> RgbaImage {
    let grid_width = calib.n_cols as f64 * calib.cell_width;
    let grid_height = calib.n_rows as f64 * calib.cell_height;
    match mode {
        FitMode::Resize => {
            let width = (grid_width.round() as u32).max(1);
            let height = (grid_height.round() as u32).max(1);
            imageops::resize(raster, width, height, FilterType::Lanczos3)
        }
        FitMode::Crop => {
            let (width, height) = (raster.width(), raster.height());
            let grid_aspect = grid_width / grid_height;
            let raster_aspect = f64::from(width) / f64::from(height);
            let (crop_width, crop_height) = if raster_aspect > grid_aspect {
                (
                    ((f64::from(height) * grid_aspect).round() as u32).clamp(1, width),
                    height,
                )
            } else {
                (
                    width,
                    ((f64::from(width) / grid_aspect).round() as u32).clamp(1, height),
                )
            };
            imageops::crop_imm(
                raster,
                (width - crop_width) / 2,
                (height - crop_height) / 2,
                crop_width,
                crop_height,
            )
            .to_image()
        }
    }
}

/// Average the raster over each cell's footprint
///
/// Returns every grid cell, row-major, with its mean color and mean alpha.
pub fn box_resample(raster: &RgbaImage, grid: GridShape) -> Vec<(Cell, Rgb, u8)> {
    let (width, height) = (raster.width() as usize, raster.height() as usize);
    let span = |index: usize, cells: usize, pixels: usize| {
        let start = index * pixels / cells;
        let end = ((index + 1) * pixels / cells).max(start + 1).min(pixels);
        start..end
    };

    grid.cells()
        .map(|cell| {
            let mut sums = [0u64; 4];
            let mut count = 0u64;
            for y in span(cell.row, grid.n_rows, height) {
                for x in span(cell.col, grid.n_cols, width) {
                    if let Some(pixel) = raster.get_pixel_checked(x as u32, y as u32) {
                        for (sum, &channel) in sums.iter_mut().zip(pixel.0.iter()) {
                            *sum += u64::from(channel);
                        }
                        count += 1;
                    }
                }
            }
            let [r, g, b, a] = sums.map(|sum| (sum / count.max(1)) as u8);
            (cell, Rgb::new(r, g, b), a)
        })
        .collect()
}

impl Pattern for ImagePattern {
    fn name(&self) -> &str {
        &self.name
    }

    fn n_steps(&self) -> usize {
        self.steps.len()
    }

    fn current_step(&self) -> usize {
        self.steps.cursor()
    }

    fn step(&self) -> Option<Action> {
        self.steps.stroke_action()
    }

    fn advance(&mut self) {
        self.steps.advance();
    }

    fn reset(&mut self) -> Result<()> {
        self.derive_steps();
        Ok(())
    }
}
