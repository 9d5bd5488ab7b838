//! A virtual sheet that paints selections as colors are chosen

use crate::color::palette::{PaletteSlot, StandardColor};
use crate::color::rgb::Rgb;
use crate::io::error::{Result, sink_error};
use crate::io::image::export_canvas_png;
use crate::io::sink::ActionSink;
use crate::io::visualization::FrameCapture;
use crate::spatial::grid::{Cell, GridShape, Placement};
use ndarray::Array2;
use std::path::Path;
use tracing::trace;

/// In-memory sheet behaving like the spreadsheet on the other end of a sink
///
/// A choice recolors the current selection and closes the chooser. Keys
/// are accepted and counted but do not change fills.
pub struct CanvasSink {
    grid: GridShape,
    fills: Array2<Option<Rgb>>,
    selection: Vec<Cell>,
    chooser_open: bool,
    last_fill: Option<Option<Rgb>>,
    keys_pressed: usize,
    strokes: usize,
    capture: Option<FrameCapture>,
}

impl CanvasSink {
    /// Blank canvas over the grid
    pub fn new(grid: GridShape) -> Self {
        Self {
            grid,
            fills: Array2::from_elem((grid.n_rows, grid.n_cols), None),
            selection: Vec::new(),
            chooser_open: false,
            last_fill: None,
            keys_pressed: 0,
            strokes: 0,
            capture: None,
        }
    }

    /// Record a GIF frame after every stroke
    #[must_use]
    pub fn with_capture(mut self, cell_pixels: u32) -> Self {
        self.capture = Some(FrameCapture::new(cell_pixels));
        self
    }

    /// Grid the canvas covers
    pub const fn grid(&self) -> GridShape {
        self.grid
    }

    /// Fill of a cell; `None` when unpainted, cleared or off the grid
    pub fn fill(&self, cell: Cell) -> Option<Rgb> {
        self.fills.get([cell.row, cell.col]).copied().flatten()
    }

    /// Fills indexed `[row, col]`
    pub const fn fills(&self) -> &Array2<Option<Rgb>> {
        &self.fills
    }

    /// Cells in the current selection
    pub fn selection(&self) -> &[Cell] {
        &self.selection
    }

    /// Number of painted strokes
    pub const fn strokes(&self) -> usize {
        self.strokes
    }

    /// Number of keys pressed
    pub const fn keys_pressed(&self) -> usize {
        self.keys_pressed
    }

    /// Captured frames, if capture is enabled
    pub const fn capture(&self) -> Option<&FrameCapture> {
        self.capture.as_ref()
    }

    /// Export the current fills as a PNG
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn export_png(&self, path: &Path, cell_pixels: u32) -> Result<()> {
        export_canvas_png(&self.fills, cell_pixels, path)
    }

    /// Export the captured frames as a GIF
    ///
    /// # Errors
    ///
    /// Returns `Sink` if capture is disabled, or the export error
    pub fn export_gif(&self, path: &Path, frame_delay_ms: u32) -> Result<()> {
        self.capture
            .as_ref()
            .ok_or_else(|| sink_error("export gif", &"frame capture is disabled"))?
            .export_gif(path, frame_delay_ms)
    }

    fn paint(&mut self, fill: Option<Rgb>) {
        for cell in &self.selection {
            if let Some(slot) = self.fills.get_mut([cell.row, cell.col]) {
                *slot = fill;
            }
        }
        self.last_fill = Some(fill);
        self.strokes += 1;
        if let Some(capture) = self.capture.as_mut() {
            capture.record(&self.fills);
        }
    }

    fn choose(&mut self, operation: &'static str, fill: Option<Rgb>) -> Result<()> {
        if !self.chooser_open {
            return Err(sink_error(operation, &"color chooser is not open"));
        }
        self.chooser_open = false;
        trace!(operation, ?fill, cells = self.selection.len(), "canvas paint");
        self.paint(fill);
        Ok(())
    }
}

impl ActionSink for CanvasSink {
    fn select(&mut self, placement: &Placement) -> Result<()> {
        placement.validate(&self.grid)?;
        self.selection = placement.cells();
        Ok(())
    }

    fn open_color_chooser(&mut self) -> Result<()> {
        self.chooser_open = true;
        Ok(())
    }

    fn choose_standard(&mut self, slot: PaletteSlot) -> Result<()> {
        let color = StandardColor::from_slot(slot.col, slot.row)?;
        self.choose("choose standard", Some(color.rgb()))
    }

    fn choose_custom(&mut self, rgb: Rgb) -> Result<()> {
        self.choose("choose custom", Some(rgb))
    }

    fn choose_no_fill(&mut self) -> Result<()> {
        self.choose("choose no fill", None)
    }

    fn repeat_last_color(&mut self) -> Result<()> {
        let fill = self
            .last_fill
            .ok_or_else(|| sink_error("repeat last color", &"no color chosen yet"))?;
        self.paint(fill);
        Ok(())
    }

    fn press_key(&mut self, key: &str) -> Result<()> {
        trace!(key, "canvas key");
        self.keys_pressed += 1;
        Ok(())
    }
}
