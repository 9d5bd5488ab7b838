//! Color fields sampled from a function of position, and the palette test card
//!
//! A sweep tiles the grid with `d_cols × d_rows` blocks plus remainder
//! strips along the right and bottom edges. Each block takes the midpoint
//! blend of the field at its two corners.

use crate::color::paint::{ArbitraryColor, Color};
use crate::color::palette::StandardColor;
use crate::color::rgb::Rgb;
use crate::color::rich::{Action, RichColor, SharedColor};
use crate::io::configuration::{PALETTE_COLS, PALETTE_ROWS, SWEEP_BLOCK_COLS, SWEEP_BLOCK_ROWS};
use crate::io::error::{Result, invalid_parameter};
use crate::math::interpolation::clamp_unit;
use crate::patterns::{Pattern, StepList, pattern_name};
use crate::spatial::geometry::CalibrationRecord;
use crate::spatial::grid::{Cell, CellRect, GridShape, Placement};
use tracing::debug;

/// Color field over the unit square; channels are clamped to `[0, 255]`
pub type PaletteFunction = Box<dyn Fn(f64, f64) -> [f64; 3]>;

/// Red along x, green along y and blue toward the origin
pub fn default_palette_function(x: f64, y: f64) -> [f64; 3] {
    [255.0 * x, 255.0 * y, 255.0 * (1.0 - x) * (1.0 - y)]
}

/// Block tiling of the grid recolored from a color field
pub struct PaletteSweep {
    name: String,
    grid: GridShape,
    function: PaletteFunction,
    d_rows: usize,
    d_cols: usize,
    coerce: bool,
    steps: StepList<RichColor>,
}

impl PaletteSweep {
    /// Sweep of the default field with default blocks, snapped to the palette
    pub fn new(calib: &CalibrationRecord) -> Self {
        let grid = calib.grid();
        let mut sweep = Self {
            name: pattern_name("palette_sweep"),
            grid,
            function: Box::new(default_palette_function),
            d_rows: SWEEP_BLOCK_ROWS.min(grid.n_rows),
            d_cols: SWEEP_BLOCK_COLS.min(grid.n_cols),
            coerce: true,
            steps: StepList::default(),
        };
        sweep.derive_steps();
        sweep
    }

    /// Sweep of an arbitrary field
    ///
    /// Block sizes larger than the grid are clamped to it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a block size is zero
    pub fn with_function(
        calib: &CalibrationRecord,
        function: PaletteFunction,
        d_rows: usize,
        d_cols: usize,
        coerce: bool,
    ) -> Result<Self> {
        if d_rows == 0 {
            return Err(invalid_parameter("d_rows", &d_rows, &"must be positive"));
        }
        if d_cols == 0 {
            return Err(invalid_parameter("d_cols", &d_cols, &"must be positive"));
        }
        let grid = calib.grid();
        let mut sweep = Self {
            name: pattern_name("palette_sweep"),
            grid,
            function,
            d_rows: d_rows.min(grid.n_rows),
            d_cols: d_cols.min(grid.n_cols),
            coerce,
            steps: StepList::default(),
        };
        sweep.derive_steps();
        Ok(sweep)
    }

    /// Blocks in painting order: full blocks column by column, then the
    /// right strip, the bottom strip and the corner
    pub fn blocks(&self) -> Vec<CellRect> {
        let (n_cols, n_rows) = (self.grid.n_cols, self.grid.n_rows);
        let n_i = n_cols / self.d_cols;
        let n_j = n_rows / self.d_rows;
        let rest_cols = n_cols % self.d_cols;
        let rest_rows = n_rows % self.d_rows;
        let rect = |col: usize, row: usize, width: usize, height: usize| {
            CellRect::new(
                Cell::new(col, row),
                Cell::new(col + width - 1, row + height - 1),
            )
        };

        let mut blocks = Vec::new();
        for i in 0..n_i {
            for j in 0..n_j {
                blocks.push(rect(i * self.d_cols, j * self.d_rows, self.d_cols, self.d_rows));
            }
        }
        if rest_cols > 0 {
            for j in 0..n_j {
                blocks.push(rect(n_cols - rest_cols, j * self.d_rows, rest_cols, self.d_rows));
            }
        }
        if rest_rows > 0 {
            for i in 0..n_i {
                blocks.push(rect(i * self.d_cols, n_rows - rest_rows, self.d_cols, rest_rows));
            }
        }
        if rest_cols > 0 && rest_rows > 0 {
            blocks.push(rect(n_cols - rest_cols, n_rows - rest_rows, rest_cols, rest_rows));
        }
        blocks
    }

    fn sample(&self, cell: Cell) -> Rgb {
        let x = clamp_unit(cell.col as f64 / self.grid.n_cols as f64);
        let y = clamp_unit(cell.row as f64 / self.grid.n_rows as f64);
        let [r, g, b] = (self.function)(x, y);
        Rgb::from_clamped(r, g, b)
    }

    /// Color of a block before coercion
    pub fn block_color(&self, block: &CellRect) -> Rgb {
        self.sample(block.min()).blend(self.sample(block.max()), 0.5)
    }

    fn derive_steps(&mut self) {
        let strokes: Vec<RichColor> = self
            .blocks()
            .into_iter()
            .map(|block| {
                let mut color = ArbitraryColor::from_rgb(self.block_color(&block));
                if self.coerce {
                    color = color.coerced();
                }
                let placement = if block.area() == 1 {
                    Placement::Cell(block.min())
                } else {
                    Placement::Rect(block)
                };
                RichColor::new(placement, SharedColor::new(color))
            })
            .collect();
        debug!(pattern = %self.name, steps = strokes.len(), "palette sweep tiled");
        self.steps.replace(strokes);
    }
}

impl Pattern for PaletteSweep {
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

// Rows used by one palette row on the test card
const TEST_ROWS_PER_SLOT: usize = 4;
// First grid row of the test card
const TEST_FIRST_ROW: usize = 3;

/// Test card painting every palette swatch above its custom RGB twin
///
/// Swatch `(i, j)` occupies column `i`: the standard color on rows
/// `4j + 3 ..= 4j + 4` and the same RGB chosen as a custom color on rows
/// `4j + 5 ..= 4j + 6`. Any mismatch between the two halves shows a
/// palette table error.
pub struct PaletteTest {
    name: String,
    steps: StepList<Action>,
}

impl PaletteTest {
    /// Test card on a grid of at least 12 columns and 43 rows
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the grid is too small
    pub fn new(calib: &CalibrationRecord) -> Result<Self> {
        let grid = calib.grid();
        if grid.n_cols < PALETTE_COLS {
            return Err(invalid_parameter("n_cols", &grid.n_cols, &"test card needs 12"));
        }
        let needed_rows = TEST_ROWS_PER_SLOT * PALETTE_ROWS + TEST_FIRST_ROW;
        if grid.n_rows < needed_rows {
            return Err(invalid_parameter(
                "n_rows",
                &grid.n_rows,
                &format!("test card needs {needed_rows}"),
            ));
        }
        Ok(Self {
            name: pattern_name("palette_test"),
            steps: StepList::new(test_card()),
        })
    }
}

fn test_card() -> Vec<Action> {
    let strip = |col: usize, row: usize| {
        Placement::Rect(CellRect::new(Cell::new(col, row), Cell::new(col, row + 1)))
    };
    StandardColor::all()
        .map(|standard| {
            let slot = standard.slot();
            let row = TEST_ROWS_PER_SLOT * slot.row + TEST_FIRST_ROW;
            let twin = ArbitraryColor::from_rgb(standard.rgb()).uncached();
            Action::new(vec![
                RichColor::new(strip(slot.col, row), SharedColor::new(standard)),
                RichColor::new(
                    strip(slot.col, row + 2),
                    SharedColor::new(Color::Arbitrary(twin)),
                ),
            ])
        })
        .collect()
}

impl Pattern for PaletteTest {
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
        self.steps.action()
    }

    fn advance(&mut self) {
        self.steps.advance();
    }

    fn reset(&mut self) -> Result<()> {
        self.steps.replace(test_card());
        Ok(())
    }
}
