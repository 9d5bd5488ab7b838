use crate::color::rich::{Action, SharedColor};
use crate::io::error::Result;
use crate::patterns::{Pattern, StepList, pattern_name};
use crate::spatial::geometry::CalibrationRecord;
use crate::spatial::grid::{Cell, CellRect, GridShape, Placement};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Whether lights switch whole rows or whole columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightsAxis {
    /// One step per row
    Rows,
    /// One step per column
    Columns,
}

/// Recolors whole rows or columns in a random order
pub struct Lights {
    name: String,
    axis: LightsAxis,
    grid: GridShape,
    color: SharedColor,
    rng: StdRng,
    steps: StepList<Placement>,
}

impl Lights {
    /// Lights over every row or column of the calibrated grid
    pub fn new(calib: &CalibrationRecord, axis: LightsAxis, color: SharedColor, seed: u64) -> Self {
        let mut lights = Self {
            name: pattern_name("lights"),
            axis,
            grid: calib.grid(),
            color,
            rng: StdRng::seed_from_u64(seed),
            steps: StepList::default(),
        };
        lights.derive_steps();
        lights
    }

    fn derive_steps(&mut self) {
        let (n_lines, last_col, last_row) = match self.axis {
            LightsAxis::Rows => (self.grid.n_rows, self.grid.n_cols - 1, 0),
            LightsAxis::Columns => (self.grid.n_cols, 0, self.grid.n_rows - 1),
        };
        let mut order: Vec<usize> = (0..n_lines).collect();
        order.shuffle(&mut self.rng);

        let placements = order
            .into_iter()
            .map(|line| {
                let rect = match self.axis {
                    LightsAxis::Rows => CellRect::new(Cell::new(0, line), Cell::new(last_col, line)),
                    LightsAxis::Columns => {
                        CellRect::new(Cell::new(line, 0), Cell::new(line, last_row))
                    }
                };
                Placement::Rect(rect)
            })
            .collect();
        self.steps.replace(placements);
    }
}

impl Pattern for Lights {
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
        self.steps.placement_action(&self.color)
    }

    fn advance(&mut self) {
        self.steps.advance();
    }

    fn reset(&mut self) -> Result<()> {
        self.derive_steps();
        debug!(pattern = %self.name, steps = self.steps.len(), "lights reset");
        Ok(())
    }
}
