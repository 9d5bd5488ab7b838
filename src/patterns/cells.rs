use crate::color::rich::{Action, SharedColor};
use crate::io::error::Result;
use crate::patterns::{Pattern, StepList, pattern_name};
use crate::spatial::geometry::CalibrationRecord;
use crate::spatial::grid::{GridShape, Placement};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Recolors every cell exactly once in a random order
pub struct RandomCells {
    name: String,
    grid: GridShape,
    color: SharedColor,
    rng: StdRng,
    steps: StepList<Placement>,
}

impl RandomCells {
    /// One step per cell of the calibrated grid
    pub fn new(calib: &CalibrationRecord, color: SharedColor, seed: u64) -> Self {
        let mut cells = Self {
            name: pattern_name("random_cells"),
            grid: calib.grid(),
            color,
            rng: StdRng::seed_from_u64(seed),
            steps: StepList::default(),
        };
        cells.derive_steps();
        cells
    }

    fn derive_steps(&mut self) {
        let mut placements: Vec<Placement> = self.grid.cells().map(Placement::Cell).collect();
        placements.shuffle(&mut self.rng);
        self.steps.replace(placements);
    }
}

impl Pattern for RandomCells {
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
        Ok(())
    }
}
