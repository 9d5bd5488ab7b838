use crate::color::rich::{Action, SharedColor};
use crate::io::configuration::{
    CLOUD_DIFFUSER_STEPS, CLOUD_DIFFUSERS, CLOUD_MAX_DRAW_ATTEMPTS, CLOUD_STEP_RADIUS,
};
use crate::io::error::{BoxesError, Result, invalid_parameter};
use crate::math::probability::sample_unit_disc;
use crate::patterns::{Pattern, StepList, pattern_name};
use crate::spatial::geometry::CalibrationRecord;
use crate::spatial::grid::{Cell, GridShape, Placement};
use crate::spatial::mask::CellMask;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Random-walk clouds that partition the grid
///
/// Each cloud is seeded at a random unvisited cell. A few walkers then
/// wander from the seed, claiming unvisited cells within a disc around their
/// position, and the union of everything claimed is painted as one step.
pub struct Clouds {
    name: String,
    grid: GridShape,
    n_diffusers: usize,
    n_diffuser_steps: usize,
    step_radius: f64,
    // Column stretch that makes a walker's disc look round on screen
    col_scale: f64,
    color: SharedColor,
    rng: StdRng,
    steps: StepList<Placement>,
}

impl Clouds {
    /// Clouds with the default walker settings, aspect corrected
    pub fn new(calib: &CalibrationRecord, color: SharedColor, seed: u64) -> Self {
        let mut clouds = Self {
            name: pattern_name("clouds"),
            grid: calib.grid(),
            n_diffusers: CLOUD_DIFFUSERS,
            n_diffuser_steps: CLOUD_DIFFUSER_STEPS,
            step_radius: CLOUD_STEP_RADIUS,
            col_scale: calib.cell_height / calib.cell_width,
            color,
            rng: StdRng::seed_from_u64(seed),
            steps: StepList::default(),
        };
        clouds.derive_steps();
        clouds
    }

    /// Clouds with explicit walker settings
    ///
    /// Without `aspect_correct` the disc is round in cell units rather than
    /// on screen.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `step_radius` is not positive
    pub fn with_walkers(
        calib: &CalibrationRecord,
        n_diffusers: usize,
        n_diffuser_steps: usize,
        step_radius: f64,
        aspect_correct: bool,
        color: SharedColor,
        seed: u64,
    ) -> Result<Self> {
        if !(step_radius.is_finite() && step_radius > 0.0) {
            return Err(invalid_parameter(
                "step_radius",
                &step_radius,
                &"must be positive",
            ));
        }
        let mut clouds = Self {
            name: pattern_name("clouds"),
            grid: calib.grid(),
            n_diffusers,
            n_diffuser_steps,
            step_radius,
            col_scale: if aspect_correct {
                calib.cell_height / calib.cell_width
            } else {
                1.0
            },
            color,
            rng: StdRng::seed_from_u64(seed),
            steps: StepList::default(),
        };
        clouds.derive_steps();
        Ok(clouds)
    }

    fn derive_steps(&mut self) {
        let mut visited = CellMask::new(self.grid);
        let mut placements = Vec::new();

        while let Ok(seed) = self.random_unvisited(&visited) {
            visited.insert(seed);
            let mut cloud = vec![seed];
            for _ in 0..self.n_diffusers {
                let mut position = seed;
                for _ in 0..self.n_diffuser_steps {
                    let Some(target) = self.draw_target(position, &visited) else {
                        break;
                    };
                    visited.insert(target);
                    cloud.push(target);
                    position = target;
                }
            }
            placements.push(if cloud.len() == 1 {
                Placement::Cell(seed)
            } else {
                Placement::Cloud(cloud)
            });
        }

        debug!(pattern = %self.name, steps = placements.len(), "clouds diffused");
        self.steps.replace(placements);
    }

    fn random_unvisited(&mut self, visited: &CellMask) -> Result<Cell> {
        let candidates = visited.complement();
        candidates
            .get(self.rng.random_range(0..candidates.len().max(1)))
            .copied()
            .ok_or(BoxesError::NoUncoveredCells {
                covered: visited.count(),
                total: self.grid.cell_count(),
            })
    }

    // Unvisited cell within one disc step of `from`, if one turns up in time
    fn draw_target(&mut self, from: Cell, visited: &CellMask) -> Option<Cell> {
        for _ in 0..CLOUD_MAX_DRAW_ATTEMPTS {
            let (dx, dy) = sample_unit_disc(&mut self.rng);
            let col = (from.col as f64 + dx * self.step_radius * self.col_scale).round();
            let row = (from.row as f64 + dy * self.step_radius).round();
            if col < 0.0 || row < 0.0 {
                continue;
            }
            let target = Cell::new(col as usize, row as usize);
            if self.grid.contains(target) && !visited.contains(target) {
                return Some(target);
            }
        }
        None
    }
}

impl Pattern for Clouds {
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
