use crate::algorithm::decomposition::{DecompositionOptions, decompose};
use crate::color::rich::{Action, SharedColor};
use crate::io::error::{BoxesError, Result};
use crate::patterns::{Pattern, StepList, pattern_name};
use crate::spatial::geometry::CalibrationRecord;
use crate::spatial::grid::{Cell, CellRect, GridShape, Placement};
use crate::spatial::mask::CellMask;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Random box packing
///
/// Each step spans the rectangle between two random uncovered cells, until
/// every cell is covered. Later boxes may overlap earlier ones.
pub struct Boxes {
    name: String,
    grid: GridShape,
    color: SharedColor,
    rng: StdRng,
    steps: StepList<Placement>,
}

impl Boxes {
    /// Box packing over the calibrated grid
    ///
    /// # Errors
    ///
    /// Returns `NoUncoveredCells` if the packing runs out of candidates
    /// before the grid is covered
    pub fn new(calib: &CalibrationRecord, color: SharedColor, seed: u64) -> Result<Self> {
        let mut boxes = Self {
            name: pattern_name("boxes"),
            grid: calib.grid(),
            color,
            rng: StdRng::seed_from_u64(seed),
            steps: StepList::default(),
        };
        boxes.derive_steps()?;
        Ok(boxes)
    }

    fn derive_steps(&mut self) -> Result<()> {
        let mut covered = CellMask::new(self.grid);
        let mut placements = Vec::new();

        while !covered.is_full() {
            let from = pick_uncovered(&covered, &mut self.rng)?;
            let to = pick_uncovered(&covered, &mut self.rng)?;
            let rect = CellRect::new(from, to);
            for cell in rect.cells() {
                covered.insert(cell);
            }
            placements.push(if from == to {
                Placement::Cell(from)
            } else {
                Placement::Rect(rect)
            });
        }

        debug!(pattern = %self.name, steps = placements.len(), "boxes packed");
        self.steps.replace(placements);
        Ok(())
    }
}

fn pick_uncovered<R: Rng + ?Sized>(covered: &CellMask, rng: &mut R) -> Result<Cell> {
    let candidates = covered.complement();
    if candidates.is_empty() {
        return Err(BoxesError::NoUncoveredCells {
            covered: covered.count(),
            total: covered.grid().cell_count(),
        });
    }
    candidates
        .get(rng.random_range(0..candidates.len()))
        .copied()
        .ok_or(BoxesError::NoUncoveredCells {
            covered: covered.count(),
            total: covered.grid().cell_count(),
        })
}

impl Pattern for Boxes {
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
        self.derive_steps()
    }
}

/// Whole grid filled with one color, decomposed into rectangles
pub struct BoxFill {
    name: String,
    grid: GridShape,
    color: SharedColor,
    options: DecompositionOptions,
    rng: StdRng,
    steps: StepList<Placement>,
}

impl BoxFill {
    /// Fill of the calibrated grid
    ///
    /// `artistic` grows strips only; `max_expansions` caps each rectangle.
    pub fn new(
        calib: &CalibrationRecord,
        color: SharedColor,
        artistic: bool,
        max_expansions: Option<usize>,
        seed: u64,
    ) -> Self {
        let options = DecompositionOptions {
            early_stop: artistic,
            max_expansions,
            ..DecompositionOptions::default()
        };
        let mut fill = Self {
            name: pattern_name("box_fill"),
            grid: calib.grid(),
            color,
            options,
            rng: StdRng::seed_from_u64(seed),
            steps: StepList::default(),
        };
        fill.derive_steps();
        fill
    }

    fn derive_steps(&mut self) {
        let cells: Vec<Cell> = self.grid.cells().collect();
        let placements = decompose(&cells, self.options, &mut self.rng);
        self.steps.replace(placements);
    }
}

impl Pattern for BoxFill {
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
