use crate::color::rich::{Action, SharedColor};
use crate::io::configuration::{ICICLE_MIGRATE_WEIGHT, ICICLE_SEGMENT_SIZE, ICICLE_STAY_WEIGHT};
use crate::io::error::{Result, invalid_parameter};
use crate::math::probability::weighted_choice;
use crate::patterns::{Pattern, StepList, pattern_name};
use crate::spatial::geometry::CalibrationRecord;
use crate::spatial::grid::{Cell, CellRect, GridShape, Placement};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Edge the icicles hang from, named by the direction they grow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IcicleDirection {
    /// Columns growing up from the bottom row
    Up,
    /// Columns growing down from the top row
    Down,
    /// Rows growing left from the last column
    Left,
    /// Rows growing right from the first column
    Right,
}

/// Lanes that grow segment by segment from one edge until the grid is full
///
/// A random unfinished lane is rolled each step; growth may migrate to an
/// adjacent lane that lags behind it, which keeps the frontier ragged but
/// even.
pub struct Icicles {
    name: String,
    grid: GridShape,
    direction: IcicleDirection,
    segment_size: usize,
    color: SharedColor,
    rng: StdRng,
    steps: StepList<Placement>,
}

impl Icicles {
    /// Icicles with the default segment size
    pub fn new(
        calib: &CalibrationRecord,
        direction: IcicleDirection,
        color: SharedColor,
        seed: u64,
    ) -> Self {
        let mut icicles = Self {
            name: pattern_name("icicles"),
            grid: calib.grid(),
            direction,
            segment_size: ICICLE_SEGMENT_SIZE,
            color,
            rng: StdRng::seed_from_u64(seed),
            steps: StepList::default(),
        };
        icicles.derive_steps();
        icicles
    }

    /// Icicles growing by roughly `segment_size` cells per step
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `segment_size` is zero
    pub fn with_segment_size(
        calib: &CalibrationRecord,
        direction: IcicleDirection,
        segment_size: usize,
        color: SharedColor,
        seed: u64,
    ) -> Result<Self> {
        if segment_size == 0 {
            return Err(invalid_parameter(
                "segment_size",
                &segment_size,
                &"must be positive",
            ));
        }
        let mut icicles = Self::new(calib, direction, color, seed);
        icicles.segment_size = segment_size;
        icicles.derive_steps();
        Ok(icicles)
    }

    const fn lanes(&self) -> (usize, usize) {
        match self.direction {
            IcicleDirection::Up | IcicleDirection::Down => (self.grid.n_cols, self.grid.n_rows),
            IcicleDirection::Left | IcicleDirection::Right => (self.grid.n_rows, self.grid.n_cols),
        }
    }

    // Cell at `depth` cells into `lane`, measured from the hanging edge
    const fn cell(&self, lane: usize, depth: usize, lane_len: usize) -> Cell {
        match self.direction {
            IcicleDirection::Down => Cell::new(lane, depth),
            IcicleDirection::Up => Cell::new(lane, lane_len - 1 - depth),
            IcicleDirection::Right => Cell::new(depth, lane),
            IcicleDirection::Left => Cell::new(lane_len - 1 - depth, lane),
        }
    }

    fn derive_steps(&mut self) {
        let (n_lanes, lane_len) = self.lanes();
        let mut lengths = vec![0usize; n_lanes];
        let mut placements = Vec::new();

        loop {
            let open: Vec<usize> = (0..n_lanes)
                .filter(|&lane| lengths.get(lane).is_some_and(|&len| len < lane_len))
                .collect();
            let Some(&rolled) = open.get(self.rng.random_range(0..open.len().max(1))) else {
                break;
            };
            let lane = self.migrate(rolled, &lengths, lane_len);

            let start = lengths.get(lane).copied().unwrap_or(lane_len);
            let lo = self.segment_size.saturating_sub(1).max(1);
            let hi = (self.segment_size + 1).min(lane_len).max(lo);
            let grow = self.rng.random_range(lo..=hi).min(lane_len - start);

            let from = self.cell(lane, start, lane_len);
            let to = self.cell(lane, start + grow - 1, lane_len);
            placements.push(if grow == 1 {
                Placement::Cell(from)
            } else {
                Placement::Rect(CellRect::new(from, to))
            });
            if let Some(len) = lengths.get_mut(lane) {
                *len += grow;
            }
        }

        debug!(pattern = %self.name, steps = placements.len(), "icicles grown");
        self.steps.replace(placements);
    }

    // Shifts weight from the rolled lane toward unfinished neighbors that lag behind it
    fn migrate(&mut self, lane: usize, lengths: &[usize], lane_len: usize) -> usize {
        let own = lengths.get(lane).copied().unwrap_or(lane_len);
        let lagging = |neighbor: Option<usize>| {
            neighbor
                .and_then(|n| lengths.get(n).copied().map(|len| (n, len)))
                .filter(|&(_, len)| len < lane_len && len < own)
                .map(|(n, _)| n)
        };
        let left = lagging(lane.checked_sub(1));
        let right = lagging(Some(lane + 1));

        let migrate = |neighbor: Option<usize>| {
            if neighbor.is_some() { ICICLE_MIGRATE_WEIGHT } else { 0.0 }
        };
        let weights = [
            migrate(left),
            ICICLE_STAY_WEIGHT - migrate(left) - migrate(right),
            migrate(right),
        ];

        match weighted_choice(&mut self.rng, &weights) {
            0 => left.unwrap_or(lane),
            2 => right.unwrap_or(lane),
            _ => lane,
        }
    }
}

impl Pattern for Icicles {
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
