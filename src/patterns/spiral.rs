use crate::color::rich::{Action, SharedColor};
use crate::io::error::Result;
use crate::patterns::{Pattern, StepList, pattern_name};
use crate::spatial::geometry::CalibrationRecord;
use crate::spatial::grid::{Cell, CellRect, GridShape, Placement};
use tracing::debug;

/// Which spiral to trace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiralKind {
    /// From the top-left corner inward, leaving a one-cell gap between turns
    Inward,
    /// From the center out to the top-left, tracing the gaps of `Inward`
    Outward,
    /// From the top-left corner inward with no gap between turns
    Dense,
}

/// Corner cells of a spiral over `grid`
///
/// Consecutive corners are joined by straight runs. The inward spirals start
/// at the top-left cell and turn clockwise; the outward spiral is the reverse
/// of a pitch-2 spiral that starts one row below the top-left cell inside a
/// one-cell margin.
pub fn spiral_nodes(kind: SpiralKind, grid: GridShape) -> Vec<Cell> {
    let w = grid.n_cols as i64;
    let h = grid.n_rows as i64;
    match kind {
        SpiralKind::Inward => trace_nodes((0, 0), [0, 0, w - 1, h - 1], 2),
        SpiralKind::Dense => trace_nodes((0, 0), [0, 0, w - 1, h - 1], 1),
        SpiralKind::Outward => {
            let mut nodes = trace_nodes((0, 1), [1, 1, w - 2, h - 2], 2);
            nodes.reverse();
            nodes
        }
    }
}

// Walks right, down, left and back up inside [left, top, right, bottom],
// shrinking the box by `pitch` after each lap
fn trace_nodes(start: (i64, i64), bounds: [i64; 4], pitch: i64) -> Vec<Cell> {
    let [mut left, mut top, mut right, mut bottom] = bounds;
    let mut nodes = vec![start];

    while left <= right && top <= bottom {
        if !push(&mut nodes, (right, top))
            || !push(&mut nodes, (right, bottom))
            || !push(&mut nodes, (left, bottom))
            || top + pitch > bottom
            || !push(&mut nodes, (left, top + pitch))
        {
            break;
        }
        left += pitch;
        top += pitch;
        right -= pitch;
        bottom -= pitch;
    }

    nodes
        .into_iter()
        .filter_map(|(col, row)| {
            Some(Cell::new(usize::try_from(col).ok()?, usize::try_from(row).ok()?))
        })
        .collect()
}

// Appends a corner unless it repeats the previous one
fn push(nodes: &mut Vec<(i64, i64)>, node: (i64, i64)) -> bool {
    if nodes.last() == Some(&node) {
        false
    } else {
        nodes.push(node);
        true
    }
}

/// Rectangular spiral drawn one straight run per step
pub struct Spiral {
    name: String,
    kind: SpiralKind,
    grid: GridShape,
    color: SharedColor,
    steps: StepList<Placement>,
}

impl Spiral {
    /// Spiral of the given kind over the calibrated grid
    pub fn new(calib: &CalibrationRecord, kind: SpiralKind, color: SharedColor) -> Self {
        let grid = calib.grid();
        Self {
            name: pattern_name("spiral"),
            kind,
            grid,
            color,
            steps: StepList::new(Self::derive_steps(kind, grid)),
        }
    }

    fn derive_steps(kind: SpiralKind, grid: GridShape) -> Vec<Placement> {
        let nodes = spiral_nodes(kind, grid);
        nodes
            .windows(2)
            .filter_map(|pair| match pair {
                [from, to] => Some(Placement::Rect(CellRect::new(*from, *to))),
                _ => None,
            })
            .collect()
    }

    /// Corner cells joined by the steps
    pub fn nodes(&self) -> Vec<Cell> {
        spiral_nodes(self.kind, self.grid)
    }
}

impl Pattern for Spiral {
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
        self.steps.replace(Self::derive_steps(self.kind, self.grid));
        debug!(pattern = %self.name, steps = self.steps.len(), "spiral reset");
        Ok(())
    }
}
