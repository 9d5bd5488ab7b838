use crate::color::rich::{Action, SharedColor};
use crate::io::error::Result;
use crate::patterns::{Pattern, StepList, pattern_name};
use crate::spatial::geometry::CalibrationRecord;
use crate::spatial::grid::{Cell, GridShape, Placement};

/// Sweep from the top-left corner to the bottom-right corner, one
/// anti-diagonal (`col + row = d`) per step
pub struct DiagonalFill {
    name: String,
    grid: GridShape,
    color: SharedColor,
    steps: StepList<Placement>,
}

impl DiagonalFill {
    /// Diagonal sweep over the calibrated grid
    pub fn new(calib: &CalibrationRecord, color: SharedColor) -> Self {
        Self {
            name: pattern_name("diagonal_fill"),
            grid: calib.grid(),
            color,
            steps: StepList::new(anti_diagonals(calib.grid())),
        }
    }
}

/// Anti-diagonals of the grid, each listed from its top-right end
pub fn anti_diagonals(grid: GridShape) -> Vec<Placement> {
    let n_diagonals = (grid.n_cols + grid.n_rows).saturating_sub(1);
    (0..n_diagonals)
        .map(|d| {
            let first_col = d.min(grid.n_cols.saturating_sub(1));
            let cells: Vec<Cell> = (0..=first_col)
                .rev()
                .map(|col| Cell::new(col, d - col))
                .take_while(|cell| cell.row < grid.n_rows)
                .collect();
            if cells.len() == 1 {
                Placement::Cell(Cell::new(first_col, d - first_col))
            } else {
                Placement::Cloud(cells)
            }
        })
        .collect()
}

impl Pattern for DiagonalFill {
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
        self.steps.replace(anti_diagonals(self.grid));
        Ok(())
    }
}
