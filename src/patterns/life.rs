//! Conway's game of life (B3/S23) on a toroidal board
//!
//! Frame 0 blanks the grid with the dead color and paints the live cells.
//! Every later frame paints only the cells that changed. All frames are
//! simulated up front so the step count is known before traversal starts.

use crate::algorithm::decomposition::{DecompositionOptions, simplify_monochrome_colors};
use crate::color::rich::{Action, RichColor, SharedColor};
use crate::io::error::{Result, invalid_parameter};
use crate::patterns::{Pattern, StepList, pattern_name};
use crate::spatial::geometry::CalibrationRecord;
use crate::spatial::grid::{Cell, GridShape, Placement};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Initial board of a game of life
#[derive(Debug, Clone)]
pub enum LifeSeed {
    /// Explicit live cells; cells off the grid are ignored
    Cells(Vec<Cell>),
    /// Full board indexed `[row, col]`; it is cropped or padded to the grid
    Board(Array2<bool>),
    /// Each cell starts alive with the given probability
    Soup {
        /// Probability of a live cell, in `[0, 1]`
        density: f64,
    },
}

/// Board after one generation, wrapping at every edge
///
/// Boards are indexed `[row, col]`.
pub fn next_board(board: &Array2<bool>) -> Array2<bool> {
    let (rows, cols) = board.dim();
    if rows == 0 || cols == 0 {
        return board.clone();
    }

    let mut next = Array2::from_elem((rows, cols), false);
    for row in 0..rows {
        for col in 0..cols {
            let mut neighbors = 0;
            for dr in [rows - 1, 0, 1] {
                for dc in [cols - 1, 0, 1] {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    let r = (row + dr) % rows;
                    let c = (col + dc) % cols;
                    if board.get([r, c]).copied().unwrap_or(false) {
                        neighbors += 1;
                    }
                }
            }
            let alive = board.get([row, col]).copied().unwrap_or(false);
            if let Some(cell) = next.get_mut([row, col]) {
                *cell = matches!((alive, neighbors), (true, 2 | 3) | (false, 3));
            }
        }
    }
    next
}

/// Board with the given live cells
pub fn board_from_cells(grid: GridShape, cells: &[Cell]) -> Array2<bool> {
    let mut board = Array2::from_elem((grid.n_rows, grid.n_cols), false);
    for cell in cells {
        if let Some(alive) = board.get_mut([cell.row, cell.col]) {
            *alive = true;
        }
    }
    board
}

/// Cells where `pick` holds for the state before and after a generation
fn cells_where(
    before: &Array2<bool>,
    after: &Array2<bool>,
    pick: impl Fn(bool, bool) -> bool,
) -> Vec<Cell> {
    before
        .indexed_iter()
        .filter(|&((row, col), &was)| pick(was, after.get([row, col]).copied().unwrap_or(false)))
        .map(|((row, col), _)| Cell::new(col, row))
        .collect()
}

/// Game of life painted frame by frame
pub struct GameOfLife {
    name: String,
    grid: GridShape,
    seed: LifeSeed,
    n_frames: usize,
    stop_when_stable: bool,
    alive: SharedColor,
    dead: SharedColor,
    options: DecompositionOptions,
    rng: StdRng,
    steps: StepList<Action>,
}

impl GameOfLife {
    /// Game of `n_frames` frames, or fewer when `stop_when_stable` is set and
    /// the board stops changing
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a soup density lies outside `[0, 1]`
    pub fn new(
        calib: &CalibrationRecord,
        seed: LifeSeed,
        n_frames: usize,
        stop_when_stable: bool,
        alive: SharedColor,
        dead: SharedColor,
        rng_seed: u64,
    ) -> Result<Self> {
        if let LifeSeed::Soup { density } = seed
            && !(0.0..=1.0).contains(&density)
        {
            return Err(invalid_parameter("density", &density, &"must lie in [0, 1]"));
        }
        let mut life = Self {
            name: pattern_name("game_of_life"),
            grid: calib.grid(),
            seed,
            n_frames,
            stop_when_stable,
            alive,
            dead,
            options: DecompositionOptions::default(),
            rng: StdRng::seed_from_u64(rng_seed),
            steps: StepList::default(),
        };
        life.derive_steps();
        Ok(life)
    }

    fn initial_board(&mut self) -> Array2<bool> {
        match &self.seed {
            LifeSeed::Cells(cells) => board_from_cells(self.grid, cells),
            LifeSeed::Board(board) => {
                Array2::from_shape_fn((self.grid.n_rows, self.grid.n_cols), |(row, col)| {
                    board.get([row, col]).copied().unwrap_or(false)
                })
            }
            LifeSeed::Soup { density } => {
                let density = *density;
                let rng = &mut self.rng;
                Array2::from_shape_fn((self.grid.n_rows, self.grid.n_cols), |_| {
                    rng.random_bool(density)
                })
            }
        }
    }

    fn paint(&mut self, cells: &[Cell], color: &SharedColor) -> Vec<RichColor> {
        simplify_monochrome_colors(cells, color, self.options, &mut self.rng)
    }

    fn derive_steps(&mut self) {
        let mut frames = Vec::with_capacity(self.n_frames);
        if self.n_frames == 0 {
            self.steps.replace(frames);
            return;
        }

        let mut board = self.initial_board();
        let dead = self.dead.clone();
        let alive = self.alive.clone();

        let mut first = vec![RichColor::new(
            Placement::Rect(self.grid.full_rect()),
            dead.clone(),
        )];
        let live_cells = cells_where(&board, &board, |was, _| was);
        first.extend(self.paint(&live_cells, &alive));
        frames.push(Action::new(first));

        while frames.len() < self.n_frames {
            let next = next_board(&board);
            if self.stop_when_stable && next == board {
                break;
            }
            let died = cells_where(&board, &next, |was, now| was && !now);
            let born = cells_where(&board, &next, |was, now| !was && now);
            let mut strokes = self.paint(&died, &dead);
            strokes.extend(self.paint(&born, &alive));
            frames.push(Action::new(strokes));
            board = next;
        }

        debug!(pattern = %self.name, frames = frames.len(), "life simulated");
        self.steps.replace(frames);
    }
}

impl Pattern for GameOfLife {
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
        self.derive_steps();
        Ok(())
    }
}
