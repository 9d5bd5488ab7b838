use crate::color::rich::{Action, SharedColor};
use crate::io::configuration::{SNAKE_SEGMENT_SIZE, SNAKE_WIDTH};
use crate::io::error::{Result, invalid_parameter};
use crate::patterns::{Pattern, StepList, pattern_name};
use crate::spatial::geometry::CalibrationRecord;
use crate::spatial::grid::{Cell, CellRect, GridShape, Placement};

/// Overall travel direction of a snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeDirection {
    /// Row bands from top to bottom
    Down,
    /// Column bands from left to right
    Right,
    /// Row bands from bottom to top
    Up,
    /// Column bands from right to left
    Left,
}

/// Boustrophedon traversal in bands of `width`, painted in segments
///
/// Segments run along each band and the run direction alternates from one
/// band to the next, so the snake never jumps across the grid.
pub struct Snake {
    name: String,
    grid: GridShape,
    direction: SnakeDirection,
    width: usize,
    segment_size: usize,
    color: SharedColor,
    steps: StepList<Placement>,
}

impl Snake {
    /// Snake with the default band width and segment size
    pub fn new(calib: &CalibrationRecord, direction: SnakeDirection, color: SharedColor) -> Self {
        let grid = calib.grid();
        Self {
            name: pattern_name("snake"),
            grid,
            direction,
            width: SNAKE_WIDTH,
            segment_size: SNAKE_SEGMENT_SIZE,
            color,
            steps: StepList::new(snake_segments(grid, direction, SNAKE_WIDTH, SNAKE_SEGMENT_SIZE)),
        }
    }

    /// Snake with explicit band width and segment size
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either size is zero
    pub fn with_sizes(
        calib: &CalibrationRecord,
        direction: SnakeDirection,
        width: usize,
        segment_size: usize,
        color: SharedColor,
    ) -> Result<Self> {
        if width == 0 {
            return Err(invalid_parameter("width", &width, &"must be positive"));
        }
        if segment_size == 0 {
            return Err(invalid_parameter(
                "segment_size",
                &segment_size,
                &"must be positive",
            ));
        }
        let grid = calib.grid();
        Ok(Self {
            name: pattern_name("snake"),
            grid,
            direction,
            width,
            segment_size,
            color,
            steps: StepList::new(snake_segments(grid, direction, width, segment_size)),
        })
    }
}

/// Segments of a snake in painting order
///
/// Segments are clamped to the grid, so the last band and the last segment
/// of each band may be narrower.
pub fn snake_segments(
    grid: GridShape,
    direction: SnakeDirection,
    width: usize,
    segment_size: usize,
) -> Vec<Placement> {
    let width = width.max(1);
    let segment_size = segment_size.max(1);
    let (across, along) = match direction {
        SnakeDirection::Down | SnakeDirection::Up => (grid.n_rows, grid.n_cols),
        SnakeDirection::Right | SnakeDirection::Left => (grid.n_cols, grid.n_rows),
    };
    let reversed_bands = matches!(direction, SnakeDirection::Up | SnakeDirection::Left);

    let mut bands: Vec<(usize, usize)> = (0..across)
        .step_by(width)
        .map(|start| (start, (start + width).min(across) - 1))
        .collect();
    if reversed_bands {
        bands.reverse();
    }

    let mut placements = Vec::new();
    for (band_index, (band_lo, band_hi)) in bands.into_iter().enumerate() {
        let mut segments: Vec<(usize, usize)> = (0..along)
            .step_by(segment_size)
            .map(|start| (start, (start + segment_size).min(along) - 1))
            .collect();
        if band_index % 2 == 1 {
            segments.reverse();
        }

        for (seg_lo, seg_hi) in segments {
            let (from, to) = match direction {
                SnakeDirection::Down | SnakeDirection::Up => {
                    (Cell::new(seg_lo, band_lo), Cell::new(seg_hi, band_hi))
                }
                SnakeDirection::Right | SnakeDirection::Left => {
                    (Cell::new(band_lo, seg_lo), Cell::new(band_hi, seg_hi))
                }
            };
            placements.push(if from == to {
                Placement::Cell(from)
            } else {
                Placement::Rect(CellRect::new(from, to))
            });
        }
    }
    placements
}

impl Pattern for Snake {
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
        self.steps.replace(snake_segments(
            self.grid,
            self.direction,
            self.width,
            self.segment_size,
        ));
        Ok(())
    }
}
