//! Greedy decomposition of a monochrome cell set into rectangle selections
//!
//! Seeds are visited in random order. Each seed grows a rectangle: first a
//! strip along a random present neighbor, then, when the perpendicular
//! neighbor and the diagonal cell are both present, a block extended one
//! edge at a time on all four sides. Every consumed cell leaves the working
//! set at once, so the emitted placements partition the input.

use crate::color::rich::{RichColor, SharedColor};
use crate::spatial::grid::{Cell, CellRect, Direction, Placement};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Tuning of the rectangle search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecompositionOptions {
    /// Only grow strips along the first direction found
    pub early_stop: bool,
    /// Maximum edge extensions per rectangle; `None` is unbounded
    pub max_expansions: Option<usize>,
    /// Gather cells no rectangle captured into one trailing cloud
    pub merge_singletons: bool,
}

impl Default for DecompositionOptions {
    fn default() -> Self {
        Self {
            early_stop: false,
            max_expansions: None,
            merge_singletons: true,
        }
    }
}

impl DecompositionOptions {
    /// Strip-only options used for hand-drawn looking fills
    pub const fn artistic() -> Self {
        Self {
            early_stop: true,
            max_expansions: None,
            merge_singletons: true,
        }
    }
}

/// Rectangle under construction with its inclusive bounds
struct Growth {
    lo: Cell,
    hi: Cell,
    expansions: usize,
    limit: Option<usize>,
}

impl Growth {
    const fn new(lo: Cell, hi: Cell, limit: Option<usize>) -> Self {
        Self {
            lo,
            hi,
            expansions: 0,
            limit,
        }
    }

    fn exhausted(&self) -> bool {
        self.limit.is_some_and(|limit| self.expansions >= limit)
    }

    // Cells just outside the rectangle on one side
    fn edge(&self, direction: Direction) -> Option<Vec<Cell>> {
        let (lo, hi) = (self.lo, self.hi);
        match direction {
            Direction::Up => {
                let row = lo.row.checked_sub(1)?;
                Some((lo.col..=hi.col).map(|col| Cell::new(col, row)).collect())
            }
            Direction::Down => {
                let row = hi.row + 1;
                Some((lo.col..=hi.col).map(|col| Cell::new(col, row)).collect())
            }
            Direction::Left => {
                let col = lo.col.checked_sub(1)?;
                Some((lo.row..=hi.row).map(|row| Cell::new(col, row)).collect())
            }
            Direction::Right => {
                let col = hi.col + 1;
                Some((lo.row..=hi.row).map(|row| Cell::new(col, row)).collect())
            }
        }
    }

    // Extends one edge if every cell of it is still unplaced
    fn try_extend(&mut self, direction: Direction, remaining: &mut HashSet<Cell>) -> bool {
        if self.exhausted() {
            return false;
        }
        let Some(edge) = self.edge(direction) else {
            return false;
        };
        if !edge.iter().all(|cell| remaining.contains(cell)) {
            return false;
        }
        for cell in &edge {
            remaining.remove(cell);
        }
        match direction {
            Direction::Up => self.lo.row -= 1,
            Direction::Down => self.hi.row += 1,
            Direction::Left => self.lo.col -= 1,
            Direction::Right => self.hi.col += 1,
        }
        self.expansions += 1;
        true
    }

    fn extend_fully(&mut self, direction: Direction, remaining: &mut HashSet<Cell>) {
        while self.try_extend(direction, remaining) {}
    }

    fn into_placement(self) -> Placement {
        if self.lo == self.hi {
            Placement::Cell(self.lo)
        } else {
            Placement::Rect(CellRect::new(self.lo, self.hi))
        }
    }
}

fn bounds(a: Cell, b: Cell) -> (Cell, Cell) {
    (
        Cell::new(a.col.min(b.col), a.row.min(b.row)),
        Cell::new(a.col.max(b.col), a.row.max(b.row)),
    )
}

/// Partition `cells` into rectangles, single cells and at most one cloud
///
/// Duplicate input cells are placed once. The result is empty for empty input.
pub fn decompose<R: Rng + ?Sized>(
    cells: &[Cell],
    options: DecompositionOptions,
    rng: &mut R,
) -> Vec<Placement> {
    let mut order = cells.to_vec();
    order.sort_unstable();
    order.dedup();
    order.shuffle(rng);

    let mut remaining: HashSet<Cell> = order.iter().copied().collect();
    let mut placements = Vec::new();
    let mut singletons = Vec::new();

    for seed in order {
        if !remaining.remove(&seed) {
            continue;
        }

        let mut directions = Direction::ALL;
        directions.shuffle(rng);
        let first = directions.into_iter().find(|&direction| {
            seed.neighbor(direction)
                .is_some_and(|cell| remaining.contains(&cell))
        });

        let Some(first) = first else {
            if options.merge_singletons {
                singletons.push(seed);
            } else {
                placements.push(Placement::Cell(seed));
            }
            continue;
        };

        let second = if options.early_stop {
            None
        } else {
            let mut perpendicular = first.perpendicular();
            perpendicular.shuffle(rng);
            perpendicular.into_iter().find_map(|direction| {
                let side = seed.neighbor(direction)?;
                let diagonal = side.neighbor(first)?;
                let ahead = seed.neighbor(first)?;
                (remaining.contains(&side) && remaining.contains(&diagonal))
                    .then_some((direction, side, diagonal, ahead))
            })
        };

        let growth = match second {
            None => {
                let mut growth = Growth::new(seed, seed, options.max_expansions);
                growth.extend_fully(first, &mut remaining);
                growth
            }
            Some((direction, side, diagonal, ahead)) => {
                for cell in [side, diagonal, ahead] {
                    remaining.remove(&cell);
                }
                let (lo, hi) = bounds(seed, diagonal);
                let mut growth = Growth::new(lo, hi, options.max_expansions);
                for extension in [first, direction, first.opposite(), direction.opposite()] {
                    growth.extend_fully(extension, &mut remaining);
                }
                growth
            }
        };
        placements.push(growth.into_placement());
    }

    match singletons.len() {
        0 => {}
        1 => placements.extend(singletons.into_iter().map(Placement::Cell)),
        _ => placements.push(Placement::Cloud(singletons)),
    }
    placements
}

/// Decompose a monochrome cell set and bind every placement to `color`
pub fn simplify_monochrome_colors<R: Rng + ?Sized>(
    cells: &[Cell],
    color: &SharedColor,
    options: DecompositionOptions,
    rng: &mut R,
) -> Vec<RichColor> {
    decompose(cells, options, rng)
        .into_iter()
        .map(|placement| RichColor::new(placement, color.clone()))
        .collect()
}
