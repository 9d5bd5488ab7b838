use crate::spatial::grid::{Cell, GridShape};
use bitvec::prelude::*;

/// Fixed-size cell membership set over a grid
///
/// Bits are stored in row-major order. Cells outside the grid are never
/// members and are ignored on insertion.
#[derive(Clone, Debug)]
pub struct CellMask {
    bits: BitVec,
    grid: GridShape,
}

impl CellMask {
    /// Create a mask with no cells present
    pub fn new(grid: GridShape) -> Self {
        Self {
            bits: bitvec![0; grid.cell_count()],
            grid,
        }
    }

    /// Create a mask containing every cell of the grid
    pub fn full(grid: GridShape) -> Self {
        Self {
            bits: bitvec![1; grid.cell_count()],
            grid,
        }
    }

    /// Grid this mask covers
    pub const fn grid(&self) -> GridShape {
        self.grid
    }

    /// Insert a cell, returning whether it was newly added
    pub fn insert(&mut self, cell: Cell) -> bool {
        match self.grid.index_of(cell) {
            Some(index) if !self.contains(cell) => {
                self.bits.set(index, true);
                true
            }
            _ => false,
        }
    }

    /// Remove a cell, returning whether it was present
    pub fn remove(&mut self, cell: Cell) -> bool {
        match self.grid.index_of(cell) {
            Some(index) if self.contains(cell) => {
                self.bits.set(index, false);
                true
            }
            _ => false,
        }
    }

    /// Test cell membership
    pub fn contains(&self, cell: Cell) -> bool {
        self.grid
            .index_of(cell)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Test if no cells are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Test if every cell is present
    pub fn is_full(&self) -> bool {
        self.bits.all()
    }

    /// Count cells in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Member cells in row-major order
    pub fn to_vec(&self) -> Vec<Cell> {
        self.bits
            .iter_ones()
            .filter_map(|index| self.grid.cell_at(index))
            .collect()
    }

    /// Cells of the grid that are not members, in row-major order
    pub fn complement(&self) -> Vec<Cell> {
        self.bits
            .iter_zeros()
            .filter_map(|index| self.grid.cell_at(index))
            .collect()
    }
}
