//! Cell addressing, rectangles and placements over a fixed grid

use crate::io::error::{BoxesError, Result, invalid_parameter, out_of_range};
use std::fmt;

/// Letters available to spreadsheet-style column names
const ALPHABET_LEN: usize = 26;

/// A single grid cell addressed by zero-based column and row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Zero-based column index
    pub col: usize,
    /// Zero-based row index
    pub row: usize,
}

impl Cell {
    /// Create a cell at the given column and row
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Spreadsheet-style name such as `A:1` or `AA:12`
    pub fn name(self) -> String {
        format!("{}:{}", column_letters(self.col), self.row + 1)
    }

    /// Parse a spreadsheet-style name back into a cell
    ///
    /// # Errors
    ///
    /// Returns `InvalidCellName` if the name is not `LETTERS:NUMBER` with a
    /// positive row number
    pub fn from_name(name: &str) -> Result<Self> {
        let invalid = || BoxesError::InvalidCellName {
            name: name.to_string(),
        };

        let (letters, digits) = name.split_once(':').ok_or_else(invalid)?;
        if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let mut col_number: usize = 0;
        for c in letters.chars() {
            let value = (c.to_ascii_uppercase() as usize) - ('A' as usize) + 1;
            col_number = col_number
                .checked_mul(ALPHABET_LEN)
                .and_then(|n| n.checked_add(value))
                .ok_or_else(invalid)?;
        }

        let row_number: usize = digits.parse().map_err(|_| invalid())?;
        if row_number == 0 {
            return Err(invalid());
        }

        Ok(Self::new(col_number - 1, row_number - 1))
    }

    /// Neighbor one step in `direction`, if it does not underflow
    pub const fn neighbor(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Up => match self.row.checked_sub(1) {
                Some(row) => Some(Self::new(self.col, row)),
                None => None,
            },
            Direction::Down => Some(Self::new(self.col, self.row + 1)),
            Direction::Left => match self.col.checked_sub(1) {
                Some(col) => Some(Self::new(col, self.row)),
                None => None,
            },
            Direction::Right => Some(Self::new(self.col + 1, self.row)),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Bijective base-26 column letters: 0 is `A`, 25 is `Z`, 26 is `AA`
pub fn column_letters(col: usize) -> String {
    let mut letters = Vec::new();
    let mut n = col + 1;
    while n > 0 {
        let rem = (n - 1) % ALPHABET_LEN;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / ALPHABET_LEN;
    }
    letters.iter().rev().collect()
}

/// Axis-aligned unit step on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward row 0
    Up,
    /// Toward the last row
    Down,
    /// Toward column 0
    Left,
    /// Toward the last column
    Right,
}

impl Direction {
    /// All four directions
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The direction pointing the other way
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The two directions at right angles to this one
    pub const fn perpendicular(self) -> [Self; 2] {
        match self {
            Self::Up | Self::Down => [Self::Left, Self::Right],
            Self::Left | Self::Right => [Self::Up, Self::Down],
        }
    }
}

/// Rectangle spanned by two corner cells, inclusive on both ends
///
/// The corners keep the order they were given in, which is the order an
/// on-screen selection clicks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRect {
    /// First selected corner
    pub from: Cell,
    /// Opposite corner
    pub to: Cell,
}

impl CellRect {
    /// Rectangle spanning the two corners
    pub const fn new(from: Cell, to: Cell) -> Self {
        Self { from, to }
    }

    /// Top-left corner
    pub fn min(&self) -> Cell {
        Cell::new(self.from.col.min(self.to.col), self.from.row.min(self.to.row))
    }

    /// Bottom-right corner
    pub fn max(&self) -> Cell {
        Cell::new(self.from.col.max(self.to.col), self.from.row.max(self.to.row))
    }

    /// Number of columns covered
    pub fn width(&self) -> usize {
        self.from.col.abs_diff(self.to.col) + 1
    }

    /// Number of rows covered
    pub fn height(&self) -> usize {
        self.from.row.abs_diff(self.to.row) + 1
    }

    /// Number of cells covered
    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    /// Test whether the cell lies inside the rectangle
    pub fn contains(&self, cell: Cell) -> bool {
        let (lo, hi) = (self.min(), self.max());
        (lo.col..=hi.col).contains(&cell.col) && (lo.row..=hi.row).contains(&cell.row)
    }

    /// Covered cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let (lo, hi) = (self.min(), self.max());
        (lo.row..=hi.row).flat_map(move |row| (lo.col..=hi.col).map(move |col| Cell::new(col, row)))
    }
}

/// What a single recolor selects before its color is applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// One cell
    Cell(Cell),
    /// A filled rectangle
    Rect(CellRect),
    /// An arbitrary set of cells selected together
    Cloud(Vec<Cell>),
}

impl Placement {
    /// Every cell this placement selects
    pub fn cells(&self) -> Vec<Cell> {
        match self {
            Self::Cell(cell) => vec![*cell],
            Self::Rect(rect) => rect.cells().collect(),
            Self::Cloud(cells) => cells.clone(),
        }
    }

    /// Number of cells this placement selects
    pub fn cell_count(&self) -> usize {
        match self {
            Self::Cell(_) => 1,
            Self::Rect(rect) => rect.area(),
            Self::Cloud(cells) => cells.len(),
        }
    }

    /// Check that every corner or member lies on the grid
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` for the first cell outside `grid`
    pub fn validate(&self, grid: &GridShape) -> Result<()> {
        match self {
            Self::Cell(cell) => grid.check(*cell).map(|_| ()),
            Self::Rect(rect) => {
                grid.check(rect.from)?;
                grid.check(rect.to).map(|_| ())
            }
            Self::Cloud(cells) => cells.iter().try_for_each(|cell| grid.check(*cell).map(|_| ())),
        }
    }
}

/// Fixed `n_cols × n_rows` grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridShape {
    /// Number of columns
    pub n_cols: usize,
    /// Number of rows
    pub n_rows: usize,
}

impl GridShape {
    /// Create a grid shape
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero
    pub fn new(n_cols: usize, n_rows: usize) -> Result<Self> {
        if n_cols == 0 {
            return Err(invalid_parameter("n_cols", &n_cols, &"must be positive"));
        }
        if n_rows == 0 {
            return Err(invalid_parameter("n_rows", &n_rows, &"must be positive"));
        }
        Ok(Self { n_cols, n_rows })
    }

    /// Number of cells in the grid
    pub const fn cell_count(&self) -> usize {
        self.n_cols * self.n_rows
    }

    /// Test whether the cell lies on the grid
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.col < self.n_cols && cell.row < self.n_rows
    }

    /// Return the cell unchanged if it lies on the grid
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` naming the first offending axis
    pub const fn check(&self, cell: Cell) -> Result<Cell> {
        if cell.col >= self.n_cols {
            return Err(out_of_range("col", cell.col, self.n_cols));
        }
        if cell.row >= self.n_rows {
            return Err(out_of_range("row", cell.row, self.n_rows));
        }
        Ok(cell)
    }

    /// Row-major linear index of a cell
    pub const fn index_of(&self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.row * self.n_cols + cell.col)
        } else {
            None
        }
    }

    /// Cell at a row-major linear index
    pub const fn cell_at(&self, index: usize) -> Option<Cell> {
        if index < self.cell_count() {
            Some(Cell::new(index % self.n_cols, index / self.n_cols))
        } else {
            None
        }
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let n_cols = self.n_cols;
        (0..self.cell_count()).map(move |index| Cell::new(index % n_cols, index / n_cols))
    }

    /// Rectangle covering the whole grid
    pub const fn full_rect(&self) -> CellRect {
        CellRect::new(
            Cell::new(0, 0),
            Cell::new(self.n_cols.saturating_sub(1), self.n_rows.saturating_sub(1)),
        )
    }
}
