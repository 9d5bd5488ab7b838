//! Calibration record and the mappings from grid indices to device and
//! normalized coordinate spaces
//!
//! A [`CalibrationRecord`] is immutable once built. Geometric changes such as
//! switching to a square grid produce a new record.

use crate::io::configuration::{PALETTE_COLS, PALETTE_ROWS};
use crate::io::error::{Result, invalid_parameter, out_of_range};
use crate::spatial::grid::GridShape;
use serde::{Deserialize, Serialize};

/// Device-space coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point shifted by the given offsets
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// On-screen anchors located during calibration
///
/// The header anchors are optional; when absent they are placed one pitch
/// outside the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenAnchors {
    /// Center of the top-left grid cell
    pub top_left: Point,
    /// Center of the bottom-right grid cell
    pub bottom_right: Point,
    /// Button that opens the color chooser
    pub color_chooser: Point,
    /// Button that reapplies the most recent color
    pub repeat_last: Point,
    /// No-fill entry of the chooser
    pub no_fill: Point,
    /// Top-left palette swatch
    pub palette_top_left: Point,
    /// Bottom-right palette swatch
    pub palette_bottom_right: Point,
    /// Custom color entry of the chooser
    pub custom_color: Point,
    /// Header label of the first row
    #[serde(default)]
    pub first_row: Option<Point>,
    /// Header label of the first column
    #[serde(default)]
    pub first_col: Option<Point>,
}

/// Immutable calibration of the grid and the color chooser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationRecord {
    /// Center of the top-left grid cell
    pub top_left: Point,
    /// Center of the bottom-right grid cell
    pub bottom_right: Point,
    /// Button that opens the color chooser
    pub color_chooser: Point,
    /// Button that reapplies the most recent color
    pub repeat_last: Point,
    /// No-fill entry of the chooser
    pub no_fill: Point,
    /// Top-left palette swatch
    pub palette_top_left: Point,
    /// Bottom-right palette swatch
    pub palette_bottom_right: Point,
    /// Custom color entry of the chooser
    pub custom_color: Point,
    /// Header label of the first row
    pub first_row: Point,
    /// Header label of the first column
    pub first_col: Point,
    /// Horizontal pitch between cell centers
    pub cell_width: f64,
    /// Vertical pitch between cell centers
    pub cell_height: f64,
    /// Number of grid columns
    pub n_cols: usize,
    /// Number of grid rows
    pub n_rows: usize,
    /// Number of palette columns
    pub n_color_cols: usize,
    /// Number of palette rows
    pub n_color_rows: usize,
}

impl CalibrationRecord {
    /// Build a record from located anchors, deriving the cell pitch from the
    /// two grid corners
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the grid is smaller than 2×2 or the
    /// corners do not produce a positive pitch
    pub fn from_anchors(anchors: &ScreenAnchors, grid: GridShape) -> Result<Self> {
        if grid.n_cols < 2 || grid.n_rows < 2 {
            return Err(invalid_parameter(
                "grid",
                &format!("{}x{}", grid.n_cols, grid.n_rows),
                &"calibration needs at least 2 columns and 2 rows",
            ));
        }

        let cell_width = (anchors.bottom_right.x - anchors.top_left.x) / (grid.n_cols - 1) as f64;
        let cell_height = (anchors.bottom_right.y - anchors.top_left.y) / (grid.n_rows - 1) as f64;

        let record = Self {
            top_left: anchors.top_left,
            bottom_right: anchors.bottom_right,
            color_chooser: anchors.color_chooser,
            repeat_last: anchors.repeat_last,
            no_fill: anchors.no_fill,
            palette_top_left: anchors.palette_top_left,
            palette_bottom_right: anchors.palette_bottom_right,
            custom_color: anchors.custom_color,
            first_row: anchors
                .first_row
                .unwrap_or_else(|| anchors.top_left.offset(-cell_width, 0.0)),
            first_col: anchors
                .first_col
                .unwrap_or_else(|| anchors.top_left.offset(0.0, -cell_height)),
            cell_width,
            cell_height,
            n_cols: grid.n_cols,
            n_rows: grid.n_rows,
            n_color_cols: PALETTE_COLS,
            n_color_rows: PALETTE_ROWS,
        };
        record.validate()?;
        Ok(record)
    }

    /// Record for a sheet that exists only in memory
    ///
    /// The grid starts at the origin and the chooser sits to its right.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the grid or pitch is invalid
    pub fn virtual_sheet(grid: GridShape, cell_width: f64, cell_height: f64) -> Result<Self> {
        let top_left = Point::new(cell_width / 2.0, cell_height / 2.0);
        let bottom_right = top_left.offset(
            grid.n_cols.saturating_sub(1) as f64 * cell_width,
            grid.n_rows.saturating_sub(1) as f64 * cell_height,
        );
        let chooser = Point::new(bottom_right.x + 2.0 * cell_width, top_left.y);
        let anchors = ScreenAnchors {
            top_left,
            bottom_right,
            color_chooser: chooser,
            repeat_last: chooser.offset(-cell_width, 0.0),
            no_fill: chooser.offset(0.0, cell_height),
            palette_top_left: chooser.offset(0.0, 2.0 * cell_height),
            palette_bottom_right: chooser.offset(
                (PALETTE_COLS - 1) as f64 * cell_width,
                (PALETTE_ROWS + 1) as f64 * cell_height,
            ),
            custom_color: chooser.offset(0.0, (PALETTE_ROWS + 2) as f64 * cell_height),
            first_row: None,
            first_col: None,
        };
        Self::from_anchors(&anchors, grid)
    }

    /// Check the record's invariants
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first violated invariant
    pub fn validate(&self) -> Result<()> {
        if !(self.cell_width.is_finite() && self.cell_width > 0.0) {
            return Err(invalid_parameter(
                "cell_width",
                &self.cell_width,
                &"must be positive",
            ));
        }
        if !(self.cell_height.is_finite() && self.cell_height > 0.0) {
            return Err(invalid_parameter(
                "cell_height",
                &self.cell_height,
                &"must be positive",
            ));
        }
        if self.n_cols < 2 {
            return Err(invalid_parameter("n_cols", &self.n_cols, &"must be at least 2"));
        }
        if self.n_rows < 2 {
            return Err(invalid_parameter("n_rows", &self.n_rows, &"must be at least 2"));
        }
        if self.n_color_cols < 2 || self.n_color_rows < 2 {
            return Err(invalid_parameter(
                "palette",
                &format!("{}x{}", self.n_color_cols, self.n_color_rows),
                &"must be at least 2x2",
            ));
        }
        Ok(())
    }

    /// Grid dimensions covered by this record
    pub const fn grid(&self) -> GridShape {
        GridShape {
            n_cols: self.n_cols,
            n_rows: self.n_rows,
        }
    }

    /// Physical width over height of the whole grid
    pub fn aspect_ratio(&self) -> f64 {
        (self.n_cols as f64 * self.cell_width) / (self.n_rows as f64 * self.cell_height)
    }

    /// Copy of this record with a different grid size and pitch
    ///
    /// The top-left anchor stays put; the bottom-right anchor and the header
    /// anchors follow the new pitch.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the resulting record is invalid
    pub fn with_grid(
        &self,
        n_cols: usize,
        n_rows: usize,
        cell_width: f64,
        cell_height: f64,
    ) -> Result<Self> {
        let record = Self {
            bottom_right: self.top_left.offset(
                n_cols.saturating_sub(1) as f64 * cell_width,
                n_rows.saturating_sub(1) as f64 * cell_height,
            ),
            first_row: self.top_left.offset(-cell_width, 0.0),
            first_col: self.top_left.offset(0.0, -cell_height),
            cell_width,
            cell_height,
            n_cols,
            n_rows,
            ..self.clone()
        };
        record.validate()?;
        Ok(record)
    }

    /// Copy of this record with square cells and `n_cols` columns
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `n_cols` is below 2
    pub fn to_square_grid(&self, n_cols: usize) -> Result<Self> {
        self.with_grid(n_cols, self.n_rows, self.cell_height, self.cell_height)
    }

    /// Header anchor for a whole row
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `row` is outside the grid
    pub fn first_row_point(&self, row: usize) -> Result<Point> {
        if row >= self.n_rows {
            return Err(out_of_range("row", row, self.n_rows));
        }
        Ok(self.first_row.offset(0.0, row as f64 * self.cell_height))
    }

    /// Header anchor for a whole column
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `col` is outside the grid
    pub fn first_col_point(&self, col: usize) -> Result<Point> {
        if col >= self.n_cols {
            return Err(out_of_range("col", col, self.n_cols));
        }
        Ok(self.first_col.offset(col as f64 * self.cell_width, 0.0))
    }
}

/// Device coordinate of a cell center
///
/// # Errors
///
/// Returns `OutOfRange` if `col` or `row` is outside the grid
pub fn cell_to_point(calib: &CalibrationRecord, col: usize, row: usize) -> Result<Point> {
    if col >= calib.n_cols {
        return Err(out_of_range("col", col, calib.n_cols));
    }
    if row >= calib.n_rows {
        return Err(out_of_range("row", row, calib.n_rows));
    }
    Ok(calib.top_left.offset(
        col as f64 * calib.cell_width,
        row as f64 * calib.cell_height,
    ))
}

/// Device coordinate of a palette swatch, interpolated between the two
/// palette corners
///
/// # Errors
///
/// Returns `OutOfRange` if `i` or `j` is outside the palette
pub fn palette_to_point(calib: &CalibrationRecord, i: usize, j: usize) -> Result<Point> {
    if i >= calib.n_color_cols {
        return Err(out_of_range("palette col", i, calib.n_color_cols));
    }
    if j >= calib.n_color_rows {
        return Err(out_of_range("palette row", j, calib.n_color_rows));
    }
    let tl = calib.palette_top_left;
    let br = calib.palette_bottom_right;
    let pitch_x = (br.x - tl.x) / (calib.n_color_cols - 1) as f64;
    let pitch_y = (br.y - tl.y) / (calib.n_color_rows - 1) as f64;
    Ok(tl.offset(i as f64 * pitch_x, j as f64 * pitch_y))
}

/// Cell position in the `[-1, 1]²` square
///
/// # Errors
///
/// Returns `OutOfRange` if `col` or `row` is outside the grid
pub fn to_unit_square(calib: &CalibrationRecord, col: usize, row: usize) -> Result<(f64, f64)> {
    if col >= calib.n_cols {
        return Err(out_of_range("col", col, calib.n_cols));
    }
    if row >= calib.n_rows {
        return Err(out_of_range("row", row, calib.n_rows));
    }
    let u = col as f64 / (calib.n_cols - 1) as f64 * 2.0 - 1.0;
    let v = row as f64 / (calib.n_rows - 1) as f64 * 2.0 - 1.0;
    Ok((u, v))
}

/// Cell position in the unit square with the longer physical axis stretched
/// by the grid's aspect ratio, so equal distances look equal on screen
///
/// # Errors
///
/// Returns `OutOfRange` if `col` or `row` is outside the grid
pub fn to_aspect_unit(calib: &CalibrationRecord, col: usize, row: usize) -> Result<(f64, f64)> {
    let (u, v) = to_unit_square(calib, col, row)?;
    let aspect = calib.aspect_ratio();
    if aspect > 1.0 {
        Ok((u * aspect, v))
    } else {
        Ok((u, v / aspect))
    }
}
