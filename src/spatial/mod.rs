//! Spatial data structures and grid addressing
//!
//! This module contains spatial-related functionality including:
//! - Cell, rectangle and placement types with spreadsheet-style names
//! - The calibration record and coordinate mappings
//! - Bit masks over grid cells

/// Calibration record and coordinate-space mappings
pub mod geometry;
/// Cells, rectangles, placements and grid dimensions
pub mod grid;
/// Cell membership masks backed by bit vectors
pub mod mask;

pub use geometry::{CalibrationRecord, Point};
pub use grid::{Cell, CellRect, Direction, GridShape, Placement};
pub use mask::CellMask;
