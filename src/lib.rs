//! Generative recolor choreography over a fixed grid of addressable cells
//!
//! Patterns decide which cells to select and which color to apply, one step at a time.
//! Steps from several patterns are interleaved by a weighted scheduler and sent to an
//! action sink, which either drives a real spreadsheet or paints a virtual canvas.

#![forbid(unsafe_code)]

/// Region decomposition and color grouping
pub mod algorithm;
/// Scheduling of pattern steps and the named shows
pub mod choreography;
/// Colors, the standard palette and the recent-color cache
pub mod color;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for interpolation and probability calculations
pub mod math;
/// Pattern generators producing recolor steps
pub mod patterns;
/// Cells, placements and calibration geometry
pub mod spatial;

pub use io::error::{BoxesError, Result};
