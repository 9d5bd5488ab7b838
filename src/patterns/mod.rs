//! Procedural pattern generators expressed as resumable step sequences
//!
//! Every generator derives its full step list when it is constructed or
//! reset, so `n_steps` never changes during a traversal and `step` is pure.

use crate::color::rich::{Action, RichColor, SharedColor};
use crate::io::error::Result;
use crate::spatial::grid::Placement;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Box packings and whole-grid box fills
pub mod boxes;
/// Random cell permutations
pub mod cells;
/// Diffusion clouds
pub mod clouds;
/// Anti-diagonal sweeps
pub mod diagonal;
/// Radial color blends around the grid center
pub mod gaussian;
/// Lanes growing from one edge
pub mod icicles;
/// Raster reproductions
pub mod image;
/// Conway's game of life on a torus
pub mod life;
/// Row and column light switching
pub mod lights;
/// Palette sweeps and the palette test card
pub mod palette_sweep;
/// Boustrophedon snakes
pub mod snake;
/// Rectangular spirals
pub mod spiral;

static PATTERN_COUNTER: AtomicUsize = AtomicUsize::new(1);

/// Unique instance name built from a type prefix
pub fn pattern_name(prefix: &str) -> String {
    let id = PATTERN_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}_{id}")
}

/// Resumable sequence of recolor steps
pub trait Pattern {
    /// Unique instance name
    fn name(&self) -> &str;

    /// Number of steps in the current traversal
    fn n_steps(&self) -> usize;

    /// Cursor position in `[0, n_steps]`
    fn current_step(&self) -> usize;

    /// Action at the cursor, or `None` once the traversal is exhausted
    fn step(&self) -> Option<Action>;

    /// Move the cursor forward by one step
    fn advance(&mut self);

    /// Re-derive randomized orderings and rewind the cursor
    ///
    /// # Errors
    ///
    /// Returns an error if the step list cannot be derived
    fn reset(&mut self) -> Result<()>;

    /// Remaining actions, leaving the cursor at the end
    fn all_steps(&mut self) -> Vec<Action> {
        let mut actions = Vec::with_capacity(self.n_steps().saturating_sub(self.current_step()));
        while let Some(action) = self.step() {
            actions.push(action);
            self.advance();
        }
        actions
    }
}

/// Precomputed step items with a cursor
#[derive(Debug, Clone)]
pub struct StepList<T> {
    items: Vec<T>,
    cursor: usize,
}

impl<T> Default for StepList<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> StepList<T> {
    /// Step list positioned at its first item
    pub const fn new(items: Vec<T>) -> Self {
        Self { items, cursor: 0 }
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Test if there are no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Cursor position
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Item at the cursor
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.cursor)
    }

    /// Every item in traversal order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Move to the next item, stopping one past the last
    pub fn advance(&mut self) {
        if self.cursor < self.items.len() {
            self.cursor += 1;
        }
    }

    /// Swap in a new traversal and rewind
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.cursor = 0;
    }
}

impl StepList<Placement> {
    /// Action recoloring the current placement with `color`
    pub fn placement_action(&self, color: &SharedColor) -> Option<Action> {
        self.current()
            .map(|placement| Action::single(placement.clone(), color.clone()))
    }
}

impl StepList<RichColor> {
    /// Action applying the current stroke
    pub fn stroke_action(&self) -> Option<Action> {
        self.current().map(|stroke| Action::new(vec![stroke.clone()]))
    }
}

impl StepList<Action> {
    /// Copy of the current action
    pub fn action(&self) -> Option<Action> {
        self.current().cloned()
    }
}

pub use boxes::{BoxFill, Boxes};
pub use cells::RandomCells;
pub use clouds::Clouds;
pub use diagonal::DiagonalFill;
pub use gaussian::GaussianCells;
pub use icicles::{IcicleDirection, Icicles};
pub use image::{FitMode, ImagePattern};
pub use life::{GameOfLife, LifeSeed};
pub use lights::{Lights, LightsAxis};
pub use palette_sweep::{PaletteSweep, PaletteTest};
pub use snake::{Snake, SnakeDirection};
pub use spiral::{Spiral, SpiralKind};
