//! Colors bound to placements, and the steps patterns emit

use crate::color::cache::RecentColorCache;
use crate::color::paint::Color;
use crate::color::rgb::Rgb;
use crate::io::error::{Result, invalid_parameter};
use crate::io::sink::ActionSink;
use crate::spatial::grid::{Cell, Placement};
use std::cell::RefCell;
use std::rc::Rc;

/// Single-threaded handle to a color shared by every step of a pattern
///
/// Cloning the handle shares the underlying state, so a cycler keeps cycling
/// across all actions that reference it.
#[derive(Debug, Clone)]
pub struct SharedColor(Rc<RefCell<Color>>);

impl SharedColor {
    /// Wrap a color in a new shared handle
    pub fn new(color: impl Into<Color>) -> Self {
        Self(Rc::new(RefCell::new(color.into())))
    }

    /// Color the next apply will produce; `None` for no-fill
    pub fn rgb(&self) -> Option<Rgb> {
        self.0.try_borrow().ok().and_then(|color| color.rgb())
    }

    /// Copy of the current color state
    pub fn snapshot(&self) -> Option<Color> {
        self.0.try_borrow().ok().map(|color| color.clone())
    }

    /// Apply the shared color through the sink
    ///
    /// # Errors
    ///
    /// Propagates sink failures, or `InvalidParameter` if the color is
    /// already being applied
    pub fn apply(&self, sink: &mut dyn ActionSink, cache: &mut RecentColorCache) -> Result<()> {
        let mut color = self
            .0
            .try_borrow_mut()
            .map_err(|e| invalid_parameter("color", &"shared color", &e))?;
        color.apply(sink, cache)
    }

    /// Whether both handles point at the same color
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Color> for SharedColor {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

/// A color bound to the cells it recolors
#[derive(Debug, Clone)]
pub struct RichColor {
    /// Cells selected before the color is applied
    pub placement: Placement,
    /// Color applied to the selection
    pub color: SharedColor,
}

impl RichColor {
    /// Bind a color to a placement
    pub const fn new(placement: Placement, color: SharedColor) -> Self {
        Self { placement, color }
    }

    /// Select the placement, then apply the color
    ///
    /// # Errors
    ///
    /// Propagates sink failures
    pub fn apply(&self, sink: &mut dyn ActionSink, cache: &mut RecentColorCache) -> Result<()> {
        sink.select(&self.placement)?;
        self.color.apply(sink, cache)
    }
}

/// One pattern step: an ordered list of strokes, possibly empty
#[derive(Debug, Clone, Default)]
pub struct Action {
    strokes: Vec<RichColor>,
}

impl Action {
    /// Step made of the given strokes
    pub const fn new(strokes: Vec<RichColor>) -> Self {
        Self { strokes }
    }

    /// Step with a single stroke
    pub fn single(placement: Placement, color: SharedColor) -> Self {
        Self::new(vec![RichColor::new(placement, color)])
    }

    /// Strokes in application order
    pub fn strokes(&self) -> &[RichColor] {
        &self.strokes
    }

    /// Whether the step recolors nothing
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Every recolored cell, in stroke order
    pub fn cells(&self) -> Vec<Cell> {
        self.strokes
            .iter()
            .flat_map(|stroke| stroke.placement.cells())
            .collect()
    }

    /// Apply every stroke in order
    ///
    /// # Errors
    ///
    /// Stops at and returns the first sink failure
    pub fn apply(&self, sink: &mut dyn ActionSink, cache: &mut RecentColorCache) -> Result<()> {
        self.strokes
            .iter()
            .try_for_each(|stroke| stroke.apply(sink, cache))
    }
}

impl From<Vec<RichColor>> for Action {
    fn from(strokes: Vec<RichColor>) -> Self {
        Self::new(strokes)
    }
}
