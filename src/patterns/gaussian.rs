use crate::algorithm::decomposition::{DecompositionOptions, simplify_monochrome_colors};
use crate::algorithm::grouping::group_by_color;
use crate::color::paint::{ArbitraryColor, Color};
use crate::color::rgb::Rgb;
use crate::color::rich::{Action, RichColor, SharedColor};
use crate::io::configuration::{COLOR_GROUPING_TOLERANCE, GAUSSIAN_RADIUS};
use crate::io::error::{Result, invalid_parameter};
use crate::patterns::{Pattern, StepList, pattern_name};
use crate::spatial::geometry::{CalibrationRecord, to_aspect_unit};
use crate::spatial::grid::Cell;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Radial blend from an inner color at the grid center to an outer color
///
/// Cells are grouped by blended color, each group is decomposed into
/// rectangles, and groups are painted from the inside out.
pub struct GaussianCells {
    name: String,
    calib: CalibrationRecord,
    inner: Rgb,
    outer: Rgb,
    radius: f64,
    tolerance: f64,
    coerce: bool,
    rng: StdRng,
    steps: StepList<RichColor>,
}

impl GaussianCells {
    /// Radial blend with the default radius and grouping tolerance
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the radius is not positive
    pub fn new(calib: &CalibrationRecord, inner: Rgb, outer: Rgb, seed: u64) -> Result<Self> {
        Self::with_options(
            calib,
            inner,
            outer,
            GAUSSIAN_RADIUS,
            COLOR_GROUPING_TOLERANCE,
            false,
            seed,
        )
    }

    /// Radial blend with explicit radius, grouping tolerance and coercion
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the radius is not positive
    pub fn with_options(
        calib: &CalibrationRecord,
        inner: Rgb,
        outer: Rgb,
        radius: f64,
        tolerance: f64,
        coerce: bool,
        seed: u64,
    ) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(invalid_parameter("radius", &radius, &"must be positive"));
        }
        let mut pattern = Self {
            name: pattern_name("gaussian"),
            calib: calib.clone(),
            inner,
            outer,
            radius,
            tolerance,
            coerce,
            rng: StdRng::seed_from_u64(seed),
            steps: StepList::default(),
        };
        pattern.derive_steps()?;
        Ok(pattern)
    }

    /// Blended color of a cell
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the cell is off the grid
    pub fn blend_at(&self, cell: Cell) -> Result<Rgb> {
        let (u, v) = to_aspect_unit(&self.calib, cell.col, cell.row)?;
        let alpha = (u.hypot(v) / self.radius).min(1.0);
        Ok(self.inner.blend(self.outer, alpha))
    }

    fn derive_steps(&mut self) -> Result<()> {
        let colored = self
            .calib
            .grid()
            .cells()
            .map(|cell| self.blend_at(cell).map(|rgb| (cell, rgb)))
            .collect::<Result<Vec<_>>>()?;

        let mut groups = group_by_color(colored, |(_, rgb)| *rgb, self.tolerance);
        let inner = self.inner;
        groups.sort_by(|a, b| {
            inner
                .euclidean_distance(a.color)
                .total_cmp(&inner.euclidean_distance(b.color))
        });

        let mut strokes = Vec::new();
        for group in groups {
            let mut arbitrary = ArbitraryColor::from_rgb(group.color);
            if self.coerce {
                arbitrary = arbitrary.coerced();
            }
            let color = SharedColor::new(Color::Arbitrary(arbitrary));
            let cells: Vec<Cell> = group.members.iter().map(|(cell, _)| *cell).collect();
            let mut group_strokes = simplify_monochrome_colors(
                &cells,
                &color,
                DecompositionOptions::default(),
                &mut self.rng,
            );
            group_strokes.shuffle(&mut self.rng);
            strokes.extend(group_strokes);
        }

        debug!(pattern = %self.name, steps = strokes.len(), "gaussian steps derived");
        self.steps.replace(strokes);
        Ok(())
    }
}

impl Pattern for GaussianCells {
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
        self.steps.stroke_action()
    }

    fn advance(&mut self) {
        self.steps.advance();
    }

    fn reset(&mut self) -> Result<()> {
        self.derive_steps()
    }
}
