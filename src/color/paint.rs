//! Recolor variants and the shared apply protocol
//!
//! Every variant knows the color it produces before it is applied. Applying
//! consults the recent-color cache: a match reuses the sink's repeat-last
//! action, anything else opens the chooser and selects the variant's entry.

use crate::color::cache::RecentColorCache;
use crate::color::palette::{PaletteSlot, StandardColor, random_pool};
use crate::color::rgb::Rgb;
use crate::io::error::{BoxesError, Result};
use crate::io::sink::ActionSink;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Free RGB color, optionally snapped to the nearest palette swatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArbitraryColor {
    rgb: Rgb,
    standard: Option<StandardColor>,
    use_cache: bool,
}

impl ArbitraryColor {
    /// Color from unchecked integer components
    ///
    /// # Errors
    ///
    /// Returns `InvalidComponent` if a channel is outside `[0, 255]`
    pub fn new(r: i64, g: i64, b: i64) -> Result<Self> {
        Ok(Self::from_rgb(Rgb::try_from_components(r, g, b)?))
    }

    /// Color from a checked triple
    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self {
            rgb,
            standard: None,
            use_cache: true,
        }
    }

    /// Replace the triple with the nearest standard color
    #[must_use]
    pub fn coerced(self) -> Self {
        let standard = StandardColor::nearest(self.rgb);
        Self {
            rgb: standard.rgb(),
            standard: Some(standard),
            use_cache: self.use_cache,
        }
    }

    /// Always reopen the chooser, even when the cache would match
    #[must_use]
    pub const fn uncached(mut self) -> Self {
        self.use_cache = false;
        self
    }

    /// Resulting color
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Palette swatch after coercion
    pub const fn standard(&self) -> Option<StandardColor> {
        self.standard
    }
}

/// Walks an ordered palette, moving on after every successful apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclerColor {
    palette: Vec<StandardColor>,
    index: usize,
}

impl CyclerColor {
    /// Cycler starting `offset` entries into `palette`
    ///
    /// # Errors
    ///
    /// Returns `EmptyPalette` if `palette` is empty
    pub fn new(palette: Vec<StandardColor>, offset: usize) -> Result<Self> {
        if palette.is_empty() {
            return Err(BoxesError::EmptyPalette);
        }
        let index = offset % palette.len();
        Ok(Self { palette, index })
    }

    /// Cycler over palette names
    ///
    /// # Errors
    ///
    /// Returns `UnknownColorName` for an unknown name or `EmptyPalette` if
    /// `names` is empty
    pub fn from_names(names: &[&str], offset: usize) -> Result<Self> {
        let palette = names
            .iter()
            .map(|name| StandardColor::from_name(name))
            .collect::<Result<Vec<_>>>()?;
        Self::new(palette, offset)
    }

    /// Color the next apply will produce
    pub fn current(&self) -> StandardColor {
        self.palette
            .get(self.index)
            .copied()
            .unwrap_or(StandardColor::BLACK)
    }

    /// Position of the current color in the palette
    pub const fn current_index(&self) -> usize {
        self.index
    }

    /// Number of colors cycled through
    pub fn len(&self) -> usize {
        self.palette.len()
    }

    /// Always false; an empty cycler cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.palette.is_empty()
    }

    fn advance(&mut self) {
        self.index = (self.index + 1) % self.palette.len();
    }
}

/// When a random color draws a new swatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomMode {
    /// Draw once at construction
    Once,
    /// Draw again after every apply
    Changing,
}

/// Uniform draw from a pool of standard colors
#[derive(Debug, Clone)]
pub struct RandomColor {
    pool: Vec<StandardColor>,
    current: StandardColor,
    mode: RandomMode,
    rng: StdRng,
}

impl RandomColor {
    /// Random color over an explicit pool
    ///
    /// # Errors
    ///
    /// Returns `EmptyPalette` if `pool` is empty
    pub fn with_pool(pool: Vec<StandardColor>, mode: RandomMode, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let current = draw(&pool, &mut rng).ok_or(BoxesError::EmptyPalette)?;
        Ok(Self {
            pool,
            current,
            mode,
            rng,
        })
    }

    /// Fixed random color from the palette, excluding the deepest darks and white
    ///
    /// # Errors
    ///
    /// Returns `EmptyPalette` if the filtered palette is empty
    pub fn once(seed: u64) -> Result<Self> {
        Self::with_pool(random_pool(true, true), RandomMode::Once, seed)
    }

    /// Per-use random color from the palette, excluding the deepest darks and white
    ///
    /// # Errors
    ///
    /// Returns `EmptyPalette` if the filtered palette is empty
    pub fn changing(seed: u64) -> Result<Self> {
        Self::with_pool(random_pool(true, true), RandomMode::Changing, seed)
    }

    /// Per-use random color drawn from `pool`
    ///
    /// # Errors
    ///
    /// Returns `EmptyPalette` if `pool` is empty
    pub fn sampler(pool: Vec<StandardColor>, seed: u64) -> Result<Self> {
        Self::with_pool(pool, RandomMode::Changing, seed)
    }

    /// Color the next apply will produce
    pub const fn current(&self) -> StandardColor {
        self.current
    }

    /// Chooser position of the current draw
    pub const fn indices(&self) -> PaletteSlot {
        self.current.slot()
    }

    /// Draw policy
    pub const fn mode(&self) -> RandomMode {
        self.mode
    }

    /// Draw a new current color
    pub fn reroll(&mut self) {
        if let Some(color) = draw(&self.pool, &mut self.rng) {
            self.current = color;
        }
    }
}

fn draw<R: Rng + ?Sized>(pool: &[StandardColor], rng: &mut R) -> Option<StandardColor> {
    if pool.is_empty() {
        return None;
    }
    pool.get(rng.random_range(0..pool.len())).copied()
}

/// A recolor action with a known resulting color
#[derive(Debug, Clone)]
pub enum Color {
    /// Fixed palette swatch
    Standard(StandardColor),
    /// Free RGB triple
    Arbitrary(ArbitraryColor),
    /// Ordered palette walk
    Cycler(CyclerColor),
    /// Random palette draw
    Random(RandomColor),
    /// Clear the fill
    NoFill,
}

impl Color {
    /// Standard color by palette name
    ///
    /// # Errors
    ///
    /// Returns `UnknownColorName` if the name is absent
    pub fn named(name: &str) -> Result<Self> {
        StandardColor::from_name(name).map(Self::Standard)
    }

    /// Color the next apply will produce; `None` for no-fill
    pub fn rgb(&self) -> Option<Rgb> {
        match self {
            Self::Standard(color) => Some(color.rgb()),
            Self::Arbitrary(color) => Some(color.rgb()),
            Self::Cycler(color) => Some(color.current().rgb()),
            Self::Random(color) => Some(color.current().rgb()),
            Self::NoFill => None,
        }
    }

    /// Apply this color to whatever the sink currently has selected
    ///
    /// Stateful variants move on only after the sink accepted every action.
    ///
    /// # Errors
    ///
    /// Propagates sink failures
    pub fn apply(&mut self, sink: &mut dyn ActionSink, cache: &mut RecentColorCache) -> Result<()> {
        let target = self.rgb();
        let use_cache = !matches!(self, Self::Arbitrary(color) if !color.use_cache);

        if use_cache && cache.matches_most_recent(target) {
            sink.repeat_last_color()?;
        } else {
            sink.open_color_chooser()?;
            match self {
                Self::Standard(color) => sink.choose_standard(color.slot())?,
                Self::Arbitrary(color) => match color.standard {
                    Some(standard) => sink.choose_standard(standard.slot())?,
                    None => sink.choose_custom(color.rgb)?,
                },
                Self::Cycler(color) => sink.choose_standard(color.current().slot())?,
                Self::Random(color) => sink.choose_standard(color.current().slot())?,
                Self::NoFill => sink.choose_no_fill()?,
            }
        }
        cache.push(target);

        match self {
            Self::Cycler(color) => color.advance(),
            Self::Random(color) if color.mode == RandomMode::Changing => color.reroll(),
            _ => {}
        }
        Ok(())
    }
}

impl From<StandardColor> for Color {
    fn from(color: StandardColor) -> Self {
        Self::Standard(color)
    }
}

impl From<ArbitraryColor> for Color {
    fn from(color: ArbitraryColor) -> Self {
        Self::Arbitrary(color)
    }
}

impl From<CyclerColor> for Color {
    fn from(color: CyclerColor) -> Self {
        Self::Cycler(color)
    }
}

impl From<RandomColor> for Color {
    fn from(color: RandomColor) -> Self {
        Self::Random(color)
    }
}
