use crate::io::error::{BoxesError, Result};
use crate::math::interpolation::{clamp_channel, clamp_unit, lerp};
use std::fmt;

/// 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a `0xRRGGBB` literal
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Create a color from unchecked integer components
    ///
    /// # Errors
    ///
    /// Returns `InvalidComponent` for the first channel outside `[0, 255]`
    pub fn try_from_components(r: i64, g: i64, b: i64) -> Result<Self> {
        let channel = |name: &'static str, value: i64| {
            u8::try_from(value).map_err(|_| BoxesError::InvalidComponent {
                channel: name,
                value,
            })
        };
        Ok(Self::new(channel("r", r)?, channel("g", g)?, channel("b", b)?))
    }

    /// Create a color from floating-point channels, rounding and clamping
    /// each into `[0, 255]`
    pub fn from_clamped(r: f64, g: f64, b: f64) -> Self {
        Self::new(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }

    /// Channels as an array
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Summed absolute channel difference
    pub const fn manhattan_distance(self, other: Self) -> u32 {
        self.r.abs_diff(other.r) as u32
            + self.g.abs_diff(other.g) as u32
            + self.b.abs_diff(other.b) as u32
    }

    /// Euclidean distance in RGB space
    pub fn euclidean_distance(self, other: Self) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        dr.mul_add(dr, dg.mul_add(dg, db * db)).sqrt()
    }

    /// Blend toward `other`; `alpha` is clamped to `[0, 1]` and 0 returns `self`
    #[must_use]
    pub fn blend(self, other: Self, alpha: f64) -> Self {
        let t = clamp_unit(alpha);
        Self::from_clamped(
            lerp(f64::from(self.r), f64::from(other.r), t),
            lerp(f64::from(self.g), f64::from(other.g), t),
            lerp(f64::from(self.b), f64::from(other.b), t),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
