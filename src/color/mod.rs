//! Colors, the standard palette and the recolor apply protocol

/// Recent-color history consulted before opening the chooser
pub mod cache;
/// Color variants and how they are applied
pub mod paint;
/// Standard palette table, groups and filters
pub mod palette;
/// Shared colors, colors bound to placements, and pattern steps
pub mod rich;
/// RGB triples, distances and blending
pub mod rgb;

pub use cache::RecentColorCache;
pub use paint::{ArbitraryColor, Color, CyclerColor, RandomColor, RandomMode};
pub use palette::{PaletteGroup, PaletteSlot, StandardColor};
pub use rgb::Rgb;
pub use rich::{Action, RichColor, SharedColor};
