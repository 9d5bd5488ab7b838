//! Placement algorithms shared by the patterns

/// Greedy monochrome region decomposition into rectangles
pub mod decomposition;
/// Tolerance-based color grouping
pub mod grouping;

pub use decomposition::{DecompositionOptions, decompose, simplify_monochrome_colors};
pub use grouping::{ColorGroup, group_by_color};
