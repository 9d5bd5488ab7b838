//! Mathematical utilities for blending and random draws

/// Linear interpolation and channel clamping
pub mod interpolation;
/// Weighted selection and disc sampling
pub mod probability;
