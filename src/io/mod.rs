//! Input/output: sinks, calibration, previews and the command line

/// Calibration providers and the encoded calibration record
pub mod calibration;
/// In-memory canvas sink with PNG and GIF previews
pub mod canvas;
/// Command-line interface
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Raster loading and canvas rendering
pub mod image;
/// Progress bars for interleaved patterns
pub mod progress;
/// The recolor action sink and a recording implementation
pub mod sink;
/// Frame capture and animated GIF export
pub mod visualization;
