//! Frame capture and GIF generation for painted canvases

use crate::color::rgb::Rgb;
use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{BoxesError, Result};
use crate::io::image::{ensure_parent_dir, render_canvas};
use image::{Delay, Frame, RgbaImage};
use ndarray::Array2;
use std::path::Path;

/// Captures canvas snapshots for an animated preview
///
/// One snapshot is taken per applied color, so the animation replays the
/// run stroke by stroke.
pub struct FrameCapture {
    snapshots: Vec<RgbaImage>,
    cell_pixels: u32,
}

impl FrameCapture {
    /// Empty capture rendering `cell_pixels` pixels per cell edge
    pub const fn new(cell_pixels: u32) -> Self {
        Self {
            snapshots: Vec::new(),
            cell_pixels,
        }
    }

    /// Record the current state of a canvas
    pub fn record(&mut self, canvas: &Array2<Option<Rgb>>) {
        self.snapshots.push(render_canvas(canvas, self.cell_pixels));
    }

    /// Number of recorded snapshots
    pub fn frame_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Export the snapshots as a GIF with automatic frame skipping
    ///
    /// Delays below what viewers support are raised to the viewer minimum and
    /// frames are skipped to keep the apparent speed. The last frame is held
    /// longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No snapshots were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.snapshots.is_empty() {
            return Err(BoxesError::InvalidParameter {
                parameter: "frames",
                value: "0".to_string(),
                reason: "no frames captured for the animation".to_string(),
            });
        }

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };

        let frames = self.generate_frames(effective_delay_ms, skip_factor);

        ensure_parent_dir(output_path)?;
        let file = std::fs::File::create(output_path).map_err(|e| BoxesError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| BoxesError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })
    }

    fn generate_frames(&self, delay_ms: u32, skip_factor: usize) -> Vec<Frame> {
        let delay = Delay::from_numer_denom_ms(delay_ms, 1);
        let last = self.snapshots.len().saturating_sub(1);
        let mut frames: Vec<Frame> = self
            .snapshots
            .iter()
            .enumerate()
            .filter(|(i, _)| i % skip_factor == 0 || *i == last)
            .map(|(_, img)| Frame::from_parts(img.clone(), 0, 0, delay))
            .collect();

        // Final frame displays longer for better visibility
        if let Some(final_img) = self.snapshots.last() {
            frames.push(Frame::from_parts(
                final_img.clone(),
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms * 25, 1),
            ));
        }
        frames
    }
}
