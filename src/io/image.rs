//! Raster loading for image patterns and PNG export of painted canvases

use crate::color::rgb::Rgb;
use crate::io::configuration::UNPAINTED_RGB;
use crate::io::error::{BoxesError, Result};
use image::{ImageBuffer, Rgba, RgbaImage};
use ndarray::Array2;
use std::path::Path;

/// Load a raster as RGBA
///
/// # Errors
///
/// Returns `MissingAsset` if the file does not exist or `ImageLoad` if it
/// cannot be decoded
pub fn load_raster(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(BoxesError::MissingAsset {
            path: path.to_path_buf(),
        });
    }
    let img = image::open(path).map_err(|e| BoxesError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgba8())
}

/// Render a canvas of `[row, col]` fills, `cell_pixels` pixels per cell edge
///
/// Unpainted cells render white.
pub fn render_canvas(canvas: &Array2<Option<Rgb>>, cell_pixels: u32) -> RgbaImage {
    let scale = cell_pixels.max(1);
    let (rows, cols) = canvas.dim();
    let [ur, ug, ub] = UNPAINTED_RGB;

    ImageBuffer::from_fn(cols as u32 * scale, rows as u32 * scale, |x, y| {
        let row = (y / scale) as usize;
        let col = (x / scale) as usize;
        match canvas.get([row, col]).copied().flatten() {
            Some(rgb) => Rgba([rgb.r, rgb.g, rgb.b, 255]),
            None => Rgba([ur, ug, ub, 255]),
        }
    })
}

/// Create the parent directory of an output file if needed
///
/// # Errors
///
/// Returns `FileSystem` if the directory cannot be created
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if parent.as_os_str().is_empty() {
            return Ok(());
        }
        std::fs::create_dir_all(parent).map_err(|e| BoxesError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}

/// Export a canvas as a PNG preview
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_canvas_png(
    canvas: &Array2<Option<Rgb>>,
    cell_pixels: u32,
    output_path: &Path,
) -> Result<()> {
    ensure_parent_dir(output_path)?;
    render_canvas(canvas, cell_pixels)
        .save(output_path)
        .map_err(|e| BoxesError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
