//! Tests for raster loading and canvas rendering

#[cfg(test)]
mod tests {
    use boxes::BoxesError;
    use boxes::color::rgb::Rgb;
    use boxes::io::image::{ensure_parent_dir, export_canvas_png, load_raster, render_canvas};
    use image::{Rgba, RgbaImage};
    use ndarray::Array2;
    use tempfile::TempDir;

    // Tests each cell becomes a solid square and unpainted cells render white
    // Verified by swapping row and column lookups in render_canvas
    #[test]
    fn test_render_canvas_scales_cells() {
        let mut canvas: Array2<Option<Rgb>> = Array2::from_elem((2, 3), None);
        if let Some(fill) = canvas.get_mut([1, 2]) {
            *fill = Some(Rgb::new(10, 20, 30));
        }
        let image = render_canvas(&canvas, 4);
        assert_eq!(image.dimensions(), (12, 8));
        assert_eq!(image.get_pixel(8, 4).0, [10, 20, 30, 255]);
        assert_eq!(image.get_pixel(11, 7).0, [10, 20, 30, 255]);
        assert_eq!(image.get_pixel(7, 4).0, [255, 255, 255, 255]);
        assert_eq!(image.get_pixel(8, 3).0, [255, 255, 255, 255]);

        assert_eq!(render_canvas(&canvas, 0).dimensions(), (3, 2));
    }

    // Tests a missing raster is reported as a missing asset
    // Verified by opening the file without checking existence
    #[test]
    fn test_missing_raster_is_missing_asset() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("absent.png");
        assert!(matches!(load_raster(&path), Err(BoxesError::MissingAsset { .. })));

        let junk = temp_dir.path().join("junk.png");
        std::fs::write(&junk, b"not an image").expect("Failed to write file");
        assert!(matches!(load_raster(&junk), Err(BoxesError::ImageLoad { .. })));
    }

    // Tests exported canvases load back as rasters
    // Verified by skipping parent directory creation
    #[test]
    fn test_exported_canvas_loads_back() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("a").join("b").join("canvas.png");
        let canvas = Array2::from_elem((3, 2), Some(Rgb::new(1, 2, 3)));
        export_canvas_png(&canvas, 2, &path).expect("export succeeds");

        let raster: RgbaImage = load_raster(&path).expect("load succeeds");
        assert_eq!(raster.dimensions(), (4, 6));
        assert_eq!(*raster.get_pixel(3, 5), Rgba([1, 2, 3, 255]));

        ensure_parent_dir(std::path::Path::new("bare.png")).expect("no parent to create");
    }
}
