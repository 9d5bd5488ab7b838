//! Tests for raster reproductions

#[cfg(test)]
mod tests {
    use boxes::color::rgb::Rgb;
    use boxes::io::error::BoxesError;
    use boxes::patterns::Pattern;
    use boxes::patterns::image::{FitMode, ImagePattern, box_resample, fit_raster};
    use boxes::spatial::geometry::CalibrationRecord;
    use boxes::spatial::grid::{Cell, GridShape};
    use image::{Rgba, RgbaImage};
    use std::collections::HashSet;

    // Square cells ten units wide keep the physical size easy to reason about
    fn square_calib(cols: usize, rows: usize) -> CalibrationRecord {
        let grid = GridShape::new(cols, rows).expect("valid grid");
        CalibrationRecord::virtual_sheet(grid, 10.0, 10.0).expect("valid sheet")
    }

    // Left half opaque red, right half fully transparent
    fn half_red(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, _| {
            if x < width / 2 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        })
    }

    // Tests every cell averages exactly the pixels it covers
    // Verified by sampling the top-left pixel of each footprint
    #[test]
    fn test_box_resample_averages_footprint() {
        let raster = RgbaImage::from_fn(4, 4, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([200, 100, 0, 255])
            } else {
                Rgba([0, 100, 200, 255])
            }
        });
        let grid = GridShape::new(2, 2).expect("valid grid");
        let cells = box_resample(&raster, grid);

        let order: Vec<Cell> = cells.iter().map(|&(cell, _, _)| cell).collect();
        assert_eq!(order, grid.cells().collect::<Vec<_>>());
        for (_, rgb, alpha) in cells {
            assert_eq!(rgb, Rgb::new(100, 100, 100));
            assert_eq!(alpha, 255);
        }
    }

    // Tests a raster smaller than the grid still yields a color per cell
    // Verified by letting empty footprints average zero pixels
    #[test]
    fn test_box_resample_upsamples() {
        let raster = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 255]));
        let grid = GridShape::new(5, 3).expect("valid grid");
        let cells = box_resample(&raster, grid);
        assert_eq!(cells.len(), 15);
        assert!(cells.iter().all(|&(_, rgb, _)| rgb == Rgb::new(10, 20, 30)));
    }

    // Tests crop keeps the grid's physical aspect ratio from the center
    // Verified by cropping from the top-left corner
    #[test]
    fn test_crop_matches_grid_aspect() {
        let calib = square_calib(4, 2);
        let raster = RgbaImage::from_fn(100, 20, |x, _| Rgba([x as u8, 0, 0, 255]));
        let fitted = fit_raster(&calib, &raster, FitMode::Crop);
        assert_eq!(fitted.dimensions(), (40, 20));
        assert_eq!(fitted.get_pixel(0, 0), &Rgba([30, 0, 0, 255]));

        let resized = fit_raster(&calib, &raster, FitMode::Resize);
        assert_eq!(resized.dimensions(), (40, 20));
    }

    // Tests transparent cells are left unpainted
    // Verified by keeping cells at any alpha
    #[test]
    fn test_transparent_cells_skipped() {
        let calib = square_calib(4, 2);
        let mut pattern =
            ImagePattern::with_options(&calib, &half_red(40, 20), FitMode::Crop, 10.0, 10, false, 1)
                .expect("raster has pixels");

        let expected: HashSet<Cell> = [(0, 0), (1, 0), (0, 1), (1, 1)]
            .into_iter()
            .map(|(col, row)| Cell::new(col, row))
            .collect();
        let kept: HashSet<Cell> = pattern.pixels().iter().map(|&(cell, _)| cell).collect();
        assert_eq!(kept, expected);
        assert!(pattern.pixels().iter().all(|&(_, rgb)| rgb == Rgb::new(255, 0, 0)));

        let painted: Vec<Cell> = pattern.all_steps().iter().flat_map(|a| a.cells()).collect();
        assert_eq!(painted.len(), 4);
        assert_eq!(painted.into_iter().collect::<HashSet<_>>(), expected);
    }

    // Tests coercion snaps every stroke to a palette swatch
    // Verified by ignoring the coerce flag
    #[test]
    fn test_coerced_strokes_use_palette() {
        let calib = square_calib(4, 4);
        let raster = RgbaImage::from_fn(40, 40, |x, y| Rgba([x as u8 * 6, y as u8 * 6, 77, 255]));
        let mut pattern = ImagePattern::with_options(&calib, &raster, FitMode::Crop, 0.5, 10, true, 3)
            .expect("raster has pixels");
        let palette: Vec<Rgb> = boxes::color::palette::StandardColor::all()
            .map(boxes::color::palette::StandardColor::rgb)
            .collect();
        for action in pattern.all_steps() {
            for stroke in action.strokes() {
                assert!(stroke.color.rgb().is_some_and(|rgb| palette.contains(&rgb)));
            }
        }
    }

    // Tests an empty raster is rejected
    // Verified by dividing by the raster size unchecked
    #[test]
    fn test_empty_raster_rejected() {
        let calib = square_calib(3, 3);
        assert!(matches!(
            ImagePattern::from_raster(&calib, &RgbaImage::new(0, 0), FitMode::Resize, 1),
            Err(BoxesError::InvalidParameter { .. })
        ));
    }
}
