//! Tests for palette sweeps and the palette test card

#[cfg(test)]
mod tests {
    use boxes::color::cache::RecentColorCache;
    use boxes::color::palette::StandardColor;
    use boxes::color::rgb::Rgb;
    use boxes::io::canvas::CanvasSink;
    use boxes::io::configuration::{DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH};
    use boxes::io::error::BoxesError;
    use boxes::patterns::Pattern;
    use boxes::patterns::palette_sweep::{PaletteSweep, PaletteTest, default_palette_function};
    use boxes::spatial::geometry::CalibrationRecord;
    use boxes::spatial::grid::{Cell, CellRect, GridShape};
    use std::collections::HashMap;

    fn calib(cols: usize, rows: usize) -> CalibrationRecord {
        let grid = GridShape::new(cols, rows).expect("valid grid");
        CalibrationRecord::virtual_sheet(grid, DEFAULT_CELL_WIDTH, DEFAULT_CELL_HEIGHT)
            .expect("valid sheet")
    }

    fn assert_partition(blocks: &[CellRect], grid: GridShape) {
        let mut counts: HashMap<Cell, usize> = HashMap::new();
        for block in blocks {
            for cell in block.cells() {
                *counts.entry(cell).or_default() += 1;
            }
        }
        assert_eq!(counts.len(), grid.cell_count());
        assert!(counts.values().all(|&count| count == 1));
    }

    // Tests blocks and remainder strips tile the grid exactly
    // Verified by skipping the bottom-right corner block
    #[test]
    fn test_blocks_partition_grid() {
        for (cols, rows, d_cols, d_rows) in [(19, 52, 2, 4), (7, 10, 3, 4), (5, 5, 5, 5), (4, 9, 8, 2)] {
            let calib = calib(cols, rows);
            let sweep = PaletteSweep::with_function(
                &calib,
                Box::new(default_palette_function),
                d_rows,
                d_cols,
                false,
            )
            .expect("valid block sizes");
            assert_partition(&sweep.blocks(), calib.grid());
            assert_eq!(sweep.n_steps(), sweep.blocks().len());
        }
    }

    // Tests remainder strips come after the full blocks
    // Verified by emitting the right strip before the full blocks
    #[test]
    fn test_remainder_strips_come_last() {
        let calib = calib(7, 10);
        let sweep = PaletteSweep::with_function(&calib, Box::new(default_palette_function), 4, 3, false)
            .expect("valid block sizes");
        let blocks = sweep.blocks();
        assert_eq!(blocks.len(), 9);
        assert!(blocks.iter().take(4).all(|b| b.width() == 3 && b.height() == 4));
        assert_eq!(
            blocks.last(),
            Some(&CellRect::new(Cell::new(6, 8), Cell::new(6, 9)))
        );
    }

    // Tests a block takes the midpoint of the field at its corners
    // Verified by sampling only the top-left corner
    #[test]
    fn test_block_color_blends_corners() {
        let calib = calib(10, 10);
        let sweep = PaletteSweep::with_function(
            &calib,
            Box::new(|x, _| [255.0 * x, 0.0, 0.0]),
            10,
            10,
            false,
        )
        .expect("valid block sizes");
        let block = CellRect::new(Cell::new(0, 0), Cell::new(9, 9));
        assert_eq!(sweep.block_color(&block), Rgb::new(115, 0, 0));
    }

    // Tests the default sweep snaps every block to a palette swatch
    // Verified by disabling coercion in the default sweep
    #[test]
    fn test_default_sweep_coerces() {
        let mut sweep = PaletteSweep::new(&calib(19, 52));
        let palette: Vec<Rgb> = StandardColor::all().map(StandardColor::rgb).collect();
        for action in sweep.all_steps() {
            for stroke in action.strokes() {
                let rgb = stroke.color.rgb().expect("sweeps always fill");
                assert!(palette.contains(&rgb));
            }
        }
    }

    // Tests zero block sizes are rejected
    // Verified by clamping zero sizes to one
    #[test]
    fn test_zero_block_size_rejected() {
        let calib = calib(5, 5);
        for (d_rows, d_cols) in [(0, 2), (2, 0)] {
            assert!(matches!(
                PaletteSweep::with_function(
                    &calib,
                    Box::new(default_palette_function),
                    d_rows,
                    d_cols,
                    true
                ),
                Err(BoxesError::InvalidParameter { .. })
            ));
        }
    }

    // Tests the test card needs room for every swatch
    // Verified by lowering the required row count
    #[test]
    fn test_card_requires_room() {
        assert!(matches!(
            PaletteTest::new(&calib(11, 52)),
            Err(BoxesError::InvalidParameter { .. })
        ));
        assert!(matches!(
            PaletteTest::new(&calib(19, 42)),
            Err(BoxesError::InvalidParameter { .. })
        ));
        assert!(PaletteTest::new(&calib(12, 43)).is_ok());
    }

    // Tests every swatch is painted above an identical custom twin
    // Verified by offsetting the twin rows by one
    #[test]
    fn test_card_twins_match() {
        let calib = calib(12, 43);
        let mut card = PaletteTest::new(&calib).expect("grid is large enough");
        assert_eq!(card.n_steps(), 120);

        let mut canvas = CanvasSink::new(calib.grid());
        let mut cache = RecentColorCache::new();
        for action in card.all_steps() {
            assert_eq!(action.strokes().len(), 2);
            action.apply(&mut canvas, &mut cache).expect("canvas accepts strokes");
        }

        for standard in StandardColor::all() {
            let slot = standard.slot();
            let top = 4 * slot.row + 3;
            for row in top..top + 4 {
                assert_eq!(
                    canvas.fill(Cell::new(slot.col, row)),
                    Some(standard.rgb()),
                    "{}",
                    standard.name()
                );
            }
        }
    }
}
