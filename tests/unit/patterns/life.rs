//! Tests for the toroidal game of life

#[cfg(test)]
mod tests {
    use boxes::color::cache::RecentColorCache;
    use boxes::color::paint::Color;
    use boxes::color::rich::SharedColor;
    use boxes::io::canvas::CanvasSink;
    use boxes::io::configuration::{DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH};
    use boxes::io::error::BoxesError;
    use boxes::patterns::Pattern;
    use boxes::patterns::life::{GameOfLife, LifeSeed, board_from_cells, next_board};
    use boxes::spatial::geometry::CalibrationRecord;
    use boxes::spatial::grid::{Cell, GridShape, Placement};
    use ndarray::Array2;

    fn calib(cols: usize, rows: usize) -> CalibrationRecord {
        let grid = GridShape::new(cols, rows).expect("valid grid");
        CalibrationRecord::virtual_sheet(grid, DEFAULT_CELL_WIDTH, DEFAULT_CELL_HEIGHT)
            .expect("valid sheet")
    }

    fn named(name: &str) -> SharedColor {
        SharedColor::new(Color::named(name).expect("known color"))
    }

    fn board(cols: usize, rows: usize, cells: &[(usize, usize)]) -> Array2<bool> {
        let grid = GridShape::new(cols, rows).expect("valid grid");
        let cells: Vec<Cell> = cells.iter().map(|&(col, row)| Cell::new(col, row)).collect();
        board_from_cells(grid, &cells)
    }

    // Tests a lone cell dies of underpopulation
    // Verified by letting cells survive with one neighbor
    #[test]
    fn test_lone_cell_dies() {
        let next = next_board(&board(5, 5, &[(2, 2)]));
        assert!(next.iter().all(|&alive| !alive));
    }

    // Tests a block is a still life
    // Verified by killing cells with three neighbors
    #[test]
    fn test_block_is_stable() {
        let block = board(6, 6, &[(2, 2), (3, 2), (2, 3), (3, 3)]);
        let mut current = block.clone();
        for _ in 0..5 {
            current = next_board(&current);
            assert_eq!(current, block);
        }
    }

    // Tests a blinker flips between vertical and horizontal
    // Verified by counting the cell itself as a neighbor
    #[test]
    fn test_blinker_oscillates() {
        let vertical = board(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let horizontal = board(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        assert_eq!(next_board(&vertical), horizontal);
        assert_eq!(next_board(&horizontal), vertical);
    }

    // Tests neighbors wrap around every edge
    // Verified by treating cells off the board as dead
    #[test]
    fn test_board_wraps() {
        let edge = board(5, 5, &[(0, 4), (1, 4), (2, 4)]);
        let next = next_board(&edge);
        assert_eq!(next, board(5, 5, &[(1, 3), (1, 4), (1, 0)]));
    }

    // Tests cells off the grid are ignored when seeding
    // Verified by panicking on out-of-range seeds
    #[test]
    fn test_seed_cells_off_grid_ignored() {
        let seeded = board(3, 3, &[(1, 1), (7, 7)]);
        assert_eq!(seeded.iter().filter(|&&alive| alive).count(), 1);
    }

    // Tests the first frame blanks the grid before painting live cells
    // Verified by painting only live cells in the first frame
    #[test]
    fn test_first_frame_blanks_grid() {
        let calib = calib(6, 6);
        let life = GameOfLife::new(
            &calib,
            LifeSeed::Cells(vec![Cell::new(2, 1), Cell::new(2, 2), Cell::new(2, 3)]),
            3,
            false,
            named("lime"),
            named("dark_gray_1"),
            1,
        )
        .expect("valid seed");
        assert_eq!(life.n_steps(), 3);
        let first = life.step().expect("first frame exists");
        let blank = first.strokes().first().map(|s| s.placement.clone());
        assert_eq!(blank, Some(Placement::Rect(calib.grid().full_rect())));
    }

    // Tests the painted canvas tracks the simulated board
    // Verified by painting births with the dead color
    #[test]
    fn test_canvas_follows_generations() {
        let calib = calib(8, 8);
        let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
        let alive = named("lime");
        let mut life = GameOfLife::new(
            &calib,
            LifeSeed::Cells(glider.iter().map(|&(c, r)| Cell::new(c, r)).collect()),
            5,
            false,
            alive.clone(),
            named("dark_gray_1"),
            2,
        )
        .expect("valid seed");

        let mut canvas = CanvasSink::new(calib.grid());
        let mut cache = RecentColorCache::new();
        for action in life.all_steps() {
            action.apply(&mut canvas, &mut cache).expect("canvas accepts strokes");
        }

        let mut expected = board(8, 8, &glider);
        for _ in 0..4 {
            expected = next_board(&expected);
        }
        let lime = alive.rgb();
        for cell in calib.grid().cells() {
            let is_alive = expected.get([cell.row, cell.col]).copied().unwrap_or(false);
            assert_eq!(canvas.fill(cell) == lime, is_alive, "{}", cell.name());
        }
    }

    // Tests a stable board stops the game early
    // Verified by ignoring the stability flag
    #[test]
    fn test_stops_when_stable() {
        let calib = calib(6, 6);
        let block = vec![Cell::new(1, 1), Cell::new(2, 1), Cell::new(1, 2), Cell::new(2, 2)];
        let stopping = GameOfLife::new(
            &calib,
            LifeSeed::Cells(block.clone()),
            10,
            true,
            named("lime"),
            named("dark_gray_1"),
            1,
        )
        .expect("valid seed");
        assert_eq!(stopping.n_steps(), 1);

        let running = GameOfLife::new(
            &calib,
            LifeSeed::Cells(block),
            10,
            false,
            named("lime"),
            named("dark_gray_1"),
            1,
        )
        .expect("valid seed");
        assert_eq!(running.n_steps(), 10);
    }

    // Tests zero frames yields no steps
    // Verified by always emitting the first frame
    #[test]
    fn test_zero_frames() {
        let life = GameOfLife::new(
            &calib(4, 4),
            LifeSeed::Soup { density: 0.5 },
            0,
            false,
            named("lime"),
            named("dark_gray_1"),
            1,
        )
        .expect("valid seed");
        assert_eq!(life.n_steps(), 0);
        assert!(life.step().is_none());
    }

    // Tests soup densities outside the unit interval are rejected
    // Verified by clamping the density
    #[test]
    fn test_invalid_density_rejected() {
        for density in [-0.1, 1.5] {
            assert!(matches!(
                GameOfLife::new(
                    &calib(4, 4),
                    LifeSeed::Soup { density },
                    3,
                    false,
                    named("lime"),
                    named("dark_gray_1"),
                    1,
                ),
                Err(BoxesError::InvalidParameter { .. })
            ));
        }
    }
}
