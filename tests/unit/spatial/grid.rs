//! Tests for cell naming, rectangles, placements and grid bounds

#[cfg(test)]
mod tests {
    use boxes::BoxesError;
    use boxes::spatial::grid::{Cell, CellRect, Direction, GridShape, Placement, column_letters};

    // Tests column letters follow bijective base 26
    // Verified by switching to zero-based base 26 which maps 26 to BA
    #[test]
    fn test_column_letters_roll_over_after_z() {
        assert_eq!(column_letters(0), "A");
        assert_eq!(column_letters(25), "Z");
        assert_eq!(column_letters(26), "AA");
        assert_eq!(column_letters(51), "AZ");
        assert_eq!(column_letters(52), "BA");
        assert_eq!(column_letters(701), "ZZ");
        assert_eq!(column_letters(702), "AAA");
    }

    // Tests names use one-based rows and parse back to the same cell
    // Verified by dropping the row offset in name()
    #[test]
    fn test_cell_names_are_one_based_and_reversible() {
        assert_eq!(Cell::new(0, 0).name(), "A:1");
        assert_eq!(Cell::new(18, 51).name(), "S:52");
        assert_eq!(Cell::new(27, 11).to_string(), "AB:12");

        for col in [0, 1, 25, 26, 27, 100, 701, 702] {
            for row in [0, 1, 51, 999] {
                let cell = Cell::new(col, row);
                let parsed = Cell::from_name(&cell.name()).expect("generated name should parse");
                assert_eq!(parsed, cell);
            }
        }
        assert_eq!(
            Cell::from_name("ab:12").expect("lowercase letters are accepted"),
            Cell::new(27, 11)
        );
    }

    // Tests malformed names are rejected rather than mapped to a cell
    // Verified by accepting a zero row number
    #[test]
    fn test_malformed_cell_names_are_rejected() {
        for name in ["", "A", "A1", ":1", "A:", "A:0", "1:1", "A:-1", "A B:3", "A:x"] {
            assert!(
                matches!(Cell::from_name(name), Err(BoxesError::InvalidCellName { .. })),
                "'{name}' should be rejected"
            );
        }
    }

    // Tests neighbors stop at the zero edges
    // Verified by using wrapping subtraction for Up
    #[test]
    fn test_neighbors_do_not_underflow() {
        let origin = Cell::new(0, 0);
        assert_eq!(origin.neighbor(Direction::Up), None);
        assert_eq!(origin.neighbor(Direction::Left), None);
        assert_eq!(origin.neighbor(Direction::Down), Some(Cell::new(0, 1)));
        assert_eq!(origin.neighbor(Direction::Right), Some(Cell::new(1, 0)));

        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert!(!direction.perpendicular().contains(&direction));
            assert!(!direction.perpendicular().contains(&direction.opposite()));
        }
    }

    // Tests rectangles are inclusive and independent of corner order
    // Verified by making width exclusive of the far corner
    #[test]
    fn test_rect_is_inclusive_in_any_corner_order() {
        let forward = CellRect::new(Cell::new(1, 2), Cell::new(3, 5));
        let backward = CellRect::new(Cell::new(3, 5), Cell::new(1, 2));

        for rect in [forward, backward] {
            assert_eq!(rect.width(), 3);
            assert_eq!(rect.height(), 4);
            assert_eq!(rect.area(), 12);
            assert_eq!(rect.min(), Cell::new(1, 2));
            assert_eq!(rect.max(), Cell::new(3, 5));
            assert!(rect.contains(Cell::new(2, 4)));
            assert!(!rect.contains(Cell::new(0, 4)));
            assert_eq!(rect.cells().count(), 12);
            assert_eq!(rect.cells().next(), Some(Cell::new(1, 2)));
        }
        assert_eq!(backward.from, Cell::new(3, 5), "corner order is kept");
    }

    // Tests placement cell counts agree with the cells they list
    // Verified by counting a cloud as one cell
    #[test]
    fn test_placement_cells_and_counts_agree() {
        let placements = [
            Placement::Cell(Cell::new(4, 4)),
            Placement::Rect(CellRect::new(Cell::new(0, 0), Cell::new(2, 1))),
            Placement::Cloud(vec![Cell::new(1, 1), Cell::new(5, 7), Cell::new(2, 9)]),
        ];
        for placement in &placements {
            assert_eq!(placement.cells().len(), placement.cell_count());
        }
    }

    // Tests validation rejects any member outside the grid
    // Verified by only checking the first corner of a rectangle
    #[test]
    fn test_placement_validation_checks_every_member() {
        let grid = GridShape::new(19, 52).expect("valid grid");
        let inside = Placement::Rect(CellRect::new(Cell::new(0, 0), Cell::new(18, 51)));
        assert!(inside.validate(&grid).is_ok());

        let far_corner = Placement::Rect(CellRect::new(Cell::new(0, 0), Cell::new(19, 51)));
        assert!(matches!(
            far_corner.validate(&grid),
            Err(BoxesError::OutOfRange { axis: "col", index: 19, limit: 19 })
        ));

        let cloud = Placement::Cloud(vec![Cell::new(3, 3), Cell::new(3, 52)]);
        assert!(matches!(
            cloud.validate(&grid),
            Err(BoxesError::OutOfRange { axis: "row", .. })
        ));
    }

    // Tests linear indices round-trip and reject cells off the grid
    // Verified by using column-major indexing in index_of
    #[test]
    fn test_grid_indexing_is_row_major() {
        let grid = GridShape::new(4, 3).expect("valid grid");
        assert_eq!(grid.cell_count(), 12);
        assert_eq!(grid.index_of(Cell::new(1, 2)), Some(9));
        assert_eq!(grid.cell_at(9), Some(Cell::new(1, 2)));
        assert_eq!(grid.index_of(Cell::new(4, 0)), None);
        assert_eq!(grid.cell_at(12), None);

        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), 12);
        assert_eq!(cells.get(4), Some(&Cell::new(0, 1)));
        assert_eq!(grid.full_rect().max(), Cell::new(3, 2));

        assert!(GridShape::new(0, 3).is_err());
        assert!(GridShape::new(3, 0).is_err());
    }
}
