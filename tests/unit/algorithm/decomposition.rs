//! Tests for greedy rectangle decomposition

#[cfg(test)]
mod tests {
    use boxes::algorithm::decomposition::{
        DecompositionOptions, decompose, simplify_monochrome_colors,
    };
    use boxes::color::paint::Color;
    use boxes::color::rich::SharedColor;
    use boxes::spatial::grid::{Cell, Placement};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn assert_partition(cells: &[Cell], placements: &[Placement]) {
        let expected: HashSet<Cell> = cells.iter().copied().collect();
        let mut seen = HashSet::new();
        for placement in placements {
            for cell in placement.cells() {
                assert!(expected.contains(&cell), "{cell} was not in the input");
                assert!(seen.insert(cell), "{cell} placed twice");
            }
        }
        assert_eq!(seen, expected);
    }

    fn ring(size: usize) -> Vec<Cell> {
        let mut cells = Vec::new();
        for col in 0..size {
            for row in 0..size {
                if col == 0 || row == 0 || col == size - 1 || row == size - 1 || (col + row) % 5 == 0 {
                    cells.push(Cell::new(col + 2, row + 1));
                }
            }
        }
        cells
    }

    // Tests placements partition the input under every option set
    // Verified by not removing extended edges from the working set
    #[test]
    fn test_placements_partition_input() {
        let shapes = [
            ring(9),
            (0..8).flat_map(|c| (0..6).map(move |r| Cell::new(c, r))).collect(),
            vec![Cell::new(0, 0), Cell::new(5, 5), Cell::new(9, 1)],
        ];
        let options = [
            DecompositionOptions::default(),
            DecompositionOptions::artistic(),
            DecompositionOptions {
                early_stop: false,
                max_expansions: Some(1),
                merge_singletons: false,
            },
        ];
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            for cells in &shapes {
                for option in options {
                    let placements = decompose(cells, option, &mut rng);
                    assert_partition(cells, &placements);
                }
            }
        }
    }

    // Tests a full block collapses into a single rectangle
    // Verified by disabling the perpendicular block growth
    #[test]
    fn test_full_block_becomes_one_rect() {
        let cells: Vec<Cell> = (3..7)
            .flat_map(|c| (2..5).map(move |r| Cell::new(c, r)))
            .collect();
        let mut rng = StdRng::seed_from_u64(1);
        let placements = decompose(&cells, DecompositionOptions::default(), &mut rng);
        assert_eq!(placements.len(), 1);
        assert!(matches!(placements.first(), Some(Placement::Rect(rect)) if rect.area() == 12));
    }

    // Tests isolated cells merge into one trailing cloud only when asked
    // Verified by always emitting singletons as single cells
    #[test]
    fn test_isolated_cells_merge_into_cloud() {
        let cells = vec![Cell::new(0, 0), Cell::new(2, 2), Cell::new(4, 4), Cell::new(4, 4)];
        let mut rng = StdRng::seed_from_u64(5);

        let merged = decompose(&cells, DecompositionOptions::default(), &mut rng);
        assert_eq!(merged.len(), 1);
        assert!(matches!(merged.first(), Some(Placement::Cloud(members)) if members.len() == 3));

        let separate = decompose(
            &cells,
            DecompositionOptions {
                merge_singletons: false,
                ..DecompositionOptions::default()
            },
            &mut rng,
        );
        assert_eq!(separate.len(), 3);
        assert!(separate.iter().all(|p| matches!(p, Placement::Cell(_))));

        assert!(decompose(&[], DecompositionOptions::default(), &mut rng).is_empty());
    }

    // Tests strip-only mode never emits a rectangle wider and taller than one cell
    // Verified by ignoring early_stop
    #[test]
    fn test_artistic_mode_emits_strips() {
        let cells: Vec<Cell> = (0..6)
            .flat_map(|c| (0..6).map(move |r| Cell::new(c, r)))
            .collect();
        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            for placement in decompose(&cells, DecompositionOptions::artistic(), &mut rng) {
                if let Placement::Rect(rect) = placement {
                    assert!(rect.width() == 1 || rect.height() == 1);
                }
            }
        }
    }

    // Tests every decomposed placement carries the shared color
    // Verified by cloning the color state instead of sharing it
    #[test]
    fn test_simplified_steps_share_color() {
        let color = SharedColor::new(Color::named("red").expect("known color"));
        let cells: Vec<Cell> = ring(6);
        let mut rng = StdRng::seed_from_u64(9);
        let steps = simplify_monochrome_colors(&cells, &color, DecompositionOptions::default(), &mut rng);
        assert!(!steps.is_empty());
        assert!(steps.iter().all(|step| step.color.ptr_eq(&color)));
    }
}
