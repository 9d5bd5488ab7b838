//! Tests for the standard palette table, groups and filters

#[cfg(test)]
mod tests {
    use boxes::BoxesError;
    use boxes::color::palette::{
        PaletteGroup, STANDARD_PALETTE, StandardColor, bounce, filter_colors, random_pool,
    };
    use boxes::color::rgb::Rgb;
    use std::collections::HashSet;

    // Tests every swatch has a unique name and a unique slot
    // Verified by duplicating a name in the table
    #[test]
    fn test_names_and_slots_are_unique() {
        assert_eq!(STANDARD_PALETTE.len(), 120);
        let names: HashSet<&str> = STANDARD_PALETTE.iter().map(|entry| entry.name).collect();
        assert_eq!(names.len(), 120);

        let slots: HashSet<_> = StandardColor::all().map(StandardColor::slot).collect();
        assert_eq!(slots.len(), 120);
        for color in StandardColor::all() {
            let slot = color.slot();
            assert_eq!(
                StandardColor::from_slot(slot.col, slot.row).expect("valid slot"),
                color
            );
            assert_eq!(StandardColor::from_name(color.name()).expect("known name"), color);
        }
    }

    // Tests lookups outside the table fail
    // Verified by wrapping slot columns modulo the chooser width
    #[test]
    fn test_invalid_lookups_fail() {
        assert!(matches!(
            StandardColor::from_name("chartreuse"),
            Err(BoxesError::UnknownColorName { .. })
        ));
        assert!(StandardColor::from_slot(12, 0).is_err());
        assert!(StandardColor::from_slot(0, 10).is_err());
    }

    // Tests nearest returns exact swatches and breaks ties by table order
    // Verified by using <= when comparing distances
    #[test]
    fn test_nearest_prefers_first_defined_on_ties() {
        for color in StandardColor::all() {
            assert_eq!(StandardColor::nearest(color.rgb()).rgb(), color.rgb());
        }
        let tied = StandardColor::nearest(Rgb::new(115, 115, 115));
        assert_eq!(tied.name(), "dark_gray_1");
        assert_eq!(tied.slot().col, 4);
        assert_eq!(tied.slot().row, 0);
    }

    // Tests hue groups run from light to dark through the base hue
    // Verified by reversing the row order of hue groups
    #[test]
    fn test_groups_order_light_to_dark() {
        let reds = PaletteGroup::Reds.colors();
        assert_eq!(reds.len(), 9);
        assert_eq!(reds.get(4).map(|color| color.name()), Some("red"));
        assert!(reds.first().is_some_and(|color| color.is_pale()));
        assert!(reds.last().is_some_and(|color| color.is_deep_dark()));

        let grays = PaletteGroup::Grays.colors();
        assert_eq!(grays.len(), 12);
        assert_eq!(grays.first().map(|color| color.name()), Some("white"));
        assert_eq!(grays.last().map(|color| color.name()), Some("black"));

        let hue_colors: HashSet<_> = PaletteGroup::HUES
            .iter()
            .flat_map(|group| group.colors())
            .collect();
        assert_eq!(hue_colors.len(), 108);
    }

    // Tests filters drop only the requested extremes
    // Verified by ignoring avoid_light in filter_colors
    #[test]
    fn test_filters() {
        let blues = PaletteGroup::Blues.colors();
        assert_eq!(filter_colors(&blues, true, false).len(), 7);
        assert_eq!(filter_colors(&blues, false, true).len(), 7);
        assert_eq!(filter_colors(&blues, true, true).len(), 5);
        assert_eq!(filter_colors(&blues, false, false), blues);

        let pool = random_pool(true, true);
        assert!(pool.iter().all(|color| !color.is_deep_dark() && !color.is_white()));
        assert_eq!(random_pool(false, false).len(), 120);
        assert_eq!(pool.len(), 120 - 3 - 24 - 1);
    }

    // Tests bounce mirrors the interior of the sequence
    // Verified by including the endpoints in the mirrored tail
    #[test]
    fn test_bounce() {
        assert_eq!(bounce(&[1, 2, 3, 4]), vec![1, 2, 3, 4, 3, 2]);
        assert_eq!(bounce(&[1, 2]), vec![1, 2]);
        assert_eq!(bounce::<i32>(&[]), Vec::<i32>::new());
    }
}
