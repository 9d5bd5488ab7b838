//! Tests for the recolor variants and the apply protocol

#[cfg(test)]
mod tests {
    use boxes::BoxesError;
    use boxes::color::cache::RecentColorCache;
    use boxes::color::paint::{ArbitraryColor, Color, CyclerColor, RandomColor, RandomMode};
    use boxes::color::palette::{StandardColor, random_pool};
    use boxes::color::rgb::Rgb;
    use boxes::io::sink::{RecordingSink, SinkEvent};

    fn standard(name: &str) -> StandardColor {
        StandardColor::from_name(name).expect("known color")
    }

    // Tests the first apply opens the chooser and a repeat uses the cache
    // Verified by never consulting the cache in apply
    #[test]
    fn test_repeat_apply_uses_repeat_last() {
        let mut sink = RecordingSink::new();
        let mut cache = RecentColorCache::new();
        let mut color = Color::named("red").expect("known color");

        color.apply(&mut sink, &mut cache).expect("recording never fails");
        color.apply(&mut sink, &mut cache).expect("recording never fails");

        assert_eq!(
            sink.events(),
            &[
                SinkEvent::OpenColorChooser,
                SinkEvent::ChooseStandard(standard("red").slot()),
                SinkEvent::RepeatLastColor,
            ]
        );
    }

    // Tests the cycler advances after every apply and wraps around
    // Verified by advancing before choosing
    #[test]
    fn test_cycler_advances_and_wraps() {
        let cycler = CyclerColor::from_names(&["red", "blue", "green"], 1).expect("known colors");
        assert_eq!(cycler.current(), standard("blue"));
        assert_eq!(cycler.len(), 3);

        let mut color = Color::from(cycler);
        let mut sink = RecordingSink::new();
        let mut cache = RecentColorCache::new();
        for _ in 0..4 {
            color.apply(&mut sink, &mut cache).expect("recording never fails");
        }
        let chosen: Vec<_> = sink
            .events()
            .iter()
            .filter_map(|event| match event {
                SinkEvent::ChooseStandard(slot) => Some(*slot),
                _ => None,
            })
            .collect();
        let expected: Vec<_> = ["blue", "green", "red", "blue"]
            .iter()
            .map(|name| standard(name).slot())
            .collect();
        assert_eq!(chosen, expected);

        assert!(matches!(CyclerColor::new(Vec::new(), 0), Err(BoxesError::EmptyPalette)));
        assert!(CyclerColor::from_names(&["nope"], 0).is_err());
        let wrapped = CyclerColor::from_names(&["red", "blue"], 5).expect("known colors");
        assert_eq!(wrapped.current_index(), 1);
    }

    // Tests coercion snaps to the palette and picks the swatch instead of a custom entry
    // Verified by choosing custom even when coerced
    #[test]
    fn test_arbitrary_coercion_and_custom_entry() {
        let raw = ArbitraryColor::new(250, 5, 3).expect("valid channels");
        assert_eq!(raw.standard(), None);
        let coerced = raw.coerced();
        assert_eq!(coerced.standard(), Some(standard("red")));
        assert_eq!(coerced.rgb(), standard("red").rgb());

        let mut sink = RecordingSink::new();
        let mut cache = RecentColorCache::new();
        Color::from(raw).apply(&mut sink, &mut cache).expect("recording never fails");
        Color::from(coerced).apply(&mut sink, &mut cache).expect("recording never fails");
        assert_eq!(
            sink.events(),
            &[
                SinkEvent::OpenColorChooser,
                SinkEvent::ChooseCustom(Rgb::new(250, 5, 3)),
                SinkEvent::OpenColorChooser,
                SinkEvent::ChooseStandard(standard("red").slot()),
            ]
        );
        assert!(ArbitraryColor::new(0, 0, 300).is_err());
    }

    // Tests uncached colors reopen the chooser every time
    // Verified by ignoring the use_cache flag
    #[test]
    fn test_uncached_color_always_reopens_chooser() {
        let mut color = Color::from(ArbitraryColor::from_rgb(Rgb::new(1, 2, 3)).uncached());
        let mut sink = RecordingSink::new();
        let mut cache = RecentColorCache::new();
        color.apply(&mut sink, &mut cache).expect("recording never fails");
        color.apply(&mut sink, &mut cache).expect("recording never fails");
        assert_eq!(sink.chooser_opens(), 2);
    }

    // Tests no-fill always goes through the chooser
    // Verified by pushing Some(black) for no-fill
    #[test]
    fn test_no_fill_is_never_repeated() {
        let mut color = Color::NoFill;
        assert_eq!(color.rgb(), None);
        let mut sink = RecordingSink::new();
        let mut cache = RecentColorCache::new();
        color.apply(&mut sink, &mut cache).expect("recording never fails");
        color.apply(&mut sink, &mut cache).expect("recording never fails");
        assert_eq!(
            sink.events(),
            &[
                SinkEvent::OpenColorChooser,
                SinkEvent::ChooseNoFill,
                SinkEvent::OpenColorChooser,
                SinkEvent::ChooseNoFill,
            ]
        );
    }

    // Tests random colors stay in their pool and only changing ones reroll
    // Verified by rerolling once-mode colors on apply
    #[test]
    fn test_random_modes() {
        let pool = random_pool(true, true);
        let once = RandomColor::once(4).expect("non-empty pool");
        assert_eq!(once.mode(), RandomMode::Once);
        assert!(pool.contains(&once.current()));
        assert_eq!(once.indices(), once.current().slot());

        let first = once.current();
        let mut color = Color::from(once);
        let mut sink = RecordingSink::new();
        let mut cache = RecentColorCache::new();
        for _ in 0..10 {
            color.apply(&mut sink, &mut cache).expect("recording never fails");
        }
        assert_eq!(color.rgb(), Some(first.rgb()));
        assert_eq!(sink.chooser_opens(), 1);

        let pair = vec![standard("red"), standard("blue")];
        let mut changing = Color::from(RandomColor::sampler(pair.clone(), 8).expect("non-empty"));
        let mut seen = std::collections::HashSet::new();
        for _ in 0..50 {
            if let Some(rgb) = changing.rgb() {
                seen.insert(rgb);
            }
            changing.apply(&mut sink, &mut cache).expect("recording never fails");
        }
        assert_eq!(seen.len(), 2);
        assert!(matches!(
            RandomColor::sampler(Vec::new(), 0),
            Err(BoxesError::EmptyPalette)
        ));
    }
}
