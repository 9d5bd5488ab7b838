//! Tests for tolerance-based color grouping

#[cfg(test)]
mod tests {
    use boxes::algorithm::grouping::group_by_color;
    use boxes::color::rgb::Rgb;

    // Tests items join the first group within tolerance and keep input order
    // Verified by comparing against the latest member instead of the founder
    #[test]
    fn test_items_join_first_group_within_tolerance() {
        let items = vec![
            ("a", Rgb::new(100, 100, 100)),
            ("b", Rgb::new(200, 0, 0)),
            ("c", Rgb::new(105, 100, 100)),
            ("d", Rgb::new(110, 100, 100)),
            ("e", Rgb::new(202, 1, 0)),
        ];
        let groups = group_by_color(items, |item| item.1, 8.0);

        assert_eq!(groups.len(), 3);
        let names: Vec<Vec<&str>> = groups
            .iter()
            .map(|group| group.members.iter().map(|item| item.0).collect())
            .collect();
        assert_eq!(names, vec![vec!["a", "c"], vec!["b", "e"], vec!["d"]]);
        assert_eq!(groups.first().map(|group| group.color), Some(Rgb::new(100, 100, 100)));
    }

    // Tests the tolerance is a strict bound
    // Verified by using <= in the distance comparison
    #[test]
    fn test_tolerance_is_strict() {
        let items = [Rgb::new(0, 0, 0), Rgb::new(10, 0, 0)];
        assert_eq!(group_by_color(items, |rgb| *rgb, 10.0).len(), 2);
        assert_eq!(group_by_color(items, |rgb| *rgb, 10.5).len(), 1);
        assert!(group_by_color(Vec::<Rgb>::new(), |rgb| *rgb, 1.0).is_empty());
    }
}
