use crate::color::rgb::Rgb;

/// Items whose colors lie within tolerance of a representative color
#[derive(Debug, Clone, PartialEq)]
pub struct ColorGroup<T> {
    /// Color of the first member, used for every member of the group
    pub color: Rgb,
    /// Members in input order
    pub members: Vec<T>,
}

/// Greedy first-fit grouping by color
///
/// Each item joins the first group whose representative lies strictly
/// within `tolerance` (Euclidean RGB distance) and otherwise founds a new
/// group. Groups keep first-seen order.
pub fn group_by_color<T, F>(
    items: impl IntoIterator<Item = T>,
    accessor: F,
    tolerance: f64,
) -> Vec<ColorGroup<T>>
where
    F: Fn(&T) -> Rgb,
{
    let mut groups: Vec<ColorGroup<T>> = Vec::new();
    for item in items {
        let color = accessor(&item);
        match groups
            .iter_mut()
            .find(|group| group.color.euclidean_distance(color) < tolerance)
        {
            Some(group) => group.members.push(item),
            None => groups.push(ColorGroup {
                color,
                members: vec![item],
            }),
        }
    }
    groups
}
