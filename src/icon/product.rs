/// Ordered cartesian product of `axes`: one output combination per way of
/// picking a single element from every axis, with the first axis varying
/// slowest. Zero axes yield the single empty combination; an empty axis
/// yields an empty product.
pub(crate) fn cartesian_product<T: Clone>(axes: &[Vec<T>]) -> Vec<Vec<T>> {
    let mut combos: Vec<Vec<T>> = vec![Vec::new()];

    for axis in axes {
        let mut extended = Vec::with_capacity(combos.len() * axis.len());
        for combo in &combos {
            for item in axis {
                let mut next = combo.clone();
                next.push(item.clone());
                extended.push(next);
            }
        }
        combos = extended;
    }

    combos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_axis_varies_slowest() {
        let axes = vec![vec!["A", "B"], vec!["X", "Y"]];
        assert_eq!(
            cartesian_product(&axes),
            vec![
                vec!["A", "X"],
                vec!["A", "Y"],
                vec!["B", "X"],
                vec!["B", "Y"],
            ]
        );
    }

    #[test]
    fn no_axes_yield_one_empty_combination() {
        let axes: Vec<Vec<&str>> = vec![];
        assert_eq!(cartesian_product(&axes), vec![Vec::<&str>::new()]);
    }

    #[test]
    fn empty_axis_empties_the_product() {
        let axes = vec![vec!["A", "B"], vec![], vec!["X"]];
        assert!(cartesian_product(&axes).is_empty());
    }

    #[test]
    fn three_axis_ordering() {
        let axes = vec![vec![1, 2], vec![3], vec![4, 5]];
        assert_eq!(
            cartesian_product(&axes),
            vec![
                vec![1, 3, 4],
                vec![1, 3, 5],
                vec![2, 3, 4],
                vec![2, 3, 5],
            ]
        );
    }

    #[test]
    fn duplicate_elements_are_kept() {
        let axes = vec![vec!["A", "A"]];
        assert_eq!(cartesian_product(&axes), vec![vec!["A"], vec!["A"]]);
    }
}
