//! Ordered list helpers shared by the page list

/// Moves the element at `source` to `destination`, keeping every other
/// element in its relative order.
///
/// Both indices are clamped to the list so the function is total.
pub fn move_item<T>(items: &mut Vec<T>, source: usize, destination: usize) {
    if items.is_empty() {
        return;
    }
    let last = items.len() - 1;
    let source = source.min(last);
    let destination = destination.min(last);
    if source == destination {
        return;
    }
    let item = items.remove(source);
    items.insert(destination, item);
}

/// Inserts `item` right after `index` and returns the position it landed on.
///
/// An index past the end appends.
pub fn insert_after<T>(items: &mut Vec<T>, index: usize, item: T) -> usize {
    let at = index.saturating_add(1).min(items.len());
    items.insert(at, item);
    at
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 2, vec!['b', 'c', 'a', 'd', 'e'])]
    #[case(4, 0, vec!['e', 'a', 'b', 'c', 'd'])]
    #[case(1, 3, vec!['a', 'c', 'd', 'b', 'e'])]
    #[case(3, 1, vec!['a', 'd', 'b', 'c', 'e'])]
    #[case(2, 2, vec!['a', 'b', 'c', 'd', 'e'])]
    fn test_move_item(#[case] source: usize, #[case] destination: usize, #[case] expected: Vec<char>) {
        let mut items = vec!['a', 'b', 'c', 'd', 'e'];
        move_item(&mut items, source, destination);
        assert_eq!(items, expected);
    }

    #[test]
    fn test_move_item_clamps_out_of_range() {
        let mut items = vec![1, 2, 3];
        move_item(&mut items, 10, 0);
        assert_eq!(items, vec![3, 1, 2]);

        let mut empty: Vec<i32> = vec![];
        move_item(&mut empty, 0, 1);
        assert!(empty.is_empty());
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 2)]
    #[case(2, 3)]
    #[case(99, 3)]
    fn test_insert_after(#[case] index: usize, #[case] landed: usize) {
        let mut items = vec![1, 2, 3];
        assert_eq!(insert_after(&mut items, index, 0), landed);
        assert_eq!(items.len(), 4);
        assert_eq!(items[landed], 0);
    }
}
