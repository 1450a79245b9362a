use std::cmp::Ordering;

/// Sort `(item, count)` pairs by descending count.
/// - Stable: equal counts keep their incoming order
/// - Used for top-M frequency ranking, where incoming order is first-seen order
#[inline]
pub fn stable_sort_desc_by_count<T>(pairs: &mut [(T, u64)]) {
    // slice::sort_by is a stable merge sort
    pairs.sort_by(|a, b| b.1.cmp(&a.1));
}

/// Permutation that orders `keys` ascending, ties by original position.
pub fn argsort_stable<K: Ord>(keys: &[K]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..keys.len()).collect();
    idx.sort_by(|&a, &b| match keys[a].cmp(&keys[b]) {
        Ordering::Equal => a.cmp(&b),
        other => other,
    });
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    /// sort by key descending, and if key is equal, preserve original order.
    fn baseline(pairs: &[(&'static str, u64)]) -> Vec<(&'static str, u64)> {
        let mut keyed: Vec<(u64, usize, &'static str)> = pairs
            .iter()
            .enumerate()
            .map(|(i, (t, c))| (*c, i, *t))
            .collect();
        keyed.sort_unstable_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
        keyed.into_iter().map(|(c, _, t)| (t, c)).collect()
    }

    #[test]
    fn desc_by_count_matches_stable_baseline() {
        let input = vec![("a", 1), ("b", 3), ("c", 1), ("d", 3), ("e", 2), ("f", 3)];
        let mut sorted = input.clone();
        stable_sort_desc_by_count(&mut sorted);
        assert_eq!(sorted, baseline(&input));
        assert_eq!(sorted[0], ("b", 3));
        assert_eq!(sorted[2], ("f", 3));
    }

    #[test]
    fn argsort_orders_and_keeps_ties() {
        let keys = vec!["pear", "apple", "fig", "apple"];
        assert_eq!(argsort_stable(&keys), vec![1, 3, 2, 0]);
        assert!(argsort_stable::<u8>(&[]).is_empty());
    }
}
