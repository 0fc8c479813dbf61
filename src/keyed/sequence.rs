//! The `KeyedIterator` extension trait.

use std::cmp::Ordering;

/// Adapters for `(value, key)` sequences, available on every iterator.
///
/// [`map_k`](KeyedIterator::map_k) builds a key-tagged sequence from plain
/// values; the other adapters require the items to already be pairs.
pub trait KeyedIterator: Iterator + Sized {
    /// Tags each value with `key(&value)`.
    ///
    /// ```rust
    /// use fnkit::keyed::KeyedIterator;
    ///
    /// let tagged: Vec<(i32, i32)> = (0..3).map_k(|value| -value).collect();
    /// assert_eq!(tagged, vec![(0, 0), (1, -1), (2, -2)]);
    /// ```
    fn map_k<K, F>(self, mut key: F) -> impl Iterator<Item = (Self::Item, K)>
    where
        F: FnMut(&Self::Item) -> K,
    {
        self.map(move |value| {
            let tag = key(&value);
            (value, tag)
        })
    }

    /// Keeps the pairs whose key satisfies `predicate`.
    fn filter_k<V, K, P>(self, mut predicate: P) -> impl Iterator<Item = (V, K)>
    where
        Self: Iterator<Item = (V, K)>,
        P: FnMut(&K) -> bool,
    {
        self.filter(move |(_, key)| predicate(key))
    }

    /// Sorts the pairs by key, keeping the input order of equal keys.
    ///
    /// Consumes the whole iterator before yielding anything.
    ///
    /// ```rust
    /// use fnkit::keyed::KeyedIterator;
    ///
    /// let sorted: Vec<(i32, i32)> = (0..5).map_k(|value| -value).sorted_k().collect();
    /// assert_eq!(sorted, vec![(4, -4), (3, -3), (2, -2), (1, -1), (0, 0)]);
    /// ```
    fn sorted_k<V, K>(self) -> std::vec::IntoIter<(V, K)>
    where
        Self: Iterator<Item = (V, K)>,
        K: Ord,
    {
        self.sorted_k_by(Ord::cmp)
    }

    /// Sorts the pairs with `compare` applied to the keys.
    ///
    /// Use it for keys without a total order, such as floats:
    ///
    /// ```rust
    /// use fnkit::keyed::KeyedIterator;
    ///
    /// let sorted: Vec<&str> = ["b", "a"]
    ///     .into_iter()
    ///     .map_k(|name| if *name == "a" { 0.5 } else { 1.5 })
    ///     .sorted_k_by(f64::total_cmp)
    ///     .values()
    ///     .collect();
    /// assert_eq!(sorted, vec!["a", "b"]);
    /// ```
    fn sorted_k_by<V, K, C>(self, mut compare: C) -> std::vec::IntoIter<(V, K)>
    where
        Self: Iterator<Item = (V, K)>,
        C: FnMut(&K, &K) -> Ordering,
    {
        let mut pairs: Vec<(V, K)> = self.collect();
        pairs.sort_by(|(_, left), (_, right)| compare(left, right));
        pairs.into_iter()
    }

    /// Drops the keys.
    fn values<V, K>(self) -> impl Iterator<Item = V>
    where
        Self: Iterator<Item = (V, K)>,
    {
        self.map(|(value, _)| value)
    }

    /// Drops the values.
    fn keys<V, K>(self) -> impl Iterator<Item = K>
    where
        Self: Iterator<Item = (V, K)>,
    {
        self.map(|(_, key)| key)
    }
}

impl<I: Iterator> KeyedIterator for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_sorted_k_is_stable() {
        let sorted: Vec<char> = ['d', 'a', 'c', 'b']
            .into_iter()
            .map_k(|letter| u32::from(*letter) % 2)
            .sorted_k()
            .values()
            .collect();
        assert_eq!(sorted, vec!['d', 'b', 'a', 'c']);
    }

    #[rstest]
    fn test_keys_drops_values() {
        let keys: Vec<usize> = ["a", "bb"].into_iter().map_k(|text| text.len()).keys().collect();
        assert_eq!(keys, vec![1, 2]);
    }
}
