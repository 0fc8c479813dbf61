#![cfg(all(feature = "fold", feature = "operator"))]
//! Property-based tests for the right folds.
//!
//! - **List identity**: `fold_right_with(lazy_cons, xs, Vec::new) == xs`
//! - **Agreement with a strict fold**: with a combiner that always forces,
//!   `fold_right` equals `Iterator::rfold`
//! - **Short-circuit agreement**: `fold_right(lazy_and, xs, Some(true)) == xs.all(id)`
//! - **Empty base**: `fold_right(f, [], Some(base)) == Ok(base)`

use fnkit::control::{Thunk, lazy};
use fnkit::fold::{fold_right, fold_right_with};
use fnkit::operator::{lazy_and, lazy_cons, lazy_or};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_rebuild_is_identity(values in prop::collection::vec(any::<i32>(), 0..64)) {
        prop_assert_eq!(fold_right_with(lazy_cons, values.clone(), Vec::new), values);
    }

    #[test]
    fn prop_forcing_fold_matches_rfold(values in prop::collection::vec(any::<i64>(), 0..64), base in any::<i64>()) {
        let subtract = lazy(|left: i64, right: i64| left.wrapping_sub(right));
        let expected = values.iter().rfold(base, |accumulator, value| value.wrapping_sub(accumulator));

        prop_assert_eq!(fold_right(subtract, values, Some(Thunk::ready(base))), Ok(expected));
    }

    #[test]
    fn prop_lazy_and_matches_all(values in prop::collection::vec(any::<bool>(), 0..64)) {
        let expected = values.iter().all(|value| *value);
        prop_assert_eq!(fold_right(lazy_and, values, Some(Thunk::ready(true))), Ok(expected));
    }

    #[test]
    fn prop_lazy_or_matches_any(values in prop::collection::vec(any::<bool>(), 1..64)) {
        let expected = values.iter().any(|value| *value);
        prop_assert_eq!(fold_right(lazy_or, values, None), Ok(expected));
    }

    #[test]
    fn prop_empty_sequence_returns_base(base in any::<u16>()) {
        let result = fold_right(|left: u16, right| left.wrapping_add(right.force()), Vec::new(), Some(Thunk::ready(base)));
        prop_assert_eq!(result, Ok(base));
    }

    #[test]
    fn prop_single_element_without_tail(value in any::<u16>()) {
        let result = fold_right(|left: u16, right| left.wrapping_add(right.force()), vec![value], None);
        prop_assert_eq!(result, Ok(value));
    }

    #[test]
    fn prop_nonempty_never_fails(values in prop::collection::vec(any::<u8>(), 1..32)) {
        let result = fold_right(|left: u8, right| left.max(right.force()), values.clone(), None);
        prop_assert_eq!(result, Ok(values.iter().copied().max().unwrap_or_default()));
    }
}
