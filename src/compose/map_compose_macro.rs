//! The `map_compose!` macro.

/// Composes functions, then maps the composition over an iterable.
///
/// `map_compose!(items => f, g, h)` is `items.into_iter().map(compose!(f, g, h))`.
/// To map an already composed function use [`Iterator::map`] directly; to map
/// a binary function over pairs see [`map_star`](crate::fold::map_star).
///
/// # Examples
///
/// ```
/// use fnkit::map_compose;
///
/// let remainders: Vec<i32> = map_compose!([(10, 3), (11, 3)] => |(_, r): (i32, i32)| r, |(a, b): (i32, i32)| (a / b, a % b)).collect();
/// assert_eq!(remainders, vec![1, 2]);
/// ```
#[macro_export]
macro_rules! map_compose {
    ($iterable:expr => $($function:expr),+ $(,)?) => {
        ::core::iter::Iterator::map(
            ::core::iter::IntoIterator::into_iter($iterable),
            $crate::compose!($($function),+),
        )
    };
}
