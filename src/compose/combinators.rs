//! Small combinators used alongside the composition macros.
//!
//! - [`identity`], [`constant`], [`flip`]: the I, K and C combinators
//! - [`swap`]: reverse a pair of values
//! - [`star`] and [`unstar`]: convert between binary functions and functions of a pair
//! - [`coalesce`] and [`find_first`]: pick the first usable value
//! - [`try_or`] and [`try_ok`]: turn a fallible function into a total one

/// Returns the value unchanged.
///
/// The unit of composition: `compose!(identity, f)` and `compose!(f, identity)`
/// behave like `f`.
///
/// ```
/// use fnkit::compose::identity;
///
/// assert_eq!(identity("same"), "same");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Returns a function ignoring its input and always producing a clone of `value`.
///
/// ```
/// use fnkit::compose::constant;
///
/// let zeros: Vec<u8> = "abc".chars().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the two arguments of a binary function.
///
/// `flip(f)(b, a) == f(a, b)`, and `flip(flip(f))` behaves like `f`.
///
/// ```
/// use fnkit::compose::flip;
///
/// let subtract_from = flip(|a: i32, b: i32| a - b);
/// assert_eq!(subtract_from(1, 0), -1);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

/// Returns `(second, first)`.
#[inline]
pub fn swap<A, B>(first: A, second: B) -> (B, A) {
    (second, first)
}

/// Turns a binary function into a function of one pair.
///
/// ```
/// use fnkit::compose::star;
///
/// let power = star(u64::pow);
/// assert_eq!(power((2, 8)), 256);
/// ```
#[inline]
pub fn star<A, B, C, F>(function: F) -> impl Fn((A, B)) -> C
where
    F: Fn(A, B) -> C,
{
    move |(first, second)| function(first, second)
}

/// Turns a function of one pair into a binary function.
///
/// ```
/// use fnkit::compose::unstar;
///
/// let sum = unstar(|(a, b): (i32, i32)| a + b);
/// assert_eq!(sum(1, 2), 3);
/// ```
#[inline]
pub fn unstar<A, B, C, F>(function: F) -> impl Fn(A, B) -> C
where
    F: Fn((A, B)) -> C,
{
    move |first, second| function((first, second))
}

/// Returns the first present value.
///
/// ```
/// use fnkit::compose::coalesce;
///
/// assert_eq!(coalesce([None, Some("a"), Some("b")]), Some("a"));
/// assert_eq!(coalesce(Vec::<Option<u8>>::new()), None);
/// ```
pub fn coalesce<I, T>(values: I) -> Option<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    values.into_iter().flatten().next()
}

/// Returns the first value satisfying `predicate`.
///
/// ```
/// use fnkit::compose::find_first;
///
/// assert_eq!(find_first(|n: &i32| n % 2 == 1, 0..10), Some(1));
/// assert_eq!(find_first(|_: &i32| false, 0..10), None);
/// ```
pub fn find_first<I, P>(mut predicate: P, values: I) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    values.into_iter().find(|value| predicate(value))
}

/// Wraps a fallible function so that failures become `default`.
///
/// ```
/// use fnkit::compose::try_or;
///
/// let parse_or_zero = try_or(|c: char| c.to_string().parse::<u8>(), 0);
/// let digits: Vec<u8> = "1a2b3c".chars().map(parse_or_zero).collect();
/// assert_eq!(digits, vec![1, 0, 2, 0, 3, 0]);
/// ```
pub fn try_or<A, T, E, F>(function: F, default: T) -> impl Fn(A) -> T
where
    F: Fn(A) -> Result<T, E>,
    T: Clone,
{
    move |argument| function(argument).unwrap_or_else(|_| default.clone())
}

/// Wraps a fallible function so that failures become `None`.
///
/// The result iterates as 0 or 1 elements, so failures simply vanish inside
/// `flat_map`.
///
/// ```
/// use fnkit::compose::try_ok;
///
/// let digits: Vec<u32> = "1a2b3c".chars().flat_map(try_ok(|c: char| c.to_digit(10).ok_or(c))).collect();
/// assert_eq!(digits, vec![1, 2, 3]);
/// ```
pub fn try_ok<A, T, E, F>(function: F) -> impl Fn(A) -> Option<T>
where
    F: Fn(A) -> Result<T, E>,
{
    move |argument| function(argument).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_swap_reverses_pair() {
        assert_eq!(swap(1, "one"), ("one", 1));
    }

    #[rstest]
    fn test_flip_with_asymmetric_function() {
        let power = |base: i32, exponent: u32| base.pow(exponent);
        let flipped = flip(power);
        assert_eq!(flipped(3, 2), 8);
    }

    #[rstest]
    #[case("12", 12)]
    #[case("-3", -3)]
    #[case("x", -1)]
    #[case("", -1)]
    fn test_try_or_replaces_failures(#[case] text: &str, #[case] expected: i32) {
        let parse = try_or(str::parse::<i32>, -1);
        assert_eq!(parse(text), expected);
    }

    #[rstest]
    fn test_try_ok_keeps_successes_only() {
        let parse = try_ok(str::parse::<u8>);
        assert_eq!(parse("7"), Some(7));
        assert_eq!(parse("300"), None);
    }

    #[rstest]
    fn test_unstar_inverts_star() {
        let subtract = |a: i32, b: i32| a - b;
        let roundtrip = unstar(star(subtract));
        assert_eq!(roundtrip(10, 4), subtract(10, 4));
    }
}
