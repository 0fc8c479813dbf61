//! Deferred computations that run at most once.
//!
//! This module provides the `Thunk<'a, T>` type: a zero-argument computation
//! that produces a `T` when forced. Unlike a memoizing lazy cell, a thunk is
//! consumed by [`Thunk::force`], so the type system rules out forcing the same
//! suspension twice.
//!
//! Thunks are how [`fold_right`](crate::fold::fold_right) passes "the rest of
//! the fold" to its combining function.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::control::Thunk;
//!
//! let thunk = Thunk::new(|| {
//!     println!("Computing...");
//!     42
//! });
//!
//! // Nothing printed yet - computation is deferred
//! assert_eq!(thunk.force(), 42);
//! ```

use std::fmt;

/// A suspended computation producing a `T`.
///
/// The lifetime `'a` bounds whatever the suspended closure borrows, so thunks
/// may capture references to the caller's stack.
///
/// # Examples
///
/// ## Short-circuiting
///
/// ```rust
/// use fnkit::control::Thunk;
///
/// fn and_then_check(first: bool, rest: Thunk<'_, bool>) -> bool {
///     first && rest.force()
/// }
///
/// let never_forced = Thunk::new(|| panic!("not reached"));
/// assert!(!and_then_check(false, never_forced));
/// ```
pub struct Thunk<'a, T> {
    computation: Box<dyn FnOnce() -> T + 'a>,
}

impl<'a, T> Thunk<'a, T> {
    /// Creates a thunk that runs `computation` when forced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::control::Thunk;
    ///
    /// let thunk = Thunk::new(|| 1 + 1);
    /// assert_eq!(thunk.force(), 2);
    /// ```
    #[inline]
    pub fn new<F>(computation: F) -> Self
    where
        F: FnOnce() -> T + 'a,
    {
        Self {
            computation: Box::new(computation),
        }
    }

    /// Creates a thunk around an already computed value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::control::Thunk;
    ///
    /// assert_eq!(Thunk::ready(vec![1, 2]).force(), vec![1, 2]);
    /// ```
    #[inline]
    pub fn ready(value: T) -> Self
    where
        T: 'a,
    {
        Self::new(move || value)
    }

    /// Runs the suspended computation, consuming the thunk.
    #[inline]
    pub fn force(self) -> T {
        (self.computation)()
    }

    /// Suspends `function` on top of this thunk's result.
    ///
    /// Neither computation runs until the returned thunk is forced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::control::Thunk;
    ///
    /// let length = Thunk::new(|| "hello".to_string()).map(|text| text.len());
    /// assert_eq!(length.force(), 5);
    /// ```
    pub fn map<U, F>(self, function: F) -> Thunk<'a, U>
    where
        T: 'a,
        F: FnOnce(T) -> U + 'a,
    {
        Thunk::new(move || function(self.force()))
    }
}

impl<T> fmt::Debug for Thunk<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Thunk").field(&"<deferred>").finish()
    }
}

/// Turns a function taking a suspended second argument into a strict one.
///
/// `strict(function)(a, b) == function(a, Thunk::ready(b))`. Useful to call a
/// fold combiner such as [`lazy_and`](crate::operator::lazy_and) directly.
///
/// # Examples
///
/// ```rust
/// use fnkit::control::{Thunk, strict};
///
/// let append = |head: i32, tail: Thunk<'_, Vec<i32>>| {
///     let mut list = vec![head];
///     list.extend(tail.force());
///     list
/// };
///
/// assert_eq!(strict(append)(1, vec![2, 3]), vec![1, 2, 3]);
/// ```
pub fn strict<'a, A, B, C, F>(function: F) -> impl Fn(A, B) -> C
where
    F: Fn(A, Thunk<'a, B>) -> C,
    B: 'a,
{
    move |first, second| function(first, Thunk::ready(second))
}

/// Lifts a strict binary function so it accepts a suspended second argument.
///
/// The returned function always forces its second argument, so folding with
/// it never short-circuits. It lets ordinary operators drive
/// [`fold_right`](crate::fold::fold_right).
///
/// # Examples
///
/// ```rust
/// use fnkit::control::{Thunk, lazy};
///
/// let subtract = lazy(|left: i32, right: i32| left - right);
/// assert_eq!(subtract(10, Thunk::ready(4)), 6);
/// ```
pub fn lazy<'a, A, B, C, F>(function: F) -> impl Fn(A, Thunk<'a, B>) -> C
where
    F: Fn(A, B) -> C,
{
    move |first, second: Thunk<'a, B>| function(first, second.force())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_thunk_defers_computation() {
        let forced = Cell::new(false);
        let thunk = Thunk::new(|| forced.set(true));
        assert!(!forced.get());
        thunk.force();
        assert!(forced.get());
    }

    #[rstest]
    fn test_thunk_map_stays_deferred() {
        let calls = Cell::new(0);
        let mapped = Thunk::new(|| {
            calls.set(calls.get() + 1);
            20
        })
        .map(|value| value + 1);

        assert_eq!(calls.get(), 0);
        assert_eq!(mapped.force(), 21);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_thunk_debug_hides_computation() {
        let thunk = Thunk::ready(3);
        assert_eq!(format!("{thunk:?}"), "Thunk(\"<deferred>\")");
    }
}
