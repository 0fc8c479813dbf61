//! Lazy right folds.
//!
//! A right fold over `[e1, e2, e3]` computes `combine(e1, combine(e2, combine(e3, base)))`.
//! Here the inner result is handed to `combine` as a [`Thunk`]: it is only
//! computed if `combine` forces it. That makes it possible to fold infinite
//! iterators with short-circuiting combiners, and to stop reading the
//! iterator as soon as the answer is known.
//!
//! # Evaluation
//!
//! The iterator is pulled at most one element ahead of the element being
//! combined (the fold needs to know whether the current element is the last
//! one). Each forced thunk adds one level of recursion, so a fold that forces
//! every step over a very long sequence is bounded by the stack.
//!
//! # Laws
//!
//! - **List identity**: `fold_right_with(cons, xs, Vec::new) == xs`
//! - **Empty with base**: `fold_right(f, [], Some(base)) == Ok(base.force())`
//! - **Single element**: `fold_right(f, [x], None) == Ok(x)`

use std::rc::Rc;

use super::FoldError;
use crate::control::Thunk;

/// Folds `sequence` from the right, passing the rest of the fold lazily.
///
/// `combine(element, rest)` receives the right-associated result of the
/// remaining elements as a thunk; forcing it continues the fold, dropping it
/// stops the fold there.
///
/// Base cases:
///
/// - empty sequence: `tail.force()`, or [`FoldError::EmptySequence`] without a tail;
/// - one element `x`: `combine(x, tail)`, or `x` itself without a tail;
/// - without a tail, the last element is the innermost value:
///   `combine(e1, || combine(e2, || e3))`.
///
/// The accumulator has the element type. For an accumulator of another type
/// see [`fold_right_with`].
///
/// # Errors
///
/// Returns [`FoldError::EmptySequence`] if `sequence` is empty and `tail` is `None`.
///
/// # Examples
///
/// ## Short-circuiting over an infinite iterator
///
/// ```rust
/// use fnkit::fold::fold_right;
///
/// let all = fold_right(|value: bool, rest| value && rest.force(), std::iter::repeat(false), None);
/// assert_eq!(all, Ok(false));
/// ```
///
/// ## Stopping on a condition
///
/// ```rust
/// use fnkit::fold::fold_right;
///
/// // 0 + 1 + 2 + 3 + 4 + 5 + 6, where 6 stops the recursion
/// let sum = fold_right(
///     |value: u64, rest| if value > 5 { value } else { value + rest.force() },
///     0..,
///     None,
/// );
/// assert_eq!(sum, Ok(21));
/// ```
///
/// ## Right associativity
///
/// ```rust
/// use fnkit::control::Thunk;
/// use fnkit::fold::fold_right;
///
/// // 10 - (4 - (3 - 0))
/// let difference = fold_right(
///     |value: i32, rest| value - rest.force(),
///     [10, 4, 3],
///     Some(Thunk::ready(0)),
/// );
/// assert_eq!(difference, Ok(9));
/// ```
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
pub fn fold_right<'a, I, T, F>(
    combine: F,
    sequence: I,
    tail: Option<Thunk<'a, T>>,
) -> Result<T, FoldError>
where
    I: IntoIterator<Item = T>,
    I::IntoIter: 'a,
    T: 'a,
    F: Fn(T, Thunk<'a, T>) -> T + 'a,
{
    let mut elements = sequence.into_iter();
    let Some(first) = elements.next() else {
        trace_event!(has_tail = tail.is_some(), "fold over an empty sequence");
        return tail.map(Thunk::force).ok_or(FoldError::EmptySequence);
    };

    let combine = Rc::new(combine);
    let base = Rc::clone(&combine);
    Ok(chain(combine, first, elements, move |last| match tail {
        Some(tail) => base(last, tail),
        None => last,
    }))
}

/// Folds `sequence` from the right into an accumulator of another type.
///
/// Same evaluation as [`fold_right`], but the base case is mandatory:
/// the innermost call is always `combine(last, Thunk::new(tail))`, and an
/// empty sequence returns `tail()`. This variant never fails.
///
/// # Examples
///
/// ## Rebuilding a list
///
/// ```rust
/// use fnkit::fold::fold_right_with;
///
/// let rebuilt = fold_right_with(
///     |value: i32, rest| {
///         let mut list = vec![value];
///         list.extend(rest.force());
///         list
///     },
///     0..5,
///     Vec::new,
/// );
/// assert_eq!(rebuilt, vec![0, 1, 2, 3, 4]);
/// ```
///
/// ## Reversing a list
///
/// ```rust
/// use fnkit::fold::fold_right_with;
///
/// let reversed = fold_right_with(
///     |value: i32, rest| {
///         let mut list = rest.force();
///         list.push(value);
///         list
///     },
///     0..5,
///     Vec::new,
/// );
/// assert_eq!(reversed, vec![4, 3, 2, 1, 0]);
/// ```
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
pub fn fold_right_with<'a, I, B, F, G>(combine: F, sequence: I, tail: G) -> B
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
    B: 'a,
    F: Fn(I::Item, Thunk<'a, B>) -> B + 'a,
    G: FnOnce() -> B + 'a,
{
    let mut elements = sequence.into_iter();
    let Some(first) = elements.next() else {
        trace_event!("fold over an empty sequence");
        return tail();
    };

    let combine = Rc::new(combine);
    let base = Rc::clone(&combine);
    chain(combine, first, elements, move |last| {
        base(last, Thunk::new(tail))
    })
}

/// Combines `current` with a thunk over the rest of `remaining`.
///
/// `last` handles the final element, which is where the two public folds
/// differ.
fn chain<'a, I, B, F, L>(combine: Rc<F>, current: I::Item, mut remaining: I, last: L) -> B
where
    I: Iterator + 'a,
    I::Item: 'a,
    B: 'a,
    F: Fn(I::Item, Thunk<'a, B>) -> B + 'a,
    L: FnOnce(I::Item) -> B + 'a,
{
    match remaining.next() {
        None => {
            trace_event!("fold reached the last element");
            last(current)
        }
        Some(next) => {
            let step = Rc::clone(&combine);
            let rest = Thunk::new(move || {
                trace_event!("forcing fold thunk");
                chain(step, next, remaining, last)
            });
            combine(current, rest)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_single_element_with_tail_calls_combine() {
        let result = fold_right(|x: i32, rest| x * 10 + rest.force(), [4], Some(Thunk::ready(2)));
        assert_eq!(result, Ok(42));
    }

    #[rstest]
    fn test_pulls_one_element_ahead() {
        let pulled = Cell::new(0);
        let elements = (0..).inspect(|_| pulled.set(pulled.get() + 1));

        let first = fold_right(|x: i32, _rest| x, elements, None);

        assert_eq!(first, Ok(0));
        assert_eq!(pulled.get(), 2);
    }

    #[rstest]
    fn test_fold_right_with_empty_sequence_uses_tail() {
        let length = fold_right_with(|_: char, rest| rest.force() + 1, "".chars(), || 0_usize);
        assert_eq!(length, 0);
    }
}
