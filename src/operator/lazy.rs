//! Binary operators whose right operand is suspended.
//!
//! These are the combiners [`fold_right`](crate::fold::fold_right) and
//! [`fold_right_with`](crate::fold::fold_right_with) expect. The logical ones
//! only force their right operand when the left one does not decide the
//! result.

use crate::control::Thunk;

/// `left && right`, forcing `right` only when `left` is `true`.
///
/// # Examples
///
/// ```rust
/// use fnkit::control::Thunk;
/// use fnkit::operator::lazy_and;
///
/// assert!(!lazy_and(false, Thunk::new(|| unreachable!())));
/// assert!(lazy_and(true, Thunk::ready(true)));
/// ```
#[inline]
pub fn lazy_and(left: bool, right: Thunk<'_, bool>) -> bool {
    left && right.force()
}

/// `left || right`, forcing `right` only when `left` is `false`.
#[inline]
pub fn lazy_or(left: bool, right: Thunk<'_, bool>) -> bool {
    left || right.force()
}

/// Prepends `head` to `tail`.
///
/// # Examples
///
/// ```rust
/// use fnkit::operator::cons;
///
/// assert_eq!(cons(1, vec![2, 3]), vec![1, 2, 3]);
/// ```
pub fn cons<T>(head: T, tail: Vec<T>) -> Vec<T> {
    let mut list = Vec::with_capacity(tail.len() + 1);
    list.push(head);
    list.extend(tail);
    list
}

/// Prepends `head` to the forced `tail`.
///
/// Folding with it rebuilds the sequence:
///
/// ```rust
/// use fnkit::fold::fold_right_with;
/// use fnkit::operator::lazy_cons;
///
/// assert_eq!(fold_right_with(lazy_cons, "abc".chars(), Vec::new), vec!['a', 'b', 'c']);
/// ```
pub fn lazy_cons<T>(head: T, tail: Thunk<'_, Vec<T>>) -> Vec<T> {
    cons(head, tail.force())
}
