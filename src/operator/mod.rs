//! Unary forms of binary operators, and lazy operators for folds.
//!
//! Every binary operator `op(a, b)` gets a unary adapter `op1(b)` such that
//! `op1(b)(a) == op(a, b)`: the right operand is fixed, the left one becomes
//! the parameter. This is the shape `map`, `filter` and `take_while` want.
//!
//! - Arithmetic: [`add1`], [`sub1`], [`mul1`], [`div1`], [`rem1`], [`pow1`]
//! - Bitwise: [`bit_and1`], [`bit_or1`], [`bit_xor1`], [`shl1`], [`shr1`]
//! - Comparison predicates: [`lt1`], [`le1`], [`eq1`], [`ne1`], [`ge1`], [`gt1`]
//! - Sequences: [`contains1`], [`count_of1`], [`index_of1`], [`getitem1`],
//!   [`split1`], [`splitn1`]
//! - Lazy operators for [`fold_right`](crate::fold::fold_right):
//!   [`lazy_and`], [`lazy_or`], [`lazy_cons`]
//!
//! # Examples
//!
//! ```rust
//! use fnkit::operator::{add1, ge1, pow1};
//!
//! let values: Vec<i32> = (1..=4_i32).map(pow1(2)).collect();
//! assert_eq!(values, vec![1, 4, 9, 16]);
//!
//! let shifted: Vec<i32> = values.into_iter().map(add1(-5)).filter(ge1(0)).collect();
//! assert_eq!(shifted, vec![4, 11]);
//! ```

mod lazy;
mod numeric;
mod sequence;

pub use lazy::{cons, lazy_and, lazy_cons, lazy_or};
pub use numeric::{Integer, Power, cube, even, odd, pow1, square};
pub use sequence::{contains1, count_of1, getitem1, index_of1, split1, splitn1};

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Rem, Shl, Shr, Sub};

/// Defines `name(right)` returning `|left| Trait::method(left, right)`.
macro_rules! unary_operator {
    ($(#[$attribute:meta])* $name:ident => $operator:ident :: $method:ident) => {
        $(#[$attribute])*
        pub fn $name<A, B>(right: B) -> impl Fn(A) -> <A as $operator<B>>::Output
        where
            A: $operator<B>,
            B: Clone,
        {
            move |left| $operator::$method(left, right.clone())
        }
    };
}

/// Defines `name(right)` returning the predicate `|left| *left op right`.
macro_rules! unary_predicate {
    ($(#[$attribute:meta])* $name:ident => $operator:ident :: $method:ident) => {
        $(#[$attribute])*
        pub fn $name<A, B>(right: B) -> impl Fn(&A) -> bool
        where
            A: $operator<B>,
        {
            move |left: &A| $operator::$method(left, &right)
        }
    };
}

unary_operator! {
    /// Returns `|a| a + right`.
    ///
    /// ```rust
    /// use fnkit::operator::add1;
    ///
    /// assert_eq!(add1(10)(2), 12);
    /// assert_eq!(add1("!")(String::from("hi")), "hi!");
    /// ```
    add1 => Add::add
}

unary_operator! {
    /// Returns `|a| a - right`.
    ///
    /// ```rust
    /// use fnkit::operator::sub1;
    ///
    /// assert_eq!(sub1(1)(10), 9);
    /// ```
    sub1 => Sub::sub
}

unary_operator! {
    /// Returns `|a| a * right`.
    mul1 => Mul::mul
}

unary_operator! {
    /// Returns `|a| a / right`.
    div1 => Div::div
}

unary_operator! {
    /// Returns `|a| a % right`.
    rem1 => Rem::rem
}

unary_operator! {
    /// Returns `|a| a & right`.
    bit_and1 => BitAnd::bitand
}

unary_operator! {
    /// Returns `|a| a | right`.
    bit_or1 => BitOr::bitor
}

unary_operator! {
    /// Returns `|a| a ^ right`.
    bit_xor1 => BitXor::bitxor
}

unary_operator! {
    /// Returns `|a| a << right`.
    shl1 => Shl::shl
}

unary_operator! {
    /// Returns `|a| a >> right`.
    shr1 => Shr::shr
}

unary_predicate! {
    /// Returns the predicate `|a| *a < right`.
    ///
    /// ```rust
    /// use fnkit::operator::lt1;
    ///
    /// let small: Vec<i32> = (0..10).filter(lt1(3)).collect();
    /// assert_eq!(small, vec![0, 1, 2]);
    /// ```
    lt1 => PartialOrd::lt
}

unary_predicate! {
    /// Returns the predicate `|a| *a <= right`.
    le1 => PartialOrd::le
}

unary_predicate! {
    /// Returns the predicate `|a| *a == right`.
    eq1 => PartialEq::eq
}

unary_predicate! {
    /// Returns the predicate `|a| *a != right`.
    ne1 => PartialEq::ne
}

unary_predicate! {
    /// Returns the predicate `|a| *a >= right`.
    ge1 => PartialOrd::ge
}

unary_predicate! {
    /// Returns the predicate `|a| *a > right`.
    gt1 => PartialOrd::gt
}
