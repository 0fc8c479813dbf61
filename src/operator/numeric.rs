//! Numeric helpers: powers and parity.

use std::ops::{Mul, Rem};

/// Raising a value to a power.
///
/// Integers take a `u32` exponent and follow the overflow rules of `pow`.
/// Floats take either an integer (`powi`) or a float (`powf`) exponent.
pub trait Power<Exponent> {
    /// The result type.
    type Output;

    /// Returns `self` raised to `exponent`.
    fn power(self, exponent: Exponent) -> Self::Output;
}

macro_rules! impl_integer_power {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Power<u32> for $integer {
                type Output = Self;

                #[inline]
                fn power(self, exponent: u32) -> Self {
                    self.pow(exponent)
                }
            }
        )*
    };
}

impl_integer_power!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_float_power {
    ($($float:ty),* $(,)?) => {
        $(
            impl Power<i32> for $float {
                type Output = Self;

                #[inline]
                fn power(self, exponent: i32) -> Self {
                    self.powi(exponent)
                }
            }

            impl Power<$float> for $float {
                type Output = Self;

                #[inline]
                fn power(self, exponent: Self) -> Self {
                    self.powf(exponent)
                }
            }
        )*
    };
}

impl_float_power!(f32, f64);

/// Returns `|a| a.power(exponent)`.
///
/// # Examples
///
/// ```rust
/// use fnkit::operator::pow1;
///
/// assert_eq!(pow1(10)(2_u64), 1024);
/// assert!((pow1(0.5_f64)(16.0_f64) - 4.0).abs() < f64::EPSILON);
/// ```
pub fn pow1<A, E>(exponent: E) -> impl Fn(A) -> A::Output
where
    A: Power<E>,
    E: Clone,
{
    move |base| base.power(exponent.clone())
}

/// Returns `value * value`.
#[inline]
pub fn square<T>(value: T) -> T
where
    T: Mul<Output = T> + Copy,
{
    value * value
}

/// Returns `value * value * value`.
#[inline]
pub fn cube<T>(value: T) -> T
where
    T: Mul<Output = T> + Copy,
{
    value * value * value
}

/// Primitive integers, for the parity predicates.
pub trait Integer: Copy + PartialEq + Rem<Output = Self> {
    /// Zero.
    const ZERO: Self;
    /// Two.
    const TWO: Self;
}

macro_rules! impl_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Integer for $integer {
                const ZERO: Self = 0;
                const TWO: Self = 2;
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Returns `true` for even integers.
///
/// Takes a reference so it plugs straight into `filter`.
///
/// ```rust
/// use fnkit::operator::even;
///
/// let evens: Vec<i32> = (0..10).filter(even).collect();
/// assert_eq!(evens, vec![0, 2, 4, 6, 8]);
/// ```
#[inline]
pub fn even<T: Integer>(value: &T) -> bool {
    *value % T::TWO == T::ZERO
}

/// Returns `true` for odd integers, negative ones included.
///
/// ```rust
/// use fnkit::operator::odd;
///
/// let odds: Vec<i32> = (-3..4).filter(odd).collect();
/// assert_eq!(odds, vec![-3, -1, 1, 3]);
/// ```
#[inline]
pub fn odd<T: Integer>(value: &T) -> bool {
    !even(value)
}
