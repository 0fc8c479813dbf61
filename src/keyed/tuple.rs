//! Positional access to tuple elements.
//!
//! [`fst`], [`snd`], [`thd`] and [`fth`] take the first to fourth element of
//! any tuple long enough to have one, which makes them usable as plain
//! functions in `map`. [`map_thd`] and [`map_fth`] transform one position of
//! triples and quadruples, next to [`map_fst`](super::map_fst) and
//! [`map_snd`](super::map_snd) for pairs.

/// Tuples with a first element.
pub trait First {
    /// The element type.
    type Output;

    /// Returns the first element.
    fn first(self) -> Self::Output;
}

/// Tuples with a second element.
pub trait Second {
    /// The element type.
    type Output;

    /// Returns the second element.
    fn second(self) -> Self::Output;
}

/// Tuples with a third element.
pub trait Third {
    /// The element type.
    type Output;

    /// Returns the third element.
    fn third(self) -> Self::Output;
}

/// Tuples with a fourth element.
pub trait Fourth {
    /// The element type.
    type Output;

    /// Returns the fourth element.
    fn fourth(self) -> Self::Output;
}

macro_rules! impl_position {
    ($position:ident :: $method:ident => $output:ident . $index:tt; $(($($parameter:ident),+ $(,)?)),+ $(,)?) => {
        $(
            impl<$($parameter),+> $position for ($($parameter,)+) {
                type Output = $output;

                #[inline]
                fn $method(self) -> $output {
                    self.$index
                }
            }
        )+
    };
}

impl_position!(First::first => A.0; (A,), (A, B), (A, B, C), (A, B, C, D), (A, B, C, D, E), (A, B, C, D, E, G));
impl_position!(Second::second => B.1; (A, B), (A, B, C), (A, B, C, D), (A, B, C, D, E), (A, B, C, D, E, G));
impl_position!(Third::third => C.2; (A, B, C), (A, B, C, D), (A, B, C, D, E), (A, B, C, D, E, G));
impl_position!(Fourth::fourth => D.3; (A, B, C, D), (A, B, C, D, E), (A, B, C, D, E, G));

/// Returns the first element of a tuple.
///
/// # Examples
///
/// ```rust
/// use fnkit::keyed::fst;
///
/// let names: Vec<&str> = [("ada", 36), ("alan", 41)].into_iter().map(fst).collect();
/// assert_eq!(names, vec!["ada", "alan"]);
/// ```
#[inline]
pub fn fst<T: First>(tuple: T) -> T::Output {
    tuple.first()
}

/// Returns the second element of a tuple.
#[inline]
pub fn snd<T: Second>(tuple: T) -> T::Output {
    tuple.second()
}

/// Returns the third element of a tuple.
///
/// ```rust
/// use fnkit::keyed::thd;
///
/// assert_eq!(thd((1, 'b', "c", 4.0)), "c");
/// ```
#[inline]
pub fn thd<T: Third>(tuple: T) -> T::Output {
    tuple.third()
}

/// Returns the fourth element of a tuple.
#[inline]
pub fn fth<T: Fourth>(tuple: T) -> T::Output {
    tuple.fourth()
}

/// Applies `function` to the third element of every triple.
///
/// # Examples
///
/// ```rust
/// use fnkit::keyed::map_thd;
///
/// let codes: Vec<(i32, i32, u32)> = map_thd(u32::from, [(1, 1, 'A'), (2, 2, 'B')]).collect();
/// assert_eq!(codes, vec![(1, 1, 65), (2, 2, 66)]);
/// ```
pub fn map_thd<I, A, B, C, D, F>(mut function: F, triples: I) -> impl Iterator<Item = (A, B, D)>
where
    I: IntoIterator<Item = (A, B, C)>,
    F: FnMut(C) -> D,
{
    triples
        .into_iter()
        .map(move |(first, second, third)| (first, second, function(third)))
}

/// Applies `function` to the fourth element of every quadruple.
pub fn map_fth<I, A, B, C, D, E, F>(mut function: F, quadruples: I) -> impl Iterator<Item = (A, B, C, E)>
where
    I: IntoIterator<Item = (A, B, C, D)>,
    F: FnMut(D) -> E,
{
    quadruples
        .into_iter()
        .map(move |(first, second, third, fourth)| (first, second, third, function(fourth)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_accessors_on_a_long_tuple() {
        let record = ("id", 7_u8, 'x', 2.5_f32, true);
        assert_eq!(fst(record), "id");
        assert_eq!(snd(record), 7);
        assert_eq!(thd(record), 'x');
        assert!((fth(record) - 2.5).abs() < f32::EPSILON);
    }

    #[rstest]
    fn test_fst_of_single_element_tuple() {
        assert_eq!(fst((String::from("only"),)), "only");
    }

    #[rstest]
    fn test_map_fth_keeps_other_positions() {
        let lengths: Vec<(u8, u8, u8, usize)> = map_fth(str::len, [(1, 2, 3, "four")]).collect();
        assert_eq!(lengths, vec![(1, 2, 3, 4)]);
    }
}
