//! Mapping helpers that complement the folds.
//!
//! - [`map_star`]: maps a binary function over an iterator of pairs
//! - [`map_zip`]: maps a binary function over two iterators in lockstep
//! - [`apply_all`]: applies several functions to every element
//!
//! Composing several functions before mapping is done with
//! [`map_compose!`](crate::map_compose).

/// Maps a binary function over pairs, unpacking each pair into two arguments.
///
/// # Examples
///
/// ```rust
/// use fnkit::fold::map_star;
///
/// let powers: Vec<f64> = map_star(f64::powf, [(2.0, 4.0), (2.0, 8.0)]).collect();
/// assert_eq!(powers, vec![16.0, 256.0]);
/// ```
pub fn map_star<I, A, B, C, F>(mut function: F, pairs: I) -> impl Iterator<Item = C>
where
    I: IntoIterator<Item = (A, B)>,
    F: FnMut(A, B) -> C,
{
    pairs
        .into_iter()
        .map(move |(first, second)| function(first, second))
}

/// Maps a binary function over two iterators in lockstep.
///
/// Stops as soon as either iterator is exhausted.
///
/// # Examples
///
/// ```rust
/// use fnkit::fold::map_zip;
///
/// let remainders: Vec<i32> = map_zip(|left: i32, right: i32| left % right, [10, 11], [3, 3]).collect();
/// assert_eq!(remainders, vec![1, 2]);
/// ```
pub fn map_zip<L, R, C, F>(mut function: F, left: L, right: R) -> impl Iterator<Item = C>
where
    L: IntoIterator,
    R: IntoIterator,
    F: FnMut(L::Item, R::Item) -> C,
{
    left.into_iter()
        .zip(right)
        .map(move |(first, second)| function(first, second))
}

/// Applies every function in `functions` to each element.
///
/// Yields one `Vec` per element, holding the results in the order of
/// `functions`.
///
/// # Examples
///
/// ```rust
/// use fnkit::fold::apply_all;
///
/// let renderers: [&dyn Fn(&i32) -> String; 2] = [
///     &|n: &i32| n.to_string(),
///     &|n: &i32| format!("{n:03}"),
/// ];
/// let rendered: Vec<Vec<String>> = apply_all(&renderers, 1..3).collect();
///
/// assert_eq!(
///     rendered,
///     vec![vec!["1".to_string(), "001".to_string()], vec!["2".to_string(), "002".to_string()]]
/// );
/// ```
pub fn apply_all<'f, I, A, B>(
    functions: &'f [&'f dyn Fn(&A) -> B],
    iterable: I,
) -> impl Iterator<Item = Vec<B>>
where
    I: IntoIterator<Item = A>,
    I::IntoIter: 'f,
{
    iterable
        .into_iter()
        .map(move |element| functions.iter().map(|function| function(&element)).collect())
}
