//! Error type for folds.

/// Represents errors that can occur while folding a sequence.
///
/// Failures raised by the combining function itself are never wrapped here;
/// a fallible combiner folds into a `Result` and propagates with `?`.
///
/// # Examples
///
/// ```rust
/// use fnkit::fold::{FoldError, fold_right};
///
/// let result = fold_right(|left: i32, right| left + right.force(), Vec::new(), None);
/// assert_eq!(result, Err(FoldError::EmptySequence));
/// assert_eq!(
///     FoldError::EmptySequence.to_string(),
///     "cannot fold an empty sequence without a base case"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldError {
    /// The sequence was empty and no base case was supplied.
    EmptySequence,
}

impl std::fmt::Display for FoldError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySequence => {
                write!(formatter, "cannot fold an empty sequence without a base case")
            }
        }
    }
}

impl std::error::Error for FoldError {}
