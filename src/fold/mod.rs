//! Lazy right folds and mapping helpers.
//!
//! The centerpiece is [`fold_right`]: a right fold whose combining function
//! receives the rest of the fold as a [`Thunk`](crate::control::Thunk). A
//! combiner that does not force the thunk stops the fold, which makes
//! short-circuiting folds over infinite iterators terminate.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::fold::{fold_right, fold_right_with};
//! use fnkit::operator::{lazy_and, lazy_cons};
//!
//! let values = [true, true, false].into_iter().chain(std::iter::repeat(true));
//! assert_eq!(fold_right(lazy_and, values, None), Ok(false));
//!
//! assert_eq!(fold_right_with(lazy_cons, 1..=3, Vec::new), vec![1, 2, 3]);
//! ```

mod error;
mod map;
mod right;

pub use error::FoldError;
pub use map::{apply_all, map_star, map_zip};
pub use right::{fold_right, fold_right_with};
