//! Key-tagged sequences and map helpers.
//!
//! A key-tagged sequence is an iterator of `(value, key)` pairs: the value
//! travels unchanged while filtering and sorting look at the key only. Tag
//! with [`KeyedIterator::map_k`], work on keys, then drop them with
//! [`KeyedIterator::values`].
//!
//! # Examples
//!
//! ```rust
//! use fnkit::keyed::KeyedIterator;
//!
//! let words = ["pear", "fig", "banana", "kiwi"];
//! let by_length: Vec<&str> = words
//!     .into_iter()
//!     .map_k(|word| word.len())
//!     .filter_k(|length| *length > 3)
//!     .sorted_k()
//!     .values()
//!     .collect();
//!
//! assert_eq!(by_length, vec!["pear", "kiwi", "banana"]);
//! ```

mod maps;
mod sequence;
mod tuple;

pub use maps::{dget, group_by, map_fst, map_keys, map_snd, map_values, merge};
pub use sequence::KeyedIterator;
pub use tuple::{First, Fourth, Second, Third, fst, fth, map_fth, map_thd, snd, thd};
