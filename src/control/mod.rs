//! Control structures for functional programming.
//!
//! This module provides:
//!
//! - [`Thunk`]: A deferred computation that is forced at most once
//! - [`Slot`]: A single mutable cell whose contents read as a 0-or-1 element
//!   sequence and which can drive loop-like iterations
//! - [`strict`] and [`lazy`]: Adapters between strict binary functions and
//!   functions taking a suspended second argument
//!
//! # Examples
//!
//! ## Deferred Evaluation
//!
//! ```rust
//! use fnkit::control::Thunk;
//!
//! let thunk = Thunk::new(|| 6 * 7);
//! assert_eq!(thunk.force(), 42);
//! ```
//!
//! ## Loops Through a Slot
//!
//! ```rust
//! use fnkit::control::Slot;
//!
//! let mut slot = Slot::with_value(1);
//! let doubled: Vec<i32> = slot.iterate_while(|n| n * 2, |n| *n < 100).collect();
//! assert_eq!(doubled, vec![1, 2, 4, 8, 16, 32, 64]);
//! ```

mod slot;
mod thunk;

pub use slot::{Iterate, Slot, SlotError, SlotState};
pub use thunk::{Thunk, lazy, strict};
