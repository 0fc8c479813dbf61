//! # fnkit
//!
//! Small functional-programming helpers for Rust.
//!
//! ## Overview
//!
//! - **Lazy right fold**: [`fold::fold_right`] hands the combining function the
//!   rest of the fold as a [`control::Thunk`], so folds can short-circuit over
//!   infinite iterators
//! - **Single-slot cell**: [`control::Slot`] holds at most one value and drives
//!   loop-like iterations through a successor function
//! - **Function Composition**: `compose!`, `pipe!`, `partial!`, `curry!` macros
//! - **Key-tagged sequences**: `map_k`/`filter_k`/`sorted_k` over `(value, key)` pairs
//! - **Operator adapters**: unary forms of binary operators (`add1(2)(x) == x + 2`)
//!
//! ## Feature Flags
//!
//! - `compose`: Composition, partial application and currying
//! - `control`: `Thunk` and `Slot`
//! - `fold`: Lazy right folds and map helpers
//! - `keyed`: Key-tagged sequence adapters and map helpers
//! - `operator`: Unary operator adapters and lazy binary operators
//! - `tracing`: Emit `trace` events from folds and slot iteration
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fnkit::prelude::*;
//!
//! // Short-circuits on the first `false`; the infinite tail is never read.
//! let values = [true, true, false].into_iter().chain(std::iter::repeat(true));
//! assert_eq!(fold_right(lazy_and, values, None), Ok(false));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the functions and types of every enabled module.
///
/// # Usage
///
/// ```rust
/// use fnkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "fold")]
    pub use crate::fold::*;

    #[cfg(feature = "keyed")]
    pub use crate::keyed::*;

    #[cfg(feature = "operator")]
    pub use crate::operator::*;
}

#[macro_use]
mod trace;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "fold")]
pub mod fold;

#[cfg(feature = "keyed")]
pub mod keyed;

#[cfg(feature = "operator")]
pub mod operator;
