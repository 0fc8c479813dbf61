//! Function composition utilities.
//!
//! This module provides macros and combinators for building functions out of
//! other functions, in a point-free style.
//!
//! # Overview
//!
//! - [`compose!`]: Compose functions right-to-left (mathematical composition)
//! - [`pipe!`]: Thread a value through functions left-to-right
//! - [`partial!`]: Partial application with `__` placeholders
//! - [`curry!`]: Convert a multi-argument function to nested closures
//! - [`map_compose!`]: Compose, then map over an iterable
//!
//! # Combinators
//!
//! - [`identity`], [`constant`], [`flip`], [`swap`]
//! - [`star`] / [`unstar`]: between binary functions and functions of a pair
//! - [`coalesce`] / [`find_first`]: first usable value of a sequence
//! - [`try_or`] / [`try_ok`]: fallible functions made total
//!
//! # Examples
//!
//! ```
//! use fnkit::{compose, curry, partial, pipe};
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose!(f, g)(x) = f(g(x))
//! let add_one_after_double = compose!(partial!(add, 1, __), double);
//! assert_eq!(add_one_after_double(5), 11);
//!
//! // pipe!(x => f, g) = g(f(x))
//! assert_eq!(pipe!(5 => double, curry!(add => first, second)(1)), 11);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Double flip**: `flip(flip(f)) == f`
//! - **Star round trip**: `unstar(star(f)) == f`

mod combinators;
mod compose_macro;
mod curry_macro;
mod map_compose_macro;
mod partial_macro;
mod pipe_macro;

pub use combinators::{
    coalesce, constant, find_first, flip, identity, star, swap, try_ok, try_or, unstar,
};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::curry;
pub use crate::map_compose;
pub use crate::partial;
pub use crate::pipe;
