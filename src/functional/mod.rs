//! Light functional helpers.
//!
//! This module provides the small, composable function utilities that pair
//! with the iterator combinators:
//!
//! - [`Chained`] / [`FanOut`]: runtime function chains (apply in sequence /
//!   apply all to the same input)
//! - [`identity`], [`constant`], [`flip`], [`complement`]: fundamental
//!   combinators
//! - [`packed`]: call an n-ary function with a tuple argument
//!
//! # Examples
//!
//! ```rust
//! use iterforge::functional::{Chained, complement, packed};
//!
//! let normalize = Chained::new()
//!     .then(|value: i32| value.abs())
//!     .then(|value| value.min(100));
//! assert_eq!(normalize.apply(-250), 100);
//!
//! let not_zero = complement(|value: &i32| *value == 0);
//! assert!(not_zero(&3));
//!
//! let mut multiply = packed(|first: i32, second: i32| first * second);
//! assert_eq!(multiply((6, 7)), 42);
//! ```

mod chained;
mod helpers;

pub use chained::{Chained, FanOut};
pub use helpers::{complement, constant, flip, identity, packed};
