//! # iterforge
//!
//! A lazy iterator-combinator and eager-reduction library for Rust.
//!
//! ## Overview
//!
//! This library complements the standard [`Iterator`] adaptors with
//! combinators the standard library does not provide. It includes:
//!
//! - **Lazy Adaptors**: grouping, interleaving, flattening, deduplicating
//!   and observing combinators, all pull-based
//! - **Eager Folds**: extrema, monotonicity checks, classification,
//!   single-item selection
//! - **Membership Oracle**: a set-like store that degrades from hashing to
//!   equality scans for unhashable values
//! - **Functional Helpers**: runtime function chaining, `complement`,
//!   `constant`, `flip`
//! - **Partial Application**: a placeholder-based runtime `Partial` engine
//!   with the `partial!` macro
//!
//! ## Feature Flags
//!
//! - `adaptors`: Lazy iterator adaptors
//! - `folds`: Eager reductions
//! - `functional`: Function-manipulation helpers
//! - `partial`: Runtime partial application
//! - `full`: Enable all features
//!
//! The error type, the membership oracle and the tuple-application traits
//! are always available.
//!
//! ## Example
//!
//! ```rust
//! use iterforge::prelude::*;
//!
//! let groups: Vec<Vec<i32>> = grouper(unique_everseen(vec![1, 1, 2, 3, 2, 4]), 2)
//!     .unwrap()
//!     .collect();
//! assert_eq!(groups, vec![vec![1, 2], vec![3, 4]]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use iterforge::prelude::*;
/// ```
pub mod prelude {

    pub use crate::error::Error;

    pub use crate::seen::{Seen, TryHash};

    pub use crate::tuples::{TupleCall, TupleTest};

    #[cfg(feature = "adaptors")]
    pub use crate::adaptors::*;

    #[cfg(feature = "folds")]
    pub use crate::folds::*;

    #[cfg(feature = "functional")]
    pub use crate::functional::*;

    #[cfg(feature = "partial")]
    pub use crate::partial::*;
}

pub mod error;

pub mod seen;

pub mod tuples;

#[cfg(feature = "adaptors")]
pub mod adaptors;

#[cfg(feature = "folds")]
pub mod folds;

#[cfg(feature = "functional")]
pub mod functional;

#[cfg(feature = "partial")]
pub mod partial;
