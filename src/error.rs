//! Crate-wide error type.
//!
//! This module provides the [`Error`] enum used by every fallible operation
//! in the crate. Most misuse is ruled out at compile time by the type system;
//! the variants below cover the conditions that can only be detected at
//! runtime, such as constraint violations on constructor arguments, exhausted
//! sources where a value was required, and rejected state restoration.
//!
//! # Examples
//!
//! ```rust
//! use iterforge::error::Error;
//! use iterforge::folds::one;
//!
//! let sole = one(std::iter::empty::<i32>());
//! assert!(matches!(sole, Err(Error::Value(_))));
//! ```

use std::fmt;

/// The error type for iterforge operations.
///
/// Failed operations leave the originating combinator in an unspecified
/// state; callers should stop using an instance after it reports an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument violated a documented constraint.
    ///
    /// Examples: a group width of zero, contradictory delimiter-keep flags,
    /// `one` invoked on an empty or multi-element source, too few call
    /// arguments to fill the placeholders of a partial application.
    Value(String),
    /// An index-based lookup ran past the end of the source.
    Index {
        /// The requested position.
        requested: usize,
        /// The number of candidate items actually produced.
        available: usize,
    },
    /// A state snapshot was rejected during restoration.
    ///
    /// The combinator is left unchanged when this is returned.
    InvalidState(String),
    /// Nesting exceeded the configured flattening limit.
    RecursionDepth {
        /// The configured limit that was exceeded.
        limit: usize,
    },
    /// Two values could not be ordered relative to each other.
    ///
    /// Surfaced by eager reductions whose result would otherwise silently
    /// depend on an arbitrary tie-break, such as `all_monotone` over floats
    /// containing a NaN.
    Comparison,
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(message) => write!(formatter, "invalid value: {message}"),
            Self::Index {
                requested,
                available,
            } => write!(
                formatter,
                "index {requested} out of range: only {available} item(s) available"
            ),
            Self::InvalidState(message) => {
                write!(formatter, "rejected state snapshot: {message}")
            }
            Self::RecursionDepth { limit } => {
                write!(formatter, "nesting exceeds the recursion limit of {limit}")
            }
            Self::Comparison => write!(formatter, "values are incomparable"),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Convenience constructor for [`Error::Value`].
    #[inline]
    pub(crate) fn value(message: impl Into<String>) -> Self {
        Self::Value(message.into())
    }

    /// Convenience constructor for [`Error::InvalidState`].
    #[inline]
    pub(crate) fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }
}
