//! Fundamental combinators.
//!
//! This module provides the small building blocks used throughout pipelines:
//!
//! - [`identity`]: returns its argument unchanged (I combinator)
//! - [`constant`]: ignores its input and returns a fixed value (K combinator)
//! - [`flip`]: swaps the arguments of a binary function (C combinator)
//! - [`complement`]: negates a predicate
//! - [`packed`]: adapts an n-ary function to a single tuple argument

use crate::tuples::TupleCall;

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition and the
/// default key of the key-accepting combinators.
///
/// # Examples
///
/// ```rust
/// use iterforge::functional::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("unchanged"), "unchanged");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its
/// input.
///
/// # Examples
///
/// ```rust
/// use iterforge::functional::constant;
///
/// let always_zero = constant::<_, i32>(0);
/// assert_eq!(always_zero(100), 0);
/// assert_eq!(always_zero(-5), 0);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// # Laws
///
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
/// - **Double flip identity**: `flip(flip(f))(a, b) == f(a, b)`
///
/// # Examples
///
/// ```rust
/// use iterforge::functional::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 {
///     minuend - subtrahend
/// }
///
/// let flipped = flip(subtract);
/// assert_eq!(flipped(3, 10), 7);
///
/// let restored = flip(flip(subtract));
/// assert_eq!(restored(10, 3), subtract(10, 3));
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Negates a predicate.
///
/// The result is a strict boolean regardless of how the wrapped predicate
/// arrives at its answer.
///
/// # Examples
///
/// ```rust
/// use iterforge::functional::complement;
///
/// let is_even = |value: &i32| value % 2 == 0;
/// let is_odd = complement(is_even);
///
/// assert!(is_odd(&3));
/// assert!(!is_odd(&4));
/// ```
#[inline]
pub fn complement<A, F>(predicate: F) -> impl Fn(A) -> bool
where
    F: Fn(A) -> bool,
{
    move |argument| !predicate(argument)
}

/// Adapts an n-ary function to take its arguments as one tuple.
///
/// This is the bridge between tuple-producing iterators and ordinary
/// multi-argument functions; see [`TupleCall`] for the supported arities.
///
/// # Examples
///
/// ```rust
/// use iterforge::functional::packed;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let mut packed_add = packed(add);
/// assert_eq!(packed_add((2, 3)), 5);
///
/// let pairs = vec![(1, 2), (3, 4)];
/// let sums: Vec<i32> = pairs.into_iter().map(packed(add)).collect();
/// assert_eq!(sums, vec![3, 7]);
/// ```
#[inline]
pub fn packed<Arguments, F>(mut function: F) -> impl FnMut(Arguments) -> F::Output
where
    F: TupleCall<Arguments>,
{
    move |arguments| function.call_tuple(arguments)
}
