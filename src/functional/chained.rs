//! Runtime function chains.
//!
//! [`Chained`] holds an ordered list of same-typed endofunctions and applies
//! them as one pipeline. Unlike a compile-time composition of closures, a
//! chain can be built incrementally, reversed, and spliced into another
//! chain. Nested chains are flattened on splice, so the stored list is
//! always a flat sequence of steps.
//!
//! [`FanOut`] is the "apply all" variant: every function receives a clone of
//! the same input and the results are collected in order.
//!
//! # Examples
//!
//! ```rust
//! use iterforge::functional::Chained;
//!
//! let pipeline = Chained::new()
//!     .then(|value: i32| value + 1)
//!     .then(|value| value * 2);
//! assert_eq!(pipeline.apply(5), 12);
//!
//! // Reversing flips the application order.
//! assert_eq!(pipeline.reversed().apply(5), 11);
//! ```

use std::rc::Rc;

/// An ordered chain of endofunctions applied left to right.
///
/// The empty chain is the identity function.
///
/// # Type Parameters
///
/// * `T` - The value type flowing through the chain.
#[derive(Clone)]
pub struct Chained<T> {
    /// Steps in application order: `steps[0]` runs first.
    steps: Vec<Rc<dyn Fn(T) -> T>>,
}

impl<T> Default for Chained<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Chained<T> {
    /// Creates the empty chain (the identity function).
    #[inline]
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Appends a step to run after every current step.
    #[must_use]
    pub fn then(mut self, function: impl Fn(T) -> T + 'static) -> Self {
        self.steps.push(Rc::new(function));
        self
    }

    /// Splices another chain onto the end of this one.
    ///
    /// The other chain's steps are absorbed individually, so chains never
    /// nest: the effective call order is exactly this chain followed by
    /// `other`, regardless of how either was built or reversed.
    #[must_use]
    pub fn chain(mut self, other: Self) -> Self {
        self.steps.extend(other.steps);
        self
    }

    /// Reverses the application order.
    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.steps.reverse();
        self
    }

    /// Number of steps in the chain.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the chain is empty (and therefore the identity function).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Runs the chain on `value`.
    pub fn apply(&self, value: T) -> T {
        self.steps
            .iter()
            .fold(value, |current, function| function(current))
    }

    /// Converts the chain into a plain closure.
    pub fn into_fn(self) -> impl Fn(T) -> T {
        move |value| self.apply(value)
    }
}

/// Applies every function to the same input, collecting all results.
///
/// # Examples
///
/// ```rust
/// use iterforge::functional::FanOut;
///
/// let probes = FanOut::new()
///     .with(|value: &i32| value + 1)
///     .with(|value| value * 2);
/// assert_eq!(probes.apply(&5), vec![6, 10]);
/// ```
#[derive(Clone)]
pub struct FanOut<T, R> {
    functions: Vec<Rc<dyn Fn(&T) -> R>>,
}

impl<T, R> Default for FanOut<T, R> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R> FanOut<T, R> {
    /// Creates an empty fan-out.
    #[inline]
    pub fn new() -> Self {
        Self {
            functions: Vec::new(),
        }
    }

    /// Adds a function to the fan-out.
    #[must_use]
    pub fn with(mut self, function: impl Fn(&T) -> R + 'static) -> Self {
        self.functions.push(Rc::new(function));
        self
    }

    /// Number of functions in the fan-out.
    #[inline]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether the fan-out holds no functions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Calls every function on `value`, returning the results in order.
    pub fn apply(&self, value: &T) -> Vec<R> {
        self.functions
            .iter()
            .map(|function| function(value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_chain_is_identity() {
        let chain: Chained<i32> = Chained::new();
        assert_eq!(chain.apply(7), 7);
    }

    #[test]
    fn steps_run_in_argument_order() {
        let chain = Chained::new()
            .then(|text: String| text + "a")
            .then(|text| text + "b");
        assert_eq!(chain.apply(String::new()), "ab");
    }

    #[test]
    fn splicing_flattens() {
        let inner = Chained::new().then(|value: i32| value * 2);
        let outer = Chained::new().then(|value: i32| value + 1).chain(inner);
        assert_eq!(outer.len(), 2);
        assert_eq!(outer.apply(5), 12);
    }

    #[test]
    fn reversing_a_spliced_chain_preserves_steps() {
        let forward = Chained::new()
            .then(|value: i32| value + 1)
            .then(|value| value * 2);
        let backward = forward.clone().reversed();
        assert_eq!(forward.apply(5), 12);
        assert_eq!(backward.apply(5), 11);
    }

    #[test]
    fn fan_out_collects_every_result() {
        let probes = FanOut::new()
            .with(|value: &i32| *value)
            .with(|value| value * value);
        assert_eq!(probes.apply(&3), vec![3, 9]);
    }

    #[test]
    fn empty_fan_out_returns_no_results() {
        let probes: FanOut<i32, i32> = FanOut::new();
        assert!(probes.apply(&3).is_empty());
    }
}
