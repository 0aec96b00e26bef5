//! Call-with-N-arguments shims.
//!
//! Rust closures take a fixed argument list, while several parts of this
//! crate hold their arguments bundled up as a tuple: `starfilter` receives
//! tuple items from its source, and `packed` adapts an n-ary function to a
//! single tuple parameter. The traits here bridge the two shapes, with
//! implementations generated for arities 1 through 6.
//!
//! - [`TupleCall`] spreads an owned tuple across a function's parameters.
//! - [`TupleTest`] applies a predicate to references into a tuple without
//!   consuming it.
//!
//! # Examples
//!
//! ```rust
//! use iterforge::tuples::TupleCall;
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! let mut function = add;
//! assert_eq!(function.call_tuple((2, 3)), 5);
//! ```

use paste::paste;

/// Functions callable with their arguments packed into a tuple.
///
/// Implemented for every `FnMut` of arity 1 through 6 over the matching
/// tuple type.
pub trait TupleCall<Arguments> {
    /// The function's return type.
    type Output;

    /// Calls the function, spreading `arguments` across its parameters.
    fn call_tuple(&mut self, arguments: Arguments) -> Self::Output;
}

/// Predicates testable against a borrowed tuple.
///
/// Implemented for every `FnMut` of arity 1 through 6 taking references and
/// returning `bool`.
pub trait TupleTest<Arguments> {
    /// Tests the predicate against references into `arguments`.
    fn test_tuple(&mut self, arguments: &Arguments) -> bool;
}

macro_rules! impl_tuple_shims {
    ($arity:literal, $($name:ident : $index:tt),+) => {
        impl<Function, $($name,)+ Output> TupleCall<($($name,)+)> for Function
        where
            Function: FnMut($($name),+) -> Output,
        {
            type Output = Output;

            #[inline]
            fn call_tuple(&mut self, arguments: ($($name,)+)) -> Output {
                (self)($(arguments.$index),+)
            }
        }

        impl<Function, $($name,)+> TupleTest<($($name,)+)> for Function
        where
            Function: FnMut($(&$name),+) -> bool,
        {
            #[inline]
            fn test_tuple(&mut self, arguments: &($($name,)+)) -> bool {
                (self)($(&arguments.$index),+)
            }
        }

        paste! {
            #[cfg(test)]
            #[allow(non_snake_case, clippy::many_single_char_names)]
            mod [<arity_ $arity _tests>] {
                use super::*;

                #[test]
                fn call_spreads_every_element() {
                    let mut count = |$($name: usize),+| { 0 $(+ $name)+ };
                    let arguments = ($($index + 1,)+);
                    let expected = 0 $(+ ($index + 1))+;
                    assert_eq!(count.call_tuple(arguments), expected);
                }

                #[test]
                fn test_borrows_every_element() {
                    let mut all_positive = |$($name: &usize),+| { true $(&& *$name > 0)+ };
                    let arguments = ($(($index + 1_usize),)+);
                    assert!(all_positive.test_tuple(&arguments));
                }
            }
        }
    };
}

impl_tuple_shims!(1, A: 0);
impl_tuple_shims!(2, A: 0, B: 1);
impl_tuple_shims!(3, A: 0, B: 1, C: 2);
impl_tuple_shims!(4, A: 0, B: 1, C: 2, D: 3);
impl_tuple_shims!(5, A: 0, B: 1, C: 2, D: 3, E: 4);
impl_tuple_shims!(6, A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
