//! Arithmetic reductions.

use std::ops::{Add, Mul};

/// Sum of element-wise products of two sources.
///
/// Sources of different length are zipped to the shorter one; when that
/// leaves no pairs at all the result is `None`.
///
/// # Examples
///
/// ```rust
/// use iterforge::folds::dotproduct;
///
/// assert_eq!(dotproduct(vec![1, 2, 3], vec![4, 5, 6]), Some(32));
/// assert_eq!(dotproduct(vec![1, 2, 3], vec![10]), Some(10));
/// assert_eq!(dotproduct(Vec::<i32>::new(), vec![1]), None);
/// ```
pub fn dotproduct<L, R, P>(left: L, right: R) -> Option<P>
where
    L: IntoIterator,
    R: IntoIterator,
    L::Item: Mul<R::Item, Output = P>,
    P: Add<Output = P>,
{
    left.into_iter()
        .zip(right)
        .map(|(a, b)| a * b)
        .reduce(Add::add)
}
