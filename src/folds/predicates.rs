//! Whole-source boolean reductions.

use std::any::Any;
use std::cmp::Ordering;

use crate::error::Error;
use crate::seen::{Seen, TryHash};

/// Whether no value occurs twice.
///
/// Backed by the [`Seen`] oracle, so unhashable values degrade to equality
/// scans rather than failing. Short-circuits on the first repeat; an empty
/// source is distinct.
///
/// # Examples
///
/// ```rust
/// use iterforge::folds::all_distinct;
///
/// assert!(all_distinct(vec![1, 2, 3]));
/// assert!(!all_distinct(vec![1.5, 2.5, 1.5]));
/// ```
pub fn all_distinct<I>(source: I) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq + TryHash,
{
    let mut seen = Seen::new();
    source.into_iter().all(|item| !seen.contains_add(item))
}

/// Whether every value equals the first. An empty source is equal.
///
/// # Examples
///
/// ```rust
/// use iterforge::folds::all_equal;
///
/// assert!(all_equal(vec![7, 7, 7]));
/// assert!(all_equal(Vec::<i32>::new()));
/// assert!(!all_equal(vec![7, 8]));
/// ```
pub fn all_equal<I>(source: I) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    let mut items = source.into_iter();
    match items.next() {
        None => true,
        Some(first) => items.all(|item| item == first),
    }
}

/// Whether the source is sorted in the selected direction.
///
/// `decreasing` selects descending order, `strict` forbids equal
/// neighbours; together the flags pick one of `<`, `≤`, `>`, `≥` as the
/// required relation between consecutive items. Sources of zero or one
/// item are monotone. Short-circuits on the first violation.
///
/// # Errors
///
/// [`Error::Comparison`] when an adjacent pair cannot be ordered (for
/// example a NaN next to a number) before a violation is found; the
/// answer would otherwise depend on an arbitrary tie-break.
///
/// # Examples
///
/// ```rust
/// use iterforge::folds::all_monotone;
///
/// assert_eq!(all_monotone(vec![1, 2, 2, 3], false, false), Ok(true));
/// assert_eq!(all_monotone(vec![1, 2, 2, 3], false, true), Ok(false));
/// assert_eq!(all_monotone(vec![3, 2, 1], true, true), Ok(true));
/// assert!(all_monotone(vec![1.0, f64::NAN], false, false).is_err());
/// ```
pub fn all_monotone<I>(source: I, decreasing: bool, strict: bool) -> Result<bool, Error>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    let mut items = source.into_iter();
    let Some(mut previous) = items.next() else {
        return Ok(true);
    };
    for item in items {
        let Some(ordering) = previous.partial_cmp(&item) else {
            return Err(Error::Comparison);
        };
        let holds = match (decreasing, strict) {
            (false, true) => ordering == Ordering::Less,
            (false, false) => ordering != Ordering::Greater,
            (true, true) => ordering == Ordering::Greater,
            (true, false) => ordering != Ordering::Less,
        };
        if !holds {
            return Ok(false);
        }
        previous = item;
    }
    Ok(true)
}

/// Whether every item is a `T`. An empty source passes.
///
/// # Examples
///
/// ```rust
/// use std::any::Any;
/// use iterforge::folds::all_isinstance;
///
/// let values: Vec<Box<dyn Any>> = vec![Box::new(1_i32), Box::new(2_i32)];
/// assert!(all_isinstance::<i32, _>(values.iter().map(Box::as_ref)));
/// assert!(!all_isinstance::<String, _>(values.iter().map(Box::as_ref)));
/// ```
pub fn all_isinstance<'a, T, I>(source: I) -> bool
where
    T: Any,
    I: IntoIterator<Item = &'a dyn Any>,
{
    source.into_iter().all(<dyn Any>::is::<T>)
}

/// Whether any item is a `T`. An empty source fails.
pub fn any_isinstance<'a, T, I>(source: I) -> bool
where
    T: Any,
    I: IntoIterator<Item = &'a dyn Any>,
{
    source.into_iter().any(<dyn Any>::is::<T>)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_handles_hashable_and_not() {
        assert!(all_distinct(vec!["a", "b", "c"]));
        assert!(!all_distinct(vec![1, 2, 1]));
        assert!(all_distinct(vec![0.5, 1.5]));
        assert!(all_distinct(Vec::<i32>::new()));
    }

    #[test]
    fn equality_short_circuits_on_the_first_difference() {
        let mut pulled = 0;
        let counted = (0..10).inspect(|_| pulled += 1).map(|value| value / 5);
        assert!(!all_equal(counted));
        assert_eq!(pulled, 6);
    }

    #[test]
    fn monotone_covers_all_four_operators() {
        assert_eq!(all_monotone(vec![1, 2, 3], false, true), Ok(true));
        assert_eq!(all_monotone(vec![1, 1, 2], false, true), Ok(false));
        assert_eq!(all_monotone(vec![1, 1, 2], false, false), Ok(true));
        assert_eq!(all_monotone(vec![3, 3, 1], true, false), Ok(true));
        assert_eq!(all_monotone(vec![3, 3, 1], true, true), Ok(false));
        assert_eq!(all_monotone(Vec::<i32>::new(), true, true), Ok(true));
        assert_eq!(all_monotone(vec![5], false, true), Ok(true));
    }

    #[test]
    fn incomparable_neighbours_are_an_error() {
        assert_eq!(
            all_monotone(vec![1.0, f64::NAN, 2.0], false, false),
            Err(Error::Comparison)
        );
        // A violation before the NaN already decides the answer.
        assert_eq!(
            all_monotone(vec![2.0, 1.0, f64::NAN], false, false),
            Ok(false)
        );
    }

    #[test]
    fn isinstance_checks_the_erased_type() {
        let values: Vec<Box<dyn Any>> = vec![Box::new(1_i32), Box::new("x")];
        assert!(any_isinstance::<i32, _>(values.iter().map(Box::as_ref)));
        assert!(!all_isinstance::<i32, _>(values.iter().map(Box::as_ref)));
        assert!(all_isinstance::<i32, _>(std::iter::empty()));
        assert!(!any_isinstance::<i32, _>(std::iter::empty()));
    }
}
