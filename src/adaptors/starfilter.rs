//! Predicate filtering over tuple items.

use crate::tuples::TupleTest;

/// An iterator keeping tuple items whose spread predicate holds.
///
/// See [`starfilter`].
#[derive(Debug, Clone)]
pub struct StarFilter<I, F> {
    source: I,
    predicate: F,
}

/// Keeps the tuples of `source` for which `predicate`, applied to the tuple
/// elements as separate arguments, returns `true`.
///
/// The predicate receives references to the elements; the tuple itself is
/// yielded unchanged. Arities 1 through 6 are supported via [`TupleTest`].
///
/// # Examples
///
/// ```rust
/// use iterforge::adaptors::starfilter;
///
/// let pairs = vec![(1, 2), (4, 3), (5, 6)];
/// let ascending: Vec<(i32, i32)> =
///     starfilter(pairs, |first: &i32, second: &i32| first < second).collect();
/// assert_eq!(ascending, vec![(1, 2), (5, 6)]);
/// ```
pub fn starfilter<I, F>(source: I, predicate: F) -> StarFilter<I::IntoIter, F>
where
    I: IntoIterator,
    F: TupleTest<I::Item>,
{
    StarFilter {
        source: source.into_iter(),
        predicate,
    }
}

impl<I, F> Iterator for StarFilter<I, F>
where
    I: Iterator,
    F: TupleTest<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.source.next()?;
            if self.predicate.test_tuple(&item) {
                return Some(item);
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.source.size_hint();
        (0, upper)
    }
}

impl<I, F> std::iter::FusedIterator for StarFilter<I, F>
where
    I: std::iter::FusedIterator,
    F: TupleTest<I::Item>,
{
}
