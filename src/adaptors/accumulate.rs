//! Running reductions.

use std::ops::Add;

/// An iterator yielding the running reduction of its source.
///
/// The first item is passed through unchanged; every later item is combined
/// with the running total by the operator.
///
/// See [`accumulate`] and [`accumulate_with`].
#[derive(Debug, Clone)]
pub struct Accumulate<I: Iterator, F> {
    source: I,
    operator: F,
    total: Option<I::Item>,
}

/// Yields the running sums of `source`.
///
/// # Examples
///
/// ```rust
/// use iterforge::adaptors::accumulate;
///
/// let sums: Vec<i32> = accumulate(vec![3, 4, 6, 2, 1]).collect();
/// assert_eq!(sums, vec![3, 7, 13, 15, 16]);
/// ```
pub fn accumulate<I>(
    source: I,
) -> Accumulate<I::IntoIter, impl FnMut(I::Item, I::Item) -> I::Item>
where
    I: IntoIterator,
    I::Item: Add<Output = I::Item>,
{
    accumulate_with(source, |total, item| total + item)
}

/// Yields the running reduction of `source` under `operator`.
///
/// # Examples
///
/// ```rust
/// use iterforge::adaptors::accumulate_with;
///
/// let maxima: Vec<i32> = accumulate_with(vec![1, 3, 2, 5, 4], i32::max).collect();
/// assert_eq!(maxima, vec![1, 3, 3, 5, 5]);
/// ```
pub fn accumulate_with<I, F>(source: I, operator: F) -> Accumulate<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    Accumulate {
        source: source.into_iter(),
        operator,
        total: None,
    }
}

impl<I, F> Iterator for Accumulate<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.source.next()?;
        let total = match self.total.take() {
            None => item,
            Some(total) => (self.operator)(total, item),
        };
        self.total = Some(total.clone());
        Some(total)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<I, F> ExactSizeIterator for Accumulate<I, F>
where
    I: ExactSizeIterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
}

impl<I, F> std::iter::FusedIterator for Accumulate<I, F>
where
    I: std::iter::FusedIterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_sum_matches_prefix_sums() {
        let sums: Vec<i32> = accumulate(vec![3, 4, 6, 2, 1, 9, 0, 7, 5, 8]).collect();
        assert_eq!(sums, vec![3, 7, 13, 15, 16, 25, 25, 32, 37, 45]);
    }

    #[test]
    fn empty_source_yields_nothing() {
        let sums: Vec<i32> = accumulate(Vec::<i32>::new()).collect();
        assert!(sums.is_empty());
    }

    #[test]
    fn size_hint_tracks_the_source() {
        let accumulated = accumulate(vec![1, 2, 3]);
        assert_eq!(accumulated.size_hint(), (3, Some(3)));
        assert_eq!(accumulated.len(), 3);
    }

    #[test]
    fn custom_operator_is_used_after_the_first_item() {
        let products: Vec<i32> = accumulate_with(vec![2, 3, 4], |total, item| total * item).collect();
        assert_eq!(products, vec![2, 6, 24]);
    }
}
