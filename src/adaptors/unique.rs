//! Occurrence-based filtering.
//!
//! Three related adaptors over the [`Seen`](crate::seen::Seen) membership
//! oracle and a key function:
//!
//! - [`unique_everseen`]: first occurrence of every value
//! - [`duplicates`]: second and later occurrences only
//! - [`unique_justseen`]: collapse runs of equal values
//!
//! All three preserve source order and the `Seen`-backed pair tolerates
//! unhashable keys.

use crate::seen::{Seen, TryHash};

/// An iterator yielding only the first occurrence of each key.
///
/// See [`unique_everseen`] and [`unique_everseen_by`].
#[derive(Debug, Clone)]
pub struct UniqueEverseen<I, F, K> {
    source: I,
    key: F,
    seen: Seen<K>,
}

/// Yields the first occurrence of every value of `source`, preserving
/// order.
///
/// # Examples
///
/// ```rust
/// use iterforge::adaptors::unique_everseen;
///
/// let first: Vec<i32> = unique_everseen(vec![1, 2, 1, 3, 2]).collect();
/// assert_eq!(first, vec![1, 2, 3]);
///
/// // Unhashable values fall back to equality scans transparently.
/// let floats: Vec<f64> = unique_everseen(vec![1.0, 2.0, 1.0]).collect();
/// assert_eq!(floats, vec![1.0, 2.0]);
/// ```
pub fn unique_everseen<I>(
    source: I,
) -> UniqueEverseen<I::IntoIter, impl FnMut(&I::Item) -> I::Item, I::Item>
where
    I: IntoIterator,
    I::Item: Clone + PartialEq + TryHash,
{
    unique_everseen_by(source, |item: &I::Item| item.clone())
}

/// Yields the first occurrence of every key of `source`, preserving order.
pub fn unique_everseen_by<I, F, K>(source: I, key: F) -> UniqueEverseen<I::IntoIter, F, K>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq + TryHash,
{
    UniqueEverseen {
        source: source.into_iter(),
        key,
        seen: Seen::new(),
    }
}

impl<I, F, K> UniqueEverseen<I, F, K> {
    /// The membership oracle accumulated so far.
    #[inline]
    pub fn seen(&self) -> &Seen<K> {
        &self.seen
    }
}

impl<I, F, K> Iterator for UniqueEverseen<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq + TryHash,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.source.next()?;
            let key = (self.key)(&item);
            if !self.seen.contains_add(key) {
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

impl<I, F, K> std::iter::FusedIterator for UniqueEverseen<I, F, K>
where
    I: std::iter::FusedIterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq + TryHash,
{
}

/// An iterator yielding only repeated occurrences.
///
/// See [`duplicates`] and [`duplicates_by`].
#[derive(Debug, Clone)]
pub struct Duplicates<I, F, K> {
    source: I,
    key: F,
    seen: Seen<K>,
}

/// Yields each item of `source` whose key has been seen before, preserving
/// order.
///
/// A value occurring `n` times is yielded `n - 1` times.
///
/// # Examples
///
/// ```rust
/// use iterforge::adaptors::duplicates;
///
/// let repeated: Vec<i32> = duplicates(vec![1, 2, 1, 3, 2, 1]).collect();
/// assert_eq!(repeated, vec![1, 2, 1]);
/// ```
pub fn duplicates<I>(
    source: I,
) -> Duplicates<I::IntoIter, impl FnMut(&I::Item) -> I::Item, I::Item>
where
    I: IntoIterator,
    I::Item: Clone + PartialEq + TryHash,
{
    duplicates_by(source, |item: &I::Item| item.clone())
}

/// Yields each item of `source` whose key has been seen before.
pub fn duplicates_by<I, F, K>(source: I, key: F) -> Duplicates<I::IntoIter, F, K>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq + TryHash,
{
    Duplicates {
        source: source.into_iter(),
        key,
        seen: Seen::new(),
    }
}

impl<I, F, K> Duplicates<I, F, K> {
    /// The membership oracle accumulated so far.
    #[inline]
    pub fn seen(&self) -> &Seen<K> {
        &self.seen
    }
}

impl<I, F, K> Iterator for Duplicates<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq + TryHash,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.source.next()?;
            let key = (self.key)(&item);
            if self.seen.contains_add(key) {
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

impl<I, F, K> std::iter::FusedIterator for Duplicates<I, F, K>
where
    I: std::iter::FusedIterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq + TryHash,
{
}

/// An iterator collapsing consecutive runs of equal keys.
///
/// See [`unique_justseen`] and [`unique_justseen_by`].
#[derive(Debug, Clone)]
pub struct UniqueJustseen<I, F, K> {
    source: I,
    key: F,
    last: Option<K>,
}

/// Yields the first item of every run of equal values.
///
/// Only adjacent repetitions are collapsed; a value recurring later is
/// yielded again.
///
/// # Examples
///
/// ```rust
/// use iterforge::adaptors::unique_justseen;
///
/// let collapsed: Vec<i32> = unique_justseen(vec![1, 1, 2, 2, 1]).collect();
/// assert_eq!(collapsed, vec![1, 2, 1]);
/// ```
pub fn unique_justseen<I>(
    source: I,
) -> UniqueJustseen<I::IntoIter, impl FnMut(&I::Item) -> I::Item, I::Item>
where
    I: IntoIterator,
    I::Item: Clone + PartialEq,
{
    unique_justseen_by(source, |item: &I::Item| item.clone())
}

/// Yields the first item of every run of equal keys.
pub fn unique_justseen_by<I, F, K>(source: I, key: F) -> UniqueJustseen<I::IntoIter, F, K>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    UniqueJustseen {
        source: source.into_iter(),
        key,
        last: None,
    }
}

impl<I, F, K> Iterator for UniqueJustseen<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.source.next()?;
            let key = (self.key)(&item);
            if self.last.as_ref() != Some(&key) {
                self.last = Some(key);
                return Some(item);
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        // Before the first yield at least one item must surface; afterwards
        // every remaining item may collapse into the current run.
        (usize::from(self.last.is_none() && lower > 0), upper)
    }
}

impl<I, F, K> std::iter::FusedIterator for UniqueJustseen<I, F, K>
where
    I: std::iter::FusedIterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
}
