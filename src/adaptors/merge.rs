//! Stable k-way merging.
//!
//! [`merge`] interleaves any number of individually sorted sources into one
//! sorted stream. Stability is source-indexed: when two items compare equal,
//! the one from the lower-indexed source is yielded first. The pending item
//! of every active source is tagged as an [`ItemIdxKey`] record and kept in
//! a table ordered by bisection, so each step costs O(log k) comparisons.

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::error::Error;

/// A sort record tagging an item with its source index and optional key.
///
/// The index breaks comparison ties so that merging stays stable across
/// sources; the key, when present, replaces the item for comparison
/// purposes.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemIdxKey<T, K = T> {
    item: T,
    index: usize,
    key: Option<K>,
}

impl<T, K> ItemIdxKey<T, K> {
    /// Creates a record for `item` taken from source `index`.
    #[inline]
    pub fn new(item: T, index: usize, key: Option<K>) -> Self {
        Self { item, index, key }
    }

    /// The tagged item.
    #[inline]
    pub fn item(&self) -> &T {
        &self.item
    }

    /// The source index the item was taken from.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The comparison key, when a key function is configured.
    #[inline]
    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    /// Unwraps the record into its item.
    #[inline]
    pub fn into_item(self) -> T {
        self.item
    }
}

impl<T: PartialOrd, K: PartialOrd> ItemIdxKey<T, K> {
    /// Whether this record precedes `other` in merge order.
    ///
    /// Records compare by key when both carry one, by item otherwise;
    /// `reverse` flips that comparison. Equal (or incomparable) values fall
    /// back to the source index, which is never flipped, so lower-indexed
    /// sources win ties in both directions.
    fn precedes(&self, other: &Self, reverse: bool) -> bool {
        let ordering = match (&self.key, &other.key) {
            (Some(own), Some(theirs)) => own.partial_cmp(theirs),
            _ => self.item.partial_cmp(&other.item),
        }
        .unwrap_or(Ordering::Equal);
        let ordering = if reverse { ordering.reverse() } else { ordering };
        match ordering {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => self.index < other.index,
        }
    }
}

/// An iterator merging sorted sources into one sorted stream.
///
/// See [`merge`] and [`merge_by_key`].
#[derive(Debug, Clone)]
pub struct Merge<I: Iterator, K, F> {
    sources: Vec<I>,
    key: Option<F>,
    reverse: bool,
    /// Pending records in yield order; front is next.
    table: SmallVec<[ItemIdxKey<I::Item, K>; 8]>,
    /// Sources that have not been exhausted.
    active: usize,
    initialized: bool,
}

/// Merges individually sorted `sources` into one ascending stream.
///
/// # Examples
///
/// ```rust
/// use iterforge::adaptors::merge;
///
/// let merged: Vec<i32> = merge(vec![vec![1, 3, 5].into_iter(), vec![2, 4, 6].into_iter()])
///     .collect();
/// assert_eq!(merged, vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn merge<S, I>(sources: S) -> Merge<I, I::Item, fn(&I::Item) -> I::Item>
where
    S: IntoIterator<Item = I>,
    I: Iterator,
    I::Item: PartialOrd,
{
    Merge {
        sources: sources.into_iter().collect(),
        key: None,
        reverse: false,
        table: SmallVec::new(),
        active: 0,
        initialized: false,
    }
}

/// Merges `sources` sorted by `key` into one stream ascending by that key.
///
/// # Examples
///
/// ```rust
/// use iterforge::adaptors::merge_by_key;
///
/// let left = vec![(1, 'a'), (3, 'a')];
/// let right = vec![(-1, 'b'), (-3, 'b')];
/// let merged: Vec<(i32, char)> = merge_by_key(
///     vec![left.into_iter(), right.into_iter()],
///     |pair: &(i32, char)| pair.0.abs(),
/// )
/// .collect();
/// assert_eq!(merged, vec![(1, 'a'), (-1, 'b'), (3, 'a'), (-3, 'b')]);
/// ```
pub fn merge_by_key<S, I, K, F>(sources: S, key: F) -> Merge<I, K, F>
where
    S: IntoIterator<Item = I>,
    I: Iterator,
    I::Item: PartialOrd,
    K: PartialOrd,
    F: FnMut(&I::Item) -> K,
{
    Merge {
        sources: sources.into_iter().collect(),
        key: Some(key),
        reverse: false,
        table: SmallVec::new(),
        active: 0,
        initialized: false,
    }
}

impl<I, K, F> Merge<I, K, F>
where
    I: Iterator,
    I::Item: PartialOrd,
    K: PartialOrd,
    F: FnMut(&I::Item) -> K,
{
    /// Flips the merge to descending order.
    ///
    /// Must be configured before the first item is pulled; source-index
    /// tie-breaking is unaffected.
    #[must_use]
    pub fn descending(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Number of sources that have not been exhausted.
    #[inline]
    pub fn active_count(&self) -> usize {
        self.active
    }

    /// Copy of the pending-record table, in yield order.
    pub fn buffer(&self) -> Vec<ItemIdxKey<I::Item, K>>
    where
        I::Item: Clone,
        K: Clone,
    {
        self.table.to_vec()
    }

    /// Restores the pending-record table.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`] when the record count does not equal
    /// `active`, `active` exceeds the source count, a record's index is out
    /// of range, or a record's key presence disagrees with the configured
    /// key function. The instance is unchanged on error.
    pub fn set_state(
        &mut self,
        records: Vec<ItemIdxKey<I::Item, K>>,
        active: usize,
    ) -> Result<(), Error> {
        if active > self.sources.len() {
            return Err(Error::invalid_state(format!(
                "active count {active} exceeds the number of sources {}",
                self.sources.len()
            )));
        }
        if records.len() != active {
            return Err(Error::invalid_state(format!(
                "expected {active} record(s), got {}",
                records.len()
            )));
        }
        for record in &records {
            if record.index >= self.sources.len() {
                return Err(Error::invalid_state(format!(
                    "record index {} is out of range",
                    record.index
                )));
            }
            if record.key.is_some() != self.key.is_some() {
                return Err(Error::invalid_state(
                    "record key presence disagrees with the configured key function",
                ));
            }
        }
        self.table.clear();
        for record in records {
            let position = self.bisect(&record);
            self.table.insert(position, record);
        }
        self.active = active;
        self.initialized = true;
        Ok(())
    }

    /// Leftmost table position at which `record` belongs.
    fn bisect(&self, record: &ItemIdxKey<I::Item, K>) -> usize {
        let mut low = 0;
        let mut high = self.table.len();
        while low < high {
            let middle = low + (high - low) / 2;
            if record.precedes(&self.table[middle], self.reverse) {
                high = middle;
            } else {
                low = middle + 1;
            }
        }
        low
    }

    fn record_for(&mut self, item: I::Item, index: usize) -> ItemIdxKey<I::Item, K> {
        let key = self.key.as_mut().map(|function| function(&item));
        ItemIdxKey::new(item, index, key)
    }

    fn initialize(&mut self) {
        self.initialized = true;
        for index in 0..self.sources.len() {
            if let Some(item) = self.sources[index].next() {
                let record = self.record_for(item, index);
                let position = self.bisect(&record);
                self.table.insert(position, record);
                self.active += 1;
            }
        }
    }
}

impl<I, K, F> Iterator for Merge<I, K, F>
where
    I: Iterator,
    I::Item: PartialOrd,
    K: PartialOrd,
    F: FnMut(&I::Item) -> K,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.initialized {
            self.initialize();
        }
        if self.table.is_empty() {
            return None;
        }
        let front = self.table.remove(0);
        match self.sources[front.index()].next() {
            Some(item) => {
                let record = self.record_for(item, front.index());
                let position = self.bisect(&record);
                self.table.insert(position, record);
            }
            None => self.active -= 1,
        }
        Some(front.into_item())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let mut lower = self.table.len();
        let mut upper = Some(self.table.len());
        for source in &self.sources {
            let (source_lower, source_upper) = source.size_hint();
            lower = lower.saturating_add(source_lower);
            upper = match (upper, source_upper) {
                (Some(total), Some(count)) => total.checked_add(count),
                _ => None,
            };
        }
        (lower, upper)
    }
}

impl<I, K, F> std::iter::FusedIterator for Merge<I, K, F>
where
    I: std::iter::FusedIterator,
    I::Item: PartialOrd,
    K: PartialOrd,
    F: FnMut(&I::Item) -> K,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources(groups: Vec<Vec<i32>>) -> Vec<std::vec::IntoIter<i32>> {
        groups.into_iter().map(Vec::into_iter).collect()
    }

    #[test]
    fn two_way_merge_is_sorted() {
        let merged: Vec<i32> = merge(sources(vec![vec![1, 3, 5, 7, 9], vec![2, 4, 6, 8, 10]]))
            .collect();
        assert_eq!(merged, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn equal_items_prefer_the_lower_source_index() {
        let merged: Vec<i32> = merge(sources(vec![vec![1, 2], vec![1, 2]])).collect();
        assert_eq!(merged, vec![1, 1, 2, 2]);
        // The interleave is [left 1, right 1, left 2, right 2]; verify via keys.
        let tagged: Vec<(i32, char)> = merge_by_key(
            vec![
                vec![(1, 'l'), (2, 'l')].into_iter(),
                vec![(1, 'r'), (2, 'r')].into_iter(),
            ],
            |pair: &(i32, char)| pair.0,
        )
        .collect();
        assert_eq!(tagged, vec![(1, 'l'), (1, 'r'), (2, 'l'), (2, 'r')]);
    }

    #[test]
    fn key_function_drives_the_order() {
        let merged: Vec<(i32, i32)> = merge_by_key(
            vec![
                vec![(1, 3), (3, 3)].into_iter(),
                vec![(-1, 3), (-3, 3)].into_iter(),
            ],
            |pair: &(i32, i32)| pair.0.abs(),
        )
        .collect();
        assert_eq!(merged, vec![(1, 3), (-1, 3), (3, 3), (-3, 3)]);
    }

    #[test]
    fn descending_merge_flips_comparisons_not_ties() {
        let merged: Vec<i32> = merge(sources(vec![vec![5, 3, 1], vec![6, 4, 2]]))
            .descending()
            .collect();
        assert_eq!(merged, vec![6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn empty_and_uneven_sources() {
        let merged: Vec<i32> = merge(sources(vec![vec![], vec![2], vec![1, 3]])).collect();
        assert_eq!(merged, vec![1, 2, 3]);
    }

    #[test]
    fn size_hint_counts_buffered_records() {
        let mut merged = merge(sources(vec![vec![1, 3], vec![2]]));
        assert_eq!(merged.size_hint(), (3, Some(3)));
        let _ = merged.next();
        // Two records in flight (one per remaining active source) plus
        // upstream leftovers.
        assert_eq!(merged.size_hint(), (2, Some(2)));
    }

    #[test]
    fn state_restore_validates_records() {
        let mut merged = merge(sources(vec![vec![1], vec![2]]));
        let _ = merged.next();
        let buffer = merged.buffer();
        let active = merged.active_count();

        let mut other = merge(sources(vec![vec![], vec![]]));
        assert!(other.set_state(buffer.clone(), 5).is_err());
        assert!(other.set_state(vec![], active).is_err());
        assert!(
            other
                .set_state(vec![ItemIdxKey::new(1, 9, None)], 1)
                .is_err()
        );
        other.set_state(buffer, active).unwrap();
        assert_eq!(other.next(), Some(2));
        assert_eq!(other.next(), None);
    }

    #[test]
    fn key_presence_must_match_configuration() {
        let mut merged = merge(sources(vec![vec![1]]));
        assert!(
            merged
                .set_state(vec![ItemIdxKey::new(1, 0, Some(1))], 1)
                .is_err()
        );
    }
}
