//! Classification and counting reductions.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Buckets the items of `source` by `key`.
///
/// Insertion order within each bucket follows source order. Keys must be
/// hashable; for occurrence-based filtering over unhashable keys see the
/// `Seen`-backed adaptors instead.
///
/// # Examples
///
/// ```rust
/// use iterforge::folds::groupedby;
///
/// let grouped = groupedby(vec![1, 2, 3, 4, 5], |value| value % 2 == 0);
/// assert_eq!(grouped[&true], vec![2, 4]);
/// assert_eq!(grouped[&false], vec![1, 3, 5]);
/// ```
pub fn groupedby<I, K, F>(source: I, mut key: F) -> FxHashMap<K, Vec<I::Item>>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    let mut groups: FxHashMap<K, Vec<I::Item>> = FxHashMap::default();
    for item in source {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}

/// Buckets the items of `source` by `key`, storing `keep(item)` instead of
/// the item.
///
/// # Examples
///
/// ```rust
/// use iterforge::folds::groupedby_map;
///
/// let grouped = groupedby_map(vec!["ape", "bat", "ant"], |word| word.as_bytes()[0], str::len);
/// assert_eq!(grouped[&b'a'], vec![3, 3]);
/// ```
pub fn groupedby_map<I, K, V, F, G>(source: I, mut key: F, mut keep: G) -> FxHashMap<K, Vec<V>>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
    G: FnMut(I::Item) -> V,
{
    let mut groups: FxHashMap<K, Vec<V>> = FxHashMap::default();
    for item in source {
        let bucket = key(&item);
        groups.entry(bucket).or_default().push(keep(item));
    }
    groups
}

/// Splits `source` into `(falsies, truthies)` by `predicate`.
///
/// Both halves preserve source order; together they are a permutation of
/// the source.
///
/// # Examples
///
/// ```rust
/// use iterforge::folds::partition;
///
/// let (odd, even) = partition(vec![1, 2, 3, 4], |value| value % 2 == 0);
/// assert_eq!(odd, vec![1, 3]);
/// assert_eq!(even, vec![2, 4]);
/// ```
pub fn partition<I, F>(source: I, mut predicate: F) -> (Vec<I::Item>, Vec<I::Item>)
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    let mut falsies = Vec::new();
    let mut truthies = Vec::new();
    for item in source {
        if predicate(&item) {
            truthies.push(item);
        } else {
            falsies.push(item);
        }
    }
    (falsies, truthies)
}

/// Number of items in `source`.
#[inline]
pub fn count_items<I: IntoIterator>(source: I) -> usize {
    source.into_iter().count()
}

/// Number of items satisfying `predicate`.
///
/// # Examples
///
/// ```rust
/// use iterforge::folds::count_items_by;
///
/// assert_eq!(count_items_by(vec![1, 2, 3, 4], |value| value % 2 == 0), 2);
/// ```
pub fn count_items_by<I, F>(source: I, mut predicate: F) -> usize
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    source
        .into_iter()
        .filter(|item| predicate(item))
        .count()
}

/// Number of items equal to `value`.
pub fn count_items_eq<I>(source: I, value: &I::Item) -> usize
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    source.into_iter().filter(|item| item == value).count()
}
