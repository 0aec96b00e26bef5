//! Positional and simultaneous extrema.
//!
//! [`argmin`] and [`argmax`] report the position of an extreme item rather
//! than the item itself. [`minmax`] finds both ends of a source in a single
//! pass using the pairwise algorithm, which costs ⌈3N/2⌉ − 2 comparisons
//! instead of the 2N − 2 of two separate scans.

use std::cmp::Ordering;

/// Position of the smallest item, earliest on ties.
///
/// # Examples
///
/// ```rust
/// use iterforge::folds::argmin;
///
/// assert_eq!(argmin(vec![3, 1, 4, 1]), Some(1));
/// assert_eq!(argmin(Vec::<i32>::new()), None);
/// ```
pub fn argmin<I>(source: I) -> Option<usize>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    extreme_position(source, Ordering::Less)
}

/// Position of the largest item, earliest on ties.
pub fn argmax<I>(source: I) -> Option<usize>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    extreme_position(source, Ordering::Greater)
}

/// Position of the item with the smallest key, earliest on ties.
///
/// The key is computed once per item.
///
/// # Examples
///
/// ```rust
/// use iterforge::folds::argmin_by_key;
///
/// let words = vec!["sparrow", "owl", "heron"];
/// assert_eq!(argmin_by_key(words, |word| word.len()), Some(1));
/// ```
pub fn argmin_by_key<I, K, F>(source: I, key: F) -> Option<usize>
where
    I: IntoIterator,
    K: PartialOrd,
    F: FnMut(&I::Item) -> K,
{
    extreme_position_by_key(source, key, Ordering::Less)
}

/// Position of the item with the largest key, earliest on ties.
pub fn argmax_by_key<I, K, F>(source: I, key: F) -> Option<usize>
where
    I: IntoIterator,
    K: PartialOrd,
    F: FnMut(&I::Item) -> K,
{
    extreme_position_by_key(source, key, Ordering::Greater)
}

fn extreme_position<I>(source: I, wanted: Ordering) -> Option<usize>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    let mut items = source.into_iter();
    let mut best = items.next()?;
    let mut best_position = 0;
    for (offset, item) in items.enumerate() {
        // Strict comparison keeps the earliest extreme on ties.
        if item.partial_cmp(&best).unwrap_or(Ordering::Equal) == wanted {
            best = item;
            best_position = offset + 1;
        }
    }
    Some(best_position)
}

fn extreme_position_by_key<I, K, F>(source: I, mut key: F, wanted: Ordering) -> Option<usize>
where
    I: IntoIterator,
    K: PartialOrd,
    F: FnMut(&I::Item) -> K,
{
    let mut items = source.into_iter();
    let mut best_key = key(&items.next()?);
    let mut best_position = 0;
    for (offset, item) in items.enumerate() {
        let candidate = key(&item);
        if candidate.partial_cmp(&best_key).unwrap_or(Ordering::Equal) == wanted {
            best_key = candidate;
            best_position = offset + 1;
        }
    }
    Some(best_position)
}

/// Smallest and largest item in one pass.
///
/// Items are pulled in pairs and ordered against each other first, so a
/// source of N items costs at most ⌈3N/2⌉ − 2 comparisons. Equal values
/// resolve to the earlier item for both ends; a singleton source yields
/// that item twice.
///
/// # Examples
///
/// ```rust
/// use iterforge::folds::minmax;
///
/// assert_eq!(minmax(vec![2, 1, 3, 5, 4]), Some((1, 5)));
/// assert_eq!(minmax(vec![7]), Some((7, 7)));
/// assert_eq!(minmax(Vec::<i32>::new()), None);
/// ```
pub fn minmax<I>(source: I) -> Option<(I::Item, I::Item)>
where
    I: IntoIterator,
    I::Item: Clone + PartialOrd,
{
    minmax_by(source, |left, right| {
        left.partial_cmp(right).unwrap_or(Ordering::Equal)
    })
}

/// Smallest and largest item by key, in one pass.
///
/// The key is computed once per item; the comparison budget matches
/// [`minmax`].
///
/// # Examples
///
/// ```rust
/// use iterforge::folds::minmax_by_key;
///
/// let extremes = minmax_by_key(vec![-3, 1, 2], |value: &i32| value.abs());
/// assert_eq!(extremes, Some((1, -3)));
/// ```
pub fn minmax_by_key<I, K, F>(source: I, mut key: F) -> Option<(I::Item, I::Item)>
where
    I: IntoIterator,
    I::Item: Clone,
    K: Clone + PartialOrd,
    F: FnMut(&I::Item) -> K,
{
    let keyed = source.into_iter().map(|item| {
        let computed = key(&item);
        (computed, item)
    });
    let (smallest, largest) = minmax_by(keyed, |left, right| {
        left.0.partial_cmp(&right.0).unwrap_or(Ordering::Equal)
    })?;
    Some((smallest.1, largest.1))
}

fn minmax_by<I, C>(source: I, mut compare: C) -> Option<(I::Item, I::Item)>
where
    I: IntoIterator,
    I::Item: Clone,
    C: FnMut(&I::Item, &I::Item) -> Ordering,
{
    let mut items = source.into_iter();
    let first = items.next()?;
    let (mut smallest, mut largest) = match items.next() {
        None => return Some((first.clone(), first)),
        Some(second) => {
            if compare(&second, &first) == Ordering::Less {
                (second, first)
            } else {
                (first, second)
            }
        }
    };
    while let Some(left) = items.next() {
        match items.next() {
            Some(right) => {
                // One intra-pair comparison, then one against each end.
                let (low, high) = if compare(&right, &left) == Ordering::Less {
                    (right, left)
                } else {
                    (left, right)
                };
                if compare(&low, &smallest) == Ordering::Less {
                    smallest = low;
                }
                if compare(&high, &largest) == Ordering::Greater {
                    largest = high;
                }
            }
            None => {
                // Odd tail: the singleton contends for both ends.
                if compare(&left, &smallest) == Ordering::Less {
                    smallest = left;
                } else if compare(&left, &largest) == Ordering::Greater {
                    largest = left;
                }
                break;
            }
        }
    }
    Some((smallest, largest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn argmin_prefers_the_earliest_tie() {
        assert_eq!(argmin(vec![2, 1, 1, 3]), Some(1));
        assert_eq!(argmax(vec![3, 1, 3]), Some(0));
    }

    #[test]
    fn arg_extrema_on_empty_sources() {
        assert_eq!(argmin(Vec::<i32>::new()), None);
        assert_eq!(argmax_by_key(Vec::<i32>::new(), |value| *value), None);
    }

    #[test]
    fn keyed_arg_extrema_follow_the_key() {
        assert_eq!(argmax_by_key(vec![-5, 2, 3], |value: &i32| value.abs()), Some(0));
    }

    #[test]
    fn minmax_handles_all_parities() {
        assert_eq!(minmax(vec![2, 1, 3, 5, 4]), Some((1, 5)));
        assert_eq!(minmax(vec![4, 2, 6, 1]), Some((1, 6)));
        assert_eq!(minmax(vec![9]), Some((9, 9)));
        assert_eq!(minmax(Vec::<i32>::new()), None);
    }

    #[test]
    fn minmax_comparison_budget_holds() {
        let counter = Cell::new(0_usize);
        let values: Vec<Counted<'_>> = (0..10)
            .map(|value| Counted {
                value,
                counter: &counter,
            })
            .collect();
        let extremes = minmax(values).unwrap();
        assert_eq!((extremes.0.value, extremes.1.value), (0, 9));
        assert!(counter.get() <= 10 * 3 / 2 - 2);
    }

    #[test]
    fn minmax_by_key_returns_items_not_keys() {
        assert_eq!(
            minmax_by_key(vec![-3, 1, 2], |value: &i32| value.abs()),
            Some((1, -3))
        );
    }

    #[derive(Clone)]
    struct Counted<'a> {
        value: i32,
        counter: &'a Cell<usize>,
    }

    impl PartialEq for Counted<'_> {
        fn eq(&self, other: &Self) -> bool {
            self.value == other.value
        }
    }

    impl PartialOrd for Counted<'_> {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            self.counter.set(self.counter.get() + 1);
            self.value.partial_cmp(&other.value)
        }
    }
}
