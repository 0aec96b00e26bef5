//! Delimiter-based grouping.

use crate::error::Error;

/// What to do with a matched delimiter item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Keep {
    /// Discard the delimiter (the default).
    #[default]
    Discard,
    /// Yield the delimiter as a singleton group between its neighbours.
    Separate,
    /// Append the delimiter to the group it terminates.
    Tail,
    /// Prepend the delimiter to the following group.
    Head,
}

/// An iterator cutting its source into groups at delimiter items.
///
/// See [`split`] and [`split_by`].
#[derive(Debug, Clone)]
pub struct Split<I: Iterator, F> {
    source: I,
    matcher: F,
    keep: Keep,
    /// Remaining splits; `None` is unbounded.
    remaining_splits: Option<usize>,
    /// Delimiter to prepend to the next group (`Keep::Head`).
    pending_head: Option<I::Item>,
    /// Delimiter group to yield next (`Keep::Separate`).
    pending_separator: Option<I::Item>,
    done: bool,
}

/// Cuts `source` into groups at items equal to `delimiter`.
///
/// Consecutive delimiters produce empty groups; a leading delimiter
/// produces a leading empty group; a trailing delimiter does not produce a
/// trailing one.
///
/// # Examples
///
/// ```rust
/// use iterforge::adaptors::split;
///
/// let groups: Vec<Vec<i32>> = split(vec![1, 2, 0, 3, 0, 4], 0).collect();
/// assert_eq!(groups, vec![vec![1, 2], vec![3], vec![4]]);
/// ```
pub fn split<I>(
    source: I,
    delimiter: I::Item,
) -> Split<I::IntoIter, impl FnMut(&I::Item) -> bool>
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    split_by(source, move |item| *item == delimiter)
}

/// Cuts `source` into groups at items matching `is_delimiter`.
///
/// # Examples
///
/// ```rust
/// use iterforge::adaptors::{Keep, split_by};
///
/// let groups: Vec<Vec<i32>> = split_by(vec![1, 9, 2, 8, 3], |item: &i32| *item > 5)
///     .keep(Keep::Separate)
///     .collect();
/// assert_eq!(groups, vec![vec![1], vec![9], vec![2], vec![8], vec![3]]);
/// ```
pub fn split_by<I, F>(source: I, is_delimiter: F) -> Split<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    Split {
        source: source.into_iter(),
        matcher: is_delimiter,
        keep: Keep::Discard,
        remaining_splits: None,
        pending_head: None,
        pending_separator: None,
        done: false,
    }
}

impl<I: Iterator, F> Split<I, F> {
    /// Chooses what happens to matched delimiter items.
    ///
    /// The variants are mutually exclusive by construction.
    #[must_use]
    pub fn keep(mut self, keep: Keep) -> Self {
        self.keep = keep;
        self
    }

    /// Caps the number of splits; the rest of the source becomes one final
    /// group.
    #[must_use]
    pub fn max_splits(mut self, splits: usize) -> Self {
        self.remaining_splits = Some(splits);
        self
    }
}

impl<I, F> Split<I, F>
where
    I: Iterator,
    I::Item: Clone,
{
    /// Snapshot of the cross-call cursor:
    /// `(remaining_splits, pending_head, pending_separator)`.
    ///
    /// The pending delimiter is returned as a copy.
    pub fn state(&self) -> (Option<usize>, Option<I::Item>, Option<I::Item>) {
        (
            self.remaining_splits,
            self.pending_head.clone(),
            self.pending_separator.clone(),
        )
    }

    /// Restores the cross-call cursor.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`] when both a pending head and a pending
    /// separator are supplied; a delimiter occupies at most one slot.
    /// The instance is unchanged on error.
    pub fn set_state(
        &mut self,
        remaining_splits: Option<usize>,
        pending_head: Option<I::Item>,
        pending_separator: Option<I::Item>,
    ) -> Result<(), Error> {
        if pending_head.is_some() && pending_separator.is_some() {
            return Err(Error::invalid_state(
                "a delimiter can be pending in at most one slot",
            ));
        }
        self.remaining_splits = remaining_splits;
        self.pending_head = pending_head;
        self.pending_separator = pending_separator;
        Ok(())
    }
}

impl<I, F> Iterator for Split<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Some(separator) = self.pending_separator.take() {
            return Some(vec![separator]);
        }
        let mut group = Vec::new();
        if let Some(head) = self.pending_head.take() {
            group.push(head);
        }
        loop {
            match self.source.next() {
                None => {
                    self.done = true;
                    return if group.is_empty() { None } else { Some(group) };
                }
                Some(item) => {
                    let splits_left = self.remaining_splits.is_none_or(|count| count > 0);
                    if splits_left && (self.matcher)(&item) {
                        if let Some(count) = self.remaining_splits.as_mut() {
                            *count -= 1;
                        }
                        match self.keep {
                            Keep::Discard => {}
                            Keep::Separate => self.pending_separator = Some(item),
                            Keep::Tail => group.push(item),
                            Keep::Head => self.pending_head = Some(item),
                        }
                        return Some(group);
                    }
                    group.push(item);
                }
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}

impl<I, F> std::iter::FusedIterator for Split<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
}
