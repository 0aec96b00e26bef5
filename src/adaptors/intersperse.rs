//! Separator insertion.

use crate::error::Error;

/// An iterator inserting one separator between each pair of source items.
///
/// Pulls ahead by one item so the separator is only emitted when another
/// item actually follows. See [`intersperse`].
#[derive(Debug, Clone)]
pub struct Intersperse<I: Iterator> {
    source: I,
    separator: I::Item,
    /// The item pulled ahead while its separator is being emitted.
    pending: Option<I::Item>,
    started: bool,
}

/// Emits the items of `source` with `separator` between each pair.
///
/// # Examples
///
/// ```rust
/// use iterforge::adaptors::intersperse;
///
/// let separated: Vec<i32> = intersperse(vec![1, 2, 3], 0).collect();
/// assert_eq!(separated, vec![1, 0, 2, 0, 3]);
///
/// let single: Vec<i32> = intersperse(vec![1], 0).collect();
/// assert_eq!(single, vec![1]);
/// ```
pub fn intersperse<I>(source: I, separator: I::Item) -> Intersperse<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Intersperse {
        source: source.into_iter(),
        separator,
        pending: None,
        started: false,
    }
}

impl<I> Intersperse<I>
where
    I: Iterator,
    I::Item: Clone,
{
    /// Snapshot of the internal cursor: `(started, pending)`.
    ///
    /// The pending item is returned as a copy.
    pub fn state(&self) -> (bool, Option<I::Item>) {
        (self.started, self.pending.clone())
    }

    /// Restores the internal cursor.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`] when a pending item is supplied while
    /// `started` is false; an un-started instance cannot have pulled ahead.
    /// The instance is unchanged on error.
    pub fn set_state(&mut self, started: bool, pending: Option<I::Item>) -> Result<(), Error> {
        if !started && pending.is_some() {
            return Err(Error::invalid_state(
                "a pending item requires the iterator to have started",
            ));
        }
        self.started = started;
        self.pending = pending;
        Ok(())
    }
}

impl<I> Iterator for Intersperse<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            let first = self.source.next()?;
            self.started = true;
            return Some(first);
        }
        if let Some(buffered) = self.pending.take() {
            return Some(buffered);
        }
        let upcoming = self.source.next()?;
        self.pending = Some(upcoming);
        Some(self.separator.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        let expand = |count: usize| {
            if self.started {
                let doubled = count.checked_mul(2);
                if self.pending.is_some() {
                    doubled.and_then(|total| total.checked_add(1))
                } else {
                    doubled
                }
            } else if count == 0 {
                Some(0)
            } else {
                count.checked_mul(2).map(|total| total - 1)
            }
        };
        (
            expand(lower).unwrap_or(usize::MAX),
            upper.and_then(expand),
        )
    }
}

impl<I> ExactSizeIterator for Intersperse<I>
where
    I: ExactSizeIterator,
    I::Item: Clone,
{
}

impl<I> std::iter::FusedIterator for Intersperse<I>
where
    I: std::iter::FusedIterator,
    I::Item: Clone,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_only_between_pairs() {
        let separated: Vec<char> = intersperse("abc".chars(), '-').collect();
        assert_eq!(separated, vec!['a', '-', 'b', '-', 'c']);
    }

    #[test]
    fn empty_source_stays_empty() {
        let separated: Vec<i32> = intersperse(Vec::<i32>::new(), 0).collect();
        assert!(separated.is_empty());
    }

    #[test]
    fn size_hint_before_and_during_iteration() {
        let mut separated = intersperse(vec![1, 2, 3], 0);
        assert_eq!(separated.size_hint(), (5, Some(5)));

        let _ = separated.next(); // 1
        assert_eq!(separated.size_hint(), (4, Some(4)));

        let _ = separated.next(); // separator; 2 is now pending
        assert_eq!(separated.size_hint(), (3, Some(3)));
    }

    #[test]
    fn state_round_trips() {
        let mut separated = intersperse(vec![1, 2, 3], 0);
        let _ = separated.next();
        let _ = separated.next();
        let (started, pending) = separated.state();
        assert!(started);
        assert_eq!(pending, Some(2));

        let mut other = intersperse(vec![1, 2, 3], 0);
        other.set_state(started, pending).unwrap();
        assert_eq!(other.next(), Some(2));
    }

    #[test]
    fn unstarted_state_with_pending_is_rejected() {
        let mut separated = intersperse(vec![1], 0);
        assert!(matches!(
            separated.set_state(false, Some(9)),
            Err(Error::InvalidState(_))
        ));
        // Unchanged after the rejection.
        assert_eq!(separated.next(), Some(1));
    }
}
