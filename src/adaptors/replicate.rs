//! Item repetition.

use crate::error::Error;

/// An iterator yielding each source item a fixed number of times.
///
/// See [`replicate`].
#[derive(Debug, Clone)]
pub struct Replicate<I: Iterator> {
    source: I,
    count: usize,
    current: Option<I::Item>,
    /// Copies of `current` already yielded; always less than `count`
    /// between calls.
    emitted: usize,
}

/// Yields every item of `source` exactly `count` times before advancing.
///
/// # Errors
///
/// [`Error::Value`] when `count` is less than 2: replication by 1 is the
/// source itself and by 0 is empty.
///
/// # Examples
///
/// ```rust
/// use iterforge::adaptors::replicate;
///
/// let repeated: Vec<i32> = replicate(vec![1, 2], 3).unwrap().collect();
/// assert_eq!(repeated, vec![1, 1, 1, 2, 2, 2]);
/// ```
pub fn replicate<I>(source: I, count: usize) -> Result<Replicate<I::IntoIter>, Error>
where
    I: IntoIterator,
    I::Item: Clone,
{
    if count < 2 {
        return Err(Error::value("replication count must be at least 2"));
    }
    Ok(Replicate {
        source: source.into_iter(),
        count,
        current: None,
        emitted: 0,
    })
}

impl<I> Replicate<I>
where
    I: Iterator,
    I::Item: Clone,
{
    /// Snapshot of the internal cursor: `(current, emitted)`.
    pub fn state(&self) -> (Option<I::Item>, usize) {
        (self.current.clone(), self.emitted)
    }

    /// Restores the internal cursor.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`] when `emitted` exceeds the replication count,
    /// or when an emission count is supplied without a current item. The
    /// instance is unchanged on error.
    pub fn set_state(&mut self, current: Option<I::Item>, emitted: usize) -> Result<(), Error> {
        if emitted > self.count {
            return Err(Error::invalid_state(
                "emitted count exceeds the replication count",
            ));
        }
        if current.is_none() && emitted != 0 {
            return Err(Error::invalid_state(
                "an emitted count requires a current item",
            ));
        }
        self.current = current;
        self.emitted = emitted;
        Ok(())
    }
}

impl<I> Iterator for Replicate<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() || self.emitted >= self.count {
            self.current = Some(self.source.next()?);
            self.emitted = 0;
        }
        self.emitted += 1;
        let item = self.current.as_ref().cloned();
        if self.emitted == self.count {
            self.current = None;
            self.emitted = 0;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining_for_current = if self.current.is_some() {
            self.count - self.emitted
        } else {
            0
        };
        let (lower, upper) = self.source.size_hint();
        let expand = |count: usize| {
            count
                .checked_mul(self.count)
                .and_then(|total| total.checked_add(remaining_for_current))
        };
        (
            expand(lower).unwrap_or(usize::MAX),
            upper.and_then(expand),
        )
    }
}

impl<I> ExactSizeIterator for Replicate<I>
where
    I: ExactSizeIterator,
    I::Item: Clone,
{
}

impl<I> std::iter::FusedIterator for Replicate<I>
where
    I: std::iter::FusedIterator,
    I::Item: Clone,
{
}
