//! Cyclic interleaving.

use crate::error::Error;

/// An iterator cycling through its sources one item at a time.
///
/// See [`roundrobin`].
#[derive(Debug, Clone)]
pub struct RoundRobin<I> {
    sources: Vec<I>,
    /// Source to pull from next; always in range while sources remain.
    active_index: usize,
}

/// Interleaves `sources` cyclically, one item from each in turn.
///
/// An exhausted source drops out of the rotation; the remaining sources
/// keep cycling until all are empty.
///
/// # Examples
///
/// ```rust
/// use iterforge::adaptors::roundrobin;
///
/// let interleaved: Vec<i32> = roundrobin(vec![
///     vec![1, 4].into_iter(),
///     vec![2].into_iter(),
///     vec![3, 5, 6].into_iter(),
/// ])
/// .collect();
/// assert_eq!(interleaved, vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn roundrobin<S, I>(sources: S) -> RoundRobin<I>
where
    S: IntoIterator<Item = I>,
    I: Iterator,
{
    RoundRobin {
        sources: sources.into_iter().collect(),
        active_index: 0,
    }
}

impl<I: Iterator> RoundRobin<I> {
    /// Number of sources still in the rotation.
    #[inline]
    pub fn active_count(&self) -> usize {
        self.sources.len()
    }

    /// Index of the source the next item will be pulled from.
    #[inline]
    pub fn current_index(&self) -> usize {
        self.active_index
    }

    /// Repositions the rotation at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`] when `index` is not a valid source position.
    /// Zero is always accepted, including on an empty rotation. The
    /// instance is unchanged on error.
    pub fn set_current_index(&mut self, index: usize) -> Result<(), Error> {
        if index != 0 && index >= self.sources.len() {
            return Err(Error::invalid_state(format!(
                "index {index} is out of range for {} source(s)",
                self.sources.len()
            )));
        }
        self.active_index = index;
        Ok(())
    }
}

impl<I: Iterator> Iterator for RoundRobin<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.sources.is_empty() {
            if self.active_index >= self.sources.len() {
                self.active_index = 0;
            }
            match self.sources[self.active_index].next() {
                Some(item) => {
                    self.active_index += 1;
                    if self.active_index == self.sources.len() {
                        self.active_index = 0;
                    }
                    return Some(item);
                }
                // Removal shifts the following sources left, so the index
                // already points at the next one.
                None => {
                    self.sources.remove(self.active_index);
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let mut lower = 0_usize;
        let mut upper = Some(0_usize);
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

impl<I: std::iter::FusedIterator> std::iter::FusedIterator for RoundRobin<I> {}
