//! Fixed-width grouping.

use crate::error::Error;

/// An iterator collecting its source into groups of a fixed width.
///
/// The final, possibly incomplete group is yielded as-is by default, padded
/// when a fill value is configured, or dropped when truncating. See
/// [`grouper`].
#[derive(Debug, Clone)]
pub struct Grouper<I: Iterator> {
    source: I,
    width: usize,
    fill: Option<I::Item>,
    truncate: bool,
    done: bool,
}

/// Groups `source` into chunks of `width` items.
///
/// # Errors
///
/// [`Error::Value`] when `width` is zero.
///
/// # Examples
///
/// ```rust
/// use iterforge::adaptors::grouper;
///
/// let groups: Vec<Vec<char>> = grouper("ABCDEFG".chars(), 3)
///     .unwrap()
///     .with_fill('x')
///     .unwrap()
///     .collect();
/// assert_eq!(groups, vec![
///     vec!['A', 'B', 'C'],
///     vec!['D', 'E', 'F'],
///     vec!['G', 'x', 'x'],
/// ]);
/// ```
pub fn grouper<I>(source: I, width: usize) -> Result<Grouper<I::IntoIter>, Error>
where
    I: IntoIterator,
{
    if width == 0 {
        return Err(Error::value("group width must be at least 1"));
    }
    Ok(Grouper {
        source: source.into_iter(),
        width,
        fill: None,
        truncate: false,
        done: false,
    })
}

impl<I: Iterator> Grouper<I> {
    /// Pads an incomplete final group with clones of `fill`.
    ///
    /// # Errors
    ///
    /// [`Error::Value`] when truncation is already configured; the two
    /// final-group policies contradict each other.
    pub fn with_fill(mut self, fill: I::Item) -> Result<Self, Error> {
        if self.truncate {
            return Err(Error::value(
                "a fill value and truncation cannot be combined",
            ));
        }
        self.fill = Some(fill);
        Ok(self)
    }

    /// Drops an incomplete final group.
    ///
    /// # Errors
    ///
    /// [`Error::Value`] when a fill value is already configured.
    pub fn truncating(mut self) -> Result<Self, Error> {
        if self.fill.is_some() {
            return Err(Error::value(
                "a fill value and truncation cannot be combined",
            ));
        }
        self.truncate = true;
        Ok(self)
    }
}

impl<I> Iterator for Grouper<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut group = Vec::with_capacity(self.width);
        while group.len() < self.width {
            match self.source.next() {
                Some(item) => group.push(item),
                None => {
                    self.done = true;
                    if group.is_empty() || self.truncate {
                        return None;
                    }
                    if let Some(fill) = &self.fill {
                        group.resize(self.width, fill.clone());
                    }
                    return Some(group);
                }
            }
        }
        Some(group)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let complete = |count: usize| count / self.width;
        let rounded_up = |count: usize| count / self.width + usize::from(count % self.width != 0);
        let (lower, upper) = self.source.size_hint();
        if self.truncate {
            (complete(lower), upper.map(complete))
        } else {
            (rounded_up(lower), upper.map(rounded_up))
        }
    }
}

impl<I> ExactSizeIterator for Grouper<I>
where
    I: ExactSizeIterator,
    I::Item: Clone,
{
}

impl<I> std::iter::FusedIterator for Grouper<I>
where
    I: Iterator,
    I::Item: Clone,
{
}
