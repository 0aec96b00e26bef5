//! Overlapping windows.

use smallvec::SmallVec;

use crate::error::Error;

/// An iterator yielding overlapping windows over its source.
///
/// Each yielded window shares all but one item with its predecessor. See
/// [`successive`].
#[derive(Debug, Clone)]
pub struct Successive<I: Iterator> {
    source: I,
    width: usize,
    /// The most recent window; empty until the first yield.
    window: SmallVec<[I::Item; 4]>,
    done: bool,
}

/// Yields every `width`-item window of `source`, advancing one item at a
/// time.
///
/// A source shorter than `width` yields nothing.
///
/// # Errors
///
/// [`Error::Value`] when `width` is zero.
///
/// # Examples
///
/// ```rust
/// use iterforge::adaptors::successive;
///
/// let pairs: Vec<Vec<i32>> = successive(vec![1, 2, 3, 4], 2).unwrap().collect();
/// assert_eq!(pairs, vec![vec![1, 2], vec![2, 3], vec![3, 4]]);
/// ```
pub fn successive<I>(source: I, width: usize) -> Result<Successive<I::IntoIter>, Error>
where
    I: IntoIterator,
    I::Item: Clone,
{
    if width == 0 {
        return Err(Error::value("window width must be at least 1"));
    }
    Ok(Successive {
        source: source.into_iter(),
        width,
        window: SmallVec::new(),
        done: false,
    })
}

impl<I> Successive<I>
where
    I: Iterator,
    I::Item: Clone,
{
    /// Copy of the current window, or `None` before the first yield.
    pub fn window(&self) -> Option<Vec<I::Item>> {
        if self.window.is_empty() {
            None
        } else {
            Some(self.window.to_vec())
        }
    }

    /// Restores the rolling window.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`] when the window length does not equal the
    /// configured width. The instance is unchanged on error.
    pub fn set_window(&mut self, window: Vec<I::Item>) -> Result<(), Error> {
        if window.len() != self.width {
            return Err(Error::invalid_state(format!(
                "window length {} does not match the configured width {}",
                window.len(),
                self.width
            )));
        }
        self.window = SmallVec::from_vec(window);
        self.done = false;
        Ok(())
    }
}

impl<I> Iterator for Successive<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.window.is_empty() {
            for _ in 0..self.width {
                match self.source.next() {
                    Some(item) => self.window.push(item),
                    None => {
                        self.done = true;
                        self.window.clear();
                        return None;
                    }
                }
            }
        } else {
            match self.source.next() {
                Some(item) => {
                    let _ = self.window.remove(0);
                    self.window.push(item);
                }
                None => {
                    self.done = true;
                    return None;
                }
            }
        }
        Some(self.window.to_vec())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        if self.window.is_empty() {
            // First yield still has to fill the whole window.
            (
                lower.saturating_sub(self.width - 1),
                upper.map(|count| count.saturating_sub(self.width - 1)),
            )
        } else {
            // One yield per remaining source item.
            (lower, upper)
        }
    }
}

impl<I> ExactSizeIterator for Successive<I>
where
    I: ExactSizeIterator,
    I::Item: Clone,
{
}

impl<I> std::iter::FusedIterator for Successive<I>
where
    I: Iterator,
    I::Item: Clone,
{
}
