//! Observation without transformation.

use crate::error::Error;

/// A pass-through iterator invoking a callback on the items flowing by.
///
/// The callback receives items one at a time or in batches of a configured
/// size; its return value is discarded and the item stream is unchanged.
/// See [`sideeffects`] and [`sideeffects_every`].
#[derive(Debug, Clone)]
pub struct SideEffects<I: Iterator, F> {
    source: I,
    callback: F,
    /// Batch size; 0 means per-item invocation.
    batch: usize,
    buffer: Vec<I::Item>,
    flushed: bool,
}

/// Invokes `callback` on every item of `source`, passing items through
/// unchanged.
///
/// # Examples
///
/// ```rust
/// use iterforge::adaptors::sideeffects;
///
/// let mut log = Vec::new();
/// let items: Vec<i32> = sideeffects(vec![1, 2, 3], |item: &i32| log.push(*item)).collect();
/// assert_eq!(items, vec![1, 2, 3]);
/// assert_eq!(log, vec![1, 2, 3]);
/// ```
pub fn sideeffects<I, F>(
    source: I,
    mut callback: F,
) -> SideEffects<I::IntoIter, impl FnMut(&[I::Item])>
where
    I: IntoIterator,
    F: FnMut(&I::Item),
{
    SideEffects {
        source: source.into_iter(),
        callback: move |items: &[I::Item]| callback(&items[0]),
        batch: 0,
        buffer: Vec::new(),
        flushed: false,
    }
}

/// Invokes `callback` with every `batch` consecutive items of `source`; a
/// final partial batch is delivered once at exhaustion.
///
/// # Errors
///
/// [`Error::Value`] when `batch` is zero; use [`sideeffects`] for per-item
/// invocation.
///
/// # Examples
///
/// ```rust
/// use iterforge::adaptors::sideeffects_every;
///
/// let mut batches = Vec::new();
/// let items: Vec<i32> = sideeffects_every(vec![1, 2, 3, 4, 5], 2, |batch: &[i32]| {
///     batches.push(batch.to_vec());
/// })
/// .unwrap()
/// .collect();
/// assert_eq!(items, vec![1, 2, 3, 4, 5]);
/// assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub fn sideeffects_every<I, F>(
    source: I,
    batch: usize,
    callback: F,
) -> Result<SideEffects<I::IntoIter, F>, Error>
where
    I: IntoIterator,
    F: FnMut(&[I::Item]),
{
    if batch == 0 {
        return Err(Error::value(
            "batch size must be at least 1; use sideeffects for per-item callbacks",
        ));
    }
    Ok(SideEffects {
        source: source.into_iter(),
        callback,
        batch,
        buffer: Vec::with_capacity(batch),
        flushed: false,
    })
}

impl<I, F> SideEffects<I, F>
where
    I: Iterator,
    I::Item: Clone,
{
    /// Copy of the items collected towards the next batch.
    pub fn collected(&self) -> Vec<I::Item> {
        self.buffer.clone()
    }

    /// Restores the partial batch.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`] when the buffer does not fit the configured
    /// batch size (per-item mode admits only an empty buffer). The instance
    /// is unchanged on error.
    pub fn set_collected(&mut self, buffer: Vec<I::Item>) -> Result<(), Error> {
        if self.batch == 0 && !buffer.is_empty() {
            return Err(Error::invalid_state(
                "per-item mode does not buffer items",
            ));
        }
        if self.batch > 0 && buffer.len() >= self.batch {
            return Err(Error::invalid_state(
                "buffered item count must be below the batch size",
            ));
        }
        self.buffer = buffer;
        Ok(())
    }
}

impl<I, F> Iterator for SideEffects<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(&[I::Item]),
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.source.next() {
            None => {
                if !self.flushed {
                    self.flushed = true;
                    if !self.buffer.is_empty() {
                        (self.callback)(&self.buffer);
                        self.buffer.clear();
                    }
                }
                None
            }
            Some(item) => {
                if self.batch == 0 {
                    (self.callback)(std::slice::from_ref(&item));
                } else {
                    self.buffer.push(item.clone());
                    if self.buffer.len() == self.batch {
                        (self.callback)(&self.buffer);
                        self.buffer.clear();
                    }
                }
                Some(item)
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<I, F> ExactSizeIterator for SideEffects<I, F>
where
    I: ExactSizeIterator,
    I::Item: Clone,
    F: FnMut(&[I::Item]),
{
}
