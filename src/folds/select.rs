//! Single-item selection.

use std::collections::VecDeque;

use crate::error::Error;

/// The sole item of `source`.
///
/// # Errors
///
/// [`Error::Value`] when the source is empty or holds more than one item;
/// the message distinguishes the two cases. At most two items are pulled.
///
/// # Examples
///
/// ```rust
/// use iterforge::folds::one;
///
/// assert_eq!(one(vec![42]), Ok(42));
/// assert!(one(vec![1, 2]).is_err());
/// assert!(one(Vec::<i32>::new()).is_err());
/// ```
pub fn one<I: IntoIterator>(source: I) -> Result<I::Item, Error> {
    let mut items = source.into_iter();
    let first = items
        .next()
        .ok_or_else(|| Error::value("expected exactly one item, the source was empty"))?;
    if items.next().is_some() {
        return Err(Error::value(
            "expected exactly one item, the source had more",
        ));
    }
    Ok(first)
}

/// What an [`Nth`] search reports back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found<T> {
    /// The selected item (the default).
    Item(T),
    /// The selected item's position in the source.
    Index(usize),
    /// The predicate's verdict on the selected item.
    Predicate(bool),
}

impl<T> Found<T> {
    /// The item, when the search reported one.
    #[inline]
    pub fn into_item(self) -> Option<T> {
        match self {
            Self::Item(item) => Some(item),
            Self::Index(_) | Self::Predicate(_) => None,
        }
    }
}

/// A reusable n-th item search.
///
/// Positions count from zero. [`Nth::from_end`] counts backwards instead,
/// buffering only the `position + 1` most recent candidates. With
/// [`Nth::find_by`] the search selects the n-th item the predicate accepts;
/// [`Nth::return_index`] and [`Nth::return_predicate`] change what is
/// reported about it.
///
/// # Examples
///
/// ```rust
/// use iterforge::folds::{Found, Nth};
///
/// let second = Nth::new(1);
/// assert_eq!(second.find(vec![10, 20, 30]), Ok(Found::Item(20)));
///
/// let last = Nth::from_end(0);
/// assert_eq!(last.find(vec![10, 20, 30]), Ok(Found::Item(30)));
///
/// let second_even = Nth::new(1).return_index();
/// assert_eq!(
///     second_even.find_by(vec![1, 2, 3, 4], |value| value % 2 == 0),
///     Ok(Found::Index(3))
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Nth {
    position: usize,
    from_end: bool,
    truthy: bool,
    return_index: bool,
    return_predicate: bool,
}

impl Nth {
    /// A search for the item at `position`, counting from the front.
    #[inline]
    pub fn new(position: usize) -> Self {
        Self {
            position,
            from_end: false,
            truthy: true,
            return_index: false,
            return_predicate: false,
        }
    }

    /// A search for the item at `position`, counting from the back;
    /// zero selects the last item.
    #[inline]
    pub fn from_end(position: usize) -> Self {
        Self {
            from_end: true,
            ..Self::new(position)
        }
    }

    /// Selects items the predicate rejects instead of the ones it accepts.
    ///
    /// Only meaningful together with [`Nth::find_by`]; the predicate-less
    /// searches ignore it.
    #[must_use]
    pub fn falsy(mut self) -> Self {
        self.truthy = false;
        self
    }

    /// Reports the selected item's source position instead of the item.
    #[must_use]
    pub fn return_index(mut self) -> Self {
        self.return_index = true;
        self
    }

    /// Reports the predicate's verdict instead of the item.
    ///
    /// Requires a predicate search and cannot be combined with
    /// [`Nth::return_index`].
    #[must_use]
    pub fn return_predicate(mut self) -> Self {
        self.return_predicate = true;
        self
    }

    /// Finds the n-th item.
    ///
    /// # Errors
    ///
    /// [`Error::Index`] when the source ends first, [`Error::Value`] when
    /// the reporting flags are contradictory.
    pub fn find<I: IntoIterator>(&self, source: I) -> Result<Found<I::Item>, Error> {
        self.check_flags(false)?;
        // Without a predicate every item qualifies; the truthy flag only
        // steers predicate searches.
        Self { truthy: true, ..*self }.search(source, |_| true)
    }

    /// Finds the n-th item, falling back to `default` on a short source.
    ///
    /// # Errors
    ///
    /// [`Error::Value`] when the reporting flags are contradictory.
    pub fn find_or<I: IntoIterator>(
        &self,
        source: I,
        default: I::Item,
    ) -> Result<Found<I::Item>, Error> {
        self.check_flags(false)?;
        match (Self { truthy: true, ..*self }).search(source, |_| true) {
            Err(Error::Index { .. }) => Ok(Found::Item(default)),
            outcome => outcome,
        }
    }

    /// Finds the n-th item the predicate accepts (or rejects, after
    /// [`Nth::falsy`]).
    ///
    /// # Errors
    ///
    /// [`Error::Index`] when fewer than `position + 1` items qualify,
    /// [`Error::Value`] when the reporting flags are contradictory.
    pub fn find_by<I, F>(&self, source: I, predicate: F) -> Result<Found<I::Item>, Error>
    where
        I: IntoIterator,
        F: FnMut(&I::Item) -> bool,
    {
        self.check_flags(true)?;
        self.search(source, predicate)
    }

    /// Like [`Nth::find_by`], falling back to `default` when too few items
    /// qualify.
    ///
    /// # Errors
    ///
    /// [`Error::Value`] when the reporting flags are contradictory.
    pub fn find_by_or<I, F>(
        &self,
        source: I,
        predicate: F,
        default: I::Item,
    ) -> Result<Found<I::Item>, Error>
    where
        I: IntoIterator,
        F: FnMut(&I::Item) -> bool,
    {
        self.check_flags(true)?;
        match self.search(source, predicate) {
            Err(Error::Index { .. }) => Ok(Found::Item(default)),
            outcome => outcome,
        }
    }

    fn check_flags(&self, has_predicate: bool) -> Result<(), Error> {
        if self.return_index && self.return_predicate {
            return Err(Error::value(
                "return_index and return_predicate are mutually exclusive",
            ));
        }
        if self.return_predicate && !has_predicate {
            return Err(Error::value(
                "return_predicate requires a predicate search",
            ));
        }
        Ok(())
    }

    fn report<T>(&self, item: T, index: usize) -> Found<T> {
        if self.return_index {
            Found::Index(index)
        } else if self.return_predicate {
            Found::Predicate(self.truthy)
        } else {
            Found::Item(item)
        }
    }

    fn search<I, F>(&self, source: I, mut predicate: F) -> Result<Found<I::Item>, Error>
    where
        I: IntoIterator,
        F: FnMut(&I::Item) -> bool,
    {
        let mut matched = 0_usize;
        if self.from_end {
            let mut recent: VecDeque<(usize, I::Item)> =
                VecDeque::with_capacity(self.position + 1);
            for (index, item) in source.into_iter().enumerate() {
                if predicate(&item) == self.truthy {
                    matched += 1;
                    if recent.len() > self.position {
                        recent.pop_front();
                    }
                    recent.push_back((index, item));
                }
            }
            if recent.len() <= self.position {
                return Err(Error::Index {
                    requested: self.position,
                    available: matched,
                });
            }
            let (index, item) = recent
                .pop_front()
                .ok_or_else(|| Error::invalid_state("candidate buffer drained unexpectedly"))?;
            return Ok(self.report(item, index));
        }
        for (index, item) in source.into_iter().enumerate() {
            if predicate(&item) == self.truthy {
                if matched == self.position {
                    return Ok(self.report(item, index));
                }
                matched += 1;
            }
        }
        Err(Error::Index {
            requested: self.position,
            available: matched,
        })
    }
}
