//! Bound filtering and saturation.

/// An iterator restricting its items to a `[low, high]` band.
///
/// Out-of-band items are either dropped (the default) or replaced by the
/// violated bound. With `inclusive` set, items equal to a bound count as out
/// of band. See [`clamp`].
#[derive(Debug, Clone)]
pub struct Clamp<I: Iterator> {
    source: I,
    low: Option<I::Item>,
    high: Option<I::Item>,
    inclusive: bool,
    remove: bool,
}

/// Restricts `source` to items within `low..=high`.
///
/// Either bound may be absent. By default out-of-band items are removed;
/// [`Clamp::saturating`] emits the violated bound instead, and
/// [`Clamp::exclusive_bounds`] additionally rejects items equal to a bound.
///
/// # Examples
///
/// ```rust
/// use iterforge::adaptors::clamp;
///
/// let inside: Vec<i32> = clamp(vec![1, 5, 9, 3, 12], Some(2), Some(10)).collect();
/// assert_eq!(inside, vec![5, 9, 3]);
///
/// let saturated: Vec<i32> = clamp(vec![1, 5, 12], Some(2), Some(10))
///     .saturating()
///     .collect();
/// assert_eq!(saturated, vec![2, 5, 10]);
/// ```
pub fn clamp<I>(source: I, low: Option<I::Item>, high: Option<I::Item>) -> Clamp<I::IntoIter>
where
    I: IntoIterator,
    I::Item: PartialOrd + Clone,
{
    Clamp {
        source: source.into_iter(),
        low,
        high,
        inclusive: false,
        remove: true,
    }
}

impl<I: Iterator> Clamp<I> {
    /// Replaces out-of-band items by the violated bound instead of dropping
    /// them.
    #[must_use]
    pub fn saturating(mut self) -> Self {
        self.remove = false;
        self
    }

    /// Treats items equal to a bound as out of band.
    #[must_use]
    pub fn exclusive_bounds(mut self) -> Self {
        self.inclusive = true;
        self
    }
}

impl<I> Iterator for Clamp<I>
where
    I: Iterator,
    I::Item: PartialOrd + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.source.next()?;
            if let Some(low) = &self.low {
                let below = if self.inclusive {
                    item <= *low
                } else {
                    item < *low
                };
                if below {
                    if self.remove {
                        continue;
                    }
                    return Some(low.clone());
                }
            }
            if let Some(high) = &self.high {
                let above = if self.inclusive {
                    item >= *high
                } else {
                    item > *high
                };
                if above {
                    if self.remove {
                        continue;
                    }
                    return Some(high.clone());
                }
            }
            return Some(item);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        if !self.remove || (self.low.is_none() && self.high.is_none()) {
            // Pass-through count: every item produces exactly one output.
            (lower, upper)
        } else {
            (0, upper)
        }
    }
}

impl<I> std::iter::FusedIterator for Clamp<I>
where
    I: std::iter::FusedIterator,
    I::Item: PartialOrd + Clone,
{
}
