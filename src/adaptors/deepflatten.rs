//! Depth-controlled flattening of nested sequences.

use crate::error::Error;

/// Default nesting limit guarding against degenerate inputs.
pub const DEFAULT_RECURSION_LIMIT: usize = 256;

/// An arbitrarily nested sequence of `T` values.
///
/// This is the input shape of [`deepflatten`]: a tree whose internal nodes
/// are lists and whose leaves carry values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T> {
    /// A single value.
    Leaf(T),
    /// A list of further nested values.
    List(Vec<Nested<T>>),
}

impl<T> From<T> for Nested<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::Leaf(value)
    }
}

impl<T> Nested<T> {
    /// Wraps a list of nested values.
    #[inline]
    pub fn list(values: impl IntoIterator<Item = Self>) -> Self {
        Self::List(values.into_iter().collect())
    }
}

/// An iterator flattening a nested sequence up to a depth bound.
///
/// Items are yielded as [`Nested`] values: with an unbounded depth every
/// item is a [`Nested::Leaf`]; with a depth bound, subtrees that may not be
/// descended into are yielded whole as [`Nested::List`].
///
/// See [`deepflatten`].
#[derive(Debug, Clone)]
pub struct DeepFlatten<T> {
    /// Active iterators, outermost first. The stack depth minus one is the
    /// number of levels descended so far.
    stack: Vec<std::vec::IntoIter<Nested<T>>>,
    depth: Option<usize>,
    recursion_limit: usize,
    failed: bool,
}

/// Flattens `values`, descending at most `depth` levels (`None` for
/// unbounded).
///
/// # Examples
///
/// ```rust
/// use iterforge::adaptors::{Nested, deepflatten};
///
/// let nested = vec![
///     Nested::Leaf(1),
///     Nested::list([Nested::Leaf(1), Nested::Leaf(2)]),
///     Nested::list([Nested::list([Nested::Leaf(1), Nested::Leaf(2)])]),
/// ];
///
/// let flat: Vec<_> = deepflatten(nested.clone(), None)
///     .map(Result::unwrap)
///     .collect();
/// assert_eq!(flat.len(), 5);
///
/// // A depth bound leaves deeper subtrees intact.
/// let shallow: Vec<_> = deepflatten(nested, Some(1))
///     .map(Result::unwrap)
///     .collect();
/// assert_eq!(
///     shallow.last(),
///     Some(&Nested::list([Nested::Leaf(1), Nested::Leaf(2)]))
/// );
/// ```
pub fn deepflatten<T>(values: Vec<Nested<T>>, depth: Option<usize>) -> DeepFlatten<T> {
    DeepFlatten {
        stack: vec![values.into_iter()],
        depth,
        recursion_limit: DEFAULT_RECURSION_LIMIT,
        failed: false,
    }
}

impl<T> DeepFlatten<T> {
    /// Overrides the nesting limit.
    #[must_use]
    pub fn recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Number of levels descended below the outermost list.
    #[inline]
    pub fn current_depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }
}

impl<T> Iterator for DeepFlatten<T> {
    type Item = Result<Nested<T>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let active = self.stack.last_mut()?;
            let Some(item) = active.next() else {
                let _ = self.stack.pop();
                if self.stack.is_empty() {
                    return None;
                }
                continue;
            };
            match item {
                Nested::Leaf(value) => return Some(Ok(Nested::Leaf(value))),
                Nested::List(children) => {
                    let at_limit = self
                        .depth
                        .is_some_and(|depth| self.current_depth() >= depth);
                    if at_limit {
                        return Some(Ok(Nested::List(children)));
                    }
                    if self.stack.len() >= self.recursion_limit {
                        self.failed = true;
                        return Some(Err(Error::RecursionDepth {
                            limit: self.recursion_limit,
                        }));
                    }
                    self.stack.push(children.into_iter());
                }
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}

impl<T> std::iter::FusedIterator for DeepFlatten<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(value: i32) -> Nested<i32> {
        Nested::Leaf(value)
    }

    #[test]
    fn unbounded_flattening_yields_only_leaves() {
        let nested = vec![
            leaf(1),
            Nested::list([leaf(2), Nested::list([leaf(3)])]),
        ];
        let flat: Vec<_> = deepflatten(nested, None).map(Result::unwrap).collect();
        assert_eq!(flat, vec![leaf(1), leaf(2), leaf(3)]);
    }

    #[test]
    fn depth_one_keeps_deeper_subtrees_whole() {
        let nested = vec![
            leaf(1),
            Nested::list([leaf(1), leaf(2)]),
            Nested::list([Nested::list([leaf(1), leaf(2)])]),
            Nested::list([Nested::list([Nested::list([leaf(1), leaf(2)])])]),
        ];
        let flat: Vec<_> = deepflatten(nested, Some(1)).map(Result::unwrap).collect();
        assert_eq!(
            flat,
            vec![
                leaf(1),
                leaf(1),
                leaf(2),
                Nested::list([leaf(1), leaf(2)]),
                Nested::list([Nested::list([leaf(1), leaf(2)])]),
            ]
        );
    }

    #[test]
    fn depth_zero_passes_everything_through() {
        let nested = vec![leaf(1), Nested::list([leaf(2)])];
        let flat: Vec<_> = deepflatten(nested.clone(), Some(0))
            .map(Result::unwrap)
            .collect();
        assert_eq!(flat, nested);
    }

    #[test]
    fn exceeding_the_recursion_limit_fails_once_then_fuses() {
        let deep = Nested::list([Nested::list([Nested::list([leaf(1)])])]);
        let mut flattened = deepflatten(vec![deep], None).recursion_limit(2);
        assert!(matches!(
            flattened.next(),
            Some(Err(Error::RecursionDepth { limit: 2 }))
        ));
        assert!(flattened.next().is_none());
    }

    #[test]
    fn empty_lists_are_skipped() {
        let nested = vec![
            Nested::List(Vec::new()),
            leaf(5),
            Nested::list([Nested::List(Vec::new())]),
        ];
        let flat: Vec<_> = deepflatten(nested, None).map(Result::unwrap).collect();
        assert_eq!(flat, vec![leaf(5)]);
    }
}
