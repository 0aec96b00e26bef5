//! Function-driven sources.
//!
//! These iterators produce values by calling a function rather than by
//! transforming an upstream iterator: [`tabulate`] applies a function to a
//! running counter, [`applyfunc`] repeatedly applies a function to its own
//! previous result, and [`iter_except`] calls a fallible function until an
//! expected error signals exhaustion.

/// An infinite iterator applying a function to consecutive integers.
///
/// See [`tabulate`].
#[derive(Debug, Clone)]
pub struct Tabulate<F> {
    function: F,
    position: i64,
}

/// Yields `function(start)`, `function(start + 1)`, … without end.
///
/// # Examples
///
/// ```rust
/// use iterforge::adaptors::tabulate;
///
/// let squares: Vec<i64> = tabulate(|n| n * n, 3).take(3).collect();
/// assert_eq!(squares, vec![9, 16, 25]);
/// ```
pub fn tabulate<F, T>(function: F, start: i64) -> Tabulate<F>
where
    F: FnMut(i64) -> T,
{
    Tabulate {
        function,
        position: start,
    }
}

impl<F, T> Iterator for Tabulate<F>
where
    F: FnMut(i64) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = (self.function)(self.position);
        self.position += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// An infinite iterator of repeated function application.
///
/// See [`applyfunc`].
#[derive(Debug, Clone)]
pub struct ApplyFunc<T, F> {
    function: F,
    value: T,
}

/// Yields `function(seed)`, `function(function(seed))`, … without end.
///
/// The seed itself is not yielded.
///
/// # Examples
///
/// ```rust
/// use iterforge::adaptors::applyfunc;
///
/// let doubled: Vec<i32> = applyfunc(|value: &i32| value * 2, 1).take(4).collect();
/// assert_eq!(doubled, vec![2, 4, 8, 16]);
/// ```
pub fn applyfunc<T, F>(function: F, seed: T) -> ApplyFunc<T, F>
where
    F: FnMut(&T) -> T,
{
    ApplyFunc {
        function,
        value: seed,
    }
}

impl<T, F> Iterator for ApplyFunc<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.value = (self.function)(&self.value);
        Some(self.value.clone())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// An iterator draining a fallible function until an expected error.
///
/// See [`iter_except`].
#[derive(Debug, Clone)]
pub struct IterExcept<F, G, S> {
    function: F,
    first: Option<G>,
    is_stop: S,
    done: bool,
}

/// Calls `function` repeatedly, yielding successful results.
///
/// An error matching `is_stop` ends the stream silently; this turns APIs
/// that signal exhaustion through an error (a queue's `pop`, a map's
/// `remove`) into iterators. Any other error is yielded once, after which
/// the stream ends. When `first` is supplied it is called once, before the
/// first `function` call (for example an initializing call).
///
/// # Examples
///
/// ```rust
/// use iterforge::adaptors::iter_except;
///
/// let mut stack = vec![1, 2, 3];
/// let drained: Vec<i32> = iter_except(
///     move || stack.pop().ok_or("empty"),
///     |error: &&str| *error == "empty",
///     None::<fn() -> Result<i32, &'static str>>,
/// )
/// .map(Result::unwrap)
/// .collect();
/// assert_eq!(drained, vec![3, 2, 1]);
/// ```
pub fn iter_except<T, E, F, G, S>(function: F, is_stop: S, first: Option<G>) -> IterExcept<F, G, S>
where
    F: FnMut() -> Result<T, E>,
    G: FnOnce() -> Result<T, E>,
    S: FnMut(&E) -> bool,
{
    IterExcept {
        function,
        first,
        is_stop,
        done: false,
    }
}

impl<T, E, F, G, S> Iterator for IterExcept<F, G, S>
where
    F: FnMut() -> Result<T, E>,
    G: FnOnce() -> Result<T, E>,
    S: FnMut(&E) -> bool,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let outcome = match self.first.take() {
            Some(first) => first(),
            None => (self.function)(),
        };
        match outcome {
            Ok(value) => Some(Ok(value)),
            Err(error) => {
                self.done = true;
                if (self.is_stop)(&error) {
                    None
                } else {
                    Some(Err(error))
                }
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done { (0, Some(0)) } else { (0, None) }
    }
}

impl<T, E, F, G, S> std::iter::FusedIterator for IterExcept<F, G, S>
where
    F: FnMut() -> Result<T, E>,
    G: FnOnce() -> Result<T, E>,
    S: FnMut(&E) -> bool,
{
}
