//! Partial application with positional placeholders.
//!
//! This module provides a runtime partial-application engine: a [`Partial`]
//! wraps a function together with a vector of argument slots, each either a
//! bound value or the [`Placeholder`], and an optional keyword map. Calling
//! the partial fills the placeholder slots, in order, from the call
//! arguments, appends any surplus, and overlays the call keywords over the
//! stored ones.
//!
//! Because the wrapped function receives its positional arguments as one
//! slice, the engine is value-homogeneous: every argument has the same type
//! `A`. This is the dynamic counterpart of the static [`partial!`](crate::partial!)
//! macro, which works with ordinary multi-argument functions at the cost of
//! fixing the slot pattern at compile time.
//!
//! # Layering
//!
//! Partials layer through [`Partial::bind`], which flattens instead of
//! nesting: the leading placeholders of the existing slots are substituted
//! by the incoming slots first, the remainder is appended, and keyword maps
//! merge with the incoming side winning. After any number of `bind` calls
//! the wrapped function is still the original one.
//!
//! # Examples
//!
//! ```rust
//! use iterforge::partial::{Partial, Slot};
//!
//! // partial(partial(f, _, b), a)(c, d) == f(a, b, c, d)
//! let concat = Partial::from_positional(
//!     |arguments: &[i32]| arguments.to_vec(),
//!     vec![Slot::Placeholder, Slot::Bound(2)],
//! );
//! let layered = concat.bind(vec![Slot::Bound(1)], Default::default());
//! assert_eq!(layered.call(vec![3, 4], Default::default()).unwrap(), vec![1, 2, 3, 4]);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::error::Error;

/// The placeholder sentinel marking an unfilled positional slot.
///
/// A unit type: every placeholder is equal to every other, and its display
/// form is `_`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Placeholder;

impl fmt::Display for Placeholder {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("_")
    }
}

/// One positional argument slot of a [`Partial`].
#[derive(Clone, Debug, PartialEq)]
pub enum Slot<A> {
    /// A value already supplied at construction time.
    Bound(A),
    /// A slot to be filled at call time.
    Placeholder,
}

impl<A> Slot<A> {
    /// Whether this slot is the placeholder.
    #[inline]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

/// Keyword arguments: name-to-value map, homogeneous with the positional
/// value type.
pub type Keywords<A> = BTreeMap<String, A>;

/// A function with bound positional slots (possibly containing placeholders)
/// and stored keyword arguments.
///
/// # Type Parameters
///
/// * `A` - The argument value type.
/// * `R` - The wrapped function's return type.
pub struct Partial<A, R> {
    function: Rc<dyn Fn(&[A], &Keywords<A>) -> R>,
    slots: Vec<Slot<A>>,
    keywords: Keywords<A>,
    /// Indices of placeholder slots, strictly increasing. Cached at
    /// construction and kept consistent with `slots`.
    placeholder_positions: Vec<usize>,
}

impl<A, R> Clone for Partial<A, R>
where
    A: Clone,
{
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            slots: self.slots.clone(),
            keywords: self.keywords.clone(),
            placeholder_positions: self.placeholder_positions.clone(),
        }
    }
}

impl<A, R> fmt::Debug for Partial<A, R>
where
    A: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Partial")
            .field("slots", &self.slots)
            .field("keywords", &self.keywords)
            .field("placeholder_positions", &self.placeholder_positions)
            .finish_non_exhaustive()
    }
}

fn placeholder_positions<A>(slots: &[Slot<A>]) -> Vec<usize> {
    slots
        .iter()
        .enumerate()
        .filter_map(|(index, slot)| slot.is_placeholder().then_some(index))
        .collect()
}

impl<A, R> Partial<A, R> {
    /// Wraps `function` with the given slots and keywords.
    pub fn new(
        function: impl Fn(&[A], &Keywords<A>) -> R + 'static,
        slots: Vec<Slot<A>>,
        keywords: Keywords<A>,
    ) -> Self {
        let positions = placeholder_positions(&slots);
        Self {
            function: Rc::new(function),
            slots,
            keywords,
            placeholder_positions: positions,
        }
    }

    /// Wraps a function that takes positional arguments only.
    pub fn from_positional(
        function: impl Fn(&[A]) -> R + 'static,
        slots: Vec<Slot<A>>,
    ) -> Self {
        Self::new(
            move |arguments, _keywords| function(arguments),
            slots,
            Keywords::new(),
        )
    }

    /// Layers further slots and keywords onto this partial, flattening.
    ///
    /// The first `min(deficit, incoming.len())` incoming slots substitute
    /// the existing placeholders in position order (an incoming placeholder
    /// keeps the slot open); remaining incoming slots append to the tail.
    /// Incoming keywords win on name collision. The wrapped function is
    /// unchanged, so layering never nests.
    #[must_use]
    pub fn bind(mut self, incoming: Vec<Slot<A>>, incoming_keywords: Keywords<A>) -> Self {
        let mut incoming = incoming.into_iter();
        let positions = std::mem::take(&mut self.placeholder_positions);
        for position in positions {
            match incoming.next() {
                Some(slot) => self.slots[position] = slot,
                None => break,
            }
        }
        self.slots.extend(incoming);
        self.keywords.extend(incoming_keywords);
        self.placeholder_positions = placeholder_positions(&self.slots);
        self
    }

    /// Number of placeholder slots still unfilled: the arity deficit this
    /// partial exposes.
    #[inline]
    pub fn deficit(&self) -> usize {
        self.placeholder_positions.len()
    }

    /// The current argument slots.
    #[inline]
    pub fn slots(&self) -> &[Slot<A>] {
        &self.slots
    }

    /// The stored keyword arguments.
    #[inline]
    pub fn keywords(&self) -> &Keywords<A> {
        &self.keywords
    }

    /// The cached placeholder indices, strictly increasing.
    #[inline]
    pub fn placeholder_positions(&self) -> &[usize] {
        &self.placeholder_positions
    }
}

impl<A: Clone, R> Partial<A, R> {
    /// Calls the wrapped function.
    ///
    /// Builds the final positional vector by copying the bound slots,
    /// writing `arguments[..deficit]` into the placeholder slots in order
    /// and appending the surplus; the final keyword map is the stored map
    /// overlaid with `keywords` (caller wins).
    ///
    /// # Errors
    ///
    /// [`Error::Value`] when fewer arguments are supplied than there are
    /// placeholders.
    pub fn call(&self, arguments: Vec<A>, keywords: Keywords<A>) -> Result<R, Error> {
        let deficit = self.deficit();
        if arguments.len() < deficit {
            return Err(Error::value(format!(
                "expected at least {deficit} argument(s) to fill the placeholders, got {}",
                arguments.len()
            )));
        }

        let mut supplied = arguments.into_iter();
        let mut final_arguments = Vec::with_capacity(self.slots.len());
        for slot in &self.slots {
            match slot {
                Slot::Bound(value) => final_arguments.push(value.clone()),
                Slot::Placeholder => {
                    // Deficit check above guarantees availability.
                    if let Some(value) = supplied.next() {
                        final_arguments.push(value);
                    }
                }
            }
        }
        final_arguments.extend(supplied);

        let mut final_keywords = self.keywords.clone();
        final_keywords.extend(keywords);

        Ok((self.function)(&final_arguments, &final_keywords))
    }

    /// Calls the wrapped function with positional arguments only.
    ///
    /// # Errors
    ///
    /// Same as [`Partial::call`].
    #[inline]
    pub fn call_positional(&self, arguments: Vec<A>) -> Result<R, Error> {
        self.call(arguments, Keywords::new())
    }
}

/// Builds a [`Partial`] from a slice-convention function and a slot pattern.
///
/// Use `__` (double underscore) for placeholder slots; any other token is a
/// bound value. Compound value expressions must be parenthesized.
///
/// # Examples
///
/// ```rust
/// use iterforge::partial;
///
/// let sum = partial!(|arguments: &[i32]| arguments.iter().sum::<i32>(), __, 10, __);
/// assert_eq!(sum.call_positional(vec![1, 2]).unwrap(), 13);
/// assert_eq!(sum.deficit(), 0);
/// ```
#[macro_export]
macro_rules! partial {
    ($function:expr $(, $slot:tt)* $(,)?) => {
        $crate::partial::Partial::from_positional(
            $function,
            vec![$($crate::partial_slot!($slot)),*],
        )
    };
}

/// Internal helper for [`partial!`]: translates one slot token.
#[doc(hidden)]
#[macro_export]
macro_rules! partial_slot {
    (__) => {
        $crate::partial::Slot::Placeholder
    };
    ($value:expr) => {
        $crate::partial::Slot::Bound($value)
    };
}

// Rc-backed, so single-threaded only.
static_assertions::assert_not_impl_any!(Partial<i32, i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(arguments: &[i32]) -> Vec<i32> {
        arguments.to_vec()
    }

    #[test]
    fn placeholders_fill_in_position_order() {
        let partial = Partial::from_positional(
            collect,
            vec![Slot::Placeholder, Slot::Bound(2), Slot::Placeholder],
        );
        assert_eq!(partial.deficit(), 2);
        assert_eq!(partial.placeholder_positions(), &[0, 2]);
        assert_eq!(
            partial.call_positional(vec![1, 3, 4]).unwrap(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn too_few_arguments_is_an_error() {
        let partial = Partial::from_positional(
            collect,
            vec![Slot::Placeholder, Slot::Placeholder],
        );
        assert!(matches!(
            partial.call_positional(vec![1]),
            Err(Error::Value(_))
        ));
    }

    #[test]
    fn bind_substitutes_then_appends() {
        let partial = Partial::from_positional(
            collect,
            vec![Slot::Placeholder, Slot::Bound(2)],
        );
        let layered = partial.bind(
            vec![Slot::Bound(1), Slot::Bound(3)],
            Keywords::new(),
        );
        assert_eq!(layered.deficit(), 0);
        assert_eq!(layered.call_positional(vec![]).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn bind_with_incoming_placeholder_keeps_the_slot_open() {
        let partial = Partial::from_positional(
            collect,
            vec![Slot::Placeholder, Slot::Bound(2)],
        );
        let layered = partial.bind(vec![Slot::Placeholder], Keywords::new());
        assert_eq!(layered.deficit(), 1);
        assert_eq!(layered.call_positional(vec![1]).unwrap(), vec![1, 2]);
    }

    #[test]
    fn incoming_keywords_win_on_collision() {
        let partial = Partial::new(
            |_arguments: &[i32], keywords: &Keywords<i32>| keywords.clone(),
            vec![],
            Keywords::from([(String::from("width"), 1), (String::from("height"), 2)]),
        );
        let layered = partial.bind(vec![], Keywords::from([(String::from("width"), 9)]));
        let result = layered.call_positional(vec![]).unwrap();
        assert_eq!(result.get("width"), Some(&9));
        assert_eq!(result.get("height"), Some(&2));
    }

    #[test]
    fn call_keywords_overlay_stored_ones() {
        let partial = Partial::new(
            |_arguments: &[i32], keywords: &Keywords<i32>| keywords.clone(),
            vec![],
            Keywords::from([(String::from("depth"), 1)]),
        );
        let result = partial
            .call(vec![], Keywords::from([(String::from("depth"), 5)]))
            .unwrap();
        assert_eq!(result.get("depth"), Some(&5));
        // The stored map is untouched.
        assert_eq!(partial.keywords().get("depth"), Some(&1));
    }

    #[test]
    fn placeholder_displays_as_underscore() {
        assert_eq!(Placeholder.to_string(), "_");
    }

    #[test]
    fn macro_builds_the_expected_slot_pattern() {
        let sum = partial!(|arguments: &[i32]| arguments.iter().sum::<i32>(), 1, __, (2 + 3));
        assert_eq!(sum.deficit(), 1);
        assert_eq!(sum.call_positional(vec![10]).unwrap(), 16);
    }
}
