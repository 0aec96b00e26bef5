//! Hybrid membership oracle.
//!
//! This module provides [`Seen`], a containment-with-insertion container
//! that transparently degrades from hash-based to equality-based storage for
//! values that cannot be hashed. It backs `unique_everseen`, `duplicates`
//! and `all_distinct`, which must tolerate unhashable items (floats, and any
//! composite containing one) without giving up hash-speed lookups for
//! everything else.
//!
//! # Overview
//!
//! `Seen` keeps two stores:
//!
//! - hash buckets keyed by the [`TryHash`] token, holding every hashable
//!   value observed so far, with equality checks inside a bucket; and
//! - an equality list, scanned linearly, holding every unhashable value.
//!
//! A value is consulted against the hash buckets first; only when its hash
//! attempt fails does the equality list come into play. Hash failure is an
//! expected condition and never surfaces to the caller.
//!
//! # Invariants
//!
//! - No value is present in both stores.
//! - [`Seen::contains_add`] is idempotent: a second call with an equal value
//!   reports the value as already present and does not grow the container.
//!
//! # Complexity
//!
//! | Operation      | Hashable value | Unhashable value |
//! |----------------|----------------|------------------|
//! | `contains_add` | O(1) expected  | O(u) scan        |
//! | `contains`     | O(1) expected  | O(u) scan        |
//!
//! where `u` is the number of distinct unhashable values observed.
//!
//! # Examples
//!
//! ```rust
//! use iterforge::seen::Seen;
//!
//! let mut seen = Seen::new();
//! assert!(!seen.contains_add(1));
//! assert!(seen.contains_add(1));
//!
//! // Floats are unhashable and silently use the equality store.
//! let mut mixed: Seen<(i32, f64)> = Seen::new();
//! assert!(!mixed.contains_add((1, 0.5)));
//! assert!(mixed.contains_add((1, 0.5)));
//! assert_eq!(mixed.len(), 1);
//! ```

mod try_hash;

pub use try_hash::{NotHashable, TryHash, hash_token};

use rustc_hash::FxHashMap;

/// A membership oracle tolerating unhashable values.
///
/// See the [module documentation](self) for the storage strategy and
/// invariants.
///
/// # Type Parameters
///
/// * `T` - The element type. Must support equality comparison and attemptable
///   hashing via [`TryHash`].
#[derive(Debug, Clone)]
pub struct Seen<T> {
    /// Hashable values, bucketed by hash token. Collisions are resolved by
    /// the equality scan within the bucket.
    buckets: FxHashMap<u64, Vec<T>>,
    /// Number of values across all buckets.
    hashed_count: usize,
    /// Values whose hash attempt failed, in first-seen order.
    unhashable: Vec<T>,
}

impl<T> Default for Seen<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Seen<T> {
    /// Creates an empty oracle.
    #[inline]
    pub fn new() -> Self {
        Self {
            buckets: FxHashMap::default(),
            hashed_count: 0,
            unhashable: Vec::new(),
        }
    }

    /// Total number of distinct values observed, across both stores.
    #[inline]
    pub fn len(&self) -> usize {
        self.hashed_count + self.unhashable.len()
    }

    /// Whether no value has been observed yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: PartialEq + TryHash> Seen<T> {
    /// Tests membership and ensures `value` is contained afterwards.
    ///
    /// Returns `true` when an equal value was already present. Hash failure
    /// is handled internally by falling back to the equality store.
    pub fn contains_add(&mut self, value: T) -> bool {
        match hash_token(&value) {
            Some(token) => {
                let bucket = self.buckets.entry(token).or_default();
                if bucket.iter().any(|existing| *existing == value) {
                    true
                } else {
                    bucket.push(value);
                    self.hashed_count += 1;
                    false
                }
            }
            None => {
                if self.unhashable.iter().any(|existing| *existing == value) {
                    true
                } else {
                    self.unhashable.push(value);
                    false
                }
            }
        }
    }

    /// Tests membership without inserting.
    pub fn contains(&self, value: &T) -> bool {
        match hash_token(value) {
            Some(token) => self
                .buckets
                .get(&token)
                .is_some_and(|bucket| bucket.iter().any(|existing| existing == value)),
            None => self.unhashable.iter().any(|existing| existing == value),
        }
    }

    /// Iterates every observed value, hashable values first.
    ///
    /// The order within the hashed store is unspecified; the equality store
    /// preserves first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buckets
            .values()
            .flat_map(|bucket| bucket.iter())
            .chain(self.unhashable.iter())
    }
}

impl<T: PartialEq + TryHash> PartialEq for Seen<T> {
    /// Content equality across both stores, independent of insertion order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|value| other.contains(value))
    }
}

impl<T: PartialEq + TryHash> Extend<T> for Seen<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterable: I) {
        for value in iterable {
            let _ = self.contains_add(value);
        }
    }
}

impl<T: PartialEq + TryHash> FromIterator<T> for Seen<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        let mut seen = Self::new();
        seen.extend(iterable);
        seen
    }
}

static_assertions::assert_impl_all!(Seen<i32>: Send, Sync);
static_assertions::assert_impl_all!(Seen<f64>: Send, Sync);
