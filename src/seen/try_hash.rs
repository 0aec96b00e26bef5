//! Optional hashing for membership tracking.
//!
//! Rust splits the world statically into types that implement [`Hash`] and
//! types that do not. The membership oracle in this crate instead wants the
//! dynamic notion "this particular value could (not) be hashed", so that a
//! single container can hold both kinds and fall back to equality scans for
//! the unhashable ones. [`TryHash`] expresses exactly that: it is implemented
//! for every type the oracle accepts, and each implementation either feeds
//! the value into the hasher or reports [`NotHashable`].
//!
//! Floating-point numbers are the canonical unhashable values: they support
//! equality comparison but have no coherent hash (`NaN != NaN`). Composite
//! values are hashable iff all of their parts are, so `Vec<f64>` falls back
//! to equality scans while `Vec<i64>` does not.
//!
//! # Examples
//!
//! ```rust
//! use iterforge::seen::hash_token;
//!
//! assert!(hash_token(&42_i64).is_some());
//! assert!(hash_token(&"text").is_some());
//! assert!(hash_token(&1.5_f64).is_none());
//! assert!(hash_token(&vec![(1, 2.0_f64)]).is_none());
//! ```

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

/// Marker returned when a value cannot participate in hashing.
///
/// Carrying no payload keeps the fallback path allocation-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotHashable;

/// Hashing that is allowed to refuse.
///
/// Implementations must uphold the usual [`Hash`]/[`Eq`] contract whenever
/// they succeed: values that compare equal must feed identical bytes to the
/// hasher. An implementation must be consistent: a given value either always
/// hashes or never does.
pub trait TryHash {
    /// Feeds this value into `state`, or reports that it cannot be hashed.
    ///
    /// # Errors
    ///
    /// Returns [`NotHashable`] when the value (or any part of a composite
    /// value) has no coherent hash.
    fn try_hash(&self, state: &mut dyn Hasher) -> Result<(), NotHashable>;
}

/// Computes the 64-bit hash token for `value`, or `None` when the value is
/// unhashable.
///
/// Uses [`FxHasher`], matching the hash tables elsewhere in the crate.
#[inline]
pub fn hash_token<T: TryHash + ?Sized>(value: &T) -> Option<u64> {
    let mut hasher = FxHasher::default();
    value.try_hash(&mut hasher).ok()?;
    Some(hasher.finish())
}

macro_rules! impl_try_hash_via_hash {
    ($($kind:ty),* $(,)?) => {
        $(
            impl TryHash for $kind {
                #[inline]
                fn try_hash(&self, state: &mut dyn Hasher) -> Result<(), NotHashable> {
                    let mut adapter = DynHasherAdapter(state);
                    Hash::hash(self, &mut adapter);
                    Ok(())
                }
            }
        )*
    };
}

/// Bridges `&mut dyn Hasher` back into a concrete [`Hasher`] so that the
/// standard [`Hash`] implementations can be reused.
struct DynHasherAdapter<'state>(&'state mut dyn Hasher);

impl Hasher for DynHasherAdapter<'_> {
    #[inline]
    fn finish(&self) -> u64 {
        self.0.finish()
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.0.write(bytes);
    }
}

impl_try_hash_via_hash!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, str, String, ()
);

macro_rules! impl_try_hash_unhashable {
    ($($kind:ty),* $(,)?) => {
        $(
            impl TryHash for $kind {
                #[inline]
                fn try_hash(&self, _state: &mut dyn Hasher) -> Result<(), NotHashable> {
                    Err(NotHashable)
                }
            }
        )*
    };
}

impl_try_hash_unhashable!(f32, f64);

impl<T: TryHash + ?Sized> TryHash for &T {
    #[inline]
    fn try_hash(&self, state: &mut dyn Hasher) -> Result<(), NotHashable> {
        (**self).try_hash(state)
    }
}

impl<T: TryHash> TryHash for Option<T> {
    fn try_hash(&self, state: &mut dyn Hasher) -> Result<(), NotHashable> {
        match self {
            None => {
                state.write_u8(0);
                Ok(())
            }
            Some(inner) => {
                state.write_u8(1);
                inner.try_hash(state)
            }
        }
    }
}

impl<T: TryHash> TryHash for [T] {
    fn try_hash(&self, state: &mut dyn Hasher) -> Result<(), NotHashable> {
        state.write_usize(self.len());
        for element in self {
            element.try_hash(state)?;
        }
        Ok(())
    }
}

impl<T: TryHash> TryHash for Vec<T> {
    #[inline]
    fn try_hash(&self, state: &mut dyn Hasher) -> Result<(), NotHashable> {
        self.as_slice().try_hash(state)
    }
}

impl<T: TryHash, const N: usize> TryHash for [T; N] {
    #[inline]
    fn try_hash(&self, state: &mut dyn Hasher) -> Result<(), NotHashable> {
        self.as_slice().try_hash(state)
    }
}

macro_rules! impl_try_hash_tuple {
    ($($name:ident : $index:tt),+) => {
        impl<$($name: TryHash),+> TryHash for ($($name,)+) {
            fn try_hash(&self, state: &mut dyn Hasher) -> Result<(), NotHashable> {
                $(self.$index.try_hash(state)?;)+
                Ok(())
            }
        }
    };
}

impl_try_hash_tuple!(A: 0);
impl_try_hash_tuple!(A: 0, B: 1);
impl_try_hash_tuple!(A: 0, B: 1, C: 2);
impl_try_hash_tuple!(A: 0, B: 1, C: 2, D: 3);
impl_try_hash_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4);
impl_try_hash_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
