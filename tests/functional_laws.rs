#![cfg(all(feature = "functional", feature = "partial"))]
//! Property-based tests for the function-manipulation laws.
//!
//! ## Partial Laws
//! - **Composition**: `partial(partial(f, _, b), a)(c, d) == f(a, b, c, d)`
//!
//! ## Chain Laws
//! - **Reverse**: `chained(f, g).reversed()(x) == chained(g, f)(x)`
//! - **Identity**: the empty chain returns its input unchanged
//!
//! ## Flip Laws
//! - **Definition**: `flip(f)(a, b) == f(b, a)`
//! - **Involution**: `flip(flip(f))(a, b) == f(a, b)`

use iterforge::functional::{Chained, complement, flip};
use iterforge::partial::{Keywords, Partial, Slot};
use proptest::prelude::*;

// =============================================================================
// Partial Laws
// =============================================================================

proptest! {
    /// Layered binding behaves exactly like nested partial application.
    #[test]
    fn prop_partial_composition(
        a in any::<i32>(),
        b in any::<i32>(),
        c in any::<i32>(),
        d in any::<i32>(),
    ) {
        let collect = |arguments: &[i32]| arguments.to_vec();

        let inner = Partial::from_positional(collect, vec![Slot::Placeholder, Slot::Bound(b)]);
        let outer = inner.bind(vec![Slot::Bound(a)], Keywords::new());

        prop_assert_eq!(
            outer.call_positional(vec![c, d]).unwrap(),
            vec![a, b, c, d]
        );
    }

    /// The deficit shrinks by exactly the number of bound incoming slots.
    #[test]
    fn prop_bind_consumes_placeholders_in_order(values in prop::collection::vec(any::<i32>(), 0..4)) {
        let open = Partial::from_positional(
            |arguments: &[i32]| arguments.to_vec(),
            vec![Slot::Placeholder; 4],
        );
        let bound_count = values.len();
        let layered = open.bind(values.into_iter().map(Slot::Bound).collect(), Keywords::new());
        prop_assert_eq!(layered.deficit(), 4 - bound_count);
    }
}

// =============================================================================
// Chain Laws
// =============================================================================

proptest! {
    /// Reversing a two-step chain equals building it the other way round.
    #[test]
    fn prop_chained_reverse(x in -1000..1000_i32) {
        let forward = Chained::new()
            .then(|value: i32| value.wrapping_add(17))
            .then(|value| value.wrapping_mul(3));
        let swapped = Chained::new()
            .then(|value: i32| value.wrapping_mul(3))
            .then(|value| value.wrapping_add(17));

        prop_assert_eq!(forward.reversed().apply(x), swapped.apply(x));
    }

    /// The empty chain is the identity function.
    #[test]
    fn prop_empty_chain_identity(x in any::<i32>()) {
        let chain: Chained<i32> = Chained::new();
        prop_assert_eq!(chain.apply(x), x);
    }

    /// Splicing is associative in effect.
    #[test]
    fn prop_chain_splice_associative(x in -1000..1000_i32) {
        let f = || Chained::new().then(|value: i32| value.wrapping_add(1));
        let g = || Chained::new().then(|value: i32| value.wrapping_mul(2));
        let h = || Chained::new().then(|value: i32| value.wrapping_sub(3));

        let left = f().chain(g()).chain(h());
        let right = f().chain(g().chain(h()));
        prop_assert_eq!(left.apply(x), right.apply(x));
    }
}

// =============================================================================
// Flip Laws
// =============================================================================

proptest! {
    /// Flip definition: flip(f)(a, b) == f(b, a)
    #[test]
    fn prop_flip_definition(a in any::<i32>(), b in any::<i32>()) {
        let subtract = |left: i32, right: i32| left.wrapping_sub(right);
        let flipped = flip(subtract);
        prop_assert_eq!(flipped(a, b), subtract(b, a));
    }

    /// Double flip restores the original argument order.
    #[test]
    fn prop_flip_involution(a in any::<i32>(), b in any::<i32>()) {
        let subtract = |left: i32, right: i32| left.wrapping_sub(right);
        let restored = flip(flip(subtract));
        prop_assert_eq!(restored(a, b), subtract(a, b));
    }

    /// Double complement restores the original predicate.
    #[test]
    fn prop_complement_involution(value in any::<i32>()) {
        let is_even = |value: &i32| value % 2 == 0;
        let even_again = complement(complement(is_even));
        prop_assert_eq!(even_again(&value), is_even(&value));
    }
}
