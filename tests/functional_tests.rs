//! Integration tests for the functional helpers.

#![cfg(feature = "functional")]

use iterforge::functional::{Chained, FanOut, complement, constant, flip, identity, packed};
use rstest::rstest;

// =============================================================================
// Fundamental combinators
// =============================================================================

#[rstest]
fn test_identity_returns_its_argument() {
    assert_eq!(identity(42), 42);
    assert_eq!(identity(String::from("text")), "text");
    assert_eq!(identity(vec![1, 2]), vec![1, 2]);
}

#[rstest]
fn test_constant_ignores_every_input() {
    let always = constant("fixed");
    assert_eq!(always(1), "fixed");
    assert_eq!(always(2), "fixed");
}

#[rstest]
fn test_flip_swaps_and_double_flip_restores() {
    fn divide(dividend: i32, divisor: i32) -> i32 {
        dividend / divisor
    }

    let flipped = flip(divide);
    assert_eq!(flipped(2, 10), divide(10, 2));

    let restored = flip(flip(divide));
    assert_eq!(restored(10, 2), divide(10, 2));
}

#[rstest]
fn test_complement_negates_a_predicate() {
    let is_positive = |value: &i32| *value > 0;
    let non_positive = complement(is_positive);
    assert!(non_positive(&-1));
    assert!(!non_positive(&1));
}

#[rstest]
fn test_packed_feeds_tuple_items_to_nary_functions() {
    fn weighted(value: i32, weight: i32, offset: i32) -> i32 {
        value * weight + offset
    }

    let results: Vec<i32> = vec![(1, 10, 0), (2, 10, 5)]
        .into_iter()
        .map(packed(weighted))
        .collect();
    assert_eq!(results, vec![10, 25]);
}

// =============================================================================
// Runtime chains
// =============================================================================

#[rstest]
fn test_chain_applies_steps_left_to_right() {
    let pipeline = Chained::new()
        .then(|value: i32| value + 3)
        .then(|value| value * 2)
        .then(|value| value - 1);
    assert_eq!(pipeline.len(), 3);
    assert_eq!(pipeline.apply(2), 9);
}

#[rstest]
fn test_reversed_chain_equals_reversed_construction() {
    let forward = Chained::new()
        .then(|value: i32| value + 1)
        .then(|value| value * 10);
    let manual = Chained::new()
        .then(|value: i32| value * 10)
        .then(|value| value + 1);
    for input in [-3, 0, 7] {
        assert_eq!(forward.clone().reversed().apply(input), manual.apply(input));
    }
}

#[rstest]
fn test_splicing_chains_flattens_steps() {
    let suffix = Chained::new().then(|text: String| text + "!");
    let pipeline = Chained::new()
        .then(|text: String| text + "?")
        .chain(suffix);
    assert_eq!(pipeline.len(), 2);
    assert_eq!(pipeline.apply(String::from("ok")), "ok?!");
}

#[rstest]
fn test_chain_as_plain_closure() {
    let double_then_negate = Chained::new()
        .then(|value: i32| value * 2)
        .then(|value| -value)
        .into_fn();
    let mapped: Vec<i32> = vec![1, 2, 3].into_iter().map(double_then_negate).collect();
    assert_eq!(mapped, vec![-2, -4, -6]);
}

#[rstest]
fn test_fan_out_collects_every_view_of_the_input() {
    let views = FanOut::new()
        .with(|value: &i32| *value)
        .with(|value| value * value)
        .with(|value| value + 1);
    assert_eq!(views.apply(&4), vec![4, 16, 5]);
    assert_eq!(views.len(), 3);
}
