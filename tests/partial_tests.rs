//! Integration tests for the runtime partial-application engine.

#![cfg(feature = "partial")]

use iterforge::error::Error;
use iterforge::partial;
use iterforge::partial::{Keywords, Partial, Slot};
use rstest::rstest;

fn collect(arguments: &[i32]) -> Vec<i32> {
    arguments.to_vec()
}

// =============================================================================
// Calling
// =============================================================================

#[rstest]
fn test_call_fills_placeholders_then_appends_surplus() {
    let prefixed = Partial::from_positional(
        collect,
        vec![Slot::Bound(10), Slot::Placeholder, Slot::Bound(30)],
    );
    assert_eq!(prefixed.deficit(), 1);
    assert_eq!(
        prefixed.call_positional(vec![20, 40, 50]).unwrap(),
        vec![10, 20, 30, 40, 50]
    );
}

#[rstest]
fn test_call_is_repeatable() {
    let doubler = Partial::from_positional(
        |arguments: &[i32]| arguments.iter().sum::<i32>(),
        vec![Slot::Placeholder, Slot::Placeholder],
    );
    assert_eq!(doubler.call_positional(vec![1, 2]).unwrap(), 3);
    assert_eq!(doubler.call_positional(vec![5, 6]).unwrap(), 11);
}

#[rstest]
fn test_argument_deficit_is_an_error() {
    let needy = Partial::from_positional(collect, vec![Slot::Placeholder, Slot::Placeholder]);
    assert!(matches!(
        needy.call_positional(vec![1]),
        Err(Error::Value(_))
    ));
    // The partial itself is unaffected by a failed call.
    assert_eq!(needy.call_positional(vec![1, 2]).unwrap(), vec![1, 2]);
}

#[rstest]
fn test_keyword_overlay_is_caller_wins() {
    let render = Partial::new(
        |arguments: &[i32], keywords: &Keywords<i32>| {
            (arguments.to_vec(), keywords.clone())
        },
        vec![Slot::Bound(1)],
        Keywords::from([(String::from("scale"), 2)]),
    );
    let (positional, keywords) = render
        .call(vec![], Keywords::from([(String::from("scale"), 9)]))
        .unwrap();
    assert_eq!(positional, vec![1]);
    assert_eq!(keywords.get("scale"), Some(&9));
}

// =============================================================================
// Layering
// =============================================================================

#[rstest]
fn test_layered_binding_composes_like_nested_partials() {
    // partial(partial(f, _, b), a)(c, d) == f(a, b, c, d)
    let inner = Partial::from_positional(collect, vec![Slot::Placeholder, Slot::Bound(2)]);
    let outer = inner.bind(vec![Slot::Bound(1)], Keywords::new());
    assert_eq!(
        outer.call_positional(vec![3, 4]).unwrap(),
        vec![1, 2, 3, 4]
    );
}

#[rstest]
fn test_binding_a_placeholder_keeps_the_slot_open() {
    let layered = Partial::from_positional(
        collect,
        vec![Slot::Placeholder, Slot::Bound(2), Slot::Placeholder],
    )
    .bind(vec![Slot::Placeholder, Slot::Bound(3)], Keywords::new());
    assert_eq!(layered.deficit(), 1);
    assert_eq!(layered.placeholder_positions(), &[0]);
    assert_eq!(layered.call_positional(vec![1]).unwrap(), vec![1, 2, 3]);
}

#[rstest]
fn test_slots_snapshot_reconstructs_the_partial() {
    let original = Partial::from_positional(
        collect,
        vec![Slot::Bound(5), Slot::Placeholder],
    );
    let slots = original.slots().to_vec();
    let keywords = original.keywords().clone();

    let rebuilt = Partial::from_positional(collect, slots);
    assert_eq!(rebuilt.keywords(), &keywords);
    assert_eq!(
        rebuilt.call_positional(vec![6]).unwrap(),
        original.call_positional(vec![6]).unwrap()
    );
}

// =============================================================================
// Macro sugar
// =============================================================================

#[rstest]
fn test_macro_placeholder_tokens() {
    let difference = partial!(|arguments: &[i32]| arguments[0] - arguments[1], __, 10);
    assert_eq!(difference.deficit(), 1);
    assert_eq!(difference.call_positional(vec![25]).unwrap(), 15);
}

#[rstest]
fn test_macro_with_compound_expressions() {
    let sum = partial!(
        |arguments: &[i32]| arguments.iter().sum::<i32>(),
        (2 * 3),
        __,
        1,
    );
    assert_eq!(sum.call_positional(vec![10]).unwrap(), 17);
}
