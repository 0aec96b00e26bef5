//! Tests for the membership oracle.
//!
//! The `Seen` store keeps hashable values in hash buckets and transparently
//! degrades to an equality-scanned list for values whose `TryHash`
//! implementation declines, so mixed inputs never fail.

use iterforge::seen::{NotHashable, Seen, TryHash, hash_token};
use rstest::rstest;

// =============================================================================
// TryHash tests
// =============================================================================

#[rstest]
fn test_hashable_values_produce_stable_tokens() {
    assert_eq!(hash_token(&42_i32), hash_token(&42_i32));
    assert_eq!(hash_token("abc"), hash_token("abc"));
    assert!(hash_token(&true).is_some());
    assert!(hash_token(&'x').is_some());
}

#[rstest]
fn test_floats_decline_hashing() {
    assert_eq!(hash_token(&1.5_f64), None);
    assert_eq!(hash_token(&1.5_f32), None);
}

#[rstest]
fn test_composites_inherit_the_weakest_member() {
    // A tuple is hashable only when every element is.
    assert!(hash_token(&(1, "a")).is_some());
    assert_eq!(hash_token(&(1, 2.5_f64)), None);
    assert!(hash_token(&vec![1, 2, 3]).is_some());
    assert_eq!(hash_token(&vec![1.0_f64]), None);
    assert!(hash_token(&Some(7)).is_some());
    assert_eq!(hash_token(&Some(7.0_f64)), None);
    assert!(hash_token(&None::<f64>).is_some());
}

#[rstest]
fn test_try_hash_error_is_reported() {
    let mut hasher = rustc_hash::FxHasher::default();
    assert_eq!(2.5_f64.try_hash(&mut hasher), Err(NotHashable));
}

// =============================================================================
// Seen tests
// =============================================================================

#[rstest]
fn test_contains_add_reports_prior_membership() {
    let mut seen = Seen::new();
    assert!(!seen.contains_add(1));
    assert!(seen.contains_add(1));
    assert!(!seen.contains_add(2));
    assert_eq!(seen.len(), 2);
}

#[rstest]
fn test_unhashable_values_fall_back_to_equality() {
    let mut seen = Seen::new();
    assert!(!seen.contains_add(1.5_f64));
    assert!(!seen.contains_add(2.5_f64));
    assert!(seen.contains_add(1.5_f64));
    assert_eq!(seen.len(), 2);
}

#[rstest]
fn test_contains_does_not_insert() {
    let mut seen = Seen::new();
    let _ = seen.contains_add("a");
    assert!(seen.contains(&"a"));
    assert!(!seen.contains(&"b"));
    assert_eq!(seen.len(), 1);
}

#[rstest]
fn test_equality_ignores_insertion_order() {
    let left: Seen<i32> = [1, 2, 3].into_iter().collect();
    let right: Seen<i32> = [3, 1, 2].into_iter().collect();
    assert_eq!(left, right);

    let shorter: Seen<i32> = [1, 2].into_iter().collect();
    assert_ne!(left, shorter);
}

#[rstest]
fn test_iteration_covers_both_stores() {
    let seen: Seen<f64> = [1.0, 2.0, 1.0].into_iter().collect();
    let mut values: Vec<f64> = seen.iter().copied().collect();
    values.sort_by(f64::total_cmp);
    assert_eq!(values, vec![1.0, 2.0]);
}

#[rstest]
fn test_empty_oracle() {
    let seen: Seen<i32> = Seen::new();
    assert!(seen.is_empty());
    assert_eq!(seen.len(), 0);
    assert_eq!(seen.iter().count(), 0);
}
