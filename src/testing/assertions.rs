//! Assertion functions for comparing produced collections with expectations.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Assert that two collections are equal in both order and content.
///
/// # Panics
///
/// Panics with a detailed message if the collections differ in length or in
/// any position.
///
/// # Example
///
/// ```
/// use safestream::testing::assert_collections_equal;
///
/// assert_collections_equal(&[1, 2, 3], &[1, 2, 3]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "collection length mismatch: expected {} elements, got {}\n  expected: {expected:?}\n  actual:   {actual:?}",
        expected.len(),
        actual.len()
    );
    for (index, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert_eq!(
            a, e,
            "collection mismatch at index {index}\n  expected: {expected:?}\n  actual:   {actual:?}"
        );
    }
}

/// Assert that two collections contain the same elements with the same
/// multiplicities, ignoring order.
///
/// Comparison is by occurrence counts, so duplicate elements are not
/// collapsed the way a set comparison would.
///
/// # Panics
///
/// Panics if the collections differ in content, ignoring order.
///
/// # Example
///
/// ```
/// use safestream::testing::assert_collections_unordered_equal;
///
/// assert_collections_unordered_equal(&[3, 1, 2, 1], &[1, 1, 2, 3]);
/// ```
pub fn assert_collections_unordered_equal<T: Debug + Eq + Hash>(actual: &[T], expected: &[T]) {
    fn counts<T: Eq + Hash>(items: &[T]) -> HashMap<&T, usize> {
        let mut map = HashMap::new();
        for item in items {
            *map.entry(item).or_insert(0) += 1;
        }
        map
    }
    assert_eq!(
        counts(actual),
        counts(expected),
        "collections differ (order ignored)\n  expected: {expected:?}\n  actual:   {actual:?}"
    );
}

/// Assert that a collection is empty.
///
/// # Panics
///
/// Panics if the collection contains any element.
pub fn assert_collection_empty<T: Debug>(actual: &[T]) {
    assert!(
        actual.is_empty(),
        "expected an empty collection, got {} elements: {actual:?}",
        actual.len()
    );
}
