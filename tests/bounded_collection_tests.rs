//! Integration tests for the bounded collections.
//!
//! Exercises both collections through the public API only, including the
//! floating-point walkthrough that motivated the ordered collection: a
//! five-slot collection of readings queried for its extremes between
//! removals.

use bounded_collections::prelude::*;
use rstest::rstest;

/// A totally ordered wrapper over `f64`.
///
/// `f64` itself is only `PartialOrd`; `total_cmp` provides the total order
/// the ordered collection requires.
#[derive(Debug, PartialEq)]
struct Reading(f64);

impl Eq for Reading {}

impl PartialOrd for Reading {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Reading {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

// =============================================================================
// Ordered Collection Walkthrough
// =============================================================================

#[rstest]
fn ordered_readings_walkthrough() {
    let mut collection = BoundedOrderedCollection::new(5);
    for value in [10.5, 12.5, 125.5, 1.5, 15.5] {
        collection.insert(Reading(value)).unwrap();
    }
    assert!(collection.is_full());
    assert_eq!(collection.min(), Ok(&Reading(1.5)));

    collection.remove(&Reading(1.5)).unwrap();
    assert_eq!(collection.max(), Ok(&Reading(125.5)));
    assert_eq!(collection.min(), Ok(&Reading(10.5)));

    collection.remove(&Reading(125.5)).unwrap();
    assert_eq!(collection.max(), Ok(&Reading(15.5)));
}

#[rstest]
fn ordered_collection_reports_each_failure_kind() {
    let mut collection = BoundedOrderedCollection::new(2);

    assert_eq!(collection.remove(&Reading(1.0)), Err(CollectionError::Empty));

    collection.insert(Reading(1.0)).unwrap();
    collection.insert(Reading(2.0)).unwrap();
    assert_eq!(
        collection.insert(Reading(3.0)),
        Err(CollectionError::Full)
    );
    assert_eq!(
        collection.remove(&Reading(9.0)),
        Err(CollectionError::NotFound)
    );
}

// =============================================================================
// Unsorted Collection Walkthrough
// =============================================================================

#[rstest]
fn unsorted_collection_walkthrough() {
    let mut collection = BoundedCollection::new(5);
    collection.insert(Reading(10.5)).unwrap();
    collection.insert(Reading(12.5)).unwrap();
    collection.insert(Reading(13.5)).unwrap();

    collection.remove(&Reading(12.5)).unwrap();
    assert!(collection.contains(&Reading(13.5)));
    assert!(!collection.contains(&Reading(12.5)));
}

#[rstest]
fn collections_share_one_error_taxonomy() {
    // Handling code can treat both collections uniformly.
    fn drain<E>(result: Result<E, CollectionError>) -> &'static str {
        match result {
            Ok(_) => "removed",
            Err(CollectionError::Full) => "full",
            Err(CollectionError::Empty) => "empty",
            Err(CollectionError::NotFound) => "not found",
        }
    }

    let mut ordered: BoundedOrderedCollection<i32> = BoundedOrderedCollection::new(1);
    let mut unsorted: BoundedCollection<i32> = BoundedCollection::new(1);

    assert_eq!(drain(ordered.remove(&1)), "empty");
    assert_eq!(drain(unsorted.remove(&1)), "empty");

    ordered.insert(1).unwrap();
    unsorted.insert(1).unwrap();
    assert_eq!(drain(ordered.remove(&2)), "not found");
    assert_eq!(drain(unsorted.remove(&2)), "not found");
    assert_eq!(drain(ordered.remove(&1)), "removed");
    assert_eq!(drain(unsorted.remove(&1)), "removed");
}

// =============================================================================
// Interleaved Mutation
// =============================================================================

#[rstest]
#[case::drain_ascending(&[4, 1, 3, 2], &[1, 2, 3, 4])]
#[case::drain_descending(&[1, 2, 3, 4], &[4, 3, 2, 1])]
fn ordered_collection_drains_in_any_order(
    #[case] inserts: &[i32],
    #[case] removals: &[i32],
) {
    let mut collection = BoundedOrderedCollection::new(inserts.len());
    for &value in inserts {
        collection.insert(value).unwrap();
    }
    for &value in removals {
        assert_eq!(collection.remove(&value), Ok(value));
        assert!(collection.as_slice().is_sorted());
    }
    assert!(collection.is_empty());
}

#[rstest]
fn cleared_collections_are_reusable() {
    let mut collection = BoundedOrderedCollection::new(2);
    collection.insert(2).unwrap();
    collection.insert(1).unwrap();

    collection.clear();
    assert!(collection.is_empty());
    assert_eq!(collection.min(), Err(CollectionError::Empty));

    collection.insert(7).unwrap();
    assert_eq!(collection.min(), Ok(&7));
    assert_eq!(collection.max(), Ok(&7));
}
