//! Error types for the bounded collections.
//!
//! This module provides [`CollectionError`], the single failure taxonomy
//! shared by every collection in this crate. All failures are signaled
//! synchronously at the point of violation through `Result`; no operation
//! defers, retries, or partially applies a failed call.

/// Represents the ways a bounded-collection operation can fail.
///
/// Every fallible operation in this crate reports exactly one of these three
/// kinds. A failed operation leaves the collection unchanged.
///
/// # Examples
///
/// ```rust
/// use bounded_collections::{BoundedOrderedCollection, CollectionError};
///
/// let mut collection: BoundedOrderedCollection<i32> = BoundedOrderedCollection::new(1);
/// assert_eq!(collection.min(), Err(CollectionError::Empty));
///
/// collection.insert(1).unwrap();
/// assert_eq!(collection.insert(2), Err(CollectionError::Full));
/// assert_eq!(collection.remove(&9), Err(CollectionError::NotFound));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// The collection already holds `capacity` elements; `insert` was refused.
    Full,
    /// The collection holds no elements; `remove`, `min`, or `max` was refused.
    Empty,
    /// No element in the collection compares equal to the requested value.
    NotFound,
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Full => write!(formatter, "collection is full"),
            Self::Empty => write!(formatter, "collection is empty"),
            Self::NotFound => write!(formatter, "element not found in collection"),
        }
    }
}

impl std::error::Error for CollectionError {}

// =============================================================================
// Tests
// =============================================================================
