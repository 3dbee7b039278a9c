//! Capacity-bounded collection that preserves insertion order.
//!
//! This module provides [`BoundedCollection`], the unsorted counterpart of
//! [`BoundedOrderedCollection`](crate::BoundedOrderedCollection): the same
//! fixed capacity and the same failure taxonomy, but elements stay in the
//! order they were inserted and every search is a linear scan.
//!
//! Because no ordering is maintained, `insert` is O(1) (append at the end)
//! and only `PartialEq` is required of the element type. `remove` evicts the
//! *first* occurrence that compares equal, a guarantee its sorted sibling
//! deliberately does not make.
//!
//! # Examples
//!
//! ```rust
//! use bounded_collections::{BoundedCollection, CollectionError};
//!
//! let mut collection = BoundedCollection::new(5);
//! collection.insert(10)?;
//! collection.insert(12)?;
//! collection.insert(13)?;
//!
//! collection.remove(&12)?;
//! assert!(collection.contains(&13));
//! assert_eq!(collection.as_slice(), &[10, 13]);
//! # Ok::<(), CollectionError>(())
//! ```

use crate::error::CollectionError;

/// A fixed-capacity collection that keeps its elements in insertion order.
///
/// The capacity is chosen once at construction and never changes. Like its
/// sorted sibling, the collection owns its backing buffer exclusively and
/// implements neither `Clone` nor `Default`.
///
/// # Type Parameters
///
/// * `T` - The element type. `PartialEq` is required by the searching
///   operations (`remove`, `contains`).
pub struct BoundedCollection<T> {
    /// Live elements in insertion order. The buffer is allocated once, at
    /// construction, for `capacity` slots.
    elements: Vec<T>,
    /// Maximum number of elements this instance may ever hold.
    capacity: usize,
}

impl<T> BoundedCollection<T> {
    /// Creates a new empty collection with the given capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_collections::BoundedCollection;
    ///
    /// let collection: BoundedCollection<i32> = BoundedCollection::new(4);
    /// assert!(collection.is_empty());
    /// assert_eq!(collection.capacity(), 4);
    /// ```
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be positive");
        Self {
            elements: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the maximum number of elements this collection may hold.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of elements currently in the collection.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the collection contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if the collection holds `capacity` elements.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.elements.len() == self.capacity
    }

    /// Removes every element from the collection, keeping the capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Returns the live elements as a slice, in insertion order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the elements in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Appends an element at the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Full`] if the collection already holds
    /// `capacity` elements. The collection is unchanged on failure.
    ///
    /// # Complexity
    ///
    /// O(1).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_collections::{BoundedCollection, CollectionError};
    ///
    /// let mut collection = BoundedCollection::new(1);
    /// collection.insert('a')?;
    /// assert_eq!(collection.insert('b'), Err(CollectionError::Full));
    /// # Ok::<(), CollectionError>(())
    /// ```
    pub fn insert(&mut self, value: T) -> Result<(), CollectionError> {
        if self.is_full() {
            return Err(CollectionError::Full);
        }
        self.elements.push(value);
        Ok(())
    }
}

impl<T: PartialEq> BoundedCollection<T> {
    /// Removes the first element comparing equal to `value` and returns it.
    ///
    /// Elements after the removed one shift left by one slot, so insertion
    /// order among the survivors is preserved.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::Empty`] if the collection holds no elements
    /// - [`CollectionError::NotFound`] if no element compares equal to
    ///   `value`
    ///
    /// The collection is unchanged on failure.
    ///
    /// # Complexity
    ///
    /// O(n) scan plus O(n) worst-case shift.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_collections::{BoundedCollection, CollectionError};
    ///
    /// let mut collection = BoundedCollection::new(3);
    /// collection.insert(5)?;
    /// collection.insert(6)?;
    /// collection.insert(5)?;
    ///
    /// // The first occurrence goes; the later duplicate stays
    /// assert_eq!(collection.remove(&5), Ok(5));
    /// assert_eq!(collection.as_slice(), &[6, 5]);
    /// # Ok::<(), CollectionError>(())
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<T, CollectionError> {
        if self.is_empty() {
            return Err(CollectionError::Empty);
        }
        match self.elements.iter().position(|probe| probe == value) {
            Some(index) => Ok(self.elements.remove(index)),
            None => Err(CollectionError::NotFound),
        }
    }

    /// Returns `true` if some element compares equal to `value`.
    ///
    /// # Complexity
    ///
    /// O(n) linear scan.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.elements.iter().any(|probe| probe == value)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T: std::fmt::Debug> std::fmt::Debug for BoundedCollection<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_list().entries(&self.elements).finish()
    }
}

/// Equality compares the element sequences only; capacity is not part of
/// a collection's value.
impl<T: PartialEq> PartialEq for BoundedCollection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for BoundedCollection<T> {}

impl<'a, T> IntoIterator for &'a BoundedCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for BoundedCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for BoundedCollection<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("BoundedCollection", 2)?;
        state.serialize_field("capacity", &self.capacity)?;
        state.serialize_field("elements", &self.elements)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename = "BoundedCollection")]
struct BoundedCollectionRepr<T> {
    capacity: usize,
    elements: Vec<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for BoundedCollection<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let repr = BoundedCollectionRepr::<T>::deserialize(deserializer)?;
        if repr.capacity == 0 {
            return Err(D::Error::custom("capacity must be positive"));
        }
        if repr.elements.len() > repr.capacity {
            return Err(D::Error::custom(format!(
                "{} elements exceed capacity {}",
                repr.elements.len(),
                repr.capacity
            )));
        }

        let mut elements = Vec::with_capacity(repr.capacity);
        elements.extend(repr.elements);
        Ok(Self {
            elements,
            capacity: repr.capacity,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_insertion_order() {
        let mut collection = BoundedCollection::new(3);
        collection.insert(3).unwrap();
        collection.insert(1).unwrap();

        let json = serde_json::to_string(&collection).unwrap();
        assert_eq!(json, r#"{"capacity":3,"elements":[3,1]}"#);

        let restored: BoundedCollection<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.as_slice(), &[3, 1]);
        assert_eq!(restored.capacity(), 3);
    }

    #[test]
    fn test_deserialize_rejects_elements_exceeding_capacity() {
        let json = r#"{"capacity":1,"elements":[1,2]}"#;
        let result: Result<BoundedCollection<i32>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
