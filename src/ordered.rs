//! Capacity-bounded collection that maintains sorted order.
//!
//! This module provides [`BoundedOrderedCollection`], a fixed-capacity,
//! array-backed collection that keeps its elements in non-decreasing order at
//! every observable point.
//!
//! # Overview
//!
//! `BoundedOrderedCollection` stores its elements in one contiguous buffer
//! allocated at construction:
//! - `insert` binary-searches for the leftmost position that preserves order,
//!   then shifts the tail right by one slot
//! - `remove` binary-searches for an equal element, then shifts the tail left
//! - `min` and `max` read the first and last slots directly
//!
//! The capacity never changes after construction. Inserting into a full
//! collection fails with [`CollectionError::Full`] and leaves the collection
//! untouched; the same strong guarantee holds for every other fallible
//! operation.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity         |
//! |------------|--------------------|
//! | `insert`   | O(log n) + O(n)    |
//! | `remove`   | O(log n) + O(n)    |
//! | `contains` | O(log n)           |
//! | `min`      | O(1)               |
//! | `max`      | O(1)               |
//! | `len`      | O(1)               |
//! | `is_empty` | O(1)               |
//! | `is_full`  | O(1)               |
//! | `clear`    | O(n) drops         |
//!
//! # Examples
//!
//! ```rust
//! use bounded_collections::{BoundedOrderedCollection, CollectionError};
//!
//! let mut collection = BoundedOrderedCollection::new(5);
//! collection.insert(12)?;
//! collection.insert(7)?;
//! collection.insert(31)?;
//!
//! // Elements are kept sorted regardless of insertion order
//! assert_eq!(collection.as_slice(), &[7, 12, 31]);
//! assert_eq!(collection.min()?, &7);
//! assert_eq!(collection.max()?, &31);
//!
//! collection.remove(&12)?;
//! assert_eq!(collection.as_slice(), &[7, 31]);
//! # Ok::<(), CollectionError>(())
//! ```
//!
//! # Ownership
//!
//! The collection deliberately implements neither `Clone` nor `Default`.
//! Each instance owns its backing buffer exclusively; duplicating the buffer
//! must be an explicit decision made by the caller, element by element.

use std::borrow::Borrow;

use crate::error::CollectionError;

/// A fixed-capacity collection that keeps its elements in non-decreasing
/// order.
///
/// The capacity is chosen once at construction and never changes; there is no
/// resize or grow operation. Duplicate values are permitted and treated as
/// interchangeable: `remove` evicts whichever equal occurrence the binary
/// search lands on, which is not necessarily the first or most recently
/// inserted one.
///
/// # Type Parameters
///
/// * `T` - The element type. `Ord` is required by the searching operations
///   (`insert`, `remove`, `contains`).
///
/// # Examples
///
/// ```rust
/// use bounded_collections::BoundedOrderedCollection;
///
/// let mut collection = BoundedOrderedCollection::new(3);
/// collection.insert("pear").unwrap();
/// collection.insert("apple").unwrap();
/// collection.insert("quince").unwrap();
///
/// assert!(collection.is_full());
/// assert_eq!(collection.min().unwrap(), &"apple");
/// assert_eq!(collection.max().unwrap(), &"quince");
/// ```
pub struct BoundedOrderedCollection<T> {
    /// Live elements in non-decreasing order. The buffer is allocated once,
    /// at construction, for `capacity` slots.
    elements: Vec<T>,
    /// Maximum number of elements this instance may ever hold.
    capacity: usize,
}

impl<T> BoundedOrderedCollection<T> {
    /// Creates a new empty collection with the given capacity.
    ///
    /// The backing buffer for `capacity` elements is allocated immediately.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. A collection that can never hold an
    /// element is a contract violation, not a runtime condition, so it is
    /// rejected at construction rather than reported through
    /// [`CollectionError`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_collections::BoundedOrderedCollection;
    ///
    /// let collection: BoundedOrderedCollection<i32> = BoundedOrderedCollection::new(8);
    /// assert!(collection.is_empty());
    /// assert_eq!(collection.capacity(), 8);
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
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_collections::BoundedOrderedCollection;
    ///
    /// let mut collection = BoundedOrderedCollection::new(2);
    /// assert!(collection.is_empty());
    ///
    /// collection.insert(1).unwrap();
    /// assert!(!collection.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if the collection holds `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_collections::BoundedOrderedCollection;
    ///
    /// let mut collection = BoundedOrderedCollection::new(1);
    /// assert!(!collection.is_full());
    ///
    /// collection.insert(1).unwrap();
    /// assert!(collection.is_full());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.elements.len() == self.capacity
    }

    /// Removes every element from the collection.
    ///
    /// The capacity is unaffected; the collection is immediately reusable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_collections::BoundedOrderedCollection;
    ///
    /// let mut collection = BoundedOrderedCollection::new(3);
    /// collection.insert(1).unwrap();
    /// collection.insert(2).unwrap();
    ///
    /// collection.clear();
    /// assert!(collection.is_empty());
    /// assert_eq!(collection.capacity(), 3);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Returns the live elements as a slice, in non-decreasing order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the elements in non-decreasing order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_collections::BoundedOrderedCollection;
    ///
    /// let mut collection = BoundedOrderedCollection::new(3);
    /// collection.insert(2).unwrap();
    /// collection.insert(1).unwrap();
    ///
    /// let elements: Vec<&i32> = collection.iter().collect();
    /// assert_eq!(elements, vec![&1, &2]);
    /// ```
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns a reference to the smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the collection holds no
    /// elements.
    ///
    /// # Complexity
    ///
    /// O(1): the smallest element is always in the first slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_collections::{BoundedOrderedCollection, CollectionError};
    ///
    /// let mut collection = BoundedOrderedCollection::new(3);
    /// assert_eq!(collection.min(), Err(CollectionError::Empty));
    ///
    /// collection.insert(5).unwrap();
    /// collection.insert(3).unwrap();
    /// assert_eq!(collection.min(), Ok(&3));
    /// ```
    #[inline]
    pub fn min(&self) -> Result<&T, CollectionError> {
        self.elements.first().ok_or(CollectionError::Empty)
    }

    /// Returns a reference to the largest element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the collection holds no
    /// elements.
    ///
    /// # Complexity
    ///
    /// O(1): the largest element is always in the last live slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_collections::{BoundedOrderedCollection, CollectionError};
    ///
    /// let mut collection = BoundedOrderedCollection::new(3);
    /// assert_eq!(collection.max(), Err(CollectionError::Empty));
    ///
    /// collection.insert(5).unwrap();
    /// collection.insert(3).unwrap();
    /// assert_eq!(collection.max(), Ok(&5));
    /// ```
    #[inline]
    pub fn max(&self) -> Result<&T, CollectionError> {
        self.elements.last().ok_or(CollectionError::Empty)
    }
}

impl<T: Ord> BoundedOrderedCollection<T> {
    /// Inserts an element, keeping the collection sorted.
    ///
    /// The insertion point is the leftmost index that preserves
    /// non-decreasing order: the binary search narrows towards the left on
    /// ties, so a new element lands before any equal elements it is compared
    /// against. All elements at and after the insertion point shift right by
    /// one slot.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Full`] if the collection already holds
    /// `capacity` elements. The collection is unchanged on failure.
    ///
    /// # Complexity
    ///
    /// O(log n) search plus O(n) worst-case shift.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_collections::{BoundedOrderedCollection, CollectionError};
    ///
    /// let mut collection = BoundedOrderedCollection::new(3);
    /// collection.insert(20)?;
    /// collection.insert(10)?;
    /// collection.insert(30)?;
    /// assert_eq!(collection.as_slice(), &[10, 20, 30]);
    ///
    /// // A fourth insert is refused and changes nothing
    /// assert_eq!(collection.insert(40), Err(CollectionError::Full));
    /// assert_eq!(collection.as_slice(), &[10, 20, 30]);
    /// # Ok::<(), CollectionError>(())
    /// ```
    pub fn insert(&mut self, value: T) -> Result<(), CollectionError> {
        if self.is_full() {
            return Err(CollectionError::Full);
        }
        let index = self.elements.partition_point(|probe| probe < &value);
        self.elements.insert(index, value);
        Ok(())
    }

    /// Removes one element comparing equal to `value` and returns it.
    ///
    /// The element is located by binary search. With duplicate values present
    /// the search finds *some* equal occurrence, not necessarily the first or
    /// the most recently inserted; callers that need a deterministic eviction
    /// order among duplicates should not rely on this method to provide one.
    ///
    /// This method accepts borrowed forms of the element type through the
    /// `Borrow` trait, so a `BoundedOrderedCollection<String>` can be
    /// searched with a `&str`.
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
    /// O(log n) search plus O(n) worst-case shift.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_collections::{BoundedOrderedCollection, CollectionError};
    ///
    /// let mut collection = BoundedOrderedCollection::new(3);
    /// collection.insert(1)?;
    /// collection.insert(2)?;
    ///
    /// assert_eq!(collection.remove(&2), Ok(2));
    /// assert_eq!(collection.remove(&9), Err(CollectionError::NotFound));
    /// assert_eq!(collection.as_slice(), &[1]);
    /// # Ok::<(), CollectionError>(())
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> Result<T, CollectionError>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if self.is_empty() {
            return Err(CollectionError::Empty);
        }
        match self
            .elements
            .binary_search_by(|probe| probe.borrow().cmp(value))
        {
            Ok(index) => Ok(self.elements.remove(index)),
            Err(_) => Err(CollectionError::NotFound),
        }
    }

    /// Returns `true` if some element compares equal to `value`.
    ///
    /// Like [`remove`](Self::remove), this accepts borrowed forms of the
    /// element type.
    ///
    /// # Complexity
    ///
    /// O(log n) binary search.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_collections::BoundedOrderedCollection;
    ///
    /// let mut collection = BoundedOrderedCollection::new(2);
    /// collection.insert("left".to_string()).unwrap();
    ///
    /// assert!(collection.contains("left")); // searched with &str
    /// assert!(!collection.contains("right"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.elements
            .binary_search_by(|probe| probe.borrow().cmp(value))
            .is_ok()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T: std::fmt::Debug> std::fmt::Debug for BoundedOrderedCollection<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_list().entries(&self.elements).finish()
    }
}

/// Equality compares the element sequences only; two collections with
/// different capacities but the same elements compare equal.
impl<T: PartialEq> PartialEq for BoundedOrderedCollection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for BoundedOrderedCollection<T> {}

impl<'a, T> IntoIterator for &'a BoundedOrderedCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for BoundedOrderedCollection<T> {
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
impl<T: serde::Serialize> serde::Serialize for BoundedOrderedCollection<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("BoundedOrderedCollection", 2)?;
        state.serialize_field("capacity", &self.capacity)?;
        state.serialize_field("elements", &self.elements)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename = "BoundedOrderedCollection")]
struct BoundedOrderedCollectionRepr<T> {
    capacity: usize,
    elements: Vec<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for BoundedOrderedCollection<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let repr = BoundedOrderedCollectionRepr::<T>::deserialize(deserializer)?;
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
        if !repr.elements.is_sorted() {
            return Err(D::Error::custom("elements are not in non-decreasing order"));
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
