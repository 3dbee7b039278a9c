//! # bounded-collections
//!
//! Capacity-bounded array collections with order-maintaining insert and
//! binary-search lookup.
//!
//! ## Overview
//!
//! This library provides fixed-capacity, array-backed collections whose
//! capacity is chosen once at construction and never changes:
//!
//! - [`BoundedOrderedCollection`]: keeps its elements in non-decreasing order
//!   at all times. Lookup is a binary search; insert and remove are a binary
//!   search plus a shift of the tail.
//! - [`BoundedCollection`]: keeps its elements in insertion order. Lookup and
//!   removal are linear scans.
//!
//! Both collections share the same failure taxonomy, [`CollectionError`]:
//! inserting into a full collection, operating on an empty one, or removing
//! an element that is not present. A failed operation never mutates the
//! collection.
//!
//! Neither collection implements `Clone`: each instance owns its backing
//! buffer exclusively, and duplication must be an explicit, caller-visible
//! decision.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` support for both collections
//!
//! ## Example
//!
//! ```rust
//! use bounded_collections::{BoundedOrderedCollection, CollectionError};
//!
//! let mut collection = BoundedOrderedCollection::new(4);
//! collection.insert(30)?;
//! collection.insert(10)?;
//! collection.insert(20)?;
//!
//! assert_eq!(collection.min()?, &10);
//! assert_eq!(collection.max()?, &30);
//! assert_eq!(collection.as_slice(), &[10, 20, 30]);
//!
//! collection.remove(&20)?;
//! assert_eq!(collection.as_slice(), &[10, 30]);
//! # Ok::<(), CollectionError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use bounded_collections::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::CollectionError;
    pub use crate::ordered::BoundedOrderedCollection;
    pub use crate::unordered::BoundedCollection;
}

pub mod error;
pub mod ordered;
pub mod unordered;

pub use error::CollectionError;
pub use ordered::BoundedOrderedCollection;
pub use unordered::BoundedCollection;
