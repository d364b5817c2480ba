//! A set that is structurally guaranteed to hold at least one element.
//!
//! Purpose: check cardinality once at the boundary instead of every consumer
//! re-checking `is_empty()`. The wrapper is read-only after construction, so
//! the guarantee holds for the value's whole lifetime.

use std::collections::BTreeSet;
use std::collections::btree_set;
use std::fmt;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use thiserror::Error;

/// Error returned when constructing a [`NonEmptySet`] from an empty set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("set must contain at least one element")]
pub struct EmptySetError;

/// An immutable set with cardinality of at least one.
///
/// The only way to obtain an instance is the checked conversion from an
/// existing [`BTreeSet`]; there is no way to remove elements afterwards.
/// Iteration order is the underlying `BTreeSet` order, so output derived
/// from the set is deterministic.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use backend::domain::NonEmptySet;
///
/// let set = NonEmptySet::new(BTreeSet::from(["a", "b"])).expect("non-empty");
/// assert_eq!(set.len(), 2);
/// assert!(NonEmptySet::new(BTreeSet::<&str>::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptySet<T: Ord>(BTreeSet<T>);

impl<T: Ord> NonEmptySet<T> {
    /// Checked conversion from an existing set; fails on empty input.
    pub fn new(base: BTreeSet<T>) -> Result<Self, EmptySetError> {
        if base.is_empty() {
            return Err(EmptySetError);
        }
        Ok(Self(base))
    }

    /// Number of elements; always at least one.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set contains the given element.
    pub fn contains(&self, element: &T) -> bool {
        self.0.contains(element)
    }

    /// Iterate over the elements in ascending order.
    pub fn iter(&self) -> btree_set::Iter<'_, T> {
        self.0.iter()
    }

    /// Borrow the underlying set.
    pub fn as_set(&self) -> &BTreeSet<T> {
        &self.0
    }

    /// Consume the wrapper and return the underlying set.
    pub fn into_inner(self) -> BTreeSet<T> {
        self.0
    }
}

impl<T: Ord> TryFrom<BTreeSet<T>> for NonEmptySet<T> {
    type Error = EmptySetError;

    fn try_from(value: BTreeSet<T>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<T: Ord> IntoIterator for NonEmptySet<T> {
    type Item = T;
    type IntoIter = btree_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T: Ord> IntoIterator for &'a NonEmptySet<T> {
    type Item = &'a T;
    type IntoIter = btree_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Ord + fmt::Display> fmt::Display for NonEmptySet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, element) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("}")
    }
}

impl<T: Ord + Serialize> Serialize for NonEmptySet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T: Ord + Deserialize<'de>> Deserialize<'de> for NonEmptySet<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let base = BTreeSet::<T>::deserialize(deserializer)?;
        Self::new(base).map_err(serde::de::Error::custom)
    }
}
