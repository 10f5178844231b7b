//! Bucket element store.
//!
//! Provides the `Bucket` type: an owned buffer whose logical count is tracked
//! apart from its capacity and which only ever grows by appending.

use crate::bucket::iterator::{IntoIter, Iter};
use crate::bucket::{BucketConfig, BucketError};
use std::ops::Index;
use tracing::trace;

/// Growable, append-only sequence of elements in insertion order.
///
/// Elements at positions `[0, len)` are exactly the appended elements in the
/// order they were appended. When an append finds the buffer full the capacity
/// is multiplied by the configured growth factor (at least doubled) before the
/// element is stored, with checked arithmetic so that growth never wraps.
///
/// There is no way to overwrite, insert, remove or clear elements. A bucket is
/// meant to be owned by a single accumulation step; it has no internal locking.
#[derive(Debug)]
pub struct Bucket<T> {
    elements: Vec<T>,
    config: BucketConfig,
}

impl<T> Bucket<T> {
    /// Create an empty bucket with capacity 1 that doubles on growth.
    pub fn new() -> Self {
        Self::with_config(BucketConfig::default())
    }

    /// Create an empty bucket using the given sizing policy.
    pub fn with_config(config: BucketConfig) -> Self {
        Self {
            elements: Vec::with_capacity(config.initial_capacity()),
            config,
        }
    }

    /// Append an element at the end of the bucket.
    ///
    /// # Panics
    /// Panics if the grown capacity cannot be represented or allocated.
    /// Use [`Bucket::try_push`] to receive the error instead.
    pub fn push(&mut self, element: T) {
        if let Err(err) = self.try_push(element) {
            panic!("{}", err);
        }
    }

    /// Append an element, reporting capacity overflow as an error.
    ///
    /// On error the bucket is left unchanged and `element` is dropped.
    pub fn try_push(&mut self, element: T) -> Result<(), BucketError> {
        if self.elements.len() == self.elements.capacity() {
            self.grow()?;
        }
        self.elements.push(element);
        Ok(())
    }

    fn grow(&mut self) -> Result<(), BucketError> {
        let capacity = self.elements.capacity();
        let additional = self.config.growth_request(capacity, self.elements.len())?;

        self.elements
            .try_reserve_exact(additional)
            .map_err(|_| BucketError::CapacityOverflow { capacity })?;

        trace!(
            from = capacity,
            to = self.elements.capacity(),
            count = self.elements.len(),
            "bucket grew"
        );
        Ok(())
    }

    /// Number of elements appended so far.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Current capacity of the backing buffer. Always `>= len()`.
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Sizing policy this bucket grows by.
    pub fn config(&self) -> &BucketConfig {
        &self.config
    }

    /// Element at `index`, or `None` if `index >= len()`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Element at `index`.
    ///
    /// # Returns
    /// The element, or `IndexOutOfRange` if `index >= len()`
    pub fn element_at(&self, index: usize) -> Result<&T, BucketError> {
        self.elements
            .get(index)
            .ok_or(BucketError::IndexOutOfRange {
                index,
                count: self.elements.len(),
            })
    }

    /// The appended elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Iterate over the elements in append order.
    ///
    /// The iterator covers the elements present when it is created.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.elements)
    }
}

impl<T: PartialEq> Bucket<T> {
    /// Returns true if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.elements.iter().any(|element| element == value)
    }

    /// Position of the first element equal to `value`, or `None` if absent.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.elements.iter().position(|element| element == value)
    }
}

impl<T: Clone> Bucket<T> {
    /// Copy every element, in order, into `destination` starting at `offset`.
    ///
    /// # Arguments
    /// * `destination` - Slice receiving the elements
    /// * `offset` - Position in `destination` of the first copied element
    ///
    /// # Returns
    /// Ok once `destination[offset..offset + len()]` holds the elements, or
    /// `DestinationTooSmall` (with `destination` untouched) if they do not fit
    pub fn copy_to(&self, destination: &mut [T], offset: usize) -> Result<(), BucketError> {
        let required = self.elements.len();
        let too_small = BucketError::DestinationTooSmall {
            offset,
            required,
            available: destination.len(),
        };

        let end = offset.checked_add(required).ok_or_else(|| too_small.clone())?;
        let target = destination.get_mut(offset..end).ok_or(too_small)?;
        target.clone_from_slice(&self.elements);
        Ok(())
    }
}

impl<T: Clone> Clone for Bucket<T> {
    /// Clones the elements into a buffer sized like a fresh bucket would be,
    /// never below the configured initial capacity.
    fn clone(&self) -> Self {
        let capacity = self.elements.len().max(self.config.initial_capacity());
        let mut elements = Vec::with_capacity(capacity);
        elements.extend_from_slice(&self.elements);
        Self {
            elements,
            config: self.config,
        }
    }
}

impl<T> Default for Bucket<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for Bucket<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.element_at(index) {
            Ok(element) => element,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: PartialEq> PartialEq for Bucket<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for Bucket<T> {}

impl<T> Extend<T> for Bucket<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

impl<T> FromIterator<T> for Bucket<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bucket = Bucket::new();
        bucket.extend(iter);
        bucket
    }
}

impl<'a, T> IntoIterator for &'a Bucket<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Bucket<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.elements)
    }
}
