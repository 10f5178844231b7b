//! Capability traits for bucket consumers.
//!
//! `AppendOnlySequence` is what an accumulation step needs. `IndexedList` is the
//! general list contract; only its read half is meaningful for buckets.

use crate::bucket::{self, Bucket, BucketError};
use crate::error::Result;

/// Narrow contract handed to the code that fills a bucket.
pub trait AppendOnlySequence<T> {
    /// Iterator returned by [`AppendOnlySequence::sequence`].
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Appends an element after all existing ones.
    fn append(&mut self, element: T);

    /// Number of elements appended so far.
    fn count(&self) -> usize;

    /// Element at `index`, or `IndexOutOfRange` if `index >= count()`.
    fn element_at(&self, index: usize) -> std::result::Result<&T, BucketError>;

    /// Elements in append order, as of the call.
    fn sequence(&self) -> Self::Iter<'_>;
}

impl<T> AppendOnlySequence<T> for Bucket<T> {
    type Iter<'a> = bucket::Iter<'a, T>
    where
        T: 'a;

    fn append(&mut self, element: T) {
        self.push(element);
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn element_at(&self, index: usize) -> std::result::Result<&T, BucketError> {
        Bucket::element_at(self, index)
    }

    fn sequence(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

/// General indexable list contract.
///
/// Implementations that cannot honor a mutation must return
/// [`ListError::Unsupported`](crate::list::ListError::Unsupported) rather than
/// ignore it.
pub trait IndexedList<T> {
    /// Number of elements in the list.
    fn count(&self) -> usize;

    /// Returns true if mutations through this contract are rejected.
    fn is_read_only(&self) -> bool;

    /// Element at `index`.
    fn get(&self, index: usize) -> Result<&T>;

    /// Replaces the element at `index`.
    fn set(&mut self, index: usize, value: T) -> Result<()>;

    /// Inserts `value` at `index`, shifting later elements.
    fn insert(&mut self, index: usize, value: T) -> Result<()>;

    /// Removes and returns the element at `index`.
    fn remove_at(&mut self, index: usize) -> Result<T>;

    /// Removes the first element equal to `value`, reporting whether one was found.
    fn remove(&mut self, value: &T) -> Result<bool>;

    /// Removes every element.
    fn clear(&mut self) -> Result<()>;

    /// Adds `value` at the end of the list.
    fn add(&mut self, value: T) -> Result<()>;

    /// Returns true if some element equals `value`.
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq;

    /// Position of the first element equal to `value`.
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Copies every element into `destination` starting at `offset`.
    fn copy_to(&self, destination: &mut [T], offset: usize) -> Result<()>
    where
        T: Clone;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill<S: AppendOnlySequence<u32>>(sink: &mut S, values: &[u32]) {
        for value in values {
            sink.append(*value);
        }
    }

    #[test]
    fn test_bucket_as_append_only_sequence() {
        let mut bucket = Bucket::new();
        fill(&mut bucket, &[3, 1, 4, 1, 5]);

        assert_eq!(AppendOnlySequence::count(&bucket), 5);
        assert_eq!(AppendOnlySequence::element_at(&bucket, 2), Ok(&4));
        assert!(AppendOnlySequence::element_at(&bucket, 5).is_err());

        let seen: Vec<u32> = bucket.sequence().copied().collect();
        assert_eq!(seen, vec![3, 1, 4, 1, 5]);
    }
}
