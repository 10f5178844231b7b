//! Read-only list adapter over a bucket.

use crate::bucket::{Bucket, Iter};
use crate::error::Result;
use crate::list::{IndexedList, ListError, ListOperation};
use tracing::debug;

/// A bucket seen through the general [`IndexedList`] contract.
///
/// Reads are delegated to the bucket. Every mutation fails with
/// `ListError::Unsupported` and leaves the bucket untouched.
#[derive(Debug, Clone, Copy)]
pub struct BucketList<'a, T> {
    bucket: &'a Bucket<T>,
}

impl<'a, T> BucketList<'a, T> {
    /// Wrap a bucket.
    pub fn new(bucket: &'a Bucket<T>) -> Self {
        Self { bucket }
    }

    /// The wrapped bucket.
    pub fn bucket(&self) -> &'a Bucket<T> {
        self.bucket
    }

    /// Iterate over the elements in append order.
    pub fn iter(&self) -> Iter<'a, T> {
        self.bucket.iter()
    }

    fn reject<R>(&self, operation: ListOperation) -> Result<R> {
        debug!(%operation, count = self.bucket.len(), "rejected bucket mutation");
        Err(ListError::Unsupported(operation).into())
    }
}

impl<'a, T> IntoIterator for BucketList<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Bucket<T> {
    /// View this bucket through the general list contract.
    pub fn as_list(&self) -> BucketList<'_, T> {
        BucketList::new(self)
    }
}

impl<T> IndexedList<T> for BucketList<'_, T> {
    fn count(&self) -> usize {
        self.bucket.len()
    }

    fn is_read_only(&self) -> bool {
        true
    }

    fn get(&self, index: usize) -> Result<&T> {
        Ok(self.bucket.element_at(index)?)
    }

    fn set(&mut self, _index: usize, _value: T) -> Result<()> {
        self.reject(ListOperation::Set)
    }

    fn insert(&mut self, _index: usize, _value: T) -> Result<()> {
        self.reject(ListOperation::Insert)
    }

    fn remove_at(&mut self, _index: usize) -> Result<T> {
        self.reject(ListOperation::RemoveAt)
    }

    fn remove(&mut self, _value: &T) -> Result<bool> {
        self.reject(ListOperation::Remove)
    }

    fn clear(&mut self) -> Result<()> {
        self.reject(ListOperation::Clear)
    }

    fn add(&mut self, _value: T) -> Result<()> {
        self.reject(ListOperation::Add)
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.bucket.contains(value)
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.bucket.index_of(value)
    }

    fn copy_to(&self, destination: &mut [T], offset: usize) -> Result<()>
    where
        T: Clone,
    {
        Ok(self.bucket.copy_to(destination, offset)?)
    }
}
