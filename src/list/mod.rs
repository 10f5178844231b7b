//! List capability module.
//!
//! Buckets are consumed through two capability sets. Accumulation code uses the
//! narrow [`AppendOnlySequence`]. Code written against a general indexable list
//! goes through [`BucketList`], which implements [`IndexedList`] by delegating
//! reads to the bucket and rejecting every mutation with
//! [`ListError::Unsupported`].

use std::fmt;
use thiserror::Error;

/// Mutations of the general list contract that buckets do not support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListOperation {
    /// Overwrite the element at a position
    Set,

    /// Insert an element at a position
    Insert,

    /// Remove the element at a position
    RemoveAt,

    /// Remove the first element equal to a value
    Remove,

    /// Remove every element
    Clear,

    /// Collection-level add; appending goes through the bucket itself
    Add,
}

impl fmt::Display for ListOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ListOperation::Set => "set",
            ListOperation::Insert => "insert",
            ListOperation::RemoveAt => "remove_at",
            ListOperation::Remove => "remove",
            ListOperation::Clear => "clear",
            ListOperation::Add => "add",
        };
        f.write_str(name)
    }
}

/// Errors specific to the list layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// The operation is outside the append-only contract
    #[error("operation `{0}` is not supported by an append-only bucket")]
    Unsupported(ListOperation),
}

pub mod adapter;
pub mod traits;

// Re-export main types for public API
pub use adapter::BucketList;
pub use traits::{AppendOnlySequence, IndexedList};
