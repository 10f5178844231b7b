//! Append-only buckets for accumulating the elements of a partitioned sequence.
//!
//! A partitioning routine creates one [`Bucket`] per key, appends every matching
//! element during a single pass over its source, and then hands the buckets back
//! to callers as read-only sequences.

pub mod bucket;
pub mod error;
pub mod list;

// Re-export common types for convenience
pub use bucket::{Bucket, BucketConfig, BucketError};
pub use error::{Error, Result};
pub use list::{AppendOnlySequence, BucketList, IndexedList, ListError, ListOperation};
