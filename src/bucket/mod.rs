//! Append-only bucket storage module.
//!
//! This module provides the growable element store used to accumulate the
//! members of one partition. Elements can only be appended; everything else
//! is read access by position, equality scans, copying out and iteration.

use thiserror::Error;

/// Errors specific to the bucket layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BucketError {
    /// Index outside `[0, count)`
    #[error("index {index} is out of range for a bucket of {count} elements")]
    IndexOutOfRange { index: usize, count: usize },

    /// Growing past `capacity` cannot be represented or allocated
    #[error("capacity overflow while growing a bucket of capacity {capacity}")]
    CapacityOverflow { capacity: usize },

    /// Copy destination cannot hold the bucket's elements at the given offset
    #[error(
        "destination of length {available} cannot hold {required} elements at offset {offset}"
    )]
    DestinationTooSmall {
        offset: usize,
        required: usize,
        available: usize,
    },

    /// Invalid initial capacity configuration
    #[error("invalid initial capacity {0}: must be greater than 0")]
    InvalidInitialCapacity(usize),

    /// Invalid growth factor configuration
    #[error("invalid growth factor {0}: must be at least 2")]
    InvalidGrowthFactor(usize),
}

pub mod config;
pub mod iterator;
pub mod storage;

#[cfg(test)]
mod proptests;

// Re-export main types for public API
pub use config::BucketConfig;
pub use iterator::{IntoIter, Iter};
pub use storage::Bucket;
