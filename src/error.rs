//! Crate-scoped error handling for partition-buckets.
//!
//! This module provides a unified error type for public APIs while maintaining
//! precise error information for each layer.

use std::fmt;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type exposed to users of the crate.
///
/// Wraps the layer-specific errors so that callers going through the general
/// list contract can handle read failures and rejected mutations uniformly.
#[derive(Debug)]
pub enum Error {
    /// Errors from the bucket layer (indexing, growth, copying, config)
    Bucket(crate::bucket::BucketError),

    /// Errors from the list layer (operations outside the append-only contract)
    List(crate::list::ListError),
}

impl Error {
    /// Returns true if this error is a rejected mutation.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::List(crate::list::ListError::Unsupported(_)))
    }

    /// Returns true if this error is an out-of-range index.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Error::Bucket(crate::bucket::BucketError::IndexOutOfRange { .. })
        )
    }
}

impl From<crate::bucket::BucketError> for Error {
    fn from(err: crate::bucket::BucketError) -> Self {
        Error::Bucket(err)
    }
}

impl From<crate::list::ListError> for Error {
    fn from(err: crate::list::ListError) -> Self {
        Error::List(err)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Bucket(err) => Some(err),
            Error::List(err) => Some(err),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bucket(err) => write!(f, "Bucket error: {}", err),
            Error::List(err) => write!(f, "List error: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket::BucketError;
    use crate::list::{ListError, ListOperation};
    use std::error::Error as _;

    #[test]
    fn test_display_wraps_layer_message() {
        let err: Error = BucketError::IndexOutOfRange { index: 3, count: 2 }.into();
        assert_eq!(
            err.to_string(),
            "Bucket error: index 3 is out of range for a bucket of 2 elements"
        );

        let err: Error = ListError::Unsupported(ListOperation::Clear).into();
        assert_eq!(
            err.to_string(),
            "List error: operation `clear` is not supported by an append-only bucket"
        );
    }

    #[test]
    fn test_classification_helpers() {
        let err: Error = ListError::Unsupported(ListOperation::Insert).into();
        assert!(err.is_unsupported());
        assert!(!err.is_out_of_range());
        assert!(err.source().is_some());

        let err: Error = BucketError::IndexOutOfRange { index: 0, count: 0 }.into();
        assert!(err.is_out_of_range());
        assert!(!err.is_unsupported());
    }
}
