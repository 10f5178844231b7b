//! Configuration for buckets.
//!
//! Contains the sizing policy a bucket starts with and grows by.

use crate::bucket::BucketError;

/// Sizing policy for a [`Bucket`](crate::bucket::Bucket).
///
/// The defaults start every bucket with room for a single element and double
/// the capacity whenever an append finds the buffer full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketConfig {
    /// Capacity reserved when the bucket is created (>= 1)
    initial_capacity: usize,

    /// Multiplier applied to the capacity on each growth step (>= 2)
    growth_factor: usize,
}

impl BucketConfig {
    /// Creates a new bucket configuration.
    ///
    /// # Arguments
    /// * `initial_capacity` - Capacity reserved up front (>= 1)
    /// * `growth_factor` - Capacity multiplier used on growth (>= 2)
    ///
    /// # Returns
    /// Validated configuration or error
    pub fn new(initial_capacity: usize, growth_factor: usize) -> crate::error::Result<Self> {
        if initial_capacity == 0 {
            return Err(BucketError::InvalidInitialCapacity(initial_capacity).into());
        }

        if growth_factor < 2 {
            return Err(BucketError::InvalidGrowthFactor(growth_factor).into());
        }

        Ok(Self {
            initial_capacity,
            growth_factor,
        })
    }

    /// Capacity reserved when a bucket is created.
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Multiplier applied to the capacity on each growth step.
    pub fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    /// Capacity to grow to from `capacity`, or `None` if it cannot be represented.
    pub(crate) fn next_capacity(&self, capacity: usize) -> Option<usize> {
        capacity.max(1).checked_mul(self.growth_factor)
    }

    /// Additional slots to reserve when a bucket holding `len` elements fills
    /// its `capacity`.
    ///
    /// # Returns
    /// A request of at least one growth step, or `CapacityOverflow` if the grown
    /// capacity cannot be represented
    pub(crate) fn growth_request(
        &self,
        capacity: usize,
        len: usize,
    ) -> Result<usize, BucketError> {
        self.next_capacity(capacity)
            .and_then(|target| target.checked_sub(len))
            .filter(|additional| *additional > 0)
            .ok_or(BucketError::CapacityOverflow { capacity })
    }
}

impl Default for BucketConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 1,
            growth_factor: 2,
        }
    }
}
