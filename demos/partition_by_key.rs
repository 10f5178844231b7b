//! Example: splitting a sequence into one bucket per key.
//!
//! The partitioning itself lives here, in the caller. Buckets only collect
//! what they are given and hand it back in order.

use partition_buckets::{AppendOnlySequence, Bucket, IndexedList};
use std::collections::BTreeMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let readings = [12.5, -3.0, 0.0, 7.25, -1.5, 42.0, 0.0, 3.5];

    let mut buckets: BTreeMap<&str, Bucket<f64>> = BTreeMap::new();
    for reading in readings {
        let key = if reading < 0.0 {
            "negative"
        } else if reading == 0.0 {
            "zero"
        } else {
            "positive"
        };
        buckets.entry(key).or_default().append(reading);
    }

    for (key, bucket) in &buckets {
        println!(
            "{:>8}: {} readings {:?} (capacity {})",
            key,
            bucket.count(),
            bucket.as_slice(),
            bucket.capacity()
        );
    }

    if let Some(positive) = buckets.get("positive") {
        println!("first positive reading: {}", positive.element_at(0)?);

        // Generic list consumers can read, but cannot modify.
        let mut list = positive.as_list();
        if let Err(err) = list.clear() {
            println!("clear rejected: {}", err);
        }
    }

    Ok(())
}
