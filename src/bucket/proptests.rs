use super::{Bucket, BucketConfig};
use proptest::prelude::*;

fn config_strategy() -> impl Strategy<Value = BucketConfig> {
    (1usize..16, 2usize..5).prop_map(|(initial_capacity, growth_factor)| {
        BucketConfig::new(initial_capacity, growth_factor).unwrap()
    })
}

proptest! {
    #[test]
    fn prop_appends_are_read_back_in_order(
        values in prop::collection::vec(any::<i32>(), 0..300),
        config in config_strategy(),
    ) {
        let mut bucket = Bucket::with_config(config);
        for value in &values {
            bucket.push(*value);
        }

        prop_assert_eq!(bucket.len(), values.len());
        for (index, value) in values.iter().enumerate() {
            prop_assert_eq!(bucket.element_at(index), Ok(value));
        }
        prop_assert!(bucket.element_at(values.len()).is_err());
        prop_assert!(bucket.iter().eq(values.iter()));
    }

    #[test]
    fn prop_growth_never_disturbs_earlier_elements(
        values in prop::collection::vec(any::<u8>(), 1..200),
    ) {
        let mut bucket = Bucket::new();
        for (count, value) in values.iter().enumerate() {
            let before = bucket.capacity();
            bucket.push(*value);
            let after = bucket.capacity();

            if after != before {
                prop_assert!(after >= before * 2);
            }
            prop_assert!(after >= bucket.len());
            prop_assert_eq!(bucket.as_slice(), &values[..=count]);
        }
    }

    #[test]
    fn prop_scans_agree_with_slice(
        values in prop::collection::vec(0u8..16, 0..64),
        probe in 0u8..16,
    ) {
        let bucket: Bucket<u8> = values.iter().copied().collect();

        prop_assert_eq!(bucket.contains(&probe), values.contains(&probe));
        prop_assert_eq!(
            bucket.index_of(&probe),
            values.iter().position(|value| *value == probe)
        );
    }

    #[test]
    fn prop_copy_to_places_elements_at_offset(
        values in prop::collection::vec(any::<u16>(), 0..64),
        offset in 0usize..8,
        slack in 0usize..8,
    ) {
        let bucket: Bucket<u16> = values.iter().copied().collect();
        let mut destination = vec![0u16; offset + values.len() + slack];

        prop_assert!(bucket.copy_to(&mut destination, offset).is_ok());
        prop_assert_eq!(&destination[offset..offset + values.len()], values.as_slice());
    }
}
