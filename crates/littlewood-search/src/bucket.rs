//! Static sharding of the initial search space.
//!
//! Bucket `b` of `B` takes every `B`-th pair starting at position `b − 1`.
//! Independent processes given the same N and pre-split count generate the
//! same pair list, so their buckets are disjoint and together cover it.

use std::fmt;

use crate::ConfigError;

/// One shard of a `count`-way partition, `index` is 1-based.
///
/// Always valid: `count >= 1` and `1 <= index <= count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bucket {
    count: usize,
    index: usize,
}

impl Bucket {
    /// The single bucket holding everything.
    pub const WHOLE: Self = Self { count: 1, index: 1 };

    /// Bucket `index` of `count`.
    pub fn new(count: usize, index: usize) -> Result<Self, ConfigError> {
        if count == 0 {
            return Err(ConfigError::NoBuckets);
        }
        if index == 0 || index > count {
            return Err(ConfigError::BucketOutOfRange { index, count });
        }
        Ok(Self { count, index })
    }

    /// Total number of shards.
    pub fn count(&self) -> usize {
        self.count
    }

    /// This shard, in `1..=count`.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether position `i` of the full list belongs to this bucket.
    #[inline]
    pub fn contains(&self, i: usize) -> bool {
        i % self.count == self.index - 1
    }

    /// Number of items this bucket takes from a list of `total`.
    pub fn size_of(&self, total: usize) -> usize {
        total.saturating_sub(self.index - 1).div_ceil(self.count)
    }

    /// Take this bucket's items from `items`, preserving order.
    pub fn select<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.index - 1)
            .step_by(self.count)
            .collect()
    }
}

impl Default for Bucket {
    fn default() -> Self {
        Self::WHOLE
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} of {}", self.index, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bucket(count: usize, index: usize) -> Bucket {
        Bucket::new(count, index).unwrap()
    }

    #[test]
    fn construction_rejects_invalid_shards() {
        assert_eq!(Bucket::new(1, 1), Ok(Bucket::WHOLE));
        assert_eq!(bucket(4, 4).index(), 4);
        assert_eq!(bucket(4, 4).count(), 4);
        assert_eq!(Bucket::new(0, 1), Err(ConfigError::NoBuckets));
        assert_eq!(Bucket::new(0, 0), Err(ConfigError::NoBuckets));
        assert_eq!(
            Bucket::new(3, 0),
            Err(ConfigError::BucketOutOfRange { index: 0, count: 3 })
        );
        assert_eq!(
            Bucket::new(3, 4),
            Err(ConfigError::BucketOutOfRange { index: 4, count: 3 })
        );
    }

    #[test]
    fn select_strides() {
        let items: Vec<u32> = (0..10).collect();
        assert_eq!(bucket(3, 1).select(items.clone()), vec![0, 3, 6, 9]);
        assert_eq!(bucket(3, 2).select(items.clone()), vec![1, 4, 7]);
        assert_eq!(bucket(3, 3).select(items.clone()), vec![2, 5, 8]);
        assert_eq!(Bucket::WHOLE.select(items.clone()), items);
    }

    #[test]
    fn more_buckets_than_items() {
        let items = vec!['a', 'b'];
        assert_eq!(bucket(5, 2).select(items.clone()), vec!['b']);
        assert!(bucket(5, 4).select(items).is_empty());
        assert_eq!(bucket(5, 4).size_of(2), 0);
    }

    #[test]
    fn display() {
        assert_eq!(bucket(7, 3).to_string(), "#3 of 7");
    }

    proptest! {
        #[test]
        fn buckets_partition_the_list(total in 0usize..300, count in 1usize..20) {
            let items: Vec<usize> = (0..total).collect();
            let mut seen = vec![0u32; total];
            for index in 1..=count {
                let b = bucket(count, index);
                let shard = b.select(items.clone());
                prop_assert_eq!(shard.len(), b.size_of(total));
                for i in shard {
                    prop_assert!(b.contains(i));
                    seen[i] += 1;
                }
            }
            prop_assert!(seen.iter().all(|&c| c == 1));
        }

        #[test]
        fn only_in_range_shards_construct(count in 0usize..20, index in 0usize..25) {
            let valid = count >= 1 && (1..=count).contains(&index);
            prop_assert_eq!(Bucket::new(count, index).is_ok(), valid);
        }
    }
}
