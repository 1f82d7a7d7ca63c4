//! The shard of initial pairs a run is responsible for.

use littlewood_core::{convergent_pairs, ConvergentPair, Numeric};

use crate::{Result, SearchConfig};

/// Pairs selected for this run out of the full initial set.
#[derive(Debug, Clone)]
pub struct SearchSpace<T> {
    /// Size of the full initial set, before sharding.
    pub total: usize,
    /// This bucket's pairs, in generation order.
    pub pairs: Vec<ConvergentPair<T>>,
}

impl<T: Numeric> SearchSpace<T> {
    /// Generate the initial pairs for `config` and keep this bucket's share.
    pub fn generate(config: &SearchConfig) -> Result<Self> {
        config.validate_bounds()?;
        let all = convergent_pairs::<T>(config.n, config.subdivisions);
        let total = all.len();
        let pairs = config.bucket.select(all);
        Ok(Self { total, pairs })
    }

    /// Number of pairs in this shard.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether this shard is empty.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
