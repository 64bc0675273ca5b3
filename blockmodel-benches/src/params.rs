//! Benchmark parameter types.

use std::fmt;

use blockmodel_core::{BalancedBlockConfig, BlockGraph, balanced_block_model};
use rand::{SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Within-cluster probability used by every benchmark graph.
pub const WITHIN: f64 = 0.3;

/// Between-cluster probability used by every benchmark graph.
pub const BETWEEN: f64 = 0.05;

/// Shape of a balanced benchmark graph.
#[derive(Clone, Copy, Debug)]
pub struct ModelBenchParams {
    /// Number of clusters.
    pub cluster_count: usize,
    /// Nodes per cluster.
    pub cluster_size: usize,
}

impl ModelBenchParams {
    /// Converts the shape into a generator configuration.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] when either dimension is zero.
    pub fn config(&self) -> Result<BalancedBlockConfig, BenchSetupError> {
        if self.cluster_count == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "cluster_count",
            });
        }
        if self.cluster_size == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "cluster_size",
            });
        }
        Ok(BalancedBlockConfig {
            cluster_count: self.cluster_count,
            cluster_size: self.cluster_size,
            p: WITHIN,
            q: BETWEEN,
        })
    }

    /// Total number of nodes in the generated graph.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.cluster_count.saturating_mul(self.cluster_size)
    }

    /// Builds a graph of this shape from a fixed seed.
    ///
    /// # Errors
    /// Returns [`BenchSetupError`] when the shape or the generator rejects
    /// the input.
    pub fn build(&self, seed: u64) -> Result<BlockGraph, BenchSetupError> {
        let config = self.config()?;
        Ok(balanced_block_model(
            &config,
            &mut SmallRng::seed_from_u64(seed),
        )?)
    }
}

impl fmt::Display for ModelBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "k={},s={}", self.cluster_count, self.cluster_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 4, "cluster_count")]
    #[case(4, 0, "cluster_size")]
    fn config_rejects_zero_dimensions(
        #[case] cluster_count: usize,
        #[case] cluster_size: usize,
        #[case] expected: &str,
    ) {
        let params = ModelBenchParams {
            cluster_count,
            cluster_size,
        };
        match params.config() {
            Err(BenchSetupError::ZeroValue { context }) => assert_eq!(context, expected),
            other => panic!("expected ZeroValue, got {other:?}"),
        }
    }

    #[rstest]
    fn build_is_deterministic_per_seed() {
        let params = ModelBenchParams {
            cluster_count: 3,
            cluster_size: 5,
        };
        let first = params.build(9).expect("params are valid");
        let second = params.build(9).expect("params are valid");
        assert_eq!(first, second);
        assert_eq!(first.order(), params.node_count());
        assert_eq!(params.to_string(), "k=3,s=5");
    }
}
