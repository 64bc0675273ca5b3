//! Planted-partition builders with balanced and randomly sized clusters.
//!
//! Both builders lay clusters out contiguously: every node of cluster `r`
//! precedes every node of cluster `r + 1`. Callers that index by block rely
//! on this ordering; use [`crate::shuffle_nodes`] to remove it.

use rand::Rng;
use tracing::{debug, instrument};

use crate::{
    Result,
    cluster::LabelVector,
    error::BlockModelError,
    generate::stochastic_block_with,
    graph::BlockGraph,
    probability::PlantedPartition,
};

/// Configuration for a planted partition with equally sized clusters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BalancedBlockConfig {
    /// Number of clusters.
    pub cluster_count: usize,
    /// Number of nodes in every cluster.
    pub cluster_size: usize,
    /// Edge probability between nodes of the same cluster.
    pub p: f64,
    /// Edge probability between nodes of different clusters.
    pub q: f64,
}

impl BalancedBlockConfig {
    /// Checks the configuration without drawing from a random source.
    ///
    /// # Errors
    /// Returns [`BlockModelError::ZeroClusterCount`],
    /// [`BlockModelError::ZeroClusterSize`],
    /// [`BlockModelError::NodeCountOverflow`] or
    /// [`BlockModelError::InvalidProbability`].
    pub fn validate(&self) -> Result<()> {
        self.planted_partition().map(drop)
    }

    fn planted_partition(&self) -> Result<PlantedPartition> {
        self.node_count()?;
        PlantedPartition::new(self.p, self.q)
    }

    /// Returns `cluster_count × cluster_size` after validating both counts.
    ///
    /// # Errors
    /// Returns [`BlockModelError::ZeroClusterCount`],
    /// [`BlockModelError::ZeroClusterSize`] or
    /// [`BlockModelError::NodeCountOverflow`].
    pub fn node_count(&self) -> Result<usize> {
        if self.cluster_count == 0 {
            return Err(BlockModelError::ZeroClusterCount);
        }
        if self.cluster_size == 0 {
            return Err(BlockModelError::ZeroClusterSize {
                parameter: "cluster_size",
            });
        }
        self.cluster_count
            .checked_mul(self.cluster_size)
            .ok_or(BlockModelError::NodeCountOverflow)
    }
}

/// Configuration for a planted partition whose cluster sizes are drawn at
/// random.
///
/// Sizes are drawn from the half-open range `[min_size, max_size)`: the
/// maximum itself is never drawn. When `min_size == max_size` every cluster
/// has exactly that size and no draw is made.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnbalancedBlockConfig {
    /// Number of clusters.
    pub cluster_count: usize,
    /// Smallest cluster size, inclusive.
    pub min_size: usize,
    /// Upper bound on cluster size, exclusive unless equal to `min_size`.
    pub max_size: usize,
    /// Edge probability between nodes of the same cluster.
    pub p: f64,
    /// Edge probability between nodes of different clusters.
    pub q: f64,
}

impl UnbalancedBlockConfig {
    /// Checks the configuration without drawing from a random source.
    ///
    /// # Errors
    /// Returns [`BlockModelError::ZeroClusterCount`],
    /// [`BlockModelError::ZeroClusterSize`],
    /// [`BlockModelError::InvalidSizeRange`] or
    /// [`BlockModelError::InvalidProbability`].
    pub fn validate(&self) -> Result<()> {
        self.planted_partition().map(drop)
    }

    fn planted_partition(&self) -> Result<PlantedPartition> {
        if self.cluster_count == 0 {
            return Err(BlockModelError::ZeroClusterCount);
        }
        if self.min_size == 0 {
            return Err(BlockModelError::ZeroClusterSize {
                parameter: "min_size",
            });
        }
        if self.min_size > self.max_size {
            return Err(BlockModelError::InvalidSizeRange {
                min: self.min_size,
                max: self.max_size,
            });
        }
        PlantedPartition::new(self.p, self.q)
    }

    fn draw_size<R>(&self, rng: &mut R) -> usize
    where
        R: Rng + ?Sized,
    {
        if self.min_size == self.max_size {
            self.min_size
        } else {
            rng.gen_range(self.min_size..self.max_size)
        }
    }
}

/// Builds a planted partition of `cluster_count` clusters with
/// `cluster_size` nodes each.
///
/// # Errors
/// Returns the errors of [`BalancedBlockConfig::validate`].
///
/// # Examples
/// ```
/// use blockmodel_core::{BalancedBlockConfig, balanced_block_model};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let config = BalancedBlockConfig { cluster_count: 3, cluster_size: 4, p: 0.7, q: 0.05 };
/// let graph = balanced_block_model(&config, &mut SmallRng::seed_from_u64(2))?;
/// assert_eq!(graph.order(), 12);
/// assert_eq!(graph.labels().to_raw(), vec![0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2]);
/// # Ok::<(), blockmodel_core::BlockModelError>(())
/// ```
#[instrument(
    name = "blockmodel.balanced_block_model",
    err,
    skip_all,
    fields(
        clusters = config.cluster_count,
        cluster_size = config.cluster_size,
        p = config.p,
        q = config.q
    ),
)]
pub fn balanced_block_model<R>(config: &BalancedBlockConfig, rng: &mut R) -> Result<BlockGraph>
where
    R: Rng + ?Sized,
{
    let rule = config.planted_partition()?;
    let sizes = vec![config.cluster_size; config.cluster_count];
    let labels = LabelVector::contiguous_blocks(&sizes)?;
    let adjacency = stochastic_block_with(&labels, &rule, rng)?;
    debug!(
        nodes = adjacency.order(),
        edges = adjacency.edge_count(),
        "balanced block model generated"
    );
    BlockGraph::new(adjacency, labels)
}

/// Builds a planted partition whose cluster sizes are drawn uniformly from
/// `[min_size, max_size)`.
///
/// The configuration is validated before any draw, so a rejected call leaves
/// the random source untouched.
///
/// # Errors
/// Returns the errors of [`UnbalancedBlockConfig::validate`] and
/// [`BlockModelError::NodeCountOverflow`] when the drawn sizes overflow.
///
/// # Examples
/// ```
/// use blockmodel_core::{UnbalancedBlockConfig, unbalanced_block_model};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let config = UnbalancedBlockConfig {
///     cluster_count: 4,
///     min_size: 2,
///     max_size: 6,
///     p: 0.8,
///     q: 0.1,
/// };
/// let graph = unbalanced_block_model(&config, &mut SmallRng::seed_from_u64(5))?;
/// assert!((8..=20).contains(&graph.order()));
/// # Ok::<(), blockmodel_core::BlockModelError>(())
/// ```
#[instrument(
    name = "blockmodel.unbalanced_block_model",
    err,
    skip_all,
    fields(
        clusters = config.cluster_count,
        min_size = config.min_size,
        max_size = config.max_size,
        p = config.p,
        q = config.q
    ),
)]
pub fn unbalanced_block_model<R>(config: &UnbalancedBlockConfig, rng: &mut R) -> Result<BlockGraph>
where
    R: Rng + ?Sized,
{
    let rule = config.planted_partition()?;
    let sizes: Vec<usize> = (0..config.cluster_count)
        .map(|_| config.draw_size(rng))
        .collect();
    let labels = LabelVector::contiguous_blocks(&sizes)?;
    let adjacency = stochastic_block_with(&labels, &rule, rng)?;
    debug!(
        nodes = adjacency.order(),
        edges = adjacency.edge_count(),
        sizes = ?sizes,
        "unbalanced block model generated"
    );
    BlockGraph::new(adjacency, labels)
}
