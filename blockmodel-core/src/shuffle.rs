//! Random node relabelling.
//!
//! Shuffling removes any ordering bias left by the contiguous block layout of
//! the builders. The permutation is returned so callers can undo the
//! relabelling or line predictions up with the unshuffled ground truth.

use rand::{Rng, seq::SliceRandom};
use tracing::{debug, instrument};

use crate::{
    Result, adjacency::AdjacencyMatrix, cluster::LabelVector, error::BlockModelError,
    graph::BlockGraph,
};

/// A bijection of `0..n`; entry `i` names the old node that becomes node `i`.
///
/// # Examples
/// ```
/// use blockmodel_core::Permutation;
///
/// let permutation = Permutation::new(vec![2, 0, 1])?;
/// assert_eq!(permutation.inverse().as_slice(), &[1, 2, 0]);
/// assert!(Permutation::new(vec![0, 0]).is_err());
/// # Ok::<(), blockmodel_core::BlockModelError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    indices: Vec<usize>,
}

impl Permutation {
    /// Validates `indices` as a permutation of `0..indices.len()`.
    ///
    /// # Errors
    /// Returns [`BlockModelError::InvalidPermutation`] for the first entry
    /// that is out of range or repeats an earlier one.
    pub fn new(indices: Vec<usize>) -> Result<Self> {
        let mut seen = vec![false; indices.len()];
        for (index, &value) in indices.iter().enumerate() {
            match seen.get_mut(value) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(BlockModelError::InvalidPermutation { index, value }),
            }
        }
        Ok(Self { indices })
    }

    /// The permutation that leaves all `len` nodes in place.
    #[must_use]
    pub fn identity(len: usize) -> Self {
        Self {
            indices: (0..len).collect(),
        }
    }

    /// Draws a uniformly random permutation of `0..len`.
    pub fn random<R>(len: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut indices: Vec<usize> = (0..len).collect();
        indices.shuffle(rng);
        Self { indices }
    }

    /// Returns the permutation that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut inverse = vec![0; self.indices.len()];
        for (new, &old) in self.indices.iter().enumerate() {
            if let Some(slot) = inverse.get_mut(old) {
                *slot = new;
            }
        }
        Self { indices: inverse }
    }

    /// Returns the entries in node order.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the number of permuted nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` for the permutation of zero nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// A relabelled graph together with the permutation that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffledGraph {
    /// The relabelled graph.
    pub graph: BlockGraph,
    /// New node `i` was old node `permutation[i]`.
    pub permutation: Permutation,
}

impl ShuffledGraph {
    /// Splits the result into adjacency matrix, labels and permutation.
    #[must_use]
    pub fn into_parts(self) -> (AdjacencyMatrix, LabelVector, Permutation) {
        let (adjacency, labels) = self.graph.into_parts();
        (adjacency, labels, self.permutation)
    }
}

/// Relabels the nodes of `graph` with a uniformly random permutation.
///
/// Shuffling an already shuffled graph composes the permutations; the
/// returned permutation is always relative to the graph passed in.
///
/// # Examples
/// ```
/// use blockmodel_core::{BalancedBlockConfig, balanced_block_model, shuffle_nodes};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(11);
/// let config = BalancedBlockConfig { cluster_count: 2, cluster_size: 3, p: 0.9, q: 0.1 };
/// let graph = balanced_block_model(&config, &mut rng)?;
/// let shuffled = shuffle_nodes(&graph, &mut rng);
///
/// let restored = shuffled.graph.permuted(&shuffled.permutation.inverse())?;
/// assert_eq!(restored, graph);
/// # Ok::<(), blockmodel_core::BlockModelError>(())
/// ```
#[instrument(name = "blockmodel.shuffle_nodes", skip_all, fields(nodes = graph.order()))]
pub fn shuffle_nodes<R>(graph: &BlockGraph, rng: &mut R) -> ShuffledGraph
where
    R: Rng + ?Sized,
{
    let permutation = Permutation::random(graph.order(), rng);
    let shuffled = graph.reindexed(&permutation);
    debug!(nodes = shuffled.order(), "nodes shuffled");
    ShuffledGraph {
        graph: shuffled,
        permutation,
    }
}
