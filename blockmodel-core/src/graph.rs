//! The labelled graph produced by every block model builder.

use crate::{
    Result,
    adjacency::AdjacencyMatrix,
    cluster::LabelVector,
    error::BlockModelError,
    shuffle::Permutation,
};

/// An adjacency matrix paired with an index-aligned label vector.
///
/// # Examples
/// ```
/// use blockmodel_core::{AdjacencyMatrix, BlockGraph, LabelVector};
///
/// let adjacency = AdjacencyMatrix::from_rows(vec![vec![0, 1], vec![1, 0]])?;
/// let graph = BlockGraph::new(adjacency, LabelVector::from_raw([0, 1]))?;
/// assert_eq!(graph.order(), 2);
///
/// let (adjacency, labels) = graph.into_parts();
/// assert_eq!(adjacency.edge_count(), 1);
/// assert_eq!(labels.to_raw(), vec![0, 1]);
/// # Ok::<(), blockmodel_core::BlockModelError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockGraph {
    adjacency: AdjacencyMatrix,
    labels: LabelVector,
}

impl BlockGraph {
    /// Pairs `adjacency` with `labels`.
    ///
    /// # Errors
    /// Returns [`BlockModelError::LabelLengthMismatch`] when the label count
    /// differs from the number of nodes.
    pub fn new(adjacency: AdjacencyMatrix, labels: LabelVector) -> Result<Self> {
        if labels.len() != adjacency.order() {
            return Err(BlockModelError::LabelLengthMismatch {
                labels: labels.len(),
                nodes: adjacency.order(),
            });
        }
        Ok(Self { adjacency, labels })
    }

    /// Returns the adjacency matrix.
    #[must_use]
    pub fn adjacency(&self) -> &AdjacencyMatrix {
        &self.adjacency
    }

    /// Returns the node labels.
    #[must_use]
    pub fn labels(&self) -> &LabelVector {
        &self.labels
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn order(&self) -> usize {
        self.adjacency.order()
    }

    /// Splits the graph into its adjacency matrix and labels.
    #[must_use]
    pub fn into_parts(self) -> (AdjacencyMatrix, LabelVector) {
        (self.adjacency, self.labels)
    }

    /// Relabels nodes so that new node `i` is old node `permutation[i]`.
    ///
    /// Rows and columns move together, so the result stays symmetric, and
    /// labels follow their nodes.
    ///
    /// # Errors
    /// Returns [`BlockModelError::PermutationLengthMismatch`] when the
    /// permutation does not cover exactly the graph's nodes.
    ///
    /// # Examples
    /// ```
    /// use blockmodel_core::{AdjacencyMatrix, BlockGraph, LabelVector, Permutation};
    ///
    /// let adjacency = AdjacencyMatrix::from_rows(vec![
    ///     vec![0, 1, 0],
    ///     vec![1, 0, 0],
    ///     vec![0, 0, 0],
    /// ])?;
    /// let graph = BlockGraph::new(adjacency, LabelVector::from_raw([7, 7, 9]))?;
    /// let moved = graph.permuted(&Permutation::new(vec![2, 0, 1])?)?;
    /// assert_eq!(moved.labels().to_raw(), vec![9, 7, 7]);
    /// assert!(moved.adjacency().has_edge(1, 2));
    /// # Ok::<(), blockmodel_core::BlockModelError>(())
    /// ```
    pub fn permuted(&self, permutation: &Permutation) -> Result<Self> {
        if permutation.len() != self.order() {
            return Err(BlockModelError::PermutationLengthMismatch {
                permutation: permutation.len(),
                nodes: self.order(),
            });
        }
        Ok(self.reindexed(permutation))
    }

    /// Pairs values whose lengths are already known to agree.
    pub(crate) fn from_aligned(adjacency: AdjacencyMatrix, labels: LabelVector) -> Self {
        debug_assert_eq!(adjacency.order(), labels.len());
        Self { adjacency, labels }
    }

    /// Applies a permutation whose length already matches the graph.
    pub(crate) fn reindexed(&self, permutation: &Permutation) -> Self {
        let labels = permutation
            .as_slice()
            .iter()
            .filter_map(|&old| self.labels.get(old))
            .collect();
        Self::from_aligned(self.adjacency.permuted(permutation), labels)
    }
}
