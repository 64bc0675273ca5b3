//! Nested block composition.
//!
//! [`add_block`] stacks two labelled graphs into one, absorbing the base
//! graph as a single new cluster:
//!
//! ```text
//! [ A  Vᵀ ]
//! [ V  A0 ]
//! ```
//!
//! `A` is the addition, `A0` the base, and `V` an `n0 × n` matrix of
//! independent cross-block edges.

use std::iter;

use rand::Rng;
use tracing::{debug, instrument, warn};

use crate::{
    Result,
    adjacency::AdjacencyMatrix,
    cluster::{ClusterId, LabelVector},
    error::BlockModelError,
    graph::BlockGraph,
    probability::Probability,
};

/// Composes `addition` (top-left block) with `base` (bottom-right block),
/// connecting every cross pair independently with probability `q`.
///
/// The addition keeps its labels; every base node is relabelled
/// `new_cluster_id`. A `new_cluster_id` already used by the addition is not
/// rejected, which merges the two clusters; a warning is logged instead.
///
/// Cross edges are drawn row by row over `V`: for each base node in order,
/// one draw per addition node in order. `q = 0` keeps the blocks
/// disconnected and `q = 1` connects them completely.
///
/// # Errors
/// Returns [`BlockModelError::InvalidProbability`] when `q` is not within
/// `[0, 1]` and [`BlockModelError::NodeCountOverflow`] when the combined
/// graph cannot be addressed.
///
/// # Examples
/// ```
/// use blockmodel_core::{BalancedBlockConfig, ClusterId, add_block, balanced_block_model};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(4);
/// let inner = BalancedBlockConfig { cluster_count: 2, cluster_size: 2, p: 1.0, q: 0.0 };
/// let base = balanced_block_model(&inner, &mut rng)?;
/// let addition = balanced_block_model(&inner, &mut rng)?;
///
/// let nested = add_block(&base, &addition, ClusterId::new(2), 0.0, &mut rng)?;
/// assert_eq!(nested.order(), 8);
/// assert_eq!(nested.labels().to_raw(), vec![0, 0, 1, 1, 2, 2, 2, 2]);
/// assert!(!nested.adjacency().has_edge(0, 4));
/// # Ok::<(), blockmodel_core::BlockModelError>(())
/// ```
#[instrument(
    name = "blockmodel.add_block",
    err,
    skip_all,
    fields(
        base_nodes = base.order(),
        addition_nodes = addition.order(),
        new_cluster = new_cluster_id.get(),
        q = q
    ),
)]
pub fn add_block<R>(
    base: &BlockGraph,
    addition: &BlockGraph,
    new_cluster_id: ClusterId,
    q: f64,
    rng: &mut R,
) -> Result<BlockGraph>
where
    R: Rng + ?Sized,
{
    let q = Probability::new("q", q)?;
    let offset = addition.order();
    let base_nodes = base.order();
    let total = offset
        .checked_add(base_nodes)
        .ok_or(BlockModelError::NodeCountOverflow)?;

    if addition.labels().contains(new_cluster_id) {
        warn!(
            cluster = new_cluster_id.get(),
            "new cluster id already labels nodes of the addition; the clusters will merge"
        );
    }

    let mut adjacency = AdjacencyMatrix::zeros(total)?;
    adjacency.place_block(0, addition.adjacency());
    adjacency.place_block(offset, base.adjacency());
    for row in 0..base_nodes {
        for col in 0..offset {
            if rng.gen_bool(q.get()) {
                adjacency.connect(offset + row, col);
            }
        }
    }

    let labels: LabelVector = addition
        .labels()
        .iter()
        .chain(iter::repeat_n(new_cluster_id, base_nodes))
        .collect();
    debug!(
        nodes = adjacency.order(),
        edges = adjacency.edge_count(),
        "block added"
    );
    Ok(BlockGraph::from_aligned(adjacency, labels))
}
