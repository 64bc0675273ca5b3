//! Random graph generators: Erdős–Rényi and label-driven stochastic block
//! models.
//!
//! Each unordered pair `(i, j)` with `i < j` receives exactly one Bernoulli
//! draw, visited in row-major order, so a seeded source reproduces the same
//! matrix.

use rand::Rng;
use tracing::{debug, instrument};

use crate::{
    Result,
    adjacency::AdjacencyMatrix,
    cluster::LabelVector,
    probability::{EdgeProbability, PlantedPartition, Probability},
};

/// Generates an Erdős–Rényi graph on `node_count` nodes where every pair is
/// connected independently with probability `p`.
///
/// # Errors
/// Returns [`crate::BlockModelError::InvalidProbability`] when `p` is not
/// within `[0, 1]` and [`crate::BlockModelError::NodeCountOverflow`] when the
/// dense matrix cannot be addressed.
///
/// # Examples
/// ```
/// use blockmodel_core::erdos_renyi;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let complete = erdos_renyi(4, 1.0, &mut rng)?;
/// assert_eq!(complete.edge_count(), 6);
/// # Ok::<(), blockmodel_core::BlockModelError>(())
/// ```
#[instrument(name = "blockmodel.erdos_renyi", err, skip_all, fields(nodes = node_count, p = p))]
pub fn erdos_renyi<R>(node_count: usize, p: f64, rng: &mut R) -> Result<AdjacencyMatrix>
where
    R: Rng + ?Sized,
{
    let p = Probability::new("p", p)?;
    let mut matrix = AdjacencyMatrix::zeros(node_count)?;
    for i in 0..node_count {
        for j in (i + 1)..node_count {
            if rng.gen_bool(p.get()) {
                matrix.connect(i, j);
            }
        }
    }
    debug!(
        nodes = matrix.order(),
        edges = matrix.edge_count(),
        "erdos-renyi graph generated"
    );
    Ok(matrix)
}

/// Generates a planted-partition graph: nodes sharing a label connect with
/// probability `p`, all other pairs with probability `q`.
///
/// With `p == q` this samples the same distribution as [`erdos_renyi`].
/// Zero or one labels yield an edgeless matrix.
///
/// # Errors
/// Returns [`crate::BlockModelError::InvalidProbability`] naming `p` or `q`.
///
/// # Examples
/// ```
/// use blockmodel_core::{LabelVector, stochastic_block};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let labels = LabelVector::from_raw([0, 0, 1]);
/// let mut rng = SmallRng::seed_from_u64(1);
/// let matrix = stochastic_block(&labels, 1.0, 0.0, &mut rng)?;
/// assert!(matrix.has_edge(0, 1));
/// assert!(!matrix.has_edge(1, 2));
/// # Ok::<(), blockmodel_core::BlockModelError>(())
/// ```
#[instrument(
    name = "blockmodel.stochastic_block",
    err,
    skip_all,
    fields(nodes = labels.len(), p = p, q = q),
)]
pub fn stochastic_block<R>(
    labels: &LabelVector,
    p: f64,
    q: f64,
    rng: &mut R,
) -> Result<AdjacencyMatrix>
where
    R: Rng + ?Sized,
{
    let rule = PlantedPartition::new(p, q)?;
    sample_block_edges(labels, &rule, rng)
}

/// Generates a stochastic block model graph whose pairwise edge probability
/// is decided by `rule`.
///
/// # Errors
/// Propagates any error returned by `rule`, such as
/// [`crate::BlockModelError::UnknownCluster`] for a
/// [`crate::ProbabilityMatrix`] that does not cover every label.
///
/// # Examples
/// ```
/// use blockmodel_core::{LabelVector, ProbabilityMatrix, stochastic_block_with};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let rule = ProbabilityMatrix::new(vec![vec![1.0, 0.0], vec![0.0, 0.0]])?;
/// let labels = LabelVector::from_raw([0, 0, 1, 1]);
/// let mut rng = SmallRng::seed_from_u64(3);
/// let matrix = stochastic_block_with(&labels, &rule, &mut rng)?;
/// assert_eq!(matrix.edge_count(), 1);
/// # Ok::<(), blockmodel_core::BlockModelError>(())
/// ```
#[instrument(
    name = "blockmodel.stochastic_block_with",
    err,
    skip_all,
    fields(nodes = labels.len()),
)]
pub fn stochastic_block_with<P, R>(
    labels: &LabelVector,
    rule: &P,
    rng: &mut R,
) -> Result<AdjacencyMatrix>
where
    P: EdgeProbability + ?Sized,
    R: Rng + ?Sized,
{
    sample_block_edges(labels, rule, rng)
}

fn sample_block_edges<P, R>(
    labels: &LabelVector,
    rule: &P,
    rng: &mut R,
) -> Result<AdjacencyMatrix>
where
    P: EdgeProbability + ?Sized,
    R: Rng + ?Sized,
{
    let ids = labels.as_slice();
    let mut matrix = AdjacencyMatrix::zeros(ids.len())?;
    for (i, &a) in ids.iter().enumerate() {
        for (j, &b) in ids.iter().enumerate().skip(i + 1) {
            let probability = rule.probability(a, b)?;
            if rng.gen_bool(probability.get()) {
                matrix.connect(i, j);
            }
        }
    }
    debug!(
        nodes = matrix.order(),
        edges = matrix.edge_count(),
        "block graph generated"
    );
    Ok(matrix)
}
