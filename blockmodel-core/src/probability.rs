//! Validated edge probabilities and the rules that map cluster pairs to them.

use crate::{Result, cluster::ClusterId, error::BlockModelError};

/// A finite probability within `[0, 1]`.
///
/// # Examples
/// ```
/// use blockmodel_core::Probability;
///
/// let p = Probability::new("p", 0.25)?;
/// assert_eq!(p.get(), 0.25);
/// assert!(Probability::new("p", 1.5).is_err());
/// # Ok::<(), blockmodel_core::BlockModelError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Probability(f64);

impl Probability {
    /// Validates `value` as a probability. `parameter` names the value in the
    /// resulting error.
    ///
    /// # Errors
    /// Returns [`BlockModelError::InvalidProbability`] when `value` is NaN,
    /// infinite or outside `[0, 1]`. Values are never clamped.
    pub fn new(parameter: &'static str, value: f64) -> Result<Self> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(BlockModelError::InvalidProbability { parameter, value })
        }
    }

    /// Returns the wrapped value.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

/// Maps a pair of cluster labels to the probability that an edge joins them.
///
/// Implementations must be symmetric in their arguments.
pub trait EdgeProbability {
    /// Returns the edge probability between nodes labelled `a` and `b`.
    ///
    /// # Errors
    /// Returns an error when either label is unknown to the rule.
    fn probability(&self, a: ClusterId, b: ClusterId) -> Result<Probability>;
}

/// The planted-partition rule: `within` for same-cluster pairs and `between`
/// otherwise.
///
/// # Examples
/// ```
/// use blockmodel_core::{ClusterId, EdgeProbability, PlantedPartition};
///
/// let rule = PlantedPartition::new(0.9, 0.1)?;
/// let same = rule.probability(ClusterId::new(1), ClusterId::new(1))?;
/// let different = rule.probability(ClusterId::new(1), ClusterId::new(2))?;
/// assert_eq!(same.get(), 0.9);
/// assert_eq!(different.get(), 0.1);
/// # Ok::<(), blockmodel_core::BlockModelError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlantedPartition {
    within: Probability,
    between: Probability,
}

impl PlantedPartition {
    /// Validates both probabilities and builds the rule.
    ///
    /// # Errors
    /// Returns [`BlockModelError::InvalidProbability`] naming `p` or `q`.
    pub fn new(p: f64, q: f64) -> Result<Self> {
        Ok(Self {
            within: Probability::new("p", p)?,
            between: Probability::new("q", q)?,
        })
    }

    /// Probability of an edge inside a cluster.
    #[must_use]
    pub const fn within(&self) -> Probability {
        self.within
    }

    /// Probability of an edge across clusters.
    #[must_use]
    pub const fn between(&self) -> Probability {
        self.between
    }
}

impl EdgeProbability for PlantedPartition {
    fn probability(&self, a: ClusterId, b: ClusterId) -> Result<Probability> {
        Ok(if a == b { self.within } else { self.between })
    }
}

/// A full symmetric `k × k` block probability matrix; entry `(r, s)` is the
/// edge probability between clusters `r` and `s`.
///
/// # Examples
/// ```
/// use blockmodel_core::{ClusterId, EdgeProbability, ProbabilityMatrix};
///
/// let matrix = ProbabilityMatrix::new(vec![
///     vec![0.8, 0.1],
///     vec![0.1, 0.6],
/// ])?;
/// assert_eq!(matrix.cluster_count(), 2);
/// let p = matrix.probability(ClusterId::new(1), ClusterId::new(1))?;
/// assert_eq!(p.get(), 0.6);
/// assert!(matrix.probability(ClusterId::new(0), ClusterId::new(2)).is_err());
/// # Ok::<(), blockmodel_core::BlockModelError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityMatrix {
    clusters: usize,
    entries: Vec<Probability>,
}

impl ProbabilityMatrix {
    /// Validates and builds a block probability matrix.
    ///
    /// # Errors
    /// Returns [`BlockModelError::ZeroClusterCount`] for an empty matrix,
    /// [`BlockModelError::NotSquare`] for ragged rows,
    /// [`BlockModelError::InvalidProbability`] for entries outside `[0, 1]`
    /// and [`BlockModelError::Asymmetric`] when `rows[r][s] != rows[s][r]`.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let clusters = rows.len();
        if clusters == 0 {
            return Err(BlockModelError::ZeroClusterCount);
        }
        let mut entries = Vec::with_capacity(clusters.saturating_mul(clusters));
        for (row, values) in rows.iter().enumerate() {
            if values.len() != clusters {
                return Err(BlockModelError::NotSquare {
                    rows: clusters,
                    row,
                    len: values.len(),
                });
            }
            for &value in values {
                entries.push(Probability::new("probability_matrix", value)?);
            }
        }

        let matrix = Self { clusters, entries };
        for row in 0..clusters {
            for col in (row + 1)..clusters {
                if matrix.entry(row, col) != matrix.entry(col, row) {
                    return Err(BlockModelError::Asymmetric { row, col });
                }
            }
        }
        Ok(matrix)
    }

    /// Returns the number of clusters the matrix describes.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.clusters
    }

    fn entry(&self, row: usize, col: usize) -> Option<Probability> {
        if row >= self.clusters || col >= self.clusters {
            return None;
        }
        self.entries.get(row * self.clusters + col).copied()
    }

    fn index_of(&self, id: ClusterId) -> Result<usize> {
        usize::try_from(id.get())
            .ok()
            .filter(|&index| index < self.clusters)
            .ok_or(BlockModelError::UnknownCluster {
                cluster: id.get(),
                clusters: self.clusters,
            })
    }
}

impl EdgeProbability for ProbabilityMatrix {
    fn probability(&self, a: ClusterId, b: ClusterId) -> Result<Probability> {
        let row = self.index_of(a)?;
        let col = self.index_of(b)?;
        self.entry(row, col).ok_or(BlockModelError::UnknownCluster {
            cluster: b.get(),
            clusters: self.clusters,
        })
    }
}
