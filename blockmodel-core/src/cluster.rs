//! Cluster identifiers and the label vector paired with every generated graph.

use std::fmt;

use crate::{Result, error::BlockModelError};

/// Identifier assigned to a cluster.
///
/// # Examples
/// ```
/// use blockmodel_core::ClusterId;
///
/// let id = ClusterId::new(4);
/// assert_eq!(id.get(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClusterId(u64);

impl ClusterId {
    /// Creates a new cluster identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: u64) -> Self { Self(id) }

    /// Returns the underlying numeric identifier.
    ///
    /// # Examples
    /// ```
    /// use blockmodel_core::ClusterId;
    ///
    /// let id = ClusterId::new(7);
    /// assert_eq!(id.get(), 7);
    /// ```
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> u64 { self.0 }
}

impl From<u64> for ClusterId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered cluster labels, index-aligned with the rows of an adjacency matrix.
///
/// # Examples
/// ```
/// use blockmodel_core::LabelVector;
///
/// let labels = LabelVector::from_raw([0, 0, 1]);
/// assert_eq!(labels.len(), 3);
/// assert_eq!(labels.to_raw(), vec![0, 0, 1]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LabelVector {
    ids: Vec<ClusterId>,
}

impl LabelVector {
    /// Builds a label vector from cluster identifiers.
    #[must_use]
    pub fn new(ids: Vec<ClusterId>) -> Self {
        Self { ids }
    }

    /// Builds a label vector from raw numeric identifiers.
    #[must_use]
    pub fn from_raw<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        ids.into_iter().map(ClusterId::new).collect()
    }

    /// Builds contiguous blocks: cluster `r` repeated `sizes[r]` times, in
    /// cluster order.
    ///
    /// # Errors
    /// Returns [`BlockModelError::NodeCountOverflow`] when the sizes sum past
    /// `usize::MAX`.
    ///
    /// # Examples
    /// ```
    /// use blockmodel_core::LabelVector;
    ///
    /// let labels = LabelVector::contiguous_blocks(&[2, 1, 3])?;
    /// assert_eq!(labels.to_raw(), vec![0, 0, 1, 2, 2, 2]);
    /// # Ok::<(), blockmodel_core::BlockModelError>(())
    /// ```
    pub fn contiguous_blocks(sizes: &[usize]) -> Result<Self> {
        let total = sizes
            .iter()
            .try_fold(0_usize, |total, &size| total.checked_add(size))
            .ok_or(BlockModelError::NodeCountOverflow)?;
        let mut ids = Vec::with_capacity(total);
        for (cluster, &size) in (0_u64..).zip(sizes) {
            ids.extend(std::iter::repeat_n(ClusterId::new(cluster), size));
        }
        Ok(Self { ids })
    }

    /// Returns the number of labelled nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` when no nodes are labelled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the label of `node`, if it exists.
    #[must_use]
    pub fn get(&self, node: usize) -> Option<ClusterId> {
        self.ids.get(node).copied()
    }

    /// Returns the labels in node order.
    #[must_use]
    pub fn as_slice(&self) -> &[ClusterId] {
        &self.ids
    }

    /// Iterates over the labels in node order.
    pub fn iter(&self) -> impl Iterator<Item = ClusterId> + '_ {
        self.ids.iter().copied()
    }

    /// Returns the raw numeric identifiers in node order.
    #[must_use]
    pub fn to_raw(&self) -> Vec<u64> {
        self.ids.iter().map(|id| id.get()).collect()
    }

    /// Returns `true` when any node carries `id`.
    #[must_use]
    pub fn contains(&self, id: ClusterId) -> bool {
        self.ids.contains(&id)
    }
}

impl FromIterator<ClusterId> for LabelVector {
    fn from_iter<T: IntoIterator<Item = ClusterId>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<ClusterId>> for LabelVector {
    fn from(ids: Vec<ClusterId>) -> Self {
        Self::new(ids)
    }
}
