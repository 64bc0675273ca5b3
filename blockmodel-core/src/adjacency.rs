//! Dense adjacency matrix for undirected simple graphs.
//!
//! Entries are stored row-major as `u8` values restricted to `0` and `1`. The
//! matrix is symmetric with a zero diagonal; every constructor upholds that
//! invariant, so consumers never need to re-check it.

use crate::{
    Result,
    error::BlockModelError,
    shuffle::Permutation,
};

/// Square, symmetric 0/1 matrix describing an undirected graph without
/// self-loops.
///
/// # Examples
/// ```
/// use blockmodel_core::AdjacencyMatrix;
///
/// let matrix = AdjacencyMatrix::from_rows(vec![
///     vec![0, 1, 0],
///     vec![1, 0, 1],
///     vec![0, 1, 0],
/// ])?;
/// assert_eq!(matrix.order(), 3);
/// assert_eq!(matrix.edge_count(), 2);
/// assert!(matrix.has_edge(1, 2));
/// # Ok::<(), blockmodel_core::BlockModelError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AdjacencyMatrix {
    order: usize,
    entries: Vec<u8>,
}

impl AdjacencyMatrix {
    /// Creates an edgeless matrix over `order` nodes.
    ///
    /// # Errors
    /// Returns [`BlockModelError::NodeCountOverflow`] when `order²` does not
    /// fit in `usize`.
    pub fn zeros(order: usize) -> Result<Self> {
        let len = order
            .checked_mul(order)
            .ok_or(BlockModelError::NodeCountOverflow)?;
        Ok(Self {
            order,
            entries: vec![0; len],
        })
    }

    /// Builds a matrix from explicit rows, validating every invariant.
    ///
    /// # Errors
    /// Returns [`BlockModelError::NotSquare`] when a row length differs from
    /// the row count, [`BlockModelError::NonBinaryEntry`] for values other
    /// than `0` or `1`, [`BlockModelError::SelfLoop`] for a non-zero diagonal
    /// and [`BlockModelError::Asymmetric`] when `rows[i][j] != rows[j][i]`.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self> {
        let order = rows.len();
        let mut entries = Vec::with_capacity(order.saturating_mul(order));
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != order {
                return Err(BlockModelError::NotSquare {
                    rows: order,
                    row,
                    len: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if value > 1 {
                    return Err(BlockModelError::NonBinaryEntry { row, col, value });
                }
                if row == col && value != 0 {
                    return Err(BlockModelError::SelfLoop { node: row });
                }
            }
            entries.extend(values);
        }

        let matrix = Self { order, entries };
        matrix.check_symmetric()?;
        Ok(matrix)
    }

    fn check_symmetric(&self) -> Result<()> {
        for row in 0..self.order {
            for col in (row + 1)..self.order {
                if self.get(row, col) != self.get(col, row) {
                    return Err(BlockModelError::Asymmetric { row, col });
                }
            }
        }
        Ok(())
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns `true` when the matrix has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order == 0
    }

    /// Returns the entry at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.order || col >= self.order {
            return None;
        }
        self.entries.get(row * self.order + col).copied()
    }

    /// Returns `true` when nodes `a` and `b` are connected.
    #[must_use]
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.get(a, b) == Some(1)
    }

    /// Returns the entries of `row`, or `None` when out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row >= self.order {
            return None;
        }
        let start = row * self.order;
        self.entries.get(start..start + self.order)
    }

    /// Iterates over the rows in node order.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        // `chunks_exact(0)` panics, and an empty matrix has no rows anyway.
        self.entries.chunks_exact(self.order.max(1))
    }

    /// Returns the number of neighbours of `node`, or `None` when out of
    /// bounds.
    #[must_use]
    pub fn degree(&self, node: usize) -> Option<usize> {
        self.row(node)
            .map(|values| values.iter().filter(|&&value| value == 1).count())
    }

    /// Returns the number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.entries.iter().filter(|&&value| value == 1).count() / 2
    }

    /// Returns the row-major entries.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.entries
    }

    /// Copies the matrix into nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows().map(<[u8]>::to_vec).collect()
    }

    /// Connects `a` and `b` in both directions. Out-of-range or diagonal
    /// pairs are ignored; callers only pass pairs with `a != b` inside the
    /// matrix.
    pub(crate) fn connect(&mut self, a: usize, b: usize) {
        if a == b || a >= self.order || b >= self.order {
            return;
        }
        let order = self.order;
        if let Some(entry) = self.entries.get_mut(a * order + b) {
            *entry = 1;
        }
        if let Some(entry) = self.entries.get_mut(b * order + a) {
            *entry = 1;
        }
    }

    /// Copies `source` into the diagonal block starting at `offset`.
    pub(crate) fn place_block(&mut self, offset: usize, source: &Self) {
        for (row, values) in source.rows().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value == 1 {
                    self.connect(offset + row, offset + col);
                }
            }
        }
    }

    /// Reindexes rows and columns so that new node `i` is old node
    /// `permutation[i]`.
    pub(crate) fn permuted(&self, permutation: &Permutation) -> Self {
        let order = self.order;
        let indices = permutation.as_slice();
        let mut entries = Vec::with_capacity(self.entries.len());
        for &old_row in indices {
            for &old_col in indices {
                entries.push(self.get(old_row, old_col).unwrap_or(0));
            }
        }
        Self { order, entries }
    }
}
