//! Error types for the blockmodel core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Broad classification of a [`BlockModelError`].
///
/// Callers that only care whether an argument was out of range or whether
/// two inputs disagreed on size can match on this instead of every variant.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// A parameter was outside its permitted domain.
    InvalidArgument,
    /// Two inputs disagreed on their dimensions.
    DimensionMismatch,
}

/// Error type produced by graph generation, composition and shuffling.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BlockModelError {
    /// A probability was not a finite value within `[0, 1]`.
    #[error("{parameter} must be a probability in [0, 1] (got {value})")]
    InvalidProbability {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The model must contain at least one cluster.
    #[error("cluster_count must be at least 1")]
    ZeroClusterCount,
    /// A cluster size parameter was zero.
    #[error("{parameter} must be at least 1")]
    ZeroClusterSize {
        /// Name of the offending parameter.
        parameter: &'static str,
    },
    /// The minimum cluster size exceeded the maximum.
    #[error("min_size ({min}) must not exceed max_size ({max})")]
    InvalidSizeRange {
        /// Requested minimum cluster size.
        min: usize,
        /// Requested maximum cluster size.
        max: usize,
    },
    /// The total number of nodes does not fit in `usize`.
    #[error("total node count overflows usize")]
    NodeCountOverflow,
    /// An adjacency entry was neither `0` nor `1`.
    #[error("adjacency entry ({row}, {col}) must be 0 or 1 (got {value})")]
    NonBinaryEntry {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
        /// The rejected value.
        value: u8,
    },
    /// A node was connected to itself.
    #[error("node {node} has a self-loop")]
    SelfLoop {
        /// The node carrying the self-loop.
        node: usize,
    },
    /// The adjacency entries `(row, col)` and `(col, row)` differ.
    #[error("adjacency is not symmetric at ({row}, {col})")]
    Asymmetric {
        /// Row of the first mismatching entry.
        row: usize,
        /// Column of the first mismatching entry.
        col: usize,
    },
    /// A permutation repeated an index or referenced one out of range.
    #[error("permutation entry {index} ({value}) is out of range or repeated")]
    InvalidPermutation {
        /// Position of the offending entry.
        index: usize,
        /// The rejected value.
        value: usize,
    },
    /// A label referenced a cluster missing from the probability matrix.
    #[error("cluster {cluster} is outside the {clusters}-cluster probability matrix")]
    UnknownCluster {
        /// The label that could not be resolved.
        cluster: u64,
        /// Number of clusters described by the probability matrix.
        clusters: usize,
    },
    /// A matrix row did not have as many entries as the matrix has rows.
    #[error("matrix with {rows} rows is not square: row {row} has {len} entries")]
    NotSquare {
        /// Number of rows in the matrix.
        rows: usize,
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
    },
    /// A label vector did not match the number of graph nodes.
    #[error("label vector has {labels} entries but the graph has {nodes} nodes")]
    LabelLengthMismatch {
        /// Number of labels supplied.
        labels: usize,
        /// Number of nodes in the adjacency matrix.
        nodes: usize,
    },
    /// A permutation did not match the number of graph nodes.
    #[error("permutation has {permutation} entries but the graph has {nodes} nodes")]
    PermutationLengthMismatch {
        /// Number of permutation entries supplied.
        permutation: usize,
        /// Number of nodes in the graph.
        nodes: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`BlockModelError`] variants.
    enum BlockModelErrorCode for BlockModelError {
        /// A probability was not a finite value within `[0, 1]`.
        InvalidProbability => InvalidProbability { .. } => "BLOCKMODEL_INVALID_PROBABILITY",
        /// The model must contain at least one cluster.
        ZeroClusterCount => ZeroClusterCount => "BLOCKMODEL_ZERO_CLUSTER_COUNT",
        /// A cluster size parameter was zero.
        ZeroClusterSize => ZeroClusterSize { .. } => "BLOCKMODEL_ZERO_CLUSTER_SIZE",
        /// The minimum cluster size exceeded the maximum.
        InvalidSizeRange => InvalidSizeRange { .. } => "BLOCKMODEL_INVALID_SIZE_RANGE",
        /// The total number of nodes does not fit in `usize`.
        NodeCountOverflow => NodeCountOverflow => "BLOCKMODEL_NODE_COUNT_OVERFLOW",
        /// An adjacency entry was neither `0` nor `1`.
        NonBinaryEntry => NonBinaryEntry { .. } => "BLOCKMODEL_NON_BINARY_ENTRY",
        /// A node was connected to itself.
        SelfLoop => SelfLoop { .. } => "BLOCKMODEL_SELF_LOOP",
        /// The adjacency matrix was not symmetric.
        Asymmetric => Asymmetric { .. } => "BLOCKMODEL_ASYMMETRIC",
        /// A permutation repeated an index or referenced one out of range.
        InvalidPermutation => InvalidPermutation { .. } => "BLOCKMODEL_INVALID_PERMUTATION",
        /// A label referenced a cluster missing from the probability matrix.
        UnknownCluster => UnknownCluster { .. } => "BLOCKMODEL_UNKNOWN_CLUSTER",
        /// A matrix was not square.
        NotSquare => NotSquare { .. } => "BLOCKMODEL_NOT_SQUARE",
        /// A label vector did not match the number of graph nodes.
        LabelLengthMismatch => LabelLengthMismatch { .. } => "BLOCKMODEL_LABEL_LENGTH_MISMATCH",
        /// A permutation did not match the number of graph nodes.
        PermutationLengthMismatch => PermutationLengthMismatch { .. } => "BLOCKMODEL_PERMUTATION_LENGTH_MISMATCH",
    }
}

impl BlockModelError {
    /// Classify this error as an invalid argument or a dimension mismatch.
    ///
    /// # Examples
    /// ```
    /// use blockmodel_core::{BlockModelError, ErrorKind};
    ///
    /// let err = BlockModelError::LabelLengthMismatch { labels: 2, nodes: 3 };
    /// assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
    /// ```
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotSquare { .. }
            | Self::LabelLengthMismatch { .. }
            | Self::PermutationLengthMismatch { .. } => ErrorKind::DimensionMismatch,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, BlockModelError>;
