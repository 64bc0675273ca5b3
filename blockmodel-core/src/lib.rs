//! Blockmodel core library.
//!
//! Generates synthetic undirected graphs from stochastic block models for
//! exercising community-detection and clustering algorithms. Every generator
//! returns a dense [`AdjacencyMatrix`] alongside the ground-truth
//! [`LabelVector`], and every random draw comes from a source the caller
//! passes in, so a seeded `rand::rngs::SmallRng` reproduces a graph exactly.
//!
//! The usual pipeline builds a graph, optionally nests it inside another with
//! [`add_block`], and finally relabels nodes with [`shuffle_nodes`]:
//!
//! ```
//! use blockmodel_core::{
//!     BalancedBlockConfig, ClusterId, add_block, balanced_block_model, shuffle_nodes,
//! };
//! use rand::{SeedableRng, rngs::SmallRng};
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let config = BalancedBlockConfig { cluster_count: 3, cluster_size: 5, p: 0.8, q: 0.05 };
//! let inner = balanced_block_model(&config, &mut rng)?;
//! let outer = balanced_block_model(&config, &mut rng)?;
//! let nested = add_block(&inner, &outer, ClusterId::new(3), 0.01, &mut rng)?;
//! let shuffled = shuffle_nodes(&nested, &mut rng);
//! assert_eq!(shuffled.graph.order(), 30);
//! # Ok::<(), blockmodel_core::BlockModelError>(())
//! ```
//!
//! # Tracing
//!
//! Each public generator opens a span named `blockmodel.<function>` carrying
//! its sizes and probabilities, and emits a `debug` event with the resulting
//! node and edge counts. The library never installs a subscriber.

mod adjacency;
mod cluster;
mod compose;
mod error;
mod generate;
mod graph;
mod model;
mod probability;
mod shuffle;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    adjacency::AdjacencyMatrix,
    cluster::{ClusterId, LabelVector},
    compose::add_block,
    error::{BlockModelError, BlockModelErrorCode, ErrorKind, Result},
    generate::{erdos_renyi, stochastic_block, stochastic_block_with},
    graph::BlockGraph,
    model::{
        BalancedBlockConfig, UnbalancedBlockConfig, balanced_block_model, unbalanced_block_model,
    },
    probability::{EdgeProbability, PlantedPartition, Probability, ProbabilityMatrix},
    shuffle::{Permutation, ShuffledGraph, shuffle_nodes},
};
