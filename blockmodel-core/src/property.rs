//! Property-based tests across the generation pipeline.
//!
//! Verifies the adjacency invariants of every generator, the layout produced
//! by block composition, and that shuffling is an invertible relabelling.

use proptest::prelude::*;
use rand::{SeedableRng, rngs::SmallRng};
use test_strategy::Arbitrary;

use crate::{
    BalancedBlockConfig, BlockGraph, ClusterId, Result, UnbalancedBlockConfig, add_block,
    balanced_block_model, erdos_renyi, shuffle_nodes, unbalanced_block_model,
    test_utils::{is_simple_undirected, suite_proptest_config},
};

fn probability() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), Just(1.0), 0.0..=1.0_f64]
}

fn balanced_config() -> impl Strategy<Value = BalancedBlockConfig> {
    (1_usize..5, 1_usize..6, probability(), probability()).prop_map(
        |(cluster_count, cluster_size, p, q)| BalancedBlockConfig {
            cluster_count,
            cluster_size,
            p,
            q,
        },
    )
}

fn unbalanced_config() -> impl Strategy<Value = UnbalancedBlockConfig> {
    (1_usize..6, 1_usize..5, 0_usize..4, probability(), probability()).prop_map(
        |(cluster_count, min_size, spread, p, q)| UnbalancedBlockConfig {
            cluster_count,
            min_size,
            max_size: min_size + spread,
            p,
            q,
        },
    )
}

/// Builder exercised by the shared output checks.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
enum Builder {
    #[weight(2)]
    Balanced,
    #[weight(2)]
    Unbalanced,
    /// A balanced graph nested inside another by [`add_block`].
    #[weight(1)]
    Nested,
}

impl Builder {
    fn build(
        self,
        clusters: usize,
        size: usize,
        p: f64,
        q: f64,
        rng: &mut SmallRng,
    ) -> Result<BlockGraph> {
        let balanced = BalancedBlockConfig {
            cluster_count: clusters,
            cluster_size: size,
            p,
            q,
        };
        match self {
            Self::Balanced => balanced_block_model(&balanced, rng),
            Self::Unbalanced => unbalanced_block_model(
                &UnbalancedBlockConfig {
                    cluster_count: clusters,
                    min_size: size,
                    max_size: size + 3,
                    p,
                    q,
                },
                rng,
            ),
            Self::Nested => {
                let base = balanced_block_model(&balanced, rng)?;
                let addition = balanced_block_model(&balanced, rng)?;
                add_block(&base, &addition, ClusterId::new(clusters as u64), q, rng)
            }
        }
    }
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn erdos_renyi_is_simple_undirected(n in 0_usize..24, p in probability(), seed in any::<u64>()) {
        let matrix = erdos_renyi(n, p, &mut SmallRng::seed_from_u64(seed))
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(matrix.order(), n);
        prop_assert!(is_simple_undirected(&matrix));
    }

    #[test]
    fn builders_emit_aligned_simple_graphs(
        builder in any::<Builder>(),
        clusters in 1_usize..4,
        size in 1_usize..5,
        p in probability(),
        q in probability(),
        seed in any::<u64>(),
    ) {
        let graph = builder
            .build(clusters, size, p, q, &mut SmallRng::seed_from_u64(seed))
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(graph.labels().len(), graph.order());
        prop_assert!(is_simple_undirected(graph.adjacency()));
        prop_assert!(graph.order() >= clusters * size);
    }

    #[test]
    fn balanced_graphs_respect_layout(config in balanced_config(), seed in any::<u64>()) {
        let graph = balanced_block_model(&config, &mut SmallRng::seed_from_u64(seed))
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(graph.order(), config.cluster_count * config.cluster_size);
        prop_assert!(is_simple_undirected(graph.adjacency()));
        for (node, id) in graph.labels().iter().enumerate() {
            prop_assert_eq!(id.get(), (node / config.cluster_size) as u64);
        }
    }

    #[test]
    fn unbalanced_sizes_are_half_open(config in unbalanced_config(), seed in any::<u64>()) {
        let graph = unbalanced_block_model(&config, &mut SmallRng::seed_from_u64(seed))
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert!(is_simple_undirected(graph.adjacency()));
        let raw = graph.labels().to_raw();
        for cluster in 0..config.cluster_count as u64 {
            let size = raw.iter().filter(|&&id| id == cluster).count();
            if config.min_size == config.max_size {
                prop_assert_eq!(size, config.min_size);
            } else {
                prop_assert!(size >= config.min_size && size < config.max_size);
            }
        }
        prop_assert!(raw.windows(2).all(|pair| pair[0] <= pair[1]), "labels must be contiguous");
    }

    #[test]
    fn composition_preserves_diagonal_blocks(
        base_config in balanced_config(),
        addition_config in balanced_config(),
        q in probability(),
        seed in any::<u64>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let base = balanced_block_model(&base_config, &mut rng)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        let addition = balanced_block_model(&addition_config, &mut rng)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        let composed = add_block(&base, &addition, ClusterId::new(99), q, &mut rng)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;

        let offset = addition.order();
        prop_assert_eq!(composed.order(), offset + base.order());
        prop_assert!(is_simple_undirected(composed.adjacency()));
        for i in 0..offset {
            for j in 0..offset {
                prop_assert_eq!(composed.adjacency().get(i, j), addition.adjacency().get(i, j));
            }
        }
        for i in 0..base.order() {
            for j in 0..base.order() {
                prop_assert_eq!(
                    composed.adjacency().get(offset + i, offset + j),
                    base.adjacency().get(i, j)
                );
            }
        }
        let labels = composed.labels().as_slice();
        prop_assert_eq!(&labels[..offset], addition.labels().as_slice());
        prop_assert!(labels[offset..].iter().all(|&id| id == ClusterId::new(99)));
    }

    #[test]
    fn shuffling_is_an_invertible_relabelling(config in balanced_config(), seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let graph = balanced_block_model(&config, &mut rng)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        let shuffled = shuffle_nodes(&graph, &mut rng);
        let perm = shuffled.permutation.as_slice();

        for (i, &old_i) in perm.iter().enumerate() {
            prop_assert_eq!(shuffled.graph.labels().get(i), graph.labels().get(old_i));
            for (j, &old_j) in perm.iter().enumerate() {
                prop_assert_eq!(
                    shuffled.graph.adjacency().get(i, j),
                    graph.adjacency().get(old_i, old_j)
                );
            }
        }

        let restored = shuffled
            .graph
            .permuted(&shuffled.permutation.inverse())
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(restored, graph);
    }
}
