//! End-to-end scenarios for the build, stack and shuffle pipeline.

use blockmodel_core::{
    AdjacencyMatrix, BalancedBlockConfig, BlockGraph, ClusterId, LabelVector, Permutation,
    UnbalancedBlockConfig, add_block, balanced_block_model, erdos_renyi, shuffle_nodes,
    stochastic_block, unbalanced_block_model,
};
use rand::{SeedableRng, rngs::SmallRng};
use rstest::{fixture, rstest};

#[fixture]
fn rng() -> SmallRng {
    SmallRng::seed_from_u64(2024)
}

#[rstest]
fn two_complete_blocks_without_cross_edges(mut rng: SmallRng) {
    let config = BalancedBlockConfig {
        cluster_count: 2,
        cluster_size: 3,
        p: 1.0,
        q: 0.0,
    };
    let graph = balanced_block_model(&config, &mut rng).expect("configuration is valid");

    let expected = AdjacencyMatrix::from_rows(vec![
        vec![0, 1, 1, 0, 0, 0],
        vec![1, 0, 1, 0, 0, 0],
        vec![1, 1, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 1, 1],
        vec![0, 0, 0, 1, 0, 1],
        vec![0, 0, 0, 1, 1, 0],
    ])
    .expect("expected matrix is valid");
    assert_eq!(graph.adjacency(), &expected);
    assert_eq!(graph.labels().to_raw(), vec![0, 0, 0, 1, 1, 1]);
}

#[rstest]
fn balanced_three_by_four_labels(mut rng: SmallRng) {
    let config = BalancedBlockConfig {
        cluster_count: 3,
        cluster_size: 4,
        p: 0.4,
        q: 0.1,
    };
    let graph = balanced_block_model(&config, &mut rng).expect("configuration is valid");
    assert_eq!(graph.order(), 12);
    assert_eq!(
        graph.labels().to_raw(),
        vec![0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2]
    );
}

#[rstest]
#[case(0)]
#[case(5)]
fn random_graph_extremes(#[case] n: usize, mut rng: SmallRng) {
    let empty = erdos_renyi(n, 0.0, &mut rng).expect("p = 0 is valid");
    assert_eq!(empty.edge_count(), 0);

    let complete = erdos_renyi(n, 1.0, &mut rng).expect("p = 1 is valid");
    assert_eq!(complete.edge_count(), n * n.saturating_sub(1) / 2);
    assert!((0..n).all(|node| complete.degree(node) == Some(n - 1)));
}

#[rstest]
fn unbalanced_with_equal_bounds_has_fixed_blocks(mut rng: SmallRng) {
    let config = UnbalancedBlockConfig {
        cluster_count: 3,
        min_size: 2,
        max_size: 2,
        p: 0.5,
        q: 0.5,
    };
    let graph = unbalanced_block_model(&config, &mut rng).expect("configuration is valid");
    assert_eq!(graph.labels().to_raw(), vec![0, 0, 1, 1, 2, 2]);
}

#[rstest]
fn nested_pipeline_round_trips_through_shuffle(mut rng: SmallRng) {
    let labels = LabelVector::from_raw([0, 0, 0, 1, 1]);
    let base = BlockGraph::new(
        stochastic_block(&labels, 0.9, 0.1, &mut rng).expect("probabilities are valid"),
        labels,
    )
    .expect("lengths agree");
    let addition = balanced_block_model(
        &BalancedBlockConfig {
            cluster_count: 2,
            cluster_size: 4,
            p: 0.8,
            q: 0.2,
        },
        &mut rng,
    )
    .expect("configuration is valid");

    let nested =
        add_block(&base, &addition, ClusterId::new(2), 0.05, &mut rng).expect("q is valid");
    assert_eq!(nested.order(), 13);
    assert_eq!(
        nested.labels().to_raw(),
        vec![0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 2]
    );

    let (adjacency, shuffled_labels, permutation) = shuffle_nodes(&nested, &mut rng).into_parts();
    let shuffled = BlockGraph::new(adjacency, shuffled_labels).expect("lengths agree");
    let mut sorted = shuffled.labels().to_raw();
    sorted.sort_unstable();
    assert_eq!(sorted, nested.labels().to_raw());

    let restored = shuffled
        .permuted(&permutation.inverse())
        .expect("permutation covers every node");
    assert_eq!(restored, nested);
}

#[rstest]
fn repeated_shuffles_compose() {
    let graph = balanced_block_model(
        &BalancedBlockConfig {
            cluster_count: 3,
            cluster_size: 3,
            p: 0.5,
            q: 0.2,
        },
        &mut SmallRng::seed_from_u64(1),
    )
    .expect("configuration is valid");
    let mut rng = SmallRng::seed_from_u64(2);
    let first = shuffle_nodes(&graph, &mut rng);
    let second = shuffle_nodes(&first.graph, &mut rng);

    let composed: Vec<usize> = second
        .permutation
        .as_slice()
        .iter()
        .map(|&index| first.permutation.as_slice()[index])
        .collect();
    let direct = graph
        .permuted(&Permutation::new(composed).expect("composition is a bijection"))
        .expect("lengths agree");
    assert_eq!(direct, second.graph);
}
