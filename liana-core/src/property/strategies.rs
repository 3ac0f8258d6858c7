//! Strategy builders for insertion property tests.

use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::test_utils::TestGraph;

use super::types::{GraphFixture, GraphShape};

const MIN_NODES: usize = 4;
const MAX_NODES: usize = 24;

/// Generates fixtures across every [`GraphShape`].
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<GraphShape>(), any::<u64>())
        .prop_map(|(shape, seed)| generate_fixture(shape, seed))
}

/// Generates a fixture for a specific shape and seed.
pub(super) fn generate_fixture(shape: GraphShape, seed: u64) -> GraphFixture {
    let mut rng = SmallRng::seed_from_u64(seed);
    let nodes = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut edges = Vec::new();
    match shape {
        GraphShape::Sparse => {
            let probability = rng.gen_range(0.05..=0.25);
            push_random_edges(&mut rng, 0..nodes, probability, &mut edges);
        }
        GraphShape::Dense => {
            let probability = rng.gen_range(0.6..=0.9);
            push_random_edges(&mut rng, 0..nodes, probability, &mut edges);
        }
        GraphShape::Disconnected => {
            let split = nodes / 2;
            push_random_edges(&mut rng, 0..split, 0.5, &mut edges);
            push_random_edges(&mut rng, split..nodes, 0.5, &mut edges);
        }
        GraphShape::Hub => {
            edges.extend((1..nodes).map(|leaf| (0, leaf)));
            push_random_edges(&mut rng, 1..nodes, 0.1, &mut edges);
        }
    }
    GraphFixture {
        graph: TestGraph::from_edges(nodes, &edges),
        shape,
        seed,
    }
}

fn push_random_edges(
    rng: &mut SmallRng,
    nodes: std::ops::Range<usize>,
    probability: f64,
    edges: &mut Vec<(usize, usize)>,
) {
    for left in nodes.clone() {
        for right in (left + 1)..nodes.end {
            if rng.gen_bool(probability) {
                edges.push((left, right));
            }
        }
    }
}
