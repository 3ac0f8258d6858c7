//! Node-level measures delegated to `rustworkx-core` and `petgraph`.
//!
//! Every function takes the graph topology and returns one value per node,
//! indexed by node. Only the glue the libraries lack lives here: path
//! counting over library distances, eigenvalue recovery and scalar
//! assortativity.

use std::convert::Infallible;

use rustworkx_core::{
    centrality::{betweenness_centrality, closeness_centrality, eigenvector_centrality},
    connectivity::core_number,
    petgraph::{
        algo::{dijkstra, maximal_cliques as bron_kerbosch, page_rank},
        graph::NodeIndex,
        visit::EdgeRef,
    },
};
use tracing::debug;

use crate::graph::Topology;

/// Node count above which rustworkx parallelises centrality passes.
const PARALLEL_THRESHOLD: usize = 256;
const PAGERANK_DAMPING: f64 = 0.85;
const PAGERANK_ITERATIONS: usize = 100;
const EIGENVECTOR_MAX_ITERATIONS: usize = 10_000;
const EIGENVECTOR_TOLERANCE: f64 = 1e-10;

/// Hop distances and geodesic counts from one source.
pub(crate) struct Geodesics {
    /// Hop distance from the source, `None` when unreachable.
    pub distance: Vec<Option<usize>>,
    /// Number of shortest paths from the source.
    pub paths: Vec<u64>,
}

pub(crate) fn distances(topology: &Topology, source: usize) -> Vec<Option<usize>> {
    let reached = dijkstra(topology, NodeIndex::new(source), None, |_| 1_usize);
    (0..topology.node_count())
        .map(|node| reached.get(&NodeIndex::new(node)).copied())
        .collect()
}

pub(crate) fn geodesics(topology: &Topology, source: usize) -> Geodesics {
    let distance = distances(topology, source);
    let mut order: Vec<(usize, usize)> = distance
        .iter()
        .enumerate()
        .filter_map(|(node, depth)| depth.map(|depth| (depth, node)))
        .collect();
    order.sort_unstable();
    let mut paths = vec![0_u64; distance.len()];
    if let Some(root) = paths.get_mut(source) {
        *root = 1;
    }
    // Nodes are visited by increasing depth, so each count is final before
    // it is pushed one level further.
    for (depth, node) in order {
        let through = paths[node];
        for next in topology.neighbors(NodeIndex::new(node)) {
            if distance[next.index()] == Some(depth + 1) {
                paths[next.index()] = paths[next.index()].saturating_add(through);
            }
        }
    }
    Geodesics { distance, paths }
}

pub(crate) fn eccentricities(topology: &Topology) -> Vec<usize> {
    (0..topology.node_count())
        .map(|node| {
            distances(topology, node)
                .into_iter()
                .flatten()
                .max()
                .unwrap_or(0)
        })
        .collect()
}

/// Reachable nodes divided by the sum of distances to them; zero for
/// isolated nodes.
pub(crate) fn closeness(topology: &Topology) -> Vec<f64> {
    closeness_centrality(topology, false, PARALLEL_THRESHOLD)
        .into_iter()
        .map(|value| value.unwrap_or(0.0))
        .collect()
}

/// Brandes betweenness, counting each unordered pair once and unnormalised.
pub(crate) fn betweenness(topology: &Topology) -> Vec<f64> {
    betweenness_centrality(topology, false, false, PARALLEL_THRESHOLD)
        .into_iter()
        .map(|value| value.unwrap_or(0.0))
        .collect()
}

/// Dominant eigenpair of the adjacency matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Eigenvector {
    /// Per-node centrality, scaled so the largest entry is one.
    pub centrality: Vec<f64>,
    /// Estimate of the dominant eigenvalue.
    pub eigenvalue: f64,
}

impl Eigenvector {
    fn zeros(nodes: usize) -> Self {
        Self {
            centrality: vec![0.0; nodes],
            eigenvalue: 0.0,
        }
    }
}

pub(crate) fn eigenvector(topology: &Topology) -> Eigenvector {
    let nodes = topology.node_count();
    if topology.edge_count() == 0 {
        return Eigenvector::zeros(nodes);
    }
    let Ok(converged) = eigenvector_centrality(
        topology,
        |_| Ok::<f64, Infallible>(1.0),
        Some(EIGENVECTOR_MAX_ITERATIONS),
        Some(EIGENVECTOR_TOLERANCE),
    );
    let Some(mut centrality) = converged else {
        debug!(nodes, "eigenvector iteration did not converge");
        return Eigenvector::zeros(nodes);
    };
    let max = centrality.iter().copied().fold(0.0, f64::max);
    if max > 0.0 {
        centrality.iter_mut().for_each(|value| *value /= max);
    }
    // Rayleigh quotient of the converged vector.
    let (numerator, denominator) = topology.node_indices().fold(
        (0.0, 0.0),
        |(numerator, denominator), node| {
            let own = centrality[node.index()];
            let spread: f64 = topology
                .neighbors(node)
                .map(|neighbour| centrality[neighbour.index()])
                .sum();
            (numerator + own * spread, denominator + own * own)
        },
    );
    Eigenvector {
        eigenvalue: numerator / denominator,
        centrality,
    }
}

/// PageRank with each undirected edge followed in both directions.
pub(crate) fn pagerank(topology: &Topology) -> Vec<f64> {
    if topology.node_count() == 0 {
        return Vec::new();
    }
    page_rank(topology, PAGERANK_DAMPING, PAGERANK_ITERATIONS)
}

/// k-core number of every node.
pub(crate) fn shell_index(topology: &Topology) -> Vec<usize> {
    let cores = core_number(topology);
    (0..topology.node_count())
        .map(|node| cores.get(&NodeIndex::new(node)).copied().unwrap_or(0))
        .collect()
}

/// Newman's scalar assortativity: the Pearson correlation of endpoint values
/// over both orientations of every edge. Zero without edges or variance.
pub(crate) fn assortativity(topology: &Topology, values: &[f64]) -> f64 {
    let ends: Vec<(f64, f64)> = topology
        .edge_references()
        .filter_map(|edge| {
            let left = *values.get(edge.source().index())?;
            let right = *values.get(edge.target().index())?;
            Some([(left, right), (right, left)])
        })
        .flatten()
        .collect();
    if ends.is_empty() {
        return 0.0;
    }
    let count = ends.len() as f64;
    let mean = ends.iter().map(|&(x, _)| x).sum::<f64>() / count;
    let (covariance, variance, magnitude) =
        ends.iter()
            .fold((0.0, 0.0, 0.0), |(cov, var, mag), &(x, y)| {
                (
                    cov + (x - mean) * (y - mean),
                    var + (x - mean) * (x - mean),
                    mag + x * x,
                )
            });
    if variance <= 1e-12 * magnitude.max(f64::MIN_POSITIVE) {
        return 0.0;
    }
    covariance / variance
}

/// Maximal cliques, each sorted ascending. Isolated nodes form singleton
/// cliques; an empty graph has none.
pub(crate) fn maximal_cliques(topology: &Topology) -> Vec<Vec<usize>> {
    if topology.node_count() == 0 {
        return Vec::new();
    }
    bron_kerbosch(topology)
        .into_iter()
        .filter(|clique| !clique.is_empty())
        .map(|clique| {
            let mut members: Vec<usize> = clique.into_iter().map(NodeIndex::index).collect();
            members.sort_unstable();
            members
        })
        .collect()
}
