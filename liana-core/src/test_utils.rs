//! Shared test utilities for `liana-core`.

use liana_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;
use rand::RngCore;

use crate::{
    error::NetworkError,
    network::{MutableNetwork, Network},
};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `LIANA_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Asserts two floats agree to within `1e-9`.
#[track_caller]
pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Random source that fails the test if it is ever consulted.
pub(crate) struct PanickingRng;

impl RngCore for PanickingRng {
    fn next_u32(&mut self) -> u32 {
        panic!("random source must not be consulted");
    }

    fn next_u64(&mut self) -> u64 {
        panic!("random source must not be consulted");
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        panic!("random source must not be consulted");
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        panic!("random source must not be consulted");
    }
}

/// Minimal adjacency-list [`Network`] for unit tests.
///
/// Node measures default to degree-derived stand-ins and closeness from
/// breadth-first search; individual measures can be overridden.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestGraph {
    adjacency: Vec<Vec<usize>>,
    edges: usize,
    closeness: Option<Vec<f64>>,
    betweenness: Option<Vec<f64>>,
    eigenvector: Option<Vec<f64>>,
    pagerank: Option<Vec<f64>>,
}

impl TestGraph {
    /// Builds a graph from undirected edges, ignoring repeats.
    pub(crate) fn from_edges(nodes: usize, edges: &[(usize, usize)]) -> Self {
        let mut graph = Self {
            adjacency: vec![Vec::new(); nodes],
            edges: 0,
            closeness: None,
            betweenness: None,
            eigenvector: None,
            pagerank: None,
        };
        for &(left, right) in edges {
            if left != right && !graph.are_connected(left, right) {
                graph
                    .add_edge(left, right)
                    .expect("test edges must reference existing nodes");
            }
        }
        graph
    }

    /// Builds the path `0 - 1 - ... - (nodes - 1)`.
    pub(crate) fn path(nodes: usize) -> Self {
        let edges: Vec<_> = (1..nodes).map(|node| (node - 1, node)).collect();
        Self::from_edges(nodes, &edges)
    }

    pub(crate) fn with_closeness(mut self, values: Vec<f64>) -> Self {
        self.closeness = Some(values);
        self
    }

    pub(crate) fn with_betweenness(mut self, values: Vec<f64>) -> Self {
        self.betweenness = Some(values);
        self
    }

    pub(crate) fn with_eigenvector(mut self, values: Vec<f64>) -> Self {
        self.eigenvector = Some(values);
        self
    }

    pub(crate) fn with_pagerank(mut self, values: Vec<f64>) -> Self {
        self.pagerank = Some(values);
        self
    }

    fn degree_values(&self, scale: impl Fn(f64) -> f64) -> Vec<f64> {
        self.adjacency
            .iter()
            .map(|neighbours| scale(neighbours.len() as f64))
            .collect()
    }

    fn bfs_closeness(&self, source: usize) -> f64 {
        let mut distance = vec![usize::MAX; self.adjacency.len()];
        distance[source] = 0;
        let mut queue = std::collections::VecDeque::from([source]);
        let (mut reached, mut total) = (0_usize, 0_usize);
        while let Some(node) = queue.pop_front() {
            for &next in &self.adjacency[node] {
                if distance[next] == usize::MAX {
                    distance[next] = distance[node] + 1;
                    reached += 1;
                    total += distance[next];
                    queue.push_back(next);
                }
            }
        }
        if total == 0 {
            0.0
        } else {
            reached as f64 / total as f64
        }
    }
}

impl Network for TestGraph {
    fn name(&self) -> &str {
        "test-graph"
    }

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edges
    }

    fn are_connected(&self, left: usize, right: usize) -> bool {
        self.adjacency
            .get(left)
            .is_some_and(|neighbours| neighbours.binary_search(&right).is_ok())
    }

    fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    fn closeness(&self) -> Vec<f64> {
        self.closeness.clone().unwrap_or_else(|| {
            (0..self.node_count())
                .map(|node| self.bfs_closeness(node))
                .collect()
        })
    }

    fn betweenness(&self) -> Vec<f64> {
        self.betweenness
            .clone()
            .unwrap_or_else(|| self.degree_values(|degree| degree * degree))
    }

    fn eigenvector_centrality(&self) -> Vec<f64> {
        self.eigenvector
            .clone()
            .unwrap_or_else(|| self.degree_values(f64::sqrt))
    }

    fn pagerank(&self) -> Vec<f64> {
        self.pagerank.clone().unwrap_or_else(|| {
            let total = (2 * self.edges).max(1) as f64;
            self.degree_values(|degree| degree / total)
        })
    }

    fn shell_index(&self) -> Vec<usize> {
        self.adjacency.iter().map(|n| n.len().min(1)).collect()
    }

    /// Pearson correlation of endpoint values over both orientations of
    /// every edge; zero without edges or variance.
    fn assortativity(&self, values: &[f64]) -> f64 {
        let mut ends = Vec::with_capacity(2 * self.edges);
        for (left, neighbours) in self.adjacency.iter().enumerate() {
            for &right in neighbours {
                ends.push((values[left], values[right]));
            }
        }
        if ends.is_empty() {
            return 0.0;
        }
        let count = ends.len() as f64;
        let mean = ends.iter().map(|&(x, _)| x).sum::<f64>() / count;
        let (covariance, variance) = ends.iter().fold((0.0, 0.0), |(cov, var), &(x, y)| {
            (cov + (x - mean) * (y - mean), var + (x - mean) * (x - mean))
        });
        if variance == 0.0 {
            0.0
        } else {
            covariance / variance
        }
    }
}

impl MutableNetwork for TestGraph {
    fn add_edge(&mut self, left: usize, right: usize) -> Result<(), NetworkError> {
        let node_count = self.adjacency.len();
        for node in [left, right] {
            if node >= node_count {
                return Err(NetworkError::OutOfBounds { node, node_count });
            }
        }
        if left == right {
            return Err(NetworkError::SelfLoop { node: left });
        }
        let position = match self.adjacency[left].binary_search(&right) {
            Ok(_) => {
                return Err(NetworkError::DuplicateEdge {
                    left: left.min(right),
                    right: left.max(right),
                });
            }
            Err(position) => position,
        };
        self.adjacency[left].insert(position, right);
        let mirrored = self.adjacency[right]
            .binary_search(&left)
            .unwrap_or_else(|position| position);
        self.adjacency[right].insert(mirrored, left);
        self.edges += 1;
        Ok(())
    }
}
