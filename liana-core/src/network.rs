//! Graph collaborator abstractions consumed by the insertion engine.
//!
//! The engine never stores or traverses graphs itself. Providers implement
//! [`Network`] to expose structural queries and node-level measures, and
//! [`MutableNetwork`] to accept new edges on an owned copy.

use crate::{error::NetworkError, heuristic::NodeMetric};

/// Read-only view over an undirected, unweighted simple graph.
///
/// Nodes are identified by indices in `[0, node_count)`.
///
/// # Examples
/// ```
/// use liana_core::{Network, NodeMetric};
///
/// struct Pair;
///
/// impl Network for Pair {
///     fn name(&self) -> &str { "pair" }
///     fn node_count(&self) -> usize { 2 }
///     fn edge_count(&self) -> usize { 1 }
///     fn are_connected(&self, left: usize, right: usize) -> bool { left != right }
///     fn neighbors(&self, node: usize) -> &[usize] {
///         if node == 0 { &[1] } else { &[0] }
///     }
///     fn closeness(&self) -> Vec<f64> { vec![1.0, 1.0] }
///     fn betweenness(&self) -> Vec<f64> { vec![0.0, 0.0] }
///     fn eigenvector_centrality(&self) -> Vec<f64> { vec![1.0, 1.0] }
///     fn pagerank(&self) -> Vec<f64> { vec![0.5, 0.5] }
///     fn shell_index(&self) -> Vec<usize> { vec![1, 1] }
///     fn assortativity(&self, _values: &[f64]) -> f64 { 0.0 }
/// }
///
/// let pair = Pair;
/// assert_eq!(pair.degree(0), 1);
/// assert_eq!(pair.degrees(), vec![1, 1]);
/// assert_eq!(pair.node_values(NodeMetric::Shell), vec![1.0, 1.0]);
/// ```
pub trait Network {
    /// Returns a human-readable name used in diagnostics.
    fn name(&self) -> &str;

    /// Returns the number of nodes.
    fn node_count(&self) -> usize;

    /// Returns the number of undirected edges.
    fn edge_count(&self) -> usize;

    /// Returns whether an edge joins `left` and `right`.
    fn are_connected(&self, left: usize, right: usize) -> bool;

    /// Returns the neighbours of `node`, sorted ascending.
    fn neighbors(&self, node: usize) -> &[usize];

    /// Returns the degree of `node`.
    fn degree(&self, node: usize) -> usize {
        self.neighbors(node).len()
    }

    /// Returns the degree of every node, indexed by node.
    fn degrees(&self) -> Vec<usize> {
        (0..self.node_count()).map(|node| self.degree(node)).collect()
    }

    /// Closeness centrality per node.
    fn closeness(&self) -> Vec<f64>;

    /// Betweenness centrality per node.
    fn betweenness(&self) -> Vec<f64>;

    /// Eigenvector centrality per node.
    fn eigenvector_centrality(&self) -> Vec<f64>;

    /// PageRank per node.
    fn pagerank(&self) -> Vec<f64>;

    /// Shell index (k-core number) per node.
    fn shell_index(&self) -> Vec<usize>;

    /// Global assortativity coefficient of the per-node `values`.
    fn assortativity(&self, values: &[f64]) -> f64;

    /// Returns the per-node values of `metric`.
    fn node_values(&self, metric: NodeMetric) -> Vec<f64> {
        match metric {
            NodeMetric::Degree => self.degrees().into_iter().map(|d| d as f64).collect(),
            NodeMetric::Closeness => self.closeness(),
            NodeMetric::Betweenness => self.betweenness(),
            NodeMetric::Eigenvector => self.eigenvector_centrality(),
            NodeMetric::PageRank => self.pagerank(),
            NodeMetric::Shell => self.shell_index().into_iter().map(|k| k as f64).collect(),
        }
    }
}

/// A [`Network`] whose owned copies can gain edges.
pub trait MutableNetwork: Network + Clone {
    /// Adds the undirected edge `(left, right)`.
    ///
    /// # Errors
    /// Implementations return [`NetworkError::OutOfBounds`] for invalid
    /// indices, [`NetworkError::SelfLoop`] when `left == right`, and
    /// [`NetworkError::DuplicateEdge`] when the edge already exists.
    fn add_edge(&mut self, left: usize, right: usize) -> Result<(), NetworkError>;
}
