//! In-memory undirected simple graph backed by `petgraph`.

use liana_core::{MutableNetwork, Network, NetworkError};
use rustworkx_core::petgraph::graph::{NodeIndex, UnGraph};

use crate::{errors::AdjacencyGraphError, measures};

/// Storage shared with the measure wrappers.
pub(crate) type Topology = UnGraph<(), ()>;

/// Undirected, unweighted simple graph.
///
/// Structure lives in a [`petgraph`](rustworkx_core::petgraph) `UnGraph`
/// whose node indices are the network's node identifiers. A sorted
/// neighbour index is maintained beside it because [`Network::neighbors`]
/// hands out ascending slices.
///
/// # Examples
/// ```
/// use liana_core::Network;
/// use liana_providers_adjacency::AdjacencyGraph;
///
/// let graph = AdjacencyGraph::from_edges("triangle", 3, [(0, 1), (1, 2), (2, 0)])?;
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.neighbors(1), &[0, 2]);
/// # Ok::<(), liana_providers_adjacency::AdjacencyGraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct AdjacencyGraph {
    name: String,
    topology: Topology,
    neighbours: Vec<Vec<usize>>,
}

impl PartialEq for AdjacencyGraph {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.neighbours == other.neighbours
    }
}

impl Eq for AdjacencyGraph {}

impl AdjacencyGraph {
    /// Creates an edgeless graph with `node_count` nodes.
    #[must_use]
    pub fn new(name: impl Into<String>, node_count: usize) -> Self {
        let mut topology = Topology::with_capacity(node_count, 0);
        for _ in 0..node_count {
            topology.add_node(());
        }
        Self {
            name: name.into(),
            topology,
            neighbours: vec![Vec::new(); node_count],
        }
    }

    /// Builds a graph from undirected edges. Repeated edges collapse into one.
    ///
    /// # Errors
    /// Returns [`AdjacencyGraphError::Network`] when an edge is a self-loop
    /// or references a node outside `[0, node_count)`.
    pub fn from_edges(
        name: impl Into<String>,
        node_count: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, AdjacencyGraphError> {
        let mut graph = Self::new(name, node_count);
        for (left, right) in edges {
            graph.insert_collapsing(left, right)?;
        }
        Ok(graph)
    }

    /// Adds an edge unless it already exists.
    pub(crate) fn insert_collapsing(
        &mut self,
        left: usize,
        right: usize,
    ) -> Result<(), AdjacencyGraphError> {
        match self.add_edge(left, right) {
            Ok(()) | Err(NetworkError::DuplicateEdge { .. }) => Ok(()),
            Err(source) => Err(AdjacencyGraphError::Network {
                name: self.name.clone(),
                source,
            }),
        }
    }

    pub(crate) const fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Renames the graph.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Iterates over every edge once, as ascending `(left, right)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.neighbours.iter().enumerate().flat_map(|(left, neighbours)| {
            neighbours
                .iter()
                .copied()
                .filter(move |&right| left < right)
                .map(move |right| (left, right))
        })
    }

    /// Returns the dominant eigenpair of the adjacency matrix.
    #[must_use]
    pub fn eigenvector(&self) -> measures::Eigenvector {
        measures::eigenvector(&self.topology)
    }

    /// Returns the number of shortest paths between `source` and `target`;
    /// zero when either node is missing or unreachable.
    #[must_use]
    pub fn shortest_path_count(&self, source: usize, target: usize) -> u64 {
        if source >= self.node_count() {
            return 0;
        }
        measures::geodesics(&self.topology, source)
            .paths
            .get(target)
            .copied()
            .unwrap_or(0)
    }

    /// Returns the hop distance between `source` and `target`, if reachable.
    #[must_use]
    pub fn shortest_path_length(&self, source: usize, target: usize) -> Option<usize> {
        if source >= self.node_count() {
            return None;
        }
        measures::geodesics(&self.topology, source)
            .distance
            .get(target)
            .copied()
            .flatten()
    }

    /// Returns the eccentricity of every node over the nodes it can reach.
    #[must_use]
    pub fn eccentricities(&self) -> Vec<usize> {
        measures::eccentricities(&self.topology)
    }

    /// Returns every maximal clique, each sorted ascending.
    #[must_use]
    pub fn maximal_cliques(&self) -> Vec<Vec<usize>> {
        measures::maximal_cliques(&self.topology)
    }
}

impl Network for AdjacencyGraph {
    fn name(&self) -> &str {
        &self.name
    }

    fn node_count(&self) -> usize {
        self.topology.node_count()
    }

    fn edge_count(&self) -> usize {
        self.topology.edge_count()
    }

    fn are_connected(&self, left: usize, right: usize) -> bool {
        let nodes = self.node_count();
        left < nodes
            && right < nodes
            && self
                .topology
                .contains_edge(NodeIndex::new(left), NodeIndex::new(right))
    }

    fn neighbors(&self, node: usize) -> &[usize] {
        self.neighbours.get(node).map_or(&[][..], Vec::as_slice)
    }

    fn closeness(&self) -> Vec<f64> {
        measures::closeness(&self.topology)
    }

    fn betweenness(&self) -> Vec<f64> {
        measures::betweenness(&self.topology)
    }

    fn eigenvector_centrality(&self) -> Vec<f64> {
        self.eigenvector().centrality
    }

    fn pagerank(&self) -> Vec<f64> {
        measures::pagerank(&self.topology)
    }

    fn shell_index(&self) -> Vec<usize> {
        measures::shell_index(&self.topology)
    }

    fn assortativity(&self, values: &[f64]) -> f64 {
        measures::assortativity(&self.topology, values)
    }
}

impl MutableNetwork for AdjacencyGraph {
    fn add_edge(&mut self, left: usize, right: usize) -> Result<(), NetworkError> {
        let node_count = self.node_count();
        if let Some(node) = [left, right].into_iter().find(|&node| node >= node_count) {
            return Err(NetworkError::OutOfBounds { node, node_count });
        }
        if left == right {
            return Err(NetworkError::SelfLoop { node: left });
        }
        if self.are_connected(left, right) {
            return Err(NetworkError::DuplicateEdge {
                left: left.min(right),
                right: left.max(right),
            });
        }
        self.topology
            .add_edge(NodeIndex::new(left), NodeIndex::new(right), ());
        for (node, neighbour) in [(left, right), (right, left)] {
            let list = &mut self.neighbours[node];
            let position = list.partition_point(|&existing| existing < neighbour);
            list.insert(position, neighbour);
        }
        Ok(())
    }
}
