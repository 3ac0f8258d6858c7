use liana_core::{MutableNetwork, Network, NetworkError};

/// Adjacency-set graph with constant node measures.
#[derive(Clone, Debug, PartialEq)]
pub struct Sketch {
    adjacency: Vec<Vec<usize>>,
    edges: usize,
}

impl Sketch {
    #[must_use]
    pub fn new(nodes: usize, edges: &[(usize, usize)]) -> Self {
        let mut sketch = Self {
            adjacency: vec![Vec::new(); nodes],
            edges: 0,
        };
        for &(left, right) in edges {
            sketch.add_edge(left, right).expect("fixture edges are valid");
        }
        sketch
    }

    #[must_use]
    pub fn path(nodes: usize) -> Self {
        let edges: Vec<_> = (1..nodes).map(|node| (node - 1, node)).collect();
        Self::new(nodes, &edges)
    }
}

impl Network for Sketch {
    fn name(&self) -> &str {
        "sketch"
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
            .is_some_and(|neighbours| neighbours.contains(&right))
    }

    fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    fn closeness(&self) -> Vec<f64> {
        vec![1.0; self.node_count()]
    }

    fn betweenness(&self) -> Vec<f64> {
        vec![0.0; self.node_count()]
    }

    fn eigenvector_centrality(&self) -> Vec<f64> {
        vec![1.0; self.node_count()]
    }

    fn pagerank(&self) -> Vec<f64> {
        vec![1.0 / self.node_count() as f64; self.node_count()]
    }

    fn shell_index(&self) -> Vec<usize> {
        vec![1; self.node_count()]
    }

    fn assortativity(&self, _values: &[f64]) -> f64 {
        0.0
    }
}

impl MutableNetwork for Sketch {
    fn add_edge(&mut self, left: usize, right: usize) -> Result<(), NetworkError> {
        let node_count = self.adjacency.len();
        if let Some(&node) = [left, right].iter().find(|&&node| node >= node_count) {
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
        for (from, to) in [(left, right), (right, left)] {
            let list = &mut self.adjacency[from];
            let position = list.partition_point(|&existing| existing < to);
            list.insert(position, to);
        }
        self.edges += 1;
        Ok(())
    }
}
