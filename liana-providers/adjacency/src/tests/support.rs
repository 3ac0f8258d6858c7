use super::AdjacencyGraph;

#[track_caller]
pub(crate) fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

pub(crate) fn graph(nodes: usize, edges: &[(usize, usize)]) -> AdjacencyGraph {
    AdjacencyGraph::from_edges("fixture", nodes, edges.iter().copied()).expect("fixture edges are valid")
}

pub(crate) fn path(nodes: usize) -> AdjacencyGraph {
    let edges: Vec<_> = (1..nodes).map(|node| (node - 1, node)).collect();
    graph(nodes, &edges)
}

/// Triangle `0-1-2` with node 3 hanging off node 0.
pub(crate) fn paw() -> AdjacencyGraph {
    graph(4, &[(0, 1), (1, 2), (2, 0), (0, 3)])
}

/// Node 0 joined to every other node.
pub(crate) fn star(leaves: usize) -> AdjacencyGraph {
    let edges: Vec<_> = (1..=leaves).map(|leaf| (0, leaf)).collect();
    graph(leaves + 1, &edges)
}

pub(crate) fn square() -> AdjacencyGraph {
    graph(4, &[(0, 1), (1, 2), (2, 3), (3, 0)])
}
