//! Synthetic Erdős–Rényi networks for benchmarks.

use liana_providers_adjacency::{AdjacencyGraph, AdjacencyGraphError};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;

/// Configuration for a `G(n, p)` random network.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticConfig {
    /// Number of nodes.
    pub node_count: usize,
    /// Probability that any given pair is joined.
    pub edge_probability: f64,
    /// Seed for the generator.
    pub seed: u64,
}

/// Errors raised while generating synthetic networks.
#[derive(Debug, Error)]
pub enum SyntheticError {
    /// The network must have at least two nodes.
    #[error("synthetic networks need at least two nodes (got {got})")]
    TooFewNodes {
        /// Requested node count.
        got: usize,
    },
    /// Edge probability outside `[0, 1]`.
    #[error("edge probability must lie in [0, 1] (got {got})")]
    InvalidProbability {
        /// Requested probability.
        got: f64,
    },
    /// The generated edges were rejected by the graph.
    #[error(transparent)]
    Graph(#[from] AdjacencyGraphError),
}

/// Draws a `G(n, p)` network.
///
/// # Errors
/// Returns [`SyntheticError`] when the configuration is out of range.
///
/// # Examples
/// ```
/// use liana_benches::source::{SyntheticConfig, generate};
/// use liana_core::Network;
///
/// let graph = generate(&SyntheticConfig { node_count: 20, edge_probability: 1.0, seed: 1 })?;
/// assert_eq!(graph.edge_count(), 190);
/// # Ok::<(), liana_benches::source::SyntheticError>(())
/// ```
pub fn generate(config: &SyntheticConfig) -> Result<AdjacencyGraph, SyntheticError> {
    if config.node_count < 2 {
        return Err(SyntheticError::TooFewNodes {
            got: config.node_count,
        });
    }
    if !(0.0..=1.0).contains(&config.edge_probability) {
        return Err(SyntheticError::InvalidProbability {
            got: config.edge_probability,
        });
    }
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let nodes = config.node_count;
    let edges: Vec<(usize, usize)> = (0..nodes)
        .flat_map(|left| (left + 1..nodes).map(move |right| (left, right)))
        .filter(|_| rng.gen_bool(config.edge_probability))
        .collect();
    let name = format!("gnp-{nodes}-{}", config.seed);
    Ok(AdjacencyGraph::from_edges(name, nodes, edges)?)
}
