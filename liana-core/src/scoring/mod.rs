//! Heuristic scoring of candidate pairs.
//!
//! Each strategy walks the network once and produces [`ScoredPair`] records
//! directly: the pair and its raw, non-negative weight. Weights are not yet
//! normalised; see [`crate::normalize`].
//!
//! - Degree strategies (`Deg`, `NbrDeg`) weight each candidate by its degree
//!   relative to the other candidates of the same source node. They are
//!   asymmetric, so only the first orientation encountered is kept.
//! - Assortativity strategies (`Assort<Metric>`) favour pairs with similar
//!   node values when the network is assortative on that metric and
//!   dissimilar values otherwise.
//! - Similarity strategies (`S<Metric>`) score every disconnected pair by a
//!   neighbourhood overlap measure.

mod assortativity;
mod degree;
mod similarity;

use tracing::{debug, instrument};

use crate::{Result, heuristic::Heuristic, network::Network, pairs::ScoredPair};

pub use self::assortativity::SMOOTHING;

/// Scores the candidate pairs of `network` under `heuristic`.
///
/// # Errors
/// Returns [`crate::InsertionError::DegenerateHeuristic`] when a weight would
/// require dividing by zero or the collaborator reports non-finite values.
///
/// # Examples
/// ```
/// # use liana_core::{Heuristic, Network, score};
/// # struct Path;
/// # impl Network for Path {
/// #     fn name(&self) -> &str { "path" }
/// #     fn node_count(&self) -> usize { 3 }
/// #     fn edge_count(&self) -> usize { 2 }
/// #     fn are_connected(&self, a: usize, b: usize) -> bool { a.abs_diff(b) == 1 }
/// #     fn neighbors(&self, node: usize) -> &[usize] {
/// #         match node { 0 => &[1], 1 => &[0, 2], _ => &[1] }
/// #     }
/// #     fn closeness(&self) -> Vec<f64> { vec![0.0; 3] }
/// #     fn betweenness(&self) -> Vec<f64> { vec![0.0; 3] }
/// #     fn eigenvector_centrality(&self) -> Vec<f64> { vec![0.0; 3] }
/// #     fn pagerank(&self) -> Vec<f64> { vec![0.0; 3] }
/// #     fn shell_index(&self) -> Vec<usize> { vec![1; 3] }
/// #     fn assortativity(&self, _: &[f64]) -> f64 { -1.0 }
/// # }
/// let scored = score(&Path, Heuristic::NeighbourDegree)?;
/// assert_eq!(scored.len(), 1);
/// assert_eq!((scored[0].pair().left(), scored[0].pair().right()), (0, 2));
/// assert_eq!(scored[0].weight(), 1.0);
/// # Ok::<(), liana_core::InsertionError>(())
/// ```
#[instrument(
    name = "core.score",
    err,
    skip(network, heuristic),
    fields(network = %network.name(), nodes = network.node_count(), heuristic = %heuristic),
)]
pub fn score<N: Network + ?Sized>(network: &N, heuristic: Heuristic) -> Result<Vec<ScoredPair>> {
    let scored = match heuristic {
        Heuristic::Degree => degree::score_degree(network),
        Heuristic::NeighbourDegree => degree::score_neighbour_degree(network),
        Heuristic::Assortativity(metric) => assortativity::score_assortativity(network, metric),
        Heuristic::Similarity(metric) => similarity::score_similarity(network, metric),
    }
    .map_err(|reason| crate::error::InsertionError::DegenerateHeuristic { heuristic, reason })?;
    debug!(candidates = scored.len(), "scored candidate pairs");
    Ok(scored)
}
