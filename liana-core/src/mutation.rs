//! Application of selected pairs to a copy of the network.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    InsertionError, Result, error::NetworkError, network::MutableNetwork, pairs::CandidatePair,
};

/// Returns a copy of `network` with every pair in `pairs` added as an edge.
///
/// The input network is never modified.
///
/// # Errors
/// Returns [`InsertionError::DuplicateEdge`] when a pair is already an edge,
/// either in the input or because it appears twice in `pairs`, and
/// [`InsertionError::Network`] for any other failure reported by the network.
#[instrument(
    name = "core.insert",
    err,
    skip(network, pairs),
    fields(network = %network.name(), edges = network.edge_count(), inserting = pairs.len()),
)]
pub fn insert_edges<N: MutableNetwork>(network: &N, pairs: &[CandidatePair]) -> Result<N> {
    let mut enriched = network.clone();
    for pair in pairs {
        let (left, right) = (pair.left(), pair.right());
        if enriched.are_connected(left, right) {
            return Err(InsertionError::DuplicateEdge { left, right });
        }
        enriched.add_edge(left, right).map_err(|error| match error {
            NetworkError::DuplicateEdge { left, right } => {
                InsertionError::DuplicateEdge { left, right }
            }
            other => InsertionError::Network {
                network: Arc::from(network.name()),
                error: other,
            },
        })?;
    }
    debug!(edges = enriched.edge_count(), "applied selected pairs");
    Ok(enriched)
}
