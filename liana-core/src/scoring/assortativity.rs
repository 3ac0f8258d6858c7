//! Assortativity-weighted strategies (`Assort<Metric>`).

use tracing::debug;

use crate::{
    error::DegeneracyReason,
    heuristic::NodeMetric,
    network::Network,
    pairs::{ScoredPair, enumerate_disconnected_pairs},
};

/// Smoothing constant added to value differences before inverting them.
pub const SMOOTHING: f64 = 0.1;

/// Weights every disconnected pair by how well it matches the network's
/// mixing pattern on `metric`.
///
/// Positive assortativity favours similar values with `1 / (|Δ| + E)`;
/// otherwise the raw difference `|Δ|` favours dissimilar values.
pub(super) fn score_assortativity<N: Network + ?Sized>(
    network: &N,
    metric: NodeMetric,
) -> Result<Vec<ScoredPair>, DegeneracyReason> {
    let values = network.node_values(metric);
    validate_values(network.node_count(), metric, &values)?;

    let coefficient = network.assortativity(&values);
    if !coefficient.is_finite() {
        return Err(DegeneracyReason::NonFiniteAssortativity { metric });
    }
    let homophilous = coefficient > 0.0;
    debug!(%metric, coefficient, homophilous, "resolved mixing pattern");

    Ok(enumerate_disconnected_pairs(network)
        .into_iter()
        .map(|pair| {
            let difference = (values[pair.left()] - values[pair.right()]).abs();
            let weight = if homophilous {
                (difference + SMOOTHING).recip()
            } else {
                difference
            };
            ScoredPair::new(pair, weight)
        })
        .collect())
}

fn validate_values(
    expected: usize,
    metric: NodeMetric,
    values: &[f64],
) -> Result<(), DegeneracyReason> {
    if values.len() != expected {
        return Err(DegeneracyReason::ValueCountMismatch {
            metric,
            expected,
            actual: values.len(),
        });
    }
    match values.iter().position(|value| !value.is_finite()) {
        Some(node) => Err(DegeneracyReason::NonFiniteNodeValue { metric, node }),
        None => Ok(()),
    }
}
