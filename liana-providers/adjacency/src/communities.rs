//! Community detection and partition agreement.
//!
//! Communities are reported as a membership vector: entry `v` is the
//! community of node `v`, numbered from zero in order of first appearance.
//! [`normalized_mutual_information`] scores how well two memberships agree,
//! which is how an enriched network is compared with its original.

use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    str::FromStr,
};

use liana_core::Network;
use rustworkx_core::connectivity::connected_components;
use tracing::{debug, instrument};

use crate::{errors::CommunityError, graph::AdjacencyGraph};

const LABEL_PROPAGATION_ROUNDS: usize = 100;
/// Smallest modularity gain that justifies moving a node.
const MODULARITY_TOLERANCE: f64 = 1e-10;

/// Supported community-detection algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommunityAlgorithm {
    /// Louvain modularity optimisation (Blondel et al.), visiting nodes in
    /// index order so results are reproducible.
    Blondel,
    /// Asynchronous label propagation in node order. Each node adopts the
    /// most frequent label among itself and its neighbours, preferring the
    /// larger label on ties.
    LabelPropagation,
    /// Connected components.
    Components,
}

impl CommunityAlgorithm {
    /// Every supported algorithm.
    pub const ALL: [Self; 3] = [Self::Blondel, Self::LabelPropagation, Self::Components];

    /// Returns the canonical identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blondel => "Blondel",
            Self::LabelPropagation => "LabelPropagation",
            Self::Components => "Components",
        }
    }
}

impl fmt::Display for CommunityAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommunityAlgorithm {
    type Err = CommunityError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == raw)
            .ok_or_else(|| CommunityError::UnknownAlgorithm {
                name: raw.to_owned(),
            })
    }
}

/// Partitions `graph` into communities with `algorithm`.
///
/// # Examples
/// ```
/// use liana_providers_adjacency::{AdjacencyGraph, CommunityAlgorithm, detect_communities};
///
/// let graph = AdjacencyGraph::from_edges("pairs", 4, [(0, 1), (2, 3)])?;
/// let membership = detect_communities(&graph, CommunityAlgorithm::Components);
/// assert_eq!(membership, vec![0, 0, 1, 1]);
/// # Ok::<(), liana_providers_adjacency::AdjacencyGraphError>(())
/// ```
#[must_use]
#[instrument(
    name = "adjacency.communities",
    skip(graph),
    fields(network = %graph.name(), algorithm = %algorithm),
)]
pub fn detect_communities(graph: &AdjacencyGraph, algorithm: CommunityAlgorithm) -> Vec<usize> {
    let raw = match algorithm {
        CommunityAlgorithm::Blondel => louvain(graph),
        CommunityAlgorithm::LabelPropagation => label_propagation(graph),
        CommunityAlgorithm::Components => components(graph),
    };
    let membership = relabel(&raw);
    debug!(
        communities = membership.iter().max().map_or(0, |&last| last + 1),
        "communities detected"
    );
    membership
}

/// Weighted graph of one Louvain level. Self-loop weight is carried only in
/// `strength`, which is the weighted degree including internal edges.
struct Level {
    adjacency: Vec<Vec<(usize, f64)>>,
    strength: Vec<f64>,
}

fn louvain(graph: &AdjacencyGraph) -> Vec<usize> {
    let topology = graph.topology();
    let mut level = Level {
        adjacency: topology
            .node_indices()
            .map(|node| {
                topology
                    .neighbors(node)
                    .map(|neighbour| (neighbour.index(), 1.0))
                    .collect()
            })
            .collect(),
        strength: topology
            .node_indices()
            .map(|node| topology.neighbors(node).count() as f64)
            .collect(),
    };
    let total: f64 = level.strength.iter().sum();
    let mut membership: Vec<usize> = (0..graph.node_count()).collect();
    if total == 0.0 {
        return membership;
    }
    loop {
        let Some(community) = move_nodes(&level, total) else {
            break;
        };
        let (next, labels) = aggregate(&level, &community);
        for label in &mut membership {
            *label = labels[*label];
        }
        level = next;
    }
    membership
}

/// Greedy local moving from singletons; `None` when no node moved.
fn move_nodes(level: &Level, total: f64) -> Option<Vec<usize>> {
    let nodes = level.strength.len();
    let mut community: Vec<usize> = (0..nodes).collect();
    let mut community_strength = level.strength.clone();
    let mut improved = false;
    loop {
        let mut moved = false;
        for node in 0..nodes {
            let own = community[node];
            let strength = level.strength[node];
            let mut links = BTreeMap::<usize, f64>::new();
            for &(neighbour, weight) in &level.adjacency[node] {
                *links.entry(community[neighbour]).or_default() += weight;
            }
            community_strength[own] -= strength;
            let gain = |target: usize, weight: f64| {
                weight - community_strength[target] * strength / total
            };
            let mut best = (own, gain(own, links.get(&own).copied().unwrap_or(0.0)));
            for (&target, &weight) in &links {
                let candidate = gain(target, weight);
                if candidate > best.1 + MODULARITY_TOLERANCE {
                    best = (target, candidate);
                }
            }
            community_strength[best.0] += strength;
            if best.0 != own {
                community[node] = best.0;
                moved = true;
            }
        }
        if !moved {
            break;
        }
        improved = true;
    }
    improved.then_some(community)
}

/// Collapses each community into one node.
fn aggregate(level: &Level, community: &[usize]) -> (Level, Vec<usize>) {
    let labels = relabel(community);
    let count = labels.iter().max().map_or(0, |&last| last + 1);
    let mut strength = vec![0.0; count];
    let mut weights = vec![BTreeMap::<usize, f64>::new(); count];
    for (node, neighbours) in level.adjacency.iter().enumerate() {
        let from = labels[node];
        strength[from] += level.strength[node];
        for &(neighbour, weight) in neighbours {
            let to = labels[neighbour];
            if from != to {
                *weights[from].entry(to).or_default() += weight;
            }
        }
    }
    let adjacency = weights
        .into_iter()
        .map(|targets| targets.into_iter().collect())
        .collect();
    (Level { adjacency, strength }, labels)
}

fn label_propagation(graph: &AdjacencyGraph) -> Vec<usize> {
    let topology = graph.topology();
    let mut labels: Vec<usize> = (0..graph.node_count()).collect();
    for _ in 0..LABEL_PROPAGATION_ROUNDS {
        let mut changed = false;
        for node in topology.node_indices() {
            let own = labels[node.index()];
            let mut counts = BTreeMap::from([(own, 1_usize)]);
            for neighbour in topology.neighbors(node) {
                *counts.entry(labels[neighbour.index()]).or_default() += 1;
            }
            let Some((&best, _)) = counts
                .iter()
                .max_by(|(left_label, left), (right_label, right)| {
                    left.cmp(right).then(left_label.cmp(right_label))
                })
            else {
                continue;
            };
            if best != own {
                labels[node.index()] = best;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    labels
}

fn components(graph: &AdjacencyGraph) -> Vec<usize> {
    let mut labels = vec![0; graph.node_count()];
    for (component, members) in connected_components(graph.topology()).into_iter().enumerate() {
        for member in members {
            labels[member.index()] = component;
        }
    }
    labels
}

/// Renumbers labels from zero in order of first appearance.
fn relabel(raw: &[usize]) -> Vec<usize> {
    let mut assigned = HashMap::new();
    raw.iter()
        .map(|label| {
            let next = assigned.len();
            *assigned.entry(*label).or_insert(next)
        })
        .collect()
}

/// Normalized mutual information of two memberships, using the geometric
/// mean of their entropies.
///
/// Two single-community memberships score 1; a single-community membership
/// against a split one scores 0.
///
/// # Examples
/// ```
/// use liana_providers_adjacency::normalized_mutual_information;
///
/// let nmi = normalized_mutual_information(&[0, 0, 1, 1], &[5, 5, 2, 2])?;
/// assert!((nmi - 1.0).abs() < 1e-12);
/// # Ok::<(), liana_providers_adjacency::CommunityError>(())
/// ```
///
/// # Errors
/// Returns [`CommunityError::LengthMismatch`] when the memberships cover a
/// different number of nodes.
pub fn normalized_mutual_information(left: &[usize], right: &[usize]) -> Result<f64, CommunityError> {
    if left.len() != right.len() {
        return Err(CommunityError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    if left.is_empty() {
        return Ok(1.0);
    }
    let total = left.len() as f64;
    let mut left_counts = HashMap::<usize, usize>::new();
    let mut right_counts = HashMap::<usize, usize>::new();
    let mut joint = HashMap::<(usize, usize), usize>::new();
    for (&l, &r) in left.iter().zip(right) {
        *left_counts.entry(l).or_default() += 1;
        *right_counts.entry(r).or_default() += 1;
        *joint.entry((l, r)).or_default() += 1;
    }
    let entropy = |counts: &HashMap<usize, usize>| -> f64 {
        counts
            .values()
            .map(|&count| {
                let probability = count as f64 / total;
                -probability * probability.ln()
            })
            .sum()
    };
    let left_entropy = entropy(&left_counts);
    let right_entropy = entropy(&right_counts);
    if left_entropy == 0.0 && right_entropy == 0.0 {
        return Ok(1.0);
    }
    if left_entropy == 0.0 || right_entropy == 0.0 {
        return Ok(0.0);
    }
    let mutual_information: f64 = joint
        .iter()
        .map(|(&(l, r), &count)| {
            let count = count as f64;
            let marginal = (left_counts[&l] * right_counts[&r]) as f64;
            (count / total) * (count * total / marginal).ln()
        })
        .sum();
    Ok((mutual_information / (left_entropy * right_entropy).sqrt()).clamp(0.0, 1.0))
}
