//! Adjacency provider implementing the liana network traits.
//!
//! Supplies an in-memory undirected simple graph built on `petgraph`, the
//! node-level measures the assortativity heuristics consume (computed with
//! `rustworkx-core`), edge-list ingestion, structural feature extraction
//! with CSV persistence, and community detection for comparing a network
//! with its enriched copy.

mod communities;
mod errors;
mod features;
mod graph;
mod ingest;
mod measures;

pub use communities::{CommunityAlgorithm, detect_communities, normalized_mutual_information};
pub use errors::{AdjacencyGraphError, CommunityError, FeatureError};
pub use features::{FeatureTable, GlobalFeatures, PairFeature, global_features};
pub use graph::AdjacencyGraph;
pub use ingest::MAX_NODE_INDEX;
pub use measures::Eigenvector;

#[cfg(test)]
mod tests;
