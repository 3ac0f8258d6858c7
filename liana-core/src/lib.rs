//! Liana core library.
//!
//! Ranks the disconnected node pairs of a network with a structural
//! heuristic and inserts a fraction of them as new edges on a copy of the
//! network.

mod builder;
mod error;
mod heuristic;
mod inserter;
mod mutation;
mod network;
mod normalize;
mod pairs;
mod scoring;
mod selection;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{DEFAULT_PERCENTAGE, DEFAULT_SEED, EdgeInserterBuilder},
    error::{
        DegeneracyReason, InsertionError, InsertionErrorCode, NetworkError, NetworkErrorCode,
        Result,
    },
    heuristic::{Heuristic, NodeMetric, SimilarityMetric},
    inserter::{EdgeInserter, Enrichment, InsertionPlan, run},
    mutation::insert_edges,
    network::{MutableNetwork, Network},
    normalize::normalize,
    pairs::{CandidatePair, ScoredPair, enumerate_disconnected_pairs, split_scored},
    scoring::{SMOOTHING, score},
    selection::{SelectionOrder, select_edges},
};
