pub(crate) use super::{AdjacencyGraph, AdjacencyGraphError, FeatureError, FeatureTable};

mod communities;
mod support;
