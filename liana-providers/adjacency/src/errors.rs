use std::path::PathBuf;

use liana_core::NetworkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdjacencyGraphError {
    #[error("line {line}: expected `<u> <v>` or `<u>` but found `{content}`")]
    MalformedLine { line: usize, content: String },
    #[error("line {line}: `{token}` is not a node index")]
    InvalidNode { line: usize, token: String },
    #[error("line {line}: node {node} exceeds the largest supported index {limit}")]
    NodeIndexTooLarge {
        line: usize,
        node: usize,
        limit: usize,
    },
    #[error("line {line}: self-loop on node {node}")]
    SelfLoop { line: usize, node: usize },
    #[error("network `{name}` rejected edge: {source}")]
    Network {
        name: String,
        #[source]
        source: NetworkError,
    },
    #[error("failed to access `{path}`: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("line {line}: expected `key,value` but found {fields} field(s)")]
    MalformedRow { line: usize, fields: usize },
    #[error("line {line}: value `{value}` for `{key}` is not a number")]
    InvalidValue {
        line: usize,
        key: String,
        value: String,
    },
    #[error("failed to access `{path}`: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while detecting or comparing communities.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommunityError {
    #[error("unknown community algorithm `{name}`; expected `LabelPropagation` or `Components`")]
    UnknownAlgorithm { name: String },
    #[error("membership length mismatch: left={left}, right={right}")]
    LengthMismatch { left: usize, right: usize },
}
