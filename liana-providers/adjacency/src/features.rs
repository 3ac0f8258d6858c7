//! Structural feature extraction and two-column CSV persistence.

use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::Path,
};

use liana_core::Network;
use tracing::instrument;

use crate::{errors::FeatureError, graph::AdjacencyGraph};

/// Whole-network structural summary.
#[derive(Clone, Debug, PartialEq)]
pub struct GlobalFeatures {
    /// Mean degree.
    pub k_mean: f64,
    /// Smallest degree.
    pub k_min: usize,
    /// Largest degree.
    pub k_max: usize,
    /// Smallest eccentricity, measured over reachable nodes.
    pub radius: usize,
    /// Largest eccentricity, measured over reachable nodes.
    pub diameter: usize,
    /// Number of nodes.
    pub num_nodes: usize,
    /// Number of edges.
    pub num_edges: usize,
    /// Degree assortativity coefficient.
    pub r_degree: f64,
    /// Dominant eigenvalue of the adjacency matrix.
    pub eigenvector_value: f64,
    /// Number of maximal cliques of the largest size.
    pub num_largest_cliques: usize,
    /// Size of the largest clique.
    pub len_max_clique: usize,
    /// Number of maximal cliques.
    pub len_maximal_cliques: usize,
}

impl GlobalFeatures {
    /// Returns the features as a table, keyed by field name in declaration
    /// order.
    #[must_use]
    pub fn to_table(&self) -> FeatureTable {
        let mut table = FeatureTable::new();
        for (key, value) in [
            ("k_mean", self.k_mean),
            ("k_min", self.k_min as f64),
            ("k_max", self.k_max as f64),
            ("radius", self.radius as f64),
            ("diameter", self.diameter as f64),
            ("num_nodes", self.num_nodes as f64),
            ("num_edges", self.num_edges as f64),
            ("r_degree", self.r_degree),
            ("eigenvector_value", self.eigenvector_value),
            ("num_largest_cliques", self.num_largest_cliques as f64),
            ("len_max_clique", self.len_max_clique as f64),
            ("len_maximal_cliques", self.len_maximal_cliques as f64),
        ] {
            table.insert_if_absent(key, value);
        }
        table
    }
}

/// Computes the [`GlobalFeatures`] of `graph`.
///
/// # Examples
/// ```
/// use liana_providers_adjacency::{AdjacencyGraph, global_features};
///
/// let triangle = AdjacencyGraph::from_edges("triangle", 3, [(0, 1), (1, 2), (2, 0)])?;
/// let features = global_features(&triangle);
/// assert_eq!(features.diameter, 1);
/// assert_eq!(features.len_max_clique, 3);
/// # Ok::<(), liana_providers_adjacency::AdjacencyGraphError>(())
/// ```
#[must_use]
#[instrument(
    name = "adjacency.global_features",
    skip(graph),
    fields(network = %graph.name(), nodes = graph.node_count()),
)]
pub fn global_features(graph: &AdjacencyGraph) -> GlobalFeatures {
    let nodes = graph.node_count();
    let degrees: Vec<usize> = (0..nodes).map(|node| graph.degree(node)).collect();
    let eccentricities = graph.eccentricities();
    let cliques = graph.maximal_cliques();
    let len_max_clique = cliques.iter().map(Vec::len).max().unwrap_or(0);
    let degree_values: Vec<f64> = degrees.iter().map(|&degree| degree as f64).collect();
    GlobalFeatures {
        k_mean: if nodes == 0 {
            0.0
        } else {
            degrees.iter().sum::<usize>() as f64 / nodes as f64
        },
        k_min: degrees.iter().copied().min().unwrap_or(0),
        k_max: degrees.iter().copied().max().unwrap_or(0),
        radius: eccentricities.iter().copied().min().unwrap_or(0),
        diameter: eccentricities.iter().copied().max().unwrap_or(0),
        num_nodes: nodes,
        num_edges: graph.edge_count(),
        r_degree: graph.assortativity(&degree_values),
        eigenvector_value: graph.eigenvector().eigenvalue,
        num_largest_cliques: cliques
            .iter()
            .filter(|clique| clique.len() == len_max_clique)
            .count(),
        len_max_clique,
        len_maximal_cliques: cliques.len(),
    }
}

/// A feature of a node pair `(vi, vj)`.
///
/// `*Left` variants measure `vi` and `*Right` variants measure `vj`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PairFeature {
    /// Degree of `vi`.
    DegreeLeft,
    /// Degree of `vj`.
    DegreeRight,
    /// Closeness centrality of `vi`.
    ClosenessLeft,
    /// Closeness centrality of `vj`.
    ClosenessRight,
    /// Eigenvector centrality of `vi`.
    EigenvectorLeft,
    /// Eigenvector centrality of `vj`.
    EigenvectorRight,
    /// PageRank of `vi`.
    PageRankLeft,
    /// PageRank of `vj`.
    PageRankRight,
    /// Number of shortest paths between the pair.
    ShortestPathCount,
    /// Hop length of the shortest path between the pair.
    ShortestPathLength,
}

impl PairFeature {
    /// Every pair feature in table order.
    pub const ALL: [Self; 10] = [
        Self::DegreeLeft,
        Self::DegreeRight,
        Self::ClosenessLeft,
        Self::ClosenessRight,
        Self::EigenvectorLeft,
        Self::EigenvectorRight,
        Self::PageRankLeft,
        Self::PageRankRight,
        Self::ShortestPathCount,
        Self::ShortestPathLength,
    ];

    /// Returns the table key for the feature.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::DegreeLeft => "degree_vi",
            Self::DegreeRight => "degree_vj",
            Self::ClosenessLeft => "closeness_vi",
            Self::ClosenessRight => "closeness_vj",
            Self::EigenvectorLeft => "eigenvector_vi",
            Self::EigenvectorRight => "eigenvector_vj",
            Self::PageRankLeft => "pagerank_vi",
            Self::PageRankRight => "pagerank_vj",
            Self::ShortestPathCount => "num_shortest_paths",
            Self::ShortestPathLength => "len_shortest_paths",
        }
    }

    /// Evaluates the feature for the pair `(left, right)`.
    ///
    /// Returns `None` when either node is missing, or for
    /// [`PairFeature::ShortestPathLength`] when `right` is unreachable.
    #[must_use]
    pub fn evaluate(self, graph: &AdjacencyGraph, left: usize, right: usize) -> Option<f64> {
        let nodes = graph.node_count();
        if left >= nodes || right >= nodes {
            return None;
        }
        let value = match self {
            Self::DegreeLeft => graph.degree(left) as f64,
            Self::DegreeRight => graph.degree(right) as f64,
            Self::ClosenessLeft => graph.closeness()[left],
            Self::ClosenessRight => graph.closeness()[right],
            Self::EigenvectorLeft => graph.eigenvector_centrality()[left],
            Self::EigenvectorRight => graph.eigenvector_centrality()[right],
            Self::PageRankLeft => graph.pagerank()[left],
            Self::PageRankRight => graph.pagerank()[right],
            Self::ShortestPathCount => graph.shortest_path_count(left, right) as f64,
            Self::ShortestPathLength => graph.shortest_path_length(left, right)? as f64,
        };
        Some(value)
    }
}

/// Ordered `key -> value` table persisted as two-column CSV without a
/// header row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureTable {
    entries: Vec<(String, f64)>,
}

impl FeatureTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `key` unless the key is already present.
    /// Returns whether the value was inserted.
    pub fn insert_if_absent(&mut self, key: impl Into<String>, value: f64) -> bool {
        let key = key.into();
        if self.get(&key).is_some() {
            return false;
        }
        self.entries.push((key, value));
        true
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|&(_, value)| value)
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(key, value)| (key.as_str(), *value))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes one `key,value` record per entry, quoting keys that need it.
    ///
    /// # Errors
    /// Returns [`FeatureError::Csv`] or [`FeatureError::Io`] when writing to
    /// `writer` fails.
    pub fn write_csv(&self, writer: impl Write) -> Result<(), FeatureError> {
        let mut records = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        for (key, value) in self.iter() {
            let rendered = value.to_string();
            records.write_record([key, rendered.as_str()])?;
        }
        records.flush()?;
        Ok(())
    }

    /// Reads `key,value` records, skipping blank lines. Later duplicates of a
    /// key are ignored.
    ///
    /// # Errors
    /// Returns [`FeatureError::MalformedRow`] for a record without exactly
    /// two fields, [`FeatureError::InvalidValue`] for a value that is not a
    /// number and [`FeatureError::Csv`] when the input is not valid CSV.
    pub fn read_csv(reader: impl Read) -> Result<Self, FeatureError> {
        let mut records = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut table = Self::new();
        for record in records.records() {
            let record = record?;
            let line = record
                .position()
                .map_or(0, |position| usize::try_from(position.line()).unwrap_or(usize::MAX));
            let (Some(key), Some(value), None) = (record.get(0), record.get(1), record.get(2))
            else {
                return Err(FeatureError::MalformedRow {
                    line,
                    fields: record.len(),
                });
            };
            let parsed = value
                .parse::<f64>()
                .map_err(|_| FeatureError::InvalidValue {
                    line,
                    key: key.to_owned(),
                    value: value.to_owned(),
                })?;
            table.insert_if_absent(key, parsed);
        }
        Ok(table)
    }

    /// Writes the table to `path`, replacing any existing file.
    ///
    /// # Errors
    /// Returns [`FeatureError::File`] when the file cannot be created and
    /// any error raised by [`FeatureTable::write_csv`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), FeatureError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| FeatureError::File {
            path: path.to_path_buf(),
            source,
        })?;
        self.write_csv(BufWriter::new(file))
    }

    /// Reads a table from `path`.
    ///
    /// # Errors
    /// Returns [`FeatureError::File`] when the file cannot be opened and any
    /// error raised by [`FeatureTable::read_csv`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FeatureError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| FeatureError::File {
            path: path.to_path_buf(),
            source,
        })?;
        Self::read_csv(file)
    }
}

impl From<&GlobalFeatures> for FeatureTable {
    fn from(features: &GlobalFeatures) -> Self {
        features.to_table()
    }
}
