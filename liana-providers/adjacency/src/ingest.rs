//! Edge-list ingestion and serialisation.
//!
//! The format holds one `u v` pair of zero-based node indices per line, or a
//! lone `u` declaring a node that may have no edges. Blank lines and text
//! after `#` are ignored.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use liana_core::Network;
use tracing::{debug, instrument};

use crate::{errors::AdjacencyGraphError, graph::AdjacencyGraph};

enum Entry {
    Node(usize),
    Edge(usize, usize),
}

/// Largest node index an edge list may mention.
pub const MAX_NODE_INDEX: usize = (1 << 24) - 1;

fn parse_node(line: usize, token: &str) -> Result<usize, AdjacencyGraphError> {
    let node = token
        .parse::<usize>()
        .map_err(|_| AdjacencyGraphError::InvalidNode {
            line,
            token: token.to_owned(),
        })?;
    if node > MAX_NODE_INDEX {
        return Err(AdjacencyGraphError::NodeIndexTooLarge {
            line,
            node,
            limit: MAX_NODE_INDEX,
        });
    }
    Ok(node)
}

fn parse_line(line: usize, raw: &str) -> Result<Option<Entry>, AdjacencyGraphError> {
    let content = raw.split_once('#').map_or(raw, |(data, _)| data).trim();
    let mut tokens = content.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (None, _, _) => Ok(None),
        (Some(node), None, _) => parse_node(line, node).map(|node| Some(Entry::Node(node))),
        (Some(left), Some(right), None) => {
            let left = parse_node(line, left)?;
            let right = parse_node(line, right)?;
            if left == right {
                return Err(AdjacencyGraphError::SelfLoop { line, node: left });
            }
            Ok(Some(Entry::Edge(left, right)))
        }
        _ => Err(AdjacencyGraphError::MalformedLine {
            line,
            content: content.to_owned(),
        }),
    }
}

impl AdjacencyGraph {
    /// Parses an edge list. The node count is one more than the largest
    /// index mentioned; repeated edges collapse into one.
    ///
    /// # Examples
    /// ```
    /// use liana_core::Network;
    /// use liana_providers_adjacency::AdjacencyGraph;
    ///
    /// let text = "# triangle plus an isolated node\n0 1\n1 2\n2 0\n4\n";
    /// let graph = AdjacencyGraph::read_edge_list("demo", text.as_bytes())?;
    /// assert_eq!(graph.node_count(), 5);
    /// assert_eq!(graph.edge_count(), 3);
    /// # Ok::<(), liana_providers_adjacency::AdjacencyGraphError>(())
    /// ```
    ///
    /// # Errors
    /// Returns [`AdjacencyGraphError::MalformedLine`],
    /// [`AdjacencyGraphError::InvalidNode`],
    /// [`AdjacencyGraphError::NodeIndexTooLarge`] or
    /// [`AdjacencyGraphError::SelfLoop`] with the one-based line number of
    /// the offending line, or [`AdjacencyGraphError::Io`] when reading fails.
    pub fn read_edge_list(
        name: impl Into<String>,
        reader: impl BufRead,
    ) -> Result<Self, AdjacencyGraphError> {
        let mut entries = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            if let Some(entry) = parse_line(index + 1, &line?)? {
                entries.push(entry);
            }
        }
        let node_count = entries
            .iter()
            .map(|entry| match *entry {
                Entry::Node(node) => node + 1,
                Entry::Edge(left, right) => left.max(right) + 1,
            })
            .max()
            .unwrap_or(0);
        let mut graph = Self::new(name, node_count);
        for entry in entries {
            if let Entry::Edge(left, right) = entry {
                graph.insert_collapsing(left, right)?;
            }
        }
        Ok(graph)
    }

    /// Loads an edge list from `path`, naming the graph after the file stem.
    ///
    /// # Errors
    /// Returns [`AdjacencyGraphError::File`] when the file cannot be opened
    /// and any error raised by [`AdjacencyGraph::read_edge_list`].
    #[instrument(name = "adjacency.load", err, skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_edge_list(path: impl AsRef<Path>) -> Result<Self, AdjacencyGraphError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| AdjacencyGraphError::File {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_stem()
            .map_or_else(|| "network".to_owned(), |stem| stem.to_string_lossy().into_owned());
        let graph = Self::read_edge_list(name, BufReader::new(file))?;
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "edge list loaded"
        );
        Ok(graph)
    }

    /// Writes the graph as an edge list: edges in ascending `(left, right)`
    /// order, isolated nodes as lone indices.
    ///
    /// # Errors
    /// Propagates I/O failures from `writer`.
    pub fn write_edge_list(&self, mut writer: impl Write) -> std::io::Result<()> {
        for node in 0..self.node_count() {
            let neighbours = self.neighbors(node);
            if neighbours.is_empty() {
                writeln!(writer, "{node}")?;
                continue;
            }
            for &right in neighbours.iter().filter(|&&right| right > node) {
                writeln!(writer, "{node} {right}")?;
            }
        }
        writer.flush()
    }

    /// Writes the graph as an edge list to `path`, replacing any existing
    /// file.
    ///
    /// # Errors
    /// Returns [`AdjacencyGraphError::File`] when the file cannot be created
    /// and [`AdjacencyGraphError::Io`] when writing fails.
    pub fn save_edge_list(&self, path: impl AsRef<Path>) -> Result<(), AdjacencyGraphError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| AdjacencyGraphError::File {
            path: path.to_path_buf(),
            source,
        })?;
        self.write_edge_list(BufWriter::new(file))?;
        Ok(())
    }
}
