//! Community agreement between a network and its enriched copy.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use clap::Args;
use liana_core::{DEFAULT_SEED, EdgeInserterBuilder, Heuristic, Network};
use liana_providers_adjacency::{
    CommunityAlgorithm, detect_communities, normalized_mutual_information,
};
use tracing::{Span, field, info, instrument};

use super::commands::{CliError, OrderArg, load_network};

/// Options accepted by the `nmi` command.
#[derive(Debug, Args, Clone)]
pub struct NmiArgs {
    /// Edge-list file describing the network.
    pub path: PathBuf,

    /// Heuristic identifier, such as `Deg`, `AssortClos` or `SJac`.
    #[arg(long)]
    pub heuristic: String,

    /// Number of edges to insert, as a percentage of the current edge count.
    #[arg(long)]
    pub percentage: f64,

    /// Community-detection algorithm: `Blondel`, `LabelPropagation` or
    /// `Components`.
    #[arg(long, default_value = "Blondel")]
    pub algorithm: String,

    /// Seed for tie-breaking.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Which end of the weight ranking to insert from.
    #[arg(long, value_enum, default_value_t = OrderArg::Ascending)]
    pub order: OrderArg,

    /// Write one `original enriched` community pair per node to this file.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Override name for the network (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Outcome of the `nmi` command.
#[derive(Debug, Clone)]
pub struct NmiSummary {
    /// Name of the compared network.
    pub network: String,
    /// Heuristic that enriched the copy.
    pub heuristic: Heuristic,
    /// Algorithm that partitioned both networks.
    pub algorithm: CommunityAlgorithm,
    /// Number of edges inserted.
    pub inserted: usize,
    /// Communities found in the original network.
    pub communities_before: usize,
    /// Communities found in the enriched network.
    pub communities_after: usize,
    /// Normalized mutual information of the two partitions.
    pub nmi: f64,
    /// Where the membership pairs were written, if anywhere.
    pub output: Option<PathBuf>,
}

impl NmiSummary {
    pub(super) fn render(&self, writer: &mut impl Write) -> io::Result<()> {
        writeln!(writer, "network: {}", self.network)?;
        writeln!(writer, "heuristic: {}", self.heuristic)?;
        writeln!(writer, "algorithm: {}", self.algorithm)?;
        writeln!(writer, "inserted: {}", self.inserted)?;
        writeln!(
            writer,
            "communities: {} -> {}",
            self.communities_before, self.communities_after
        )?;
        if let Some(path) = &self.output {
            writeln!(writer, "output: {}", path.display())?;
        }
        writeln!(writer, "nmi: {}", self.nmi)
    }
}

fn community_count(membership: &[usize]) -> usize {
    membership.iter().max().map_or(0, |&last| last + 1)
}

#[instrument(
    name = "cli.nmi",
    err,
    skip(args),
    fields(path = field::Empty, heuristic = field::Empty, algorithm = field::Empty),
)]
pub(super) fn run_nmi(args: NmiArgs) -> Result<NmiSummary, CliError> {
    let NmiArgs {
        path,
        heuristic,
        percentage,
        algorithm,
        seed,
        order,
        output,
        name,
    } = args;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    let heuristic = heuristic.parse::<Heuristic>()?;
    span.record("heuristic", field::display(heuristic));
    let algorithm = algorithm.parse::<CommunityAlgorithm>()?;
    span.record("algorithm", field::display(algorithm));

    let inserter = EdgeInserterBuilder::new()
        .with_heuristic(heuristic)
        .with_percentage(percentage)
        .with_seed(seed)
        .with_selection_order(order.into())
        .build()?;
    let graph = load_network(&path, name.as_deref())?;
    let enrichment = inserter.run(&graph)?;
    let before = detect_communities(&graph, algorithm);
    let after = detect_communities(enrichment.network(), algorithm);
    let nmi = normalized_mutual_information(&before, &after)?;
    if let Some(target) = &output {
        write_membership_pairs(target, &before, &after)?;
    }
    info!(network = graph.name(), nmi, "nmi completed");
    Ok(NmiSummary {
        network: graph.name().to_owned(),
        heuristic,
        algorithm,
        inserted: enrichment.inserted().len(),
        communities_before: community_count(&before),
        communities_after: community_count(&after),
        nmi,
        output,
    })
}

/// Writes `original enriched` community labels, one node per line.
pub(super) fn write_membership_pairs(
    path: &Path,
    original: &[usize],
    enriched: &[usize],
) -> Result<(), CliError> {
    let to_cli = |source: io::Error| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(to_cli)?);
    for (before, after) in original.iter().zip(enriched) {
        writeln!(writer, "{before} {after}").map_err(to_cli)?;
    }
    writer.flush().map_err(to_cli)
}
