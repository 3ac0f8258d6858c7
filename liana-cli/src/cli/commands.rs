//! Command implementations and argument parsing for the liana CLI.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use liana_core::{
    CandidatePair, DEFAULT_SEED, EdgeInserterBuilder, Heuristic, InsertionError, Network,
    SelectionOrder,
};
use liana_providers_adjacency::{
    AdjacencyGraph, AdjacencyGraphError, CommunityError, FeatureError, FeatureTable,
    global_features,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::nmi::{NmiArgs, NmiSummary, run_nmi};
use super::sweep::{SweepSummary, run_sweep};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "liana",
    about = "Insert heuristically ranked edges into complex networks."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Insert a percentage of new edges chosen by one heuristic.
    Insert(InsertArgs),
    /// Report the global structural features of a network.
    Features(FeaturesArgs),
    /// Run several heuristics in parallel and persist each result's features.
    Sweep(SweepArgs),
    /// Compare the communities of a network before and after enrichment.
    Nmi(NmiArgs),
}

impl Command {
    /// Returns the subcommand name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Insert(_) => "insert",
            Self::Features(_) => "features",
            Self::Sweep(_) => "sweep",
            Self::Nmi(_) => "nmi",
        }
    }
}

/// Options accepted by the `insert` command.
#[derive(Debug, Args, Clone)]
pub struct InsertArgs {
    /// Edge-list file describing the network.
    pub path: PathBuf,

    /// Heuristic identifier, such as `Deg`, `AssortClos` or `SJac`.
    #[arg(long)]
    pub heuristic: String,

    /// Number of edges to insert, as a percentage of the current edge count.
    #[arg(long)]
    pub percentage: f64,

    /// Seed for tie-breaking.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Which end of the weight ranking to insert from.
    #[arg(long, value_enum, default_value_t = OrderArg::Ascending)]
    pub order: OrderArg,

    /// Write the enriched network to this edge-list file.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Override name for the network (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Options accepted by the `features` command.
#[derive(Debug, Args, Clone)]
pub struct FeaturesArgs {
    /// Edge-list file describing the network.
    pub path: PathBuf,

    /// Write the features to this CSV file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Override name for the network (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Options accepted by the `sweep` command.
#[derive(Debug, Args, Clone)]
pub struct SweepArgs {
    /// Edge-list file describing the network.
    pub path: PathBuf,

    /// Number of edges to insert, as a percentage of the current edge count.
    #[arg(long)]
    pub percentage: f64,

    /// Directory receiving one features CSV per heuristic.
    #[arg(long = "output-dir")]
    pub output_dir: PathBuf,

    /// Heuristic to run; repeat for several. Runs every heuristic when absent.
    #[arg(long = "heuristic")]
    pub heuristics: Vec<String>,

    /// Base seed from which each heuristic's seed is derived.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Also record the NMI between the communities this algorithm finds in
    /// the original and in each enriched network.
    #[arg(long)]
    pub communities: Option<String>,

    /// Override name for the network (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Selection order accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Insert the lowest-weighted candidates.
    Ascending,
    /// Insert the highest-weighted candidates.
    Descending,
}

impl From<OrderArg> for SelectionOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Ascending => Self::Ascending,
            OrderArg::Descending => Self::Descending,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while preparing an output location.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Edge-list ingestion or serialisation failed.
    #[error(transparent)]
    Graph(#[from] AdjacencyGraphError),
    /// Feature persistence failed.
    #[error(transparent)]
    Features(#[from] FeatureError),
    /// Community detection or comparison failed.
    #[error(transparent)]
    Community(#[from] CommunityError),
    /// Edge insertion failed.
    #[error(transparent)]
    Core(#[from] InsertionError),
}

/// Outcome of the `insert` command.
#[derive(Debug, Clone)]
pub struct InsertSummary {
    /// Name of the enriched network.
    pub network: String,
    /// Heuristic that ranked the candidates.
    pub heuristic: Heuristic,
    /// Edge count before insertion.
    pub edges_before: usize,
    /// Edge count after insertion.
    pub edges_after: usize,
    /// Inserted pairs in selection order.
    pub inserted: Vec<CandidatePair>,
    /// Where the enriched network was written, if anywhere.
    pub output: Option<PathBuf>,
}

/// Outcome of the `features` command.
#[derive(Debug, Clone)]
pub struct FeaturesSummary {
    /// Name of the measured network.
    pub network: String,
    /// Global features in table order.
    pub table: FeatureTable,
    /// Where the table was written, if anywhere.
    pub output: Option<PathBuf>,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug)]
pub enum ExecutionSummary {
    /// Result of `insert`.
    Insert(InsertSummary),
    /// Result of `features`.
    Features(FeaturesSummary),
    /// Result of `sweep`.
    Sweep(SweepSummary),
    /// Result of `nmi`.
    Nmi(NmiSummary),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, enriching or persisting fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use liana_cli::cli::{Cli, Command, ExecutionSummary, InsertArgs, OrderArg, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "0 1\n1 2\n2 3\n")?;
/// let cli = Cli {
///     command: Command::Insert(InsertArgs {
///         path: file.path().to_path_buf(),
///         heuristic: "Deg".into(),
///         percentage: 100.0,
///         seed: 7,
///         order: OrderArg::Ascending,
///         output: None,
///         name: Some("path".into()),
///     }),
/// };
/// let ExecutionSummary::Insert(summary) = run_cli(cli)? else {
///     panic!("insert yields an insert summary");
/// };
/// assert_eq!(summary.edges_after, 6);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    Span::current().record("command", field::display(cli.command.name()));
    match cli.command {
        Command::Insert(args) => run_insert(args).map(ExecutionSummary::Insert),
        Command::Features(args) => run_features(args).map(ExecutionSummary::Features),
        Command::Sweep(args) => run_sweep(args).map(ExecutionSummary::Sweep),
        Command::Nmi(args) => run_nmi(args).map(ExecutionSummary::Nmi),
    }
}

#[instrument(
    name = "cli.insert",
    err,
    skip(args),
    fields(path = field::Empty, heuristic = field::Empty, percentage = args.percentage),
)]
pub(super) fn run_insert(args: InsertArgs) -> Result<InsertSummary, CliError> {
    let InsertArgs {
        path,
        heuristic,
        percentage,
        seed,
        order,
        output,
        name,
    } = args;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    let heuristic = heuristic.parse::<Heuristic>()?;
    span.record("heuristic", field::display(heuristic));

    let inserter = EdgeInserterBuilder::new()
        .with_heuristic(heuristic)
        .with_percentage(percentage)
        .with_seed(seed)
        .with_selection_order(order.into())
        .build()?;
    let graph = load_network(&path, name.as_deref())?;
    let enrichment = inserter.run(&graph)?;
    if let Some(target) = &output {
        enrichment.network().save_edge_list(target)?;
    }
    info!(
        network = graph.name(),
        inserted = enrichment.inserted().len(),
        "insert completed"
    );
    Ok(InsertSummary {
        network: graph.name().to_owned(),
        heuristic,
        edges_before: graph.edge_count(),
        edges_after: enrichment.network().edge_count(),
        inserted: enrichment.inserted().to_vec(),
        output,
    })
}

#[instrument(name = "cli.features", err, skip(args), fields(path = field::Empty))]
pub(super) fn run_features(args: FeaturesArgs) -> Result<FeaturesSummary, CliError> {
    let FeaturesArgs { path, output, name } = args;
    Span::current().record("path", field::display(path.display()));
    let graph = load_network(&path, name.as_deref())?;
    let table = global_features(&graph).to_table();
    if let Some(target) = &output {
        table.save(target)?;
    }
    info!(network = graph.name(), features = table.len(), "features completed");
    Ok(FeaturesSummary {
        network: graph.name().to_owned(),
        table,
        output,
    })
}

pub(super) fn load_network(
    path: &Path,
    override_name: Option<&str>,
) -> Result<AdjacencyGraph, CliError> {
    let graph = AdjacencyGraph::load_edge_list(path)?;
    Ok(graph.with_name(derive_network_name(path, override_name)))
}

pub(super) fn derive_network_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "network".to_owned())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use liana_cli::cli::{ExecutionSummary, FeaturesSummary, render_summary};
/// # use liana_providers_adjacency::FeatureTable;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut table = FeatureTable::new();
/// table.insert_if_absent("k_mean", 2.5);
/// let summary = ExecutionSummary::Features(FeaturesSummary {
///     network: "demo".into(),
///     table,
///     output: None,
/// });
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "network: demo\nk_mean\t2.5\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Insert(insert) => {
            writeln!(writer, "network: {}", insert.network)?;
            writeln!(writer, "heuristic: {}", insert.heuristic)?;
            writeln!(
                writer,
                "edges: {} -> {}",
                insert.edges_before, insert.edges_after
            )?;
            if let Some(path) = &insert.output {
                writeln!(writer, "output: {}", path.display())?;
            }
            for pair in &insert.inserted {
                writeln!(writer, "{}\t{}", pair.left(), pair.right())?;
            }
        }
        ExecutionSummary::Features(features) => {
            writeln!(writer, "network: {}", features.network)?;
            if let Some(path) = &features.output {
                writeln!(writer, "output: {}", path.display())?;
            }
            for (key, value) in features.table.iter() {
                writeln!(writer, "{key}\t{value}")?;
            }
        }
        ExecutionSummary::Sweep(sweep) => sweep.render(&mut writer)?,
        ExecutionSummary::Nmi(nmi) => nmi.render(&mut writer)?,
    }
    Ok(())
}
