//! Parallel multi-heuristic sweeps.
//!
//! Every heuristic enriches its own copy of the network on the rayon pool,
//! seeded independently, and the global features of each enriched copy are
//! written as `<name>_<heuristic>_global_features.csv`. When a community
//! algorithm is requested the table also carries `nmi_<algorithm>`, the
//! agreement between the original and enriched partitions.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use liana_core::{EdgeInserterBuilder, Heuristic, InsertionError, Network};
use liana_providers_adjacency::{
    AdjacencyGraph, CommunityAlgorithm, detect_communities, global_features,
    normalized_mutual_information,
};
use rayon::prelude::*;
use tracing::{Span, field, info, instrument, warn};

use super::commands::{CliError, SweepArgs, load_network};

/// SplitMix64 increment (the 64-bit golden ratio) spacing per-heuristic seeds.
const SEED_SPACING: u64 = 0x9E37_79B9_7F4A_7C15;
const SPLITMIX_MULT_A: u64 = 0xBF58_476D_1CE4_E5B9;
const SPLITMIX_MULT_B: u64 = 0x94D0_49BB_1331_11EB;

/// Derives the seed a sweep uses for `heuristic` from `base_seed`.
///
/// The derivation depends on the heuristic's position in
/// [`Heuristic::all`], so a heuristic draws the same ties whichever subset
/// of heuristics is swept alongside it.
///
/// # Examples
/// ```
/// use liana_cli::cli::heuristic_seed;
/// use liana_core::Heuristic;
///
/// let degree = heuristic_seed(7, Heuristic::Degree);
/// assert_eq!(degree, heuristic_seed(7, Heuristic::Degree));
/// assert_ne!(degree, heuristic_seed(7, Heuristic::NeighbourDegree));
/// ```
#[must_use]
pub fn heuristic_seed(base_seed: u64, heuristic: Heuristic) -> u64 {
    let index = Heuristic::all()
        .iter()
        .position(|candidate| *candidate == heuristic)
        .unwrap_or(0);
    splitmix64(base_seed ^ ((index as u64 + 1).wrapping_mul(SEED_SPACING)))
}

fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(SEED_SPACING);
    state = (state ^ (state >> 30)).wrapping_mul(SPLITMIX_MULT_A);
    state = (state ^ (state >> 27)).wrapping_mul(SPLITMIX_MULT_B);
    state ^ (state >> 31)
}

/// What happened to one heuristic in a sweep.
#[derive(Debug)]
pub enum SweepOutcome {
    /// The enriched network's features were written to `path`.
    Written {
        /// Number of edges inserted.
        inserted: usize,
        /// Features CSV location.
        path: PathBuf,
        /// Community agreement with the original network, when requested.
        nmi: Option<f64>,
    },
    /// The heuristic could not enrich this network.
    Failed(InsertionError),
}

/// One heuristic's run within a sweep.
#[derive(Debug)]
pub struct SweepRun {
    /// Heuristic that ranked the candidates.
    pub heuristic: Heuristic,
    /// Seed derived for this heuristic.
    pub seed: u64,
    /// Result of the run.
    pub outcome: SweepOutcome,
}

/// Outcome of the `sweep` command, one run per heuristic in request order.
#[derive(Debug)]
pub struct SweepSummary {
    /// Name of the swept network.
    pub network: String,
    /// Per-heuristic runs.
    pub runs: Vec<SweepRun>,
}

impl SweepSummary {
    /// Number of runs whose heuristic failed.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.runs
            .iter()
            .filter(|run| matches!(run.outcome, SweepOutcome::Failed(_)))
            .count()
    }

    pub(super) fn render(&self, writer: &mut impl Write) -> io::Result<()> {
        writeln!(writer, "network: {}", self.network)?;
        for run in &self.runs {
            match &run.outcome {
                SweepOutcome::Written { inserted, path, nmi } => {
                    write!(
                        writer,
                        "{}\tinserted {inserted}\t{}",
                        run.heuristic,
                        path.display()
                    )?;
                    match nmi {
                        Some(nmi) => writeln!(writer, "\tnmi {nmi}")?,
                        None => writeln!(writer)?,
                    }
                }
                SweepOutcome::Failed(err) => {
                    writeln!(writer, "{}\tfailed {}\t{err}", run.heuristic, err.code())?;
                }
            }
        }
        Ok(())
    }
}

#[instrument(
    name = "cli.sweep",
    err,
    skip(args),
    fields(path = field::Empty, heuristics = field::Empty, percentage = args.percentage),
)]
pub(super) fn run_sweep(args: SweepArgs) -> Result<SweepSummary, CliError> {
    let SweepArgs {
        path,
        percentage,
        output_dir,
        heuristics,
        seed,
        communities,
        name,
    } = args;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    let heuristics = if heuristics.is_empty() {
        Heuristic::all()
    } else {
        heuristics
            .iter()
            .map(|raw| raw.parse::<Heuristic>())
            .collect::<Result<Vec<_>, _>>()?
    };
    span.record("heuristics", heuristics.len());
    let algorithm = communities
        .as_deref()
        .map(str::parse::<CommunityAlgorithm>)
        .transpose()?;

    let graph = load_network(&path, name.as_deref())?;
    let baseline = algorithm.map(|algorithm| Baseline {
        algorithm,
        membership: detect_communities(&graph, algorithm),
    });
    fs::create_dir_all(&output_dir).map_err(|source| CliError::Io {
        path: output_dir.clone(),
        source,
    })?;

    let runs = heuristics
        .par_iter()
        .map(|&heuristic| {
            span.in_scope(|| {
                sweep_one(
                    &graph,
                    heuristic,
                    percentage,
                    seed,
                    &output_dir,
                    baseline.as_ref(),
                )
            })
        })
        .collect::<Result<Vec<_>, CliError>>()?;
    let summary = SweepSummary {
        network: graph.name().to_owned(),
        runs,
    };
    info!(
        network = graph.name(),
        runs = summary.runs.len(),
        failures = summary.failures(),
        "sweep completed"
    );
    Ok(summary)
}

/// Communities of the original network.
struct Baseline {
    algorithm: CommunityAlgorithm,
    membership: Vec<usize>,
}

#[instrument(
    name = "cli.sweep_run",
    err,
    skip(graph, heuristic, output_dir, baseline),
    fields(heuristic = %heuristic),
)]
fn sweep_one(
    graph: &AdjacencyGraph,
    heuristic: Heuristic,
    percentage: f64,
    base_seed: u64,
    output_dir: &Path,
    baseline: Option<&Baseline>,
) -> Result<SweepRun, CliError> {
    let seed = heuristic_seed(base_seed, heuristic);
    let inserter = EdgeInserterBuilder::new()
        .with_heuristic(heuristic)
        .with_percentage(percentage)
        .with_seed(seed)
        .build()?;
    let outcome = match inserter.run(graph) {
        Ok(enrichment) => {
            let path = output_dir.join(format!(
                "{}_{heuristic}_global_features.csv",
                graph.name()
            ));
            let mut table = global_features(enrichment.network()).to_table();
            let nmi = baseline
                .map(|baseline| {
                    let enriched = detect_communities(enrichment.network(), baseline.algorithm);
                    normalized_mutual_information(&baseline.membership, &enriched)
                        .map(|nmi| (baseline.algorithm, nmi))
                })
                .transpose()?;
            if let Some((algorithm, nmi)) = nmi {
                table.insert_if_absent(format!("nmi_{algorithm}"), nmi);
            }
            table.save(&path)?;
            SweepOutcome::Written {
                inserted: enrichment.inserted().len(),
                path,
                nmi: nmi.map(|(_, nmi)| nmi),
            }
        }
        Err(err) => {
            warn!(code = %err.code(), error = %err, "heuristic skipped");
            SweepOutcome::Failed(err)
        }
    };
    Ok(SweepRun {
        heuristic,
        seed,
        outcome,
    })
}
