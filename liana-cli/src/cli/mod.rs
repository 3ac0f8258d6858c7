//! Command-line interface orchestration for liana.
//!
//! `insert` enriches one network with a single heuristic and `features`
//! reports its global structural features. `sweep` runs several heuristics
//! in parallel, persisting the features of every enriched copy. `nmi`
//! compares the communities of a network with those of its enriched copy.

mod commands;
mod nmi;
mod sweep;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, FeaturesArgs, FeaturesSummary, InsertArgs,
    InsertSummary, OrderArg, SweepArgs, render_summary, run_cli,
};
pub use nmi::{NmiArgs, NmiSummary};
pub use sweep::{SweepOutcome, SweepRun, SweepSummary, heuristic_seed};

#[cfg(test)]
mod test_helpers;
