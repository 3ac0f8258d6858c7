//! Edge selection and end-to-end insertion benchmarks.
//!
//! `select` ranks precomputed probabilities with heavy ties so the boundary
//! sampling path is exercised; `insert` runs the whole pipeline at 5%.
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::SmallRng};

use liana_benches::{
    error::BenchSetupError,
    params::{InsertionBenchParams, SelectionBenchParams},
    source::{SyntheticConfig, generate},
};
use liana_core::{
    CandidatePair, EdgeInserterBuilder, Heuristic, SelectionOrder, normalize, select_edges,
};

/// Seed used for all synthetic data in this benchmark.
const SEED: u64 = 42;

/// Candidate counts for the selection benchmark.
const CANDIDATE_COUNTS: &[usize] = &[1_000, 10_000];

/// Distinct weight levels; fewer levels mean larger tie groups.
const WEIGHT_LEVELS: usize = 7;

fn select_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("select");

    for &candidates in CANDIDATE_COUNTS {
        let pairs: Vec<CandidatePair> = (0..candidates)
            .map(|index| CandidatePair::new(index, candidates + index))
            .collect();
        let weights: Vec<f64> = (0..candidates)
            .map(|index| (index % WEIGHT_LEVELS + 1) as f64)
            .collect();
        let probabilities = normalize(&weights)?;
        let params = SelectionBenchParams {
            candidates,
            count: candidates / 20,
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(params),
            &(&pairs, &probabilities),
            |b, &(pairs, probabilities)| {
                let mut rng = SmallRng::seed_from_u64(SEED);
                b.iter(|| {
                    select_edges(
                        pairs,
                        probabilities,
                        params.count,
                        SelectionOrder::Ascending,
                        &mut rng,
                    )
                });
            },
        );
    }

    group.finish();
    Ok(())
}

fn insert_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("insert");
    group.sample_size(20);

    let node_count = 200;
    let graph = generate(&SyntheticConfig {
        node_count,
        edge_probability: 0.05,
        seed: SEED,
    })?;
    for heuristic in [Heuristic::Degree, Heuristic::NeighbourDegree] {
        let inserter = EdgeInserterBuilder::new()
            .with_heuristic(heuristic)
            .with_percentage(5.0)
            .with_seed(SEED)
            .build()?;
        let params = InsertionBenchParams {
            node_count,
            heuristic,
        };
        group.bench_with_input(BenchmarkId::from_parameter(params), &graph, |b, graph| {
            b.iter(|| inserter.run(graph));
        });
    }

    group.finish();
    Ok(())
}

fn selection(c: &mut Criterion) {
    if let Err(err) = select_impl(c) {
        panic!("select benchmark setup failed: {err}");
    }
    if let Err(err) = insert_impl(c) {
        panic!("insert benchmark setup failed: {err}");
    }
}

criterion_group!(benches, selection);
criterion_main!(benches);
