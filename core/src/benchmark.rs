use crate::algorithm::Algorithm;
use crate::graph::{Distance, Graph};
use crate::pathfinding::PathResult;
use crate::pathfinding_config::SearchConfig;
use rand::{Rng, SeedableRng, rngs::StdRng};
use rustc_hash::FxHashSet;
use std::time::Duration;

const MAX_ATTEMPTS_PER_PAIR: usize = 1_000;

#[derive(Debug, Clone)]
pub struct AlgorithmRun {
    pub algorithm: Algorithm,
    pub result: PathResult,
}

/// All three strategies run on the same (source, destination) pair.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub source: String,
    pub destination: String,
    pub runs: Vec<AlgorithmRun>,
}

impl Comparison {
    pub fn result(&self, algorithm: Algorithm) -> Option<&PathResult> {
        self.runs
            .iter()
            .find(|run| run.algorithm == algorithm)
            .map(|run| &run.result)
    }

    /// Lowest total weight among the runs that found a route.
    pub fn shortest(&self) -> Option<Distance> {
        self.runs
            .iter()
            .filter(|run| run.result.has_route())
            .map(|run| run.result.total_weight())
            .min()
    }
}

pub fn compare(
    graph: &Graph,
    source: &str,
    destination: &str,
    config: SearchConfig,
) -> Comparison {
    let runs = Algorithm::ALL
        .iter()
        .map(|&algorithm| AlgorithmRun {
            algorithm,
            result: algorithm.searcher(graph, config).search(source, destination),
        })
        .collect();

    Comparison {
        source: source.to_string(),
        destination: destination.to_string(),
        runs,
    }
}

/// Picks `count` distinct pairs of locations that are not directly connected.
///
/// The same seed always yields the same pairs for the same graph. Requests
/// larger than the number of ordered pairs are capped, and the draw gives up
/// after a bounded number of attempts, so dense graphs may yield fewer pairs.
pub fn select_pairs(graph: &Graph, count: usize, seed: u64) -> Vec<(String, String)> {
    let location_count = graph.location_count();
    if location_count < 2 {
        return Vec::new();
    }

    let ordered_pairs = location_count.saturating_mul(location_count - 1);
    let target = count.min(ordered_pairs);

    let mut pairs: Vec<(usize, usize)> = Vec::with_capacity(target);
    let mut seen: FxHashSet<(usize, usize)> = FxHashSet::default();

    let mut rng = StdRng::seed_from_u64(seed);
    let max_attempts = target.saturating_mul(MAX_ATTEMPTS_PER_PAIR);
    let mut attempts = 0;

    while pairs.len() < target && attempts < max_attempts {
        attempts += 1;
        let from = rng.random_range(0..location_count);
        let to = rng.random_range(0..location_count);

        if from == to || graph.are_adjacent(from, to) || !seen.insert((from, to)) {
            continue;
        }
        pairs.push((from, to));
    }

    if pairs.len() < count {
        tracing::warn!(
            requested = count,
            selected = pairs.len(),
            "not enough unconnected pairs"
        );
    }

    pairs
        .into_iter()
        .filter_map(|(from, to)| {
            let source = graph.name_of(from)?.to_string();
            let destination = graph.name_of(to)?.to_string();
            Some((source, destination))
        })
        .collect()
}

/// Aggregated figures for one strategy across a benchmark.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmSummary {
    pub algorithm: Algorithm,
    pub pairs: usize,
    pub paths_found: usize,
    pub total_distance: Distance,
    pub total_time: Duration,
}

impl AlgorithmSummary {
    fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            pairs: 0,
            paths_found: 0,
            total_distance: 0,
            total_time: Duration::ZERO,
        }
    }

    fn record(&mut self, result: &PathResult) {
        self.pairs += 1;
        if result.has_route() {
            self.paths_found += 1;
            self.total_distance += result.total_weight();
            self.total_time += result.elapsed();
        }
    }

    pub fn success_rate(&self) -> f64 {
        if self.pairs == 0 {
            return 0.0;
        }
        self.paths_found as f64 * 100.0 / self.pairs as f64
    }

    pub fn average_distance(&self) -> Option<f64> {
        (self.paths_found > 0).then(|| self.total_distance as f64 / self.paths_found as f64)
    }

    pub fn average_time_ms(&self) -> Option<f64> {
        (self.paths_found > 0)
            .then(|| self.total_time.as_secs_f64() * 1000.0 / self.paths_found as f64)
    }
}

#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    pub comparisons: Vec<Comparison>,
    pub summaries: Vec<AlgorithmSummary>,
}

impl BenchmarkReport {
    pub fn summary(&self, algorithm: Algorithm) -> Option<&AlgorithmSummary> {
        self.summaries
            .iter()
            .find(|summary| summary.algorithm == algorithm)
    }

    /// Pairs for which Dijkstra found a route.
    pub fn reachable_pairs(&self) -> impl Iterator<Item = &Comparison> {
        self.comparisons.iter().filter(|comparison| {
            comparison
                .result(Algorithm::Dijkstra)
                .is_some_and(PathResult::has_route)
        })
    }

    /// Mean time of `algorithm` over [`Self::reachable_pairs`], whatever the
    /// algorithm itself returned for each pair.
    pub fn reachable_average_time_ms(&self, algorithm: Algorithm) -> Option<f64> {
        let (count, total) = self
            .reachable_pairs()
            .filter_map(|comparison| comparison.result(algorithm))
            .fold((0usize, Duration::ZERO), |(count, total), result| {
                (count + 1, total + result.elapsed())
            });
        (count > 0).then(|| total.as_secs_f64() * 1000.0 / count as f64)
    }
}

pub fn run_benchmark(
    graph: &Graph,
    pairs: &[(String, String)],
    config: SearchConfig,
) -> BenchmarkReport {
    let mut summaries: Vec<AlgorithmSummary> =
        Algorithm::ALL.iter().copied().map(AlgorithmSummary::new).collect();
    let mut comparisons = Vec::with_capacity(pairs.len());

    for (source, destination) in pairs {
        let comparison = compare(graph, source, destination, config);
        for summary in &mut summaries {
            if let Some(result) = comparison.result(summary.algorithm) {
                summary.record(result);
            }
        }
        comparisons.push(comparison);
    }

    tracing::debug!(pairs = pairs.len(), "benchmark finished");
    BenchmarkReport {
        comparisons,
        summaries,
    }
}
