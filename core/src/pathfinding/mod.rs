mod budget;
pub mod dfs;
pub mod dfs_shortest;
pub mod dijkstra;
pub mod result;
pub mod utils;

use crate::algorithm::Algorithm;

// Re-export the public types
pub use dfs::UnguidedSearch;
pub use dfs_shortest::ExhaustiveSearch;
pub use dijkstra::ShortestPathSearch;
pub use result::{PathOutcome, PathResult};
pub use utils::{named_path_weight, path_weight};

/// A route-finding strategy over a loaded graph.
///
/// Unknown names and missing routes both come back as an empty
/// [`PathResult`]; no search ever fails.
pub trait PathSearch {
    fn search(&self, source: &str, destination: &str) -> PathResult;

    fn algorithm(&self) -> Algorithm;
}

fn log_search(algorithm: Algorithm, result: &PathResult, expansions: u64) {
    if result.outcome() == PathOutcome::Aborted {
        tracing::warn!(
            algorithm = algorithm.as_str(),
            expansions,
            elapsed_us = result.elapsed().as_micros() as u64,
            "search budget exhausted"
        );
        return;
    }

    tracing::debug!(
        algorithm = algorithm.as_str(),
        outcome = result.outcome().as_str(),
        total_weight = result.total_weight(),
        stops = result.stops(),
        expansions,
        elapsed_us = result.elapsed().as_micros() as u64,
        "search finished"
    );
}
