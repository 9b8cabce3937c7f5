use citypath_core::{Graph, SearchConfig, run_benchmark, select_pairs};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::time::Duration;

const CITY_COUNT: usize = 14;
const CONNECTION_PROBABILITY: f64 = 0.3;

fn main() {
    let graph = random_road_network(CITY_COUNT, 2024);
    println!(
        "🚀 Comparing search strategies on {} cities with {} connections\n",
        graph.location_count(),
        graph.edge_count()
    );

    let pairs = select_pairs(&graph, 5, 42);
    // The exhaustive search is exponential, keep it bounded on denser networks
    let config = SearchConfig::new(Some(2_000_000), Some(Duration::from_secs(5)));
    let report = run_benchmark(&graph, &pairs, config);

    for comparison in &report.comparisons {
        println!("{} -> {}", comparison.source, comparison.destination);
        for run in &comparison.runs {
            println!(
                "  {:14} {:>6} km  {:>10.3} ms  {}",
                run.algorithm.label(),
                run.result.total_weight(),
                run.result.elapsed_ms(),
                run.result.outcome()
            );
        }
    }

    println!("\nSummary:");
    for summary in &report.summaries {
        println!(
            "  {:14} {}/{} found, avg {:.1} km",
            summary.algorithm.label(),
            summary.paths_found,
            summary.pairs,
            summary.average_distance().unwrap_or(0.0)
        );
    }
}

/// Symmetric network with road lengths between 50 and 900 km.
fn random_road_network(size: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::with_capacity(size);
    for i in 0..size {
        graph.add_location(format!("City{:02}", i));
    }

    for from in 0..size {
        for to in (from + 1)..size {
            if rng.random_bool(CONNECTION_PROBABILITY) {
                let weight = rng.random_range(50..=900);
                graph.add_edge(from, to, weight);
                graph.add_edge(to, from, weight);
            }
        }
    }
    graph
}
