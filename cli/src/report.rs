use citypath_core::benchmark::{AlgorithmSummary, Comparison};
use citypath_core::{Algorithm, BenchmarkReport, PathOutcome, PathResult};

use crate::colors::ColorScheme;
use crate::utils::{bar, format_ms, pad};

const BAR_WIDTH: usize = 60;
const NAME_WIDTH: usize = 20;
const CELL_WIDTH: usize = 14;
const SECTION_WIDTH: usize = 100;

pub fn display_benchmark(report: &BenchmarkReport, colors: &ColorScheme) {
    display_selected_pairs(&report.comparisons, colors);
    display_comparison_table(report, colors);
    display_time_chart(&report.comparisons, colors);
    display_distance_chart(&report.comparisons, colors);
    display_summary(&report.summaries, colors);
}

fn section_header(title: &str, colors: &ColorScheme) {
    println!("\n{}", colors.rule(&"=".repeat(SECTION_WIDTH)));
    println!("{}", colors.algorithm(title));
    println!("{}", colors.rule(&"=".repeat(SECTION_WIDTH)));
}

/// Numbered `source -> destination` lines, in benchmark order.
pub fn pair_lines(comparisons: &[Comparison]) -> Vec<String> {
    comparisons
        .iter()
        .enumerate()
        .map(|(index, comparison)| {
            format!("{}. {} -> {}", index + 1, comparison.source, comparison.destination)
        })
        .collect()
}

fn display_selected_pairs(comparisons: &[Comparison], colors: &ColorScheme) {
    println!("{}", colors.algorithm("Selected city pairs (not directly connected):"));
    for line in pair_lines(comparisons) {
        println!("  {}", line);
    }
}

/// One row per pair with distance and time for every algorithm.
fn display_comparison_table(report: &BenchmarkReport, colors: &ColorScheme) {
    section_header("ALGORITHM COMPARISON", colors);

    let mut header = format!("{} | {}", pad("Source", NAME_WIDTH), pad("Destination", NAME_WIDTH));
    for algorithm in Algorithm::ALL {
        header.push_str(&format!(
            " | {} | {}",
            pad(&format!("{} km", algorithm.label()), CELL_WIDTH),
            pad(&format!("{} ms", algorithm.label()), CELL_WIDTH)
        ));
    }
    println!("{}", header);
    let table_width = header.chars().count();
    println!("{}", colors.rule(&"-".repeat(table_width)));

    for comparison in &report.comparisons {
        let mut row = format!(
            "{} | {}",
            pad(&comparison.source, NAME_WIDTH),
            pad(&comparison.destination, NAME_WIDTH)
        );
        for algorithm in Algorithm::ALL {
            let (distance, time) = match comparison.result(algorithm) {
                Some(result) => (distance_cell(result), format_ms(result.elapsed_ms())),
                None => ("-".to_string(), "-".to_string()),
            };
            row.push_str(&format!(
                " | {} | {}",
                pad(&distance, CELL_WIDTH),
                pad(&time, CELL_WIDTH)
            ));
        }
        println!("{}", row);
    }
    println!("{}", colors.rule(&"-".repeat(table_width)));

    println!("\nAverage execution times (pairs Dijkstra can route):");
    for algorithm in Algorithm::ALL {
        let average = report
            .reachable_average_time_ms(algorithm)
            .map(|ms| format!("{} ms", format_ms(ms)))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {} {}",
            colors.algorithm(&pad(&format!("{}:", algorithm.label()), 15)),
            colors.number(&average)
        );
    }
}

fn distance_cell(result: &PathResult) -> String {
    match result.outcome() {
        PathOutcome::Found => result.total_weight().to_string(),
        PathOutcome::Aborted if result.has_route() => format!("{}*", result.total_weight()),
        PathOutcome::Aborted => "aborted".to_string(),
        PathOutcome::Trivial => "0".to_string(),
        PathOutcome::NoPath => "no path".to_string(),
    }
}

fn display_time_chart(comparisons: &[Comparison], colors: &ColorScheme) {
    section_header("EXECUTION TIME COMPARISON", colors);

    for comparison in comparisons {
        let max_time = comparison
            .runs
            .iter()
            .map(|run| run.result.elapsed_ms())
            .fold(0.0_f64, f64::max);
        let max_time = if max_time > 0.0 { max_time } else { 1.0 };

        println!(
            "\n{} -> {}:",
            colors.location(&comparison.source),
            colors.location(&comparison.destination)
        );
        for run in &comparison.runs {
            let time = run.result.elapsed_ms();
            println!(
                "  {} {} ms |{}",
                pad(&format!("{}:", run.algorithm.label()), 15),
                format_ms(time),
                colors.success(&bar(time, max_time, BAR_WIDTH))
            );
        }
    }
}

fn display_distance_chart(comparisons: &[Comparison], colors: &ColorScheme) {
    section_header("PATH DISTANCE COMPARISON", colors);

    for comparison in comparisons {
        let routed: Vec<_> = comparison
            .runs
            .iter()
            .filter(|run| run.result.has_route())
            .collect();
        let Some(max_distance) = routed.iter().map(|run| run.result.total_weight()).max() else {
            continue;
        };

        println!(
            "\n{} -> {}:",
            colors.location(&comparison.source),
            colors.location(&comparison.destination)
        );
        for run in routed {
            let distance = run.result.total_weight();
            println!(
                "  {} {} km |{}",
                pad(&format!("{}:", run.algorithm.label()), 15),
                distance,
                colors.number(&bar(distance as f64, max_distance as f64, BAR_WIDTH))
            );
        }
    }
}

fn display_summary(summaries: &[AlgorithmSummary], colors: &ColorScheme) {
    section_header("ALGORITHM ANALYSIS SUMMARY", colors);

    println!("\n1. Path finding success rate:");
    for summary in summaries {
        println!(
            "   {} {}/{} paths found ({:.1}%)",
            pad(&format!("{}:", summary.algorithm.label()), 15),
            colors.number(&summary.paths_found.to_string()),
            summary.pairs,
            summary.success_rate()
        );
    }

    println!("\n2. Average path distance (found paths):");
    for summary in summaries {
        if let Some(average) = summary.average_distance() {
            println!(
                "   {} {} km",
                pad(&format!("{}:", summary.algorithm.label()), 15),
                colors.number(&format!("{:.1}", average))
            );
        }
    }

    println!("\n3. Average execution time (found paths):");
    for summary in summaries {
        if let Some(average) = summary.average_time_ms() {
            println!(
                "   {} {} ms",
                pad(&format!("{}:", summary.algorithm.label()), 15),
                colors.number(&format_ms(average))
            );
        }
    }

    println!("\n4. Algorithm characteristics:");
    for summary in summaries {
        println!(
            "   {} {}",
            pad(&format!("{}:", summary.algorithm.label()), 15),
            characteristics(summary.algorithm)
        );
    }
}

fn characteristics(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::Dfs => "Finds any route, not necessarily the shortest. Fast but often longer.",
        Algorithm::DfsShortest => "Explores every simple route. Optimal but slow on large graphs.",
        Algorithm::Dijkstra => "Optimal with non-negative weights, using a priority queue.",
    }
}
