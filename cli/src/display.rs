use citypath_core::benchmark::AlgorithmRun;
use citypath_core::{Graph, PathOutcome, PathResult, Weight};

use crate::args::Args;
use crate::colors::ColorScheme;
use crate::search::SearchRequest;
use crate::utils::{format_ms, format_number, pad};

const RULE_WIDTH: usize = 50;

pub fn display_locations(graph: &Graph, colors: &ColorScheme) {
    println!(
        "🗺️  {} cities, {} connections\n",
        colors.number(&format_number(graph.location_count())),
        colors.number(&format_number(graph.edge_count()))
    );

    for (row, chunk) in graph.locations().chunks(3).enumerate() {
        let line = chunk
            .iter()
            .enumerate()
            .map(|(column, name)| {
                let number = format!("[{}]", row * 3 + column + 1);
                format!("{} {}", colors.step_number(&pad(&number, 5)), pad(name, 18))
            })
            .collect::<Vec<_>>()
            .join("");
        println!("  {}", line.trim_end());
    }
}

pub fn display_search_info(request: &SearchRequest, graph: &Graph, colors: &ColorScheme) {
    println!(
        "🧭 Finding route from {} to {}",
        colors.location(&format!("\"{}\"", request.from_name)),
        colors.location(&format!("\"{}\"", request.to_name))
    );

    let labels = request
        .algorithms
        .iter()
        .map(|algorithm| algorithm.label())
        .collect::<Vec<_>>()
        .join(", ");
    println!("⚙️  Using {}", colors.algorithm(&labels));

    println!(
        "🗺️  Network has {} cities and {} connections",
        colors.number(&format_number(graph.location_count())),
        colors.number(&format_number(graph.edge_count()))
    );

    if let Some(max_expansions) = request.config.max_expansions {
        println!(
            "⏳ Stopping searches after {} expansions",
            colors.number(&max_expansions.to_string())
        );
    }

    if let Some(time_limit) = request.config.time_limit {
        println!(
            "⏳ Stopping searches after {} ms",
            colors.number(&time_limit.as_millis().to_string())
        );
    }

    println!("🔍 Searching...");
}

pub fn display_search_results(
    request: &SearchRequest,
    runs: &[AlgorithmRun],
    graph: &Graph,
    display_options: &Args,
    colors: &ColorScheme,
) {
    if display_options.verbose {
        println!("\n---\n");
    }

    if request.is_comparison() {
        display_comparison(request, runs, colors);
        return;
    }

    for run in runs {
        display_single_result(request, &run.result, graph, display_options, colors);
    }
}

fn display_single_result(
    request: &SearchRequest,
    result: &PathResult,
    graph: &Graph,
    display_options: &Args,
    colors: &ColorScheme,
) {
    match result.outcome() {
        PathOutcome::Found => {
            display_successful_path(result, graph, display_options, colors);
        }
        PathOutcome::Trivial => {
            println!(
                "{} Already at {}",
                colors.success("📍"),
                colors.location(&format!("\"{}\"", request.from_name))
            );
        }
        PathOutcome::NoPath => {
            println!(
                "{} {} and {}",
                colors.error("❌ No path found between"),
                colors.location(&format!("\"{}\"", request.from_name)),
                colors.location(&format!("\"{}\"", request.to_name))
            );
        }
        PathOutcome::Aborted => {
            println!(
                "{}",
                colors.warning("⏳ Search stopped before it could finish")
            );
            if result.has_route() {
                println!("   Best route seen so far:\n");
                display_successful_path(result, graph, display_options, colors);
            }
        }
    }

    if display_options.verbose {
        display_search_statistics(result, colors);
    }
}

fn display_successful_path(
    result: &PathResult,
    graph: &Graph,
    display_options: &Args,
    colors: &ColorScheme,
) {
    if display_options.verbose {
        println!(
            "{} Found route with {} stops:\n",
            colors.success("✅"),
            colors.number(&result.stops().to_string())
        );
    }

    println!("{}", format_path_flow(result.path(), colors));

    if display_options.quiet {
        return;
    }

    println!();
    let legs = leg_weights(result.path(), graph);
    for (step_index, location) in result.path().iter().enumerate() {
        let step_number = format!("{}.", step_index + 1);
        let mut formatted_line = format!(
            "{:3} {}",
            colors.step_number(&step_number),
            colors.location(&format!("\"{}\"", location))
        );

        if let Some(Some(weight)) = legs.get(step_index) {
            formatted_line.push_str(&format!(
                " [+{} km]",
                colors.number(&weight.to_string())
            ));
        }
        println!("{}", formatted_line);
    }

    println!(
        "\n📏 Distance: {} km",
        colors.number(&result.total_weight().to_string())
    );
}

/// Weight of the edge arriving at each stop; `None` for the first stop.
fn leg_weights(path: &[String], graph: &Graph) -> Vec<Option<Weight>> {
    let mut legs = vec![None];
    for pair in path.windows(2) {
        let weight = graph
            .index_of(&pair[0])
            .zip(graph.index_of(&pair[1]))
            .and_then(|(from, to)| graph.weight_between(from, to));
        legs.push(weight);
    }
    legs
}

pub fn format_path_flow(path: &[String], colors: &ColorScheme) -> String {
    path.iter()
        .map(|location| colors.location(&format!("\"{}\"", location)).to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

fn display_search_statistics(result: &PathResult, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} {} stops in {} ms ({})",
        colors.stats("📊"),
        colors.number(&result.stops().to_string()),
        colors.number(&format_ms(result.elapsed_ms())),
        result.outcome()
    );
}

fn display_comparison(request: &SearchRequest, runs: &[AlgorithmRun], colors: &ColorScheme) {
    println!(
        "{} {} → {}",
        colors.algorithm("ALGORITHM COMPARISON:"),
        colors.location(&request.from_name),
        colors.location(&request.to_name)
    );
    println!("{}\n", colors.rule(&"=".repeat(RULE_WIDTH)));

    for (index, run) in runs.iter().enumerate() {
        println!(
            "{} {}",
            colors.step_number(&format!("[{}]", index + 1)),
            colors.algorithm(run.algorithm.label())
        );

        let result = &run.result;
        if result.has_route() {
            println!("    Path:     {}", format_path_flow(result.path(), colors));
            println!(
                "    Distance: {} km",
                colors.number(&result.total_weight().to_string())
            );
        } else if result.outcome() == PathOutcome::Trivial {
            println!("    Already at the destination");
        } else {
            println!("    {}", colors.error("No path found"));
        }

        if result.outcome() == PathOutcome::Aborted {
            println!("    {}", colors.warning("Stopped early by search limits"));
        }
        println!("    Time:     {} ms\n", colors.number(&format_ms(result.elapsed_ms())));
    }

    println!("{}", colors.rule(&"=".repeat(RULE_WIDTH)));
    let shortest = runs
        .iter()
        .filter(|run| run.result.has_route())
        .map(|run| run.result.total_weight())
        .min();
    if let Some(shortest) = shortest {
        println!("Shortest: {} km", colors.success(&shortest.to_string()));
    }
}
