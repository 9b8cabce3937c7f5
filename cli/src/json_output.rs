use citypath_core::benchmark::AlgorithmRun;
use citypath_core::{Algorithm, BenchmarkReport, Distance, Graph, PathOutcome, Weight};
use serde::{Deserialize, Serialize};

use crate::search::SearchRequest;

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub results: Vec<JsonResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortest: Option<Distance>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
    pub options: JsonOptions,
}

#[derive(Serialize, Deserialize)]
pub struct JsonOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_expansions: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit_ms: Option<u64>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub algorithm: Algorithm,
    pub outcome: PathOutcome,
    pub found: bool,
    pub path: Vec<JsonStop>,
    pub total_weight: Distance,
    pub search_time_ms: f64,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStop {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_from_previous: Option<Weight>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonBenchmark {
    pub seed: u64,
    pub pairs: Vec<JsonPair>,
    pub summaries: Vec<JsonSummary>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonPair {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortest: Option<Distance>,
    pub results: Vec<JsonPairResult>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonPairResult {
    pub algorithm: Algorithm,
    pub outcome: PathOutcome,
    pub total_weight: Distance,
    pub search_time_ms: f64,
}

#[derive(Serialize, Deserialize)]
pub struct JsonSummary {
    pub algorithm: Algorithm,
    pub pairs: usize,
    pub paths_found: usize,
    pub success_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_time_ms: Option<f64>,
}

pub fn create_json_output(
    request: &SearchRequest,
    runs: &[AlgorithmRun],
    graph: &Graph,
) -> JsonOutput {
    let results: Vec<JsonResult> = runs.iter().map(|run| json_result(run, graph)).collect();
    let shortest = runs
        .iter()
        .filter(|run| run.result.has_route())
        .map(|run| run.result.total_weight())
        .min();

    JsonOutput {
        query: JsonQuery {
            from: request.from_name.clone(),
            to: request.to_name.clone(),
            options: JsonOptions {
                max_expansions: request.config.max_expansions,
                time_limit_ms: request
                    .config
                    .time_limit
                    .map(|limit| u64::try_from(limit.as_millis()).unwrap_or(u64::MAX)),
            },
        },
        results,
        shortest,
    }
}

fn json_result(run: &AlgorithmRun, graph: &Graph) -> JsonResult {
    let path = run.result.path();
    let json_path = path
        .iter()
        .enumerate()
        .map(|(i, name)| JsonStop {
            name: name.clone(),
            weight_from_previous: if i > 0 {
                leg_weight(graph, &path[i - 1], name)
            } else {
                None
            },
        })
        .collect();

    JsonResult {
        algorithm: run.algorithm,
        outcome: run.result.outcome(),
        found: run.result.has_route(),
        path: json_path,
        total_weight: run.result.total_weight(),
        search_time_ms: run.result.elapsed_ms(),
    }
}

fn leg_weight(graph: &Graph, from: &str, to: &str) -> Option<Weight> {
    let from = graph.index_of(from)?;
    let to = graph.index_of(to)?;
    graph.weight_between(from, to)
}

pub fn create_benchmark_json(report: &BenchmarkReport, seed: u64) -> JsonBenchmark {
    let pairs = report
        .comparisons
        .iter()
        .map(|comparison| JsonPair {
            from: comparison.source.clone(),
            to: comparison.destination.clone(),
            shortest: comparison.shortest(),
            results: comparison
                .runs
                .iter()
                .map(|run| JsonPairResult {
                    algorithm: run.algorithm,
                    outcome: run.result.outcome(),
                    total_weight: run.result.total_weight(),
                    search_time_ms: run.result.elapsed_ms(),
                })
                .collect(),
        })
        .collect();

    let summaries = report
        .summaries
        .iter()
        .map(|summary| JsonSummary {
            algorithm: summary.algorithm,
            pairs: summary.pairs,
            paths_found: summary.paths_found,
            success_rate: summary.success_rate(),
            average_distance: summary.average_distance(),
            average_time_ms: summary.average_time_ms(),
        })
        .collect();

    JsonBenchmark {
        seed,
        pairs,
        summaries,
    }
}

pub fn print_json_output<T: Serialize>(json_output: &T) -> Result<(), serde_json::Error> {
    let json_string = serde_json::to_string_pretty(json_output)?;
    println!("{}", json_string);
    Ok(())
}
