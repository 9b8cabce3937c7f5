use citypath_core::benchmark::AlgorithmRun;
use citypath_core::{Algorithm, Graph, SearchConfig, find_location};

use crate::args::Args;

pub struct SearchRequest {
    pub from_name: String,
    pub to_name: String,
    pub algorithms: Vec<Algorithm>,
    pub config: SearchConfig,
}

impl SearchRequest {
    pub fn is_comparison(&self) -> bool {
        self.algorithms.len() > 1
    }
}

/// Resolves the city names in `args` against the graph.
///
/// Searches treat unknown names as "no path", so they are rejected here to
/// give the user a useful error instead.
pub fn create_search_request(args: &Args, graph: &Graph) -> Result<SearchRequest, String> {
    let from_query = args.from.as_deref().ok_or("Missing starting city")?;
    let to_query = args.to.as_deref().ok_or("Missing destination city")?;

    let from_name = canonical_name(from_query, graph)?;
    let to_name = canonical_name(to_query, graph)?;

    Ok(SearchRequest {
        from_name,
        to_name,
        algorithms: args.algorithm.algorithms(),
        config: args.search_config(),
    })
}

fn canonical_name(query: &str, graph: &Graph) -> Result<String, String> {
    let index = find_location(query, graph)?;
    graph
        .name_of(index)
        .map(str::to_owned)
        .ok_or_else(|| format!("Location '{}' not found in matrix", query))
}

pub fn execute_search(request: &SearchRequest, graph: &Graph) -> Vec<AlgorithmRun> {
    request
        .algorithms
        .iter()
        .map(|&algorithm| AlgorithmRun {
            algorithm,
            result: algorithm
                .searcher(graph, request.config)
                .search(&request.from_name, &request.to_name),
        })
        .collect()
}
