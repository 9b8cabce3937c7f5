use super::result::PathResult;
use crate::graph::{Distance, Graph};
use std::time::Instant;

/// Outcome of turning (source, destination) names into indices.
pub(crate) enum Endpoints {
    Unresolved,
    Same(usize),
    Distinct { source: usize, destination: usize },
}

pub(crate) fn resolve_endpoints(graph: &Graph, source: &str, destination: &str) -> Endpoints {
    match (graph.index_of(source), graph.index_of(destination)) {
        (Some(source), Some(destination)) if source == destination => Endpoints::Same(source),
        (Some(source), Some(destination)) => Endpoints::Distinct {
            source,
            destination,
        },
        _ => Endpoints::Unresolved,
    }
}

/// Handles the cases every search treats identically.
///
/// Returns the finished result for unresolved names and same-location
/// queries, or the index pair to search between.
pub(crate) fn start_search(
    graph: &Graph,
    source: &str,
    destination: &str,
    search_timer: Instant,
) -> Result<(usize, usize), PathResult> {
    match resolve_endpoints(graph, source, destination) {
        Endpoints::Unresolved => Err(PathResult::no_path(search_timer.elapsed())),
        Endpoints::Same(index) => {
            let name = graph.name_of(index).unwrap_or(source);
            Err(PathResult::trivial(name, search_timer.elapsed()))
        }
        Endpoints::Distinct {
            source,
            destination,
        } => Ok((source, destination)),
    }
}

/// Walks parent pointers from `target` back to the root and reverses.
pub(crate) fn reconstruct_path(parents: &[Option<usize>], target: usize) -> Vec<usize> {
    let mut path = Vec::new();
    let mut current_node = Some(target);

    while let Some(node) = current_node {
        path.push(node);
        current_node = parents[node];
    }

    path.reverse();
    path
}

pub(crate) fn path_names(graph: &Graph, path: &[usize]) -> Vec<String> {
    path.iter()
        .filter_map(|&index| graph.name_of(index))
        .map(str::to_owned)
        .collect()
}

/// Sums edge weights along consecutive pairs of `path`.
///
/// Missing edges contribute nothing; every path built by a search only
/// follows existing edges.
pub fn path_weight(graph: &Graph, path: &[usize]) -> Distance {
    path.windows(2)
        .filter_map(|pair| graph.weight_between(pair[0], pair[1]))
        .map(Distance::from)
        .sum()
}

/// Same as [`path_weight`] but over location names, as found in a `PathResult`.
pub fn named_path_weight(graph: &Graph, path: &[String]) -> Option<Distance> {
    let mut total: Distance = 0;
    for pair in path.windows(2) {
        let from = graph.index_of(&pair[0])?;
        let to = graph.index_of(&pair[1])?;
        total += Distance::from(graph.weight_between(from, to)?);
    }
    Some(total)
}
