use super::fixtures::{triangle_graph, two_route_graph};
use citypath_core::{PathOutcome, PathSearch, SearchConfig, UnguidedSearch};

#[test]
fn test_dfs_takes_last_inserted_edge_first() {
    let graph = triangle_graph();
    let dfs = UnguidedSearch::new(&graph);

    // A -> B is pushed before A -> C, so the stack pops C first
    let result = dfs.find_path("A", "C");

    assert_eq!(result.path(), ["A", "C"]);
    assert_eq!(result.total_weight(), 20);
    assert_eq!(result.outcome(), PathOutcome::Found);
}

#[test]
fn test_dfs_route_follows_neighbor_order() {
    let expensive_first = two_route_graph(true);
    let result = UnguidedSearch::new(&expensive_first).find_path("A", "C");
    assert_eq!(result.path(), ["A", "D", "C"]);
    assert_eq!(result.total_weight(), 11);

    let cheap_first = two_route_graph(false);
    let result = UnguidedSearch::new(&cheap_first).find_path("A", "C");
    assert_eq!(result.path(), ["A", "B", "C"]);
    assert_eq!(result.total_weight(), 4);
}

#[test]
fn test_dfs_same_location() {
    let graph = triangle_graph();
    let result = UnguidedSearch::new(&graph).find_path("B", "B");

    assert_eq!(result.path(), ["B"]);
    assert_eq!(result.total_weight(), 0);
    assert_eq!(result.outcome(), PathOutcome::Trivial);
}

#[test]
fn test_dfs_unknown_location() {
    let graph = triangle_graph();
    let dfs = UnguidedSearch::new(&graph);

    for (source, destination) in [("A", "Z"), ("Z", "A"), ("Y", "Z")] {
        let result = dfs.find_path(source, destination);
        assert!(result.is_no_path());
        assert_eq!(result.total_weight(), 0);
        assert_eq!(result.outcome(), PathOutcome::NoPath);
    }
}

#[test]
fn test_dfs_disconnected_location() {
    let graph = triangle_graph();
    let result = UnguidedSearch::new(&graph).find_path("A", "D");

    assert!(result.is_no_path());
    assert_eq!(result.total_weight(), 0);
}

#[test]
fn test_dfs_does_not_walk_edges_backwards() {
    let graph = triangle_graph();
    let result = UnguidedSearch::new(&graph).find_path("C", "A");

    assert!(result.is_no_path());
}

#[test]
fn test_dfs_expansion_budget() {
    let graph = triangle_graph();
    let dfs = UnguidedSearch::with_config(&graph, SearchConfig::new(Some(0), None));

    let result = dfs.search("A", "C");

    assert_eq!(result.outcome(), PathOutcome::Aborted);
    assert!(result.is_no_path());
    assert_eq!(result.total_weight(), 0);
}
