use super::fixtures::{triangle_graph, two_route_graph};
use citypath_core::{Graph, PathOutcome, SearchConfig, ShortestPathSearch};
use std::time::Duration;

#[test]
fn test_dijkstra_finds_cheapest_route() {
    let graph = triangle_graph();
    let result = ShortestPathSearch::new(&graph).find_shortest_path("A", "C");

    assert_eq!(result.path(), ["A", "B", "C"]);
    assert_eq!(result.total_weight(), 10);
    assert_eq!(result.outcome(), PathOutcome::Found);
}

#[test]
fn test_dijkstra_direct_connection() {
    let graph = triangle_graph();
    let result = ShortestPathSearch::new(&graph).find_shortest_path("A", "B");

    assert_eq!(result.path(), ["A", "B"]);
    assert_eq!(result.total_weight(), 5);
    assert_eq!(result.stops(), 1);
}

#[test]
fn test_dijkstra_improves_tentative_distance() {
    // B is first reached directly at 10, then through C at 2
    let mut graph = Graph::new();
    let a = graph.add_location("A");
    let b = graph.add_location("B");
    let c = graph.add_location("C");
    let d = graph.add_location("D");

    graph.add_edge(a, b, 10);
    graph.add_edge(a, c, 1);
    graph.add_edge(c, b, 1);
    graph.add_edge(b, d, 1);

    let result = ShortestPathSearch::new(&graph).find_shortest_path("A", "D");

    assert_eq!(result.path(), ["A", "C", "B", "D"]);
    assert_eq!(result.total_weight(), 3);
}

#[test]
fn test_dijkstra_ignores_neighbor_order() {
    for cheap_branch_first in [true, false] {
        let graph = two_route_graph(cheap_branch_first);
        let result = ShortestPathSearch::new(&graph).find_shortest_path("A", "C");

        assert_eq!(result.path(), ["A", "B", "C"]);
        assert_eq!(result.total_weight(), 4);
    }
}

#[test]
fn test_dijkstra_large_weights_do_not_overflow() {
    let mut graph = Graph::new();
    let names: Vec<usize> = (0..6).map(|i| graph.add_location(format!("N{}", i))).collect();
    for pair in names.windows(2) {
        graph.add_edge(pair[0], pair[1], u32::MAX);
    }

    let result = ShortestPathSearch::new(&graph).find_shortest_path("N0", "N5");

    assert_eq!(result.total_weight(), 5 * u64::from(u32::MAX));
}

#[test]
fn test_dijkstra_boundaries() {
    let graph = triangle_graph();
    let search = ShortestPathSearch::new(&graph);

    let trivial = search.find_shortest_path("A", "A");
    assert_eq!(trivial.path(), ["A"]);
    assert_eq!(trivial.total_weight(), 0);
    assert_eq!(trivial.outcome(), PathOutcome::Trivial);

    let unknown = search.find_shortest_path("Nowhere", "A");
    assert!(unknown.is_no_path());

    let disconnected = search.find_shortest_path("A", "D");
    assert!(disconnected.is_no_path());
    assert_eq!(disconnected.total_weight(), 0);
}

#[test]
fn test_dijkstra_expired_time_limit() {
    let graph = triangle_graph();
    let config = SearchConfig::new(None, Some(Duration::ZERO));
    let result = ShortestPathSearch::with_config(&graph, config).find_shortest_path("A", "C");

    assert_eq!(result.outcome(), PathOutcome::Aborted);
    assert!(result.is_no_path());
}

#[test]
fn test_dijkstra_budget_does_not_apply_to_trivial_queries() {
    let graph = triangle_graph();
    let config = SearchConfig::new(Some(0), None);
    let result = ShortestPathSearch::with_config(&graph, config).find_shortest_path("A", "A");

    assert_eq!(result.outcome(), PathOutcome::Trivial);
}
